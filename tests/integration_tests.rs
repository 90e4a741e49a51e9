// Integration tests for Restaurant Map

use actix_web::{test as actix_test, web, App};
use restaurant_map::core::{Intent, ListView, MapView, RestaurantFinder, SortDirection, SortKey, ViewState};
use restaurant_map::models::{Catalog, CuisinesResponse, DispatchResponse, ErrorResponse, HotelsResponse};
use restaurant_map::routes::{configure_routes, AppState};
use restaurant_map::services::CatalogLoader;
use std::path::Path;
use std::sync::Arc;

const PARK_HYATT: &str = "park-hyatt-tokyo";

fn load_sample_catalog() -> Catalog {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    CatalogLoader::from_dir(dir).load().expect("sample data should load")
}

fn app_state() -> AppState {
    AppState {
        catalog: Arc::new(load_sample_catalog()),
        finder: RestaurantFinder::default(),
    }
}

fn card_ids(view: &ListView) -> Vec<&str> {
    view.cards.iter().map(|c| c.place_id.as_str()).collect()
}

#[test]
fn test_sample_data_loads() {
    let catalog = load_sample_catalog();

    assert_eq!(catalog.hotels().len(), 2);
    assert_eq!(catalog.restaurant_count(), 4);
    assert_eq!(catalog.groups()[0].id, PARK_HYATT);
}

#[test]
fn test_end_to_end_listing() {
    let catalog = load_sample_catalog();
    let finder = RestaurantFinder::default();

    let state = ViewState::default()
        .apply(Intent::SelectHotel(Some(PARK_HYATT.to_string())))
        .apply(Intent::SetMinRating(3.5));
    let view = finder.list(&catalog, &state);

    // The unrated cafe is dropped; the rest is ordered by distance from the hotel
    assert_eq!(card_ids(&view), vec!["tokyo-ramen-1", "tokyo-sushi-1"]);
    assert_eq!(view.count_text, "2 restaurants found");

    let ramen = &view.cards[0];
    assert_eq!(ramen.stars, "★★★★☆");
    assert_eq!(ramen.price.as_deref(), Some("¥"));
    assert_eq!(ramen.cuisine.as_deref(), Some("Ramen restaurant • Restaurant"));
    assert!(ramen.distance_text.as_deref().unwrap().ends_with("miles from Park Hyatt Tokyo"));
    assert!(ramen.directions_url.as_deref().unwrap().contains("travelmode=walking"));
}

#[test]
fn test_cuisine_filter_over_all_hotels() {
    let catalog = load_sample_catalog();
    let finder = RestaurantFinder::default();

    let state = ViewState::default()
        .apply(Intent::SelectCuisine(Some("japanese_restaurant".to_string())))
        .apply(Intent::SetSort(SortKey::Rating));
    let view = finder.list(&catalog, &state);

    assert_eq!(card_ids(&view), vec!["kyoto-tofu-1", "tokyo-sushi-1"]);
}

#[test]
fn test_generic_cafe_tag_hidden_from_card() {
    let catalog = load_sample_catalog();
    let finder = RestaurantFinder::default();

    let view = finder.list(&catalog, &ViewState::default());
    let cafe = view.cards.iter().find(|c| c.place_id == "tokyo-cafe-1").unwrap();

    assert!(cafe.cuisine.is_none());
    assert_eq!(cafe.rating, "N/A");
    assert_eq!(cafe.stars, "☆☆☆☆☆");
}

#[actix_web::test]
async fn test_http_list_restaurants() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/restaurants?hotel=park-hyatt-tokyo&sort=price&direction=desc")
        .to_request();
    let view: ListView = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(card_ids(&view), vec!["tokyo-sushi-1", "tokyo-ramen-1", "tokyo-cafe-1"]);
}

#[actix_web::test]
async fn test_http_rejects_out_of_range_rating() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/restaurants?minRating=9")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);

    let body: ErrorResponse = actix_test::read_body_json(resp).await;
    assert_eq!(body.status_code, 400);
}

#[actix_web::test]
async fn test_http_hotels_and_cuisines() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/hotels").to_request();
    let hotels: HotelsResponse = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(hotels.hotels.len(), 2);

    let req = actix_test::TestRequest::get().uri("/api/v1/cuisines").to_request();
    let cuisines: CuisinesResponse = actix_test::call_and_read_body_json(&app, req).await;
    let values: Vec<_> = cuisines.cuisines.iter().map(|c| c.value.as_str()).collect();
    assert_eq!(
        values,
        vec!["japanese_restaurant", "ramen_restaurant", "restaurant", "sushi_restaurant"]
    );
    assert_eq!(cuisines.cuisines[0].label, "Japanese Restaurant");
}

#[actix_web::test]
async fn test_http_map_views() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get().uri("/api/v1/map").to_request();
    let overview: MapView = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(overview.hotels.len(), 2);
    assert!(overview.restaurants.is_empty());

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/map/hoshinoya-kyoto")
        .to_request();
    let focus: MapView = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(focus.active_hotel_id.as_deref(), Some("hoshinoya-kyoto"));
    assert_eq!(focus.restaurants.len(), 1);

    let req = actix_test::TestRequest::get().uri("/api/v1/map/nowhere").to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_http_restaurant_details() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/restaurants/tokyo-ramen-1")
        .to_request();
    let details: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
    assert_eq!(details["name"], "Fuunji");
    assert_eq!(details["phone"], "03-6413-8480");
    assert_eq!(details["openingHours"].as_array().unwrap().len(), 1);

    let req = actix_test::TestRequest::get()
        .uri("/api/v1/restaurants/tokyo-ramen-1?hotel=hoshinoya-kyoto")
        .to_request();
    let resp = actix_test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_http_dispatch_toggles_direction() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(app_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/view/dispatch")
        .set_json(serde_json::json!({
            "state": {"hotelId": PARK_HYATT, "sort": "distance", "direction": "asc"},
            "intent": {"type": "toggleDirection"}
        }))
        .to_request();
    let resp: DispatchResponse = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.state.direction, SortDirection::Desc);
    assert_eq!(resp.state.sort, SortKey::Distance);
    assert_eq!(resp.view.cards.last().unwrap().place_id, "tokyo-ramen-1");
}
