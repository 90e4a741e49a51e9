use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{cuisine_vocabulary, format_tag, RestaurantFinder};
use crate::models::{
    Catalog, CuisineOption, CuisinesResponse, DetailsQuery, DispatchRequest, DispatchResponse,
    ErrorResponse, HealthResponse, HotelsResponse, RestaurantsQuery,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub finder: RestaurantFinder,
}

/// Configure all restaurant and map routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/hotels", web::get().to(list_hotels))
        .route("/cuisines", web::get().to(list_cuisines))
        .route("/restaurants", web::get().to(list_restaurants))
        .route("/restaurants/{place_id}", web::get().to(restaurant_details))
        .route("/map", web::get().to(map_overview))
        .route("/map/{hotel_id}", web::get().to(map_for_hotel))
        .route("/view/dispatch", web::post().to(dispatch));
}

fn not_found(error: &str, message: String) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: 404,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        hotels: state.catalog.hotels().len(),
        restaurants: state.catalog.restaurant_count(),
    })
}

/// GET /api/v1/hotels
async fn list_hotels(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HotelsResponse {
        hotels: state.catalog.hotels().to_vec(),
    })
}

/// Cuisine dropdown options, sorted by tag
///
/// GET /api/v1/cuisines
async fn list_cuisines(state: web::Data<AppState>) -> impl Responder {
    let cuisines = cuisine_vocabulary(&state.catalog)
        .into_iter()
        .map(|value| CuisineOption {
            label: format_tag(&value),
            value,
        })
        .collect();

    HttpResponse::Ok().json(CuisinesResponse { cuisines })
}

/// Filtered and sorted restaurant list
///
/// GET /api/v1/restaurants?hotel=&cuisine=&minRating=&sort=&direction=
async fn list_restaurants(
    state: web::Data<AppState>,
    query: web::Query<RestaurantsQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for restaurant query: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let view_state = query.to_view_state();
    let view = state.finder.list(&state.catalog, &view_state);

    tracing::info!(
        "Returning {} restaurants (hotel={:?}, cuisine={:?}, min_rating={}, sort={} {})",
        view.count,
        view_state.hotel_id,
        view_state.cuisine,
        view_state.min_rating,
        view_state.sort,
        view_state.direction
    );

    HttpResponse::Ok().json(view)
}

/// GET /api/v1/restaurants/{place_id}?hotel=
async fn restaurant_details(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<DetailsQuery>,
) -> impl Responder {
    let place_id = path.into_inner();
    let hotel = query.hotel.as_deref().filter(|h| !h.is_empty());

    match state.finder.details(&state.catalog, hotel, &place_id) {
        Some(details) => HttpResponse::Ok().json(details),
        None => not_found(
            "Restaurant not found",
            format!("No restaurant with place id {}", place_id),
        ),
    }
}

/// GET /api/v1/map
async fn map_overview(state: web::Data<AppState>) -> impl Responder {
    match state.finder.map(&state.catalog, None) {
        Some(view) => HttpResponse::Ok().json(view),
        None => not_found("Map unavailable", "No map view could be built".to_string()),
    }
}

/// GET /api/v1/map/{hotel_id}
async fn map_for_hotel(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let hotel_id = path.into_inner();

    match state.finder.map(&state.catalog, Some(&hotel_id)) {
        Some(view) => HttpResponse::Ok().json(view),
        None => not_found("Hotel not found", format!("No hotel with id {}", hotel_id)),
    }
}

/// Apply a control intent to a view state
///
/// POST /api/v1/view/dispatch
///
/// Request body:
/// ```json
/// {
///   "state": {"hotelId": "string", "cuisine": null, "minRating": 0, "sort": "distance", "direction": "asc"},
///   "intent": {"type": "toggleDirection"}
/// }
/// ```
async fn dispatch(
    state: web::Data<AppState>,
    req: web::Json<DispatchRequest>,
) -> impl Responder {
    let DispatchRequest { state: view_state, intent } = req.into_inner();
    let (view_state, view) = state.finder.dispatch(&state.catalog, view_state, intent);

    HttpResponse::Ok().json(DispatchResponse {
        state: view_state,
        view,
    })
}
