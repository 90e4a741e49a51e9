use serde::{Deserialize, Serialize};

use crate::core::{ListView, ViewState};
use crate::models::domain::Hotel;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub hotels: usize,
    pub restaurants: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelsResponse {
    pub hotels: Vec<Hotel>,
}

/// Cuisine dropdown entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuisinesResponse {
    pub cuisines: Vec<CuisineOption>,
}

/// New view state together with the list it renders to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DispatchResponse {
    pub state: ViewState,
    pub view: ListView,
}
