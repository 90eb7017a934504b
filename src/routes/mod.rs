//! Rutas de la API
//!
//! Ensambla los routers por recurso bajo `/api` junto al health check.
//! El binario y los tests de integración montan este mismo router.

pub mod booking_routes;
pub mod dashboard_routes;
pub mod vehicle_routes;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_check))
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/bookings", booking_routes::create_booking_router())
        .nest("/api/dashboard", dashboard_routes::create_dashboard_router())
}

/// Health check del servicio
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "fleetlink-backend",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}
