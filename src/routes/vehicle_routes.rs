use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{
    AddVehicleRequest, SearchVehiclesQuery, SearchVehiclesResponse, VehicleCreatedResponse,
    VehicleListResponse, VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_vehicle))
        .route("/", get(list_vehicles))
        .route("/available", get(search_available_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn add_vehicle(
    State(state): State<AppState>,
    Json(request): Json<AddVehicleRequest>,
) -> Result<Json<VehicleCreatedResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn search_available_vehicles(
    State(state): State<AppState>,
    Query(query): Query<SearchVehiclesQuery>,
) -> Result<Json<SearchVehiclesResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.search_available(query).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
