use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingDetailResponse, BookingFiltersQuery, BookingListResponse, BookingMutationResponse,
    CreateBookingRequest, UpdateBookingStatusRequest,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/", get(list_bookings))
        .route("/:id", get(get_booking))
        .route("/:id/status", patch(update_booking_status))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<Json<BookingMutationResponse>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_bookings(
    State(state): State<AppState>,
    Query(filters): Query<BookingFiltersQuery>,
) -> Result<Json<BookingListResponse>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingDetailResponse>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<Json<BookingMutationResponse>, AppError> {
    let controller = BookingController::new(&state);
    let response = controller.update_status(id, request).await?;
    Ok(Json(response))
}
