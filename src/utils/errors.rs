//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del motor
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::models::booking::BookingStatus;
use crate::models::time_window::TimeWindow;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(Uuid),

    #[error("Booking not found: {0}")]
    BookingNotFound(Uuid),

    #[error("Vehicle {vehicle_id} is unavailable for the requested window")]
    VehicleUnavailable {
        vehicle_id: Uuid,
        conflicting_window: TimeWindow,
    },

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::VehicleNotFound(id) => {
                eprintln!("Vehicle not found: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: format!("Vehículo no encontrado: {}", id),
                        details: None,
                        code: Some("VEHICLE_NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::BookingNotFound(id) => {
                eprintln!("Booking not found: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: format!("Reserva no encontrada: {}", id),
                        details: None,
                        code: Some("BOOKING_NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::VehicleUnavailable {
                vehicle_id,
                conflicting_window,
            } => {
                eprintln!(
                    "Booking conflict on vehicle {}: [{} - {})",
                    vehicle_id, conflicting_window.start, conflicting_window.end
                );
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: "El vehículo ya no está disponible para la ventana solicitada"
                            .to_string(),
                        details: Some(json!({
                            "vehicleId": vehicle_id,
                            "conflictingWindow": {
                                "startTime": conflicting_window.start,
                                "endTime": conflicting_window.end,
                            }
                        })),
                        code: Some("VEHICLE_UNAVAILABLE".to_string()),
                    },
                )
            }

            AppError::InvalidStatusTransition { from, to } => {
                eprintln!("Invalid status transition: {} -> {}", from, to);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: format!("Transición de estado no permitida: {} → {}", from, to),
                        details: Some(json!({ "from": from, "to": to })),
                        code: Some("INVALID_STATUS_TRANSITION".to_string()),
                    },
                )
            }

            AppError::Storage(msg) => {
                eprintln!("Storage error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Storage Error".to_string(),
                        message: "An error occurred while accessing the reservation store"
                            .to_string(),
                        details: Some(json!({ "storage_error": msg })),
                        code: Some("STORAGE_ERROR".to_string()),
                    },
                )
            }

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de validación de un solo campo
pub fn validation_error(field: &'static str, message: &'static str) -> AppError {
    use validator::ValidationError;

    let mut error = ValidationError::new("invalid");
    error.message = Some(message.into());

    let mut errors = validator::ValidationErrors::new();
    errors.add(field, error);

    AppError::Validation(errors)
}
