use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::validation::PINCODE_REGEX;

// Request para crear una reserva
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub vehicle_id: Uuid,
    #[serde(rename = "customerId")]
    #[validate(custom = "crate::utils::validation::validate_customer_id")]
    pub customer_id: String,
    #[serde(rename = "fromPincode")]
    #[validate(regex(
        path = "PINCODE_REGEX",
        message = "El pincode de origen debe tener exactamente 6 dígitos"
    ))]
    pub from_pincode: String,
    #[serde(rename = "toPincode")]
    #[validate(regex(
        path = "PINCODE_REGEX",
        message = "El pincode de destino debe tener exactamente 6 dígitos"
    ))]
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
}

// Response de reserva
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: String,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub estimated_ride_duration_hours: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let estimated_ride_duration_hours = booking.estimated_ride_duration_hours();
        Self {
            id: booking.id,
            vehicle_id: booking.vehicle_id,
            customer_id: booking.customer_id,
            from_pincode: booking.from_pincode,
            to_pincode: booking.to_pincode,
            start_time: booking.window.start,
            end_time: booking.window.end,
            estimated_ride_duration_hours,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}

// Response al crear una reserva o mutar su estado
#[derive(Debug, Serialize)]
pub struct BookingMutationResponse {
    pub message: String,
    pub booking: BookingResponse,
}

// Detalle de una reserva
#[derive(Debug, Serialize)]
pub struct BookingDetailResponse {
    pub booking: BookingResponse,
}

// Listado de reservas
#[derive(Debug, Serialize)]
pub struct BookingListResponse {
    pub bookings: Vec<BookingResponse>,
}

// Query de filtros del listado de reservas
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingFiltersQuery {
    pub vehicle_id: Option<Uuid>,
    pub customer_id: Option<String>,
    pub status: Option<BookingStatus>,
}

// Request para actualizar el estado de una reserva
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}
