//! Índice de disponibilidad
//!
//! Predicados puros sobre un snapshot de reservas. La búsqueda, el ledger
//! y el dashboard responden "¿está libre este vehículo?" a través de estas
//! funciones, siempre con la misma semántica de solape.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::models::time_window::TimeWindow;

/// Un vehículo está libre sobre una ventana candidata si ninguna de sus
/// reservas activas la solapa.
pub fn is_vehicle_free(vehicle_id: Uuid, window: &TimeWindow, bookings: &[Booking]) -> bool {
    !bookings
        .iter()
        .any(|booking| booking.vehicle_id == vehicle_id && booking.blocks(window))
}

/// Vehículos ocupados en el instante `now`. Una reserva in-progress ocupa
/// siempre, incluso si `now` ya superó su ventana; una confirmed ocupa
/// solo mientras `start <= now < end`.
pub fn busy_vehicle_ids(bookings: &[Booking], now: DateTime<Utc>) -> HashSet<Uuid> {
    bookings
        .iter()
        .filter(|booking| match booking.status {
            BookingStatus::InProgress => true,
            BookingStatus::Confirmed => booking.window.contains(now),
            BookingStatus::Completed | BookingStatus::Cancelled => false,
        })
        .map(|booking| booking.vehicle_id)
        .collect()
}
