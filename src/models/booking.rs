//! Modelo de Booking
//!
//! Este módulo contiene la reserva de un vehículo y su ciclo de vida de
//! estados. La ventana `[start, end)` es inmutable una vez confirmada:
//! no hay reprogramación, solo transiciones de estado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::time_window::TimeWindow;

/// Estado de una reserva. En el wire viajan exactamente los strings
/// `confirmed`, `in-progress`, `completed` y `cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl BookingStatus {
    /// Estados que bloquean la disponibilidad del vehículo.
    pub fn is_active(&self) -> bool {
        matches!(self, BookingStatus::Confirmed | BookingStatus::InProgress)
    }

    /// Estados terminales: no admiten más transiciones.
    pub fn is_terminal(&self) -> bool {
        matches!(self, BookingStatus::Completed | BookingStatus::Cancelled)
    }

    /// Transiciones legales del ciclo de vida: confirmed → in-progress →
    /// completed, con cancelled como salida desde confirmed o in-progress.
    /// Una reserva confirmada no puede saltar directamente a completed.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        matches!(
            (*self, next),
            (BookingStatus::Confirmed, BookingStatus::InProgress)
                | (BookingStatus::Confirmed, BookingStatus::Cancelled)
                | (BookingStatus::InProgress, BookingStatus::Completed)
                | (BookingStatus::InProgress, BookingStatus::Cancelled)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::InProgress => "in-progress",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserva de un vehículo para una ruta y ventana concretas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: String,
    pub from_pincode: String,
    pub to_pincode: String,
    pub window: TimeWindow,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Una reserva bloquea una ventana candidata si sigue activa
    /// (confirmed o in-progress) y ambas ventanas solapan. Las reservas
    /// canceladas o completadas nunca bloquean.
    pub fn blocks(&self, window: &TimeWindow) -> bool {
        self.status.is_active() && self.window.overlaps(window)
    }

    /// Duración estimada del viaje, derivada de la ventana.
    pub fn estimated_ride_duration_hours(&self) -> f64 {
        self.window.duration_hours()
    }
}
