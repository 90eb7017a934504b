//! Servicio de dashboard
//!
//! Estadísticas de flota derivadas del estado actual del roster y el
//! ledger. "Disponible" aquí es el test puntual en el instante presente,
//! no el chequeo de ventana de la búsqueda: una reserva in-progress
//! ocupa su vehículo aunque su ventana ya haya vencido, y una confirmed
//! solo ocupa mientras el instante cae dentro de su ventana.

use std::sync::Arc;

use crate::models::availability::busy_vehicle_ids;
use crate::models::booking::{Booking, BookingStatus};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::clock::Clock;
use crate::utils::errors::AppResult;

/// Snapshot agregado de la flota.
#[derive(Debug, Clone)]
pub struct DashboardStats {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub active_bookings: usize,
    pub completed_bookings: usize,
    pub recent_bookings: Vec<Booking>,
}

pub struct DashboardService {
    vehicles: Arc<dyn VehicleRepository>,
    bookings: Arc<dyn BookingRepository>,
    clock: Arc<dyn Clock>,
}

impl DashboardService {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        bookings: Arc<dyn BookingRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vehicles,
            bookings,
            clock,
        }
    }

    /// Calcular las estadísticas sobre un snapshot coherente de roster y
    /// ledger. `recent_limit` acota la lista de reservas recientes.
    pub async fn stats(&self, recent_limit: usize) -> AppResult<DashboardStats> {
        let (fleet, mut bookings) =
            futures::try_join!(self.vehicles.list(), self.bookings.list(None))?;
        let now = self.clock.now();

        let busy = busy_vehicle_ids(&bookings, now);
        let total_vehicles = fleet.len();
        let available_vehicles = fleet
            .iter()
            .filter(|vehicle| !busy.contains(&vehicle.id))
            .count();

        let active_bookings = bookings.iter().filter(|b| b.status.is_active()).count();
        let completed_bookings = bookings
            .iter()
            .filter(|b| b.status == BookingStatus::Completed)
            .count();

        // el ledger ya entrega las reservas más recientes primero
        bookings.truncate(recent_limit);

        Ok(DashboardStats {
            total_vehicles,
            available_vehicles,
            active_bookings,
            completed_bookings,
            recent_bookings: bookings,
        })
    }
}
