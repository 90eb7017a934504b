//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: repositorios, reloj y configuración.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::booking_repository::{BookingRepository, InMemoryBookingRepository};
use crate::repositories::vehicle_repository::{InMemoryVehicleRepository, VehicleRepository};
use crate::utils::clock::{Clock, SystemClock};

#[derive(Clone)]
pub struct AppState {
    pub vehicles: Arc<dyn VehicleRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub clock: Arc<dyn Clock>,
    pub config: EnvironmentConfig,
}

impl AppState {
    /// Estado con los repositorios en memoria y el reloj del sistema.
    pub fn new(config: EnvironmentConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Estado con un reloj inyectado; los tests de escenarios temporales
    /// lo usan para mover el instante presente a voluntad.
    pub fn with_clock(config: EnvironmentConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            vehicles: Arc::new(InMemoryVehicleRepository::new()),
            bookings: Arc::new(InMemoryBookingRepository::new()),
            clock,
            config,
        }
    }
}
