//! Motor de búsqueda de disponibilidad
//!
//! Convierte una consulta capacidad + ruta + inicio en la lista de
//! vehículos libres sobre la ventana calculada. Solo lee snapshots del
//! roster y del ledger: nunca retiene locks de reserva, por lo que una
//! búsqueda jamás bloquea una reserva en curso. El resultado es un
//! candidato, no un compromiso; la reserva revalida al confirmar.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::vehicle_dto::{
    AvailableVehicleResponse, SearchCriteriaResponse, SearchVehiclesQuery, SearchVehiclesResponse,
};
use crate::models::availability::is_vehicle_free;
use crate::models::time_window::TimeWindow;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::route_estimator::RouteEstimator;
use crate::utils::clock::Clock;
use crate::utils::errors::{validation_error, AppResult};

pub struct SearchService {
    vehicles: Arc<dyn VehicleRepository>,
    bookings: Arc<dyn BookingRepository>,
    clock: Arc<dyn Clock>,
    estimator: RouteEstimator,
}

impl SearchService {
    pub fn new(
        vehicles: Arc<dyn VehicleRepository>,
        bookings: Arc<dyn BookingRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            vehicles,
            bookings,
            clock,
            estimator: RouteEstimator::new(),
        }
    }

    /// Buscar vehículos disponibles para la consulta. Los resultados
    /// conservan el orden de registro del roster.
    pub async fn search(&self, query: SearchVehiclesQuery) -> AppResult<SearchVehiclesResponse> {
        query.validate()?;

        if query.start_time <= self.clock.now() {
            return Err(validation_error(
                "startTime",
                "La hora de inicio debe ser futura",
            ));
        }

        let hours = self
            .estimator
            .estimate_hours(&query.from_pincode, &query.to_pincode)?;
        let window = TimeWindow::from_start_and_hours(query.start_time, hours);

        let (fleet, bookings) =
            futures::try_join!(self.vehicles.list(), self.bookings.list(None))?;

        let available_vehicles: Vec<AvailableVehicleResponse> = fleet
            .into_iter()
            .filter(|vehicle| vehicle.can_carry(query.capacity_required))
            .filter(|vehicle| is_vehicle_free(vehicle.id, &window, &bookings))
            .map(|vehicle| AvailableVehicleResponse::new(vehicle, hours, &query, window))
            .collect();

        info!(
            "🔍 Búsqueda {} → {} ({} kg, inicio {}): {} vehículo(s) disponible(s)",
            query.from_pincode,
            query.to_pincode,
            query.capacity_required,
            window.start,
            available_vehicles.len()
        );

        Ok(SearchVehiclesResponse {
            available_vehicles,
            search_criteria: SearchCriteriaResponse {
                capacity_required: query.capacity_required,
                from_pincode: query.from_pincode,
                to_pincode: query.to_pincode,
                start_time: query.start_time,
                estimated_ride_duration_hours: hours,
            },
        })
    }
}
