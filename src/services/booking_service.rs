//! Servicio de reservas
//!
//! Orquesta el protocolo de reserva: validar la solicitud, recalcular la
//! ventana en el servidor (lo que vio el cliente en la búsqueda es una
//! pista, nunca autoritativo) y delegar la inserción atómica en el
//! ledger. Entre búsqueda y reserva no se retiene ningún lock; el precio
//! es que una reserva puede fallar con conflicto aunque la búsqueda
//! mostrara el vehículo libre.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::CreateBookingRequest;
use crate::models::booking::{Booking, BookingStatus};
use crate::models::time_window::TimeWindow;
use crate::repositories::booking_repository::{BookingFilter, BookingRepository};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::route_estimator::RouteEstimator;
use crate::utils::clock::Clock;
use crate::utils::errors::{validation_error, AppError, AppResult};

pub struct BookingService {
    vehicles: Arc<dyn VehicleRepository>,
    bookings: Arc<dyn BookingRepository>,
    clock: Arc<dyn Clock>,
    estimator: RouteEstimator,
}

impl BookingService {
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

    /// Crear una reserva confirmada, o fallar con conflicto si la ventana
    /// del vehículo ya está tomada.
    pub async fn create_booking(&self, request: CreateBookingRequest) -> AppResult<Booking> {
        request.validate()?;

        let now = self.clock.now();
        if request.start_time <= now {
            return Err(validation_error(
                "startTime",
                "La hora de inicio debe ser futura",
            ));
        }

        let hours = self
            .estimator
            .estimate_hours(&request.from_pincode, &request.to_pincode)?;
        let window = TimeWindow::from_start_and_hours(request.start_time, hours);

        let vehicle = self
            .vehicles
            .get(request.vehicle_id)
            .await?
            .ok_or(AppError::VehicleNotFound(request.vehicle_id))?;

        let booking = Booking {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id,
            customer_id: request.customer_id.trim().to_string(),
            from_pincode: request.from_pincode,
            to_pincode: request.to_pincode,
            window,
            status: BookingStatus::Confirmed,
            created_at: now,
        };

        let committed = self.bookings.insert_if_free(booking).await?;
        info!(
            "✅ Reserva {} confirmada: vehículo {} [{} → {}]",
            committed.id, committed.vehicle_id, committed.window.start, committed.window.end
        );
        Ok(committed)
    }

    /// Obtener una reserva por id.
    pub async fn get_booking(&self, id: Uuid) -> AppResult<Booking> {
        self.bookings
            .get(id)
            .await?
            .ok_or(AppError::BookingNotFound(id))
    }

    /// Listar reservas filtradas, más recientes primero.
    pub async fn list_bookings(&self, filter: BookingFilter) -> AppResult<Vec<Booking>> {
        self.bookings.list(Some(&filter)).await
    }

    /// Aplicar una transición de estado del ciclo de vida.
    pub async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking> {
        let updated = self.bookings.update_status(id, next).await?;
        info!("🔄 Reserva {} → {}", updated.id, updated.status);
        Ok(updated)
    }
}
