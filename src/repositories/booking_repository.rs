//! Ledger de reservas
//!
//! Almacén autoritativo de reservas con exclusión mutua por vehículo.
//! `insert_if_free` ejecuta la secuencia leer-verificar-insertar bajo el
//! write lock del shard del vehículo, así que dos reservas concurrentes
//! con ventanas solapadas sobre el mismo vehículo nunca se confirman
//! ambas. Vehículos distintos tienen shards distintos y avanzan en
//! paralelo: no existe ningún lock global de reservas.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::{AppError, AppResult};

/// Filtros opcionales del listado de reservas.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub vehicle_id: Option<Uuid>,
    pub customer_id: Option<String>,
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    fn matches(&self, booking: &Booking) -> bool {
        self.vehicle_id.map_or(true, |id| booking.vehicle_id == id)
            && self
                .customer_id
                .as_deref()
                .map_or(true, |customer| booking.customer_id == customer)
            && self.status.map_or(true, |status| booking.status == status)
    }
}

type VehicleSchedule = Arc<RwLock<Vec<Booking>>>;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Insertar la reserva solo si ninguna reserva activa de su vehículo
    /// solapa la ventana. Es la primitiva atómica sobre la que descansa
    /// todo el protocolo de reserva.
    async fn insert_if_free(&self, booking: Booking) -> AppResult<Booking>;

    /// Listar reservas, opcionalmente filtradas, más recientes primero.
    async fn list(&self, filter: Option<&BookingFilter>) -> AppResult<Vec<Booking>>;

    /// Obtener una reserva por id.
    async fn get(&self, id: Uuid) -> AppResult<Option<Booking>>;

    /// Aplicar una transición de estado; rechaza la ilegal sin mutar.
    async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking>;
}

/// Ledger en memoria: un shard `Arc<RwLock<Vec<Booking>>>` por vehículo
/// más un índice reserva → vehículo para los accesos por id. El mapa
/// exterior solo se bloquea para obtener o crear el shard, nunca durante
/// la verificación de solapes.
#[derive(Debug, Default)]
pub struct InMemoryBookingRepository {
    schedules: RwLock<HashMap<Uuid, VehicleSchedule>>,
    index: RwLock<HashMap<Uuid, Uuid>>,
}

impl InMemoryBookingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn schedule_for(&self, vehicle_id: Uuid) -> VehicleSchedule {
        {
            let schedules = self.schedules.read().await;
            if let Some(schedule) = schedules.get(&vehicle_id) {
                return schedule.clone();
            }
        }

        let mut schedules = self.schedules.write().await;
        schedules
            .entry(vehicle_id)
            .or_insert_with(|| Arc::new(RwLock::new(Vec::new())))
            .clone()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn insert_if_free(&self, booking: Booking) -> AppResult<Booking> {
        let schedule = self.schedule_for(booking.vehicle_id).await;
        let mut slots = schedule.write().await;

        if let Some(conflict) = slots.iter().find(|existing| existing.blocks(&booking.window)) {
            return Err(AppError::VehicleUnavailable {
                vehicle_id: booking.vehicle_id,
                conflicting_window: conflict.window,
            });
        }

        slots.push(booking.clone());
        drop(slots);

        self.index
            .write()
            .await
            .insert(booking.id, booking.vehicle_id);
        Ok(booking)
    }

    async fn list(&self, filter: Option<&BookingFilter>) -> AppResult<Vec<Booking>> {
        let shards: Vec<VehicleSchedule> = {
            let schedules = self.schedules.read().await;
            schedules.values().cloned().collect()
        };

        let mut bookings = Vec::new();
        for shard in shards {
            let slots = shard.read().await;
            match filter {
                Some(f) => bookings.extend(slots.iter().filter(|b| f.matches(b)).cloned()),
                None => bookings.extend(slots.iter().cloned()),
            }
        }

        // más recientes primero; el id desempata creaciones simultáneas
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(bookings)
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Booking>> {
        let vehicle_id = {
            let index = self.index.read().await;
            match index.get(&id) {
                Some(vehicle_id) => *vehicle_id,
                None => return Ok(None),
            }
        };

        let schedule = self.schedule_for(vehicle_id).await;
        let slots = schedule.read().await;
        Ok(slots.iter().find(|booking| booking.id == id).cloned())
    }

    async fn update_status(&self, id: Uuid, next: BookingStatus) -> AppResult<Booking> {
        let vehicle_id = {
            let index = self.index.read().await;
            *index.get(&id).ok_or(AppError::BookingNotFound(id))?
        };

        let schedule = self.schedule_for(vehicle_id).await;
        let mut slots = schedule.write().await;
        let booking = slots
            .iter_mut()
            .find(|booking| booking.id == id)
            .ok_or(AppError::BookingNotFound(id))?;

        if !booking.status.can_transition_to(next) {
            return Err(AppError::InvalidStatusTransition {
                from: booking.status,
                to: next,
            });
        }

        booking.status = next;
        Ok(booking.clone())
    }
}
