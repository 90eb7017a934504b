use std::sync::Arc;

use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    AddVehicleRequest, SearchVehiclesQuery, SearchVehiclesResponse, VehicleCreatedResponse,
    VehicleListResponse, VehicleResponse,
};
use crate::models::vehicle::Vehicle;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::search_service::SearchService;
use crate::state::AppState;
use crate::utils::clock::Clock;
use crate::utils::errors::{AppError, AppResult};

pub struct VehicleController {
    vehicles: Arc<dyn VehicleRepository>,
    clock: Arc<dyn Clock>,
    search: SearchService,
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            vehicles: state.vehicles.clone(),
            clock: state.clock.clone(),
            search: SearchService::new(
                state.vehicles.clone(),
                state.bookings.clone(),
                state.clock.clone(),
            ),
        }
    }

    pub async fn create(&self, request: AddVehicleRequest) -> AppResult<VehicleCreatedResponse> {
        // Validar campos
        request.validate()?;

        // Registrar vehículo en el roster
        let vehicle = Vehicle::new(
            request.name.trim().to_string(),
            request.capacity_kg,
            request.tyres,
            self.clock.now(),
        );
        let vehicle = self.vehicles.add(vehicle).await?;
        info!(
            "🚛 Vehículo registrado: {} ({} kg, {} neumáticos)",
            vehicle.name, vehicle.capacity_kg, vehicle.tyres
        );

        Ok(VehicleCreatedResponse {
            message: "Vehículo registrado exitosamente".to_string(),
            vehicle: vehicle.into(),
        })
    }

    pub async fn list(&self) -> AppResult<VehicleListResponse> {
        let vehicles = self.vehicles.list().await?;
        Ok(VehicleListResponse {
            vehicles: vehicles.into_iter().map(VehicleResponse::from).collect(),
        })
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<VehicleResponse> {
        let vehicle = self
            .vehicles
            .get(id)
            .await?
            .ok_or(AppError::VehicleNotFound(id))?;
        Ok(vehicle.into())
    }

    pub async fn search_available(
        &self,
        query: SearchVehiclesQuery,
    ) -> AppResult<SearchVehiclesResponse> {
        self.search.search(query).await
    }
}
