//! Repositorio de vehículos
//!
//! Roster de la flota detrás de un trait de almacenamiento. La
//! implementación de referencia es en memoria; una implementación durable
//! se conecta por el mismo trait sin tocar servicios ni controllers.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Registrar un vehículo en el roster.
    async fn add(&self, vehicle: Vehicle) -> AppResult<Vehicle>;

    /// Listar la flota completa en orden de registro.
    async fn list(&self) -> AppResult<Vec<Vehicle>>;

    /// Obtener un vehículo por id.
    async fn get(&self, id: Uuid) -> AppResult<Option<Vehicle>>;
}

/// Roster en memoria. El `Vec` conserva el orden de registro, que es el
/// orden estable en que la búsqueda devuelve resultados.
#[derive(Debug, Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn add(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        vehicles.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.clone())
    }

    async fn get(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|vehicle| vehicle.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn vehicle(name: &str) -> Vehicle {
        Vehicle::new(name.to_string(), 1000, 4, Utc::now())
    }

    #[tokio::test]
    async fn test_list_preserves_registration_order() {
        let repo = InMemoryVehicleRepository::new();
        for name in ["Alpha", "Beta", "Gamma"] {
            repo.add(vehicle(name)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = InMemoryVehicleRepository::new();
        let added = repo.add(vehicle("Alpha")).await.unwrap();

        let found = repo.get(added.id).await.unwrap();
        assert_eq!(found.map(|v| v.name), Some("Alpha".to_string()));

        assert!(repo.get(Uuid::new_v4()).await.unwrap().is_none());
    }
}
