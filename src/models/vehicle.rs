//! Modelo de Vehicle
//!
//! Este módulo contiene el struct del vehículo tal y como vive en el
//! roster de la flota. El roster conserva el orden de registro.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehículo registrado en la flota. Inmutable tras su creación; el retiro
/// de vehículos queda fuera del alcance del motor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub capacity_kg: i32,
    pub tyres: i32,
    pub created_at: DateTime<Utc>,
}

impl Vehicle {
    /// Crear un vehículo con id generado por el servidor.
    pub fn new(name: String, capacity_kg: i32, tyres: i32, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            capacity_kg,
            tyres,
            created_at,
        }
    }

    /// ¿Puede cargar el peso requerido?
    pub fn can_carry(&self, capacity_required: i32) -> bool {
        self.capacity_kg >= capacity_required
    }
}
