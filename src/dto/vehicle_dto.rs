use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::time_window::TimeWindow;
use crate::models::vehicle::Vehicle;
use crate::utils::validation::PINCODE_REGEX;

// Request para registrar un vehículo
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddVehicleRequest {
    #[validate(custom = "crate::utils::validation::validate_vehicle_name")]
    pub name: String,
    #[serde(rename = "capacityKg")]
    #[validate(range(
        min = 1,
        max = 50000,
        message = "La capacidad debe estar entre 1 y 50000 kg"
    ))]
    pub capacity_kg: i32,
    #[validate(range(
        min = 2,
        max = 18,
        message = "El número de neumáticos debe estar entre 2 y 18"
    ))]
    pub tyres: i32,
}

// Response de vehículo
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity_kg: i32,
    pub tyres: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            capacity_kg: vehicle.capacity_kg,
            tyres: vehicle.tyres,
            created_at: vehicle.created_at,
        }
    }
}

// Response al registrar un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleCreatedResponse {
    pub message: String,
    pub vehicle: VehicleResponse,
}

// Listado completo de la flota
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    pub vehicles: Vec<VehicleResponse>,
}

// Query de búsqueda de vehículos disponibles
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchVehiclesQuery {
    #[serde(rename = "capacityRequired")]
    #[validate(range(min = 1, message = "La capacidad requerida debe ser mayor que 0"))]
    pub capacity_required: i32,
    #[serde(rename = "fromPincode")]
    #[validate(regex(
        path = "PINCODE_REGEX",
        message = "El pincode de origen debe tener exactamente 6 dígitos"
    ))]
    pub from_pincode: String,
    #[serde(rename = "toPincode")]
    #[validate(regex(
        path = "PINCODE_REGEX",
        message = "El pincode de destino debe tener exactamente 6 dígitos"
    ))]
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
}

// Ruta para la que el vehículo está disponible
#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub from: String,
    pub to: String,
}

// Ventana calculada que una reserva tomaría
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingWindowResponse {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

impl From<TimeWindow> for BookingWindowResponse {
    fn from(window: TimeWindow) -> Self {
        Self {
            start_time: window.start,
            end_time: window.end,
        }
    }
}

// Vehículo disponible, anotado con la estimación y la ventana
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableVehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity_kg: i32,
    pub tyres: i32,
    pub estimated_ride_duration_hours: f64,
    pub available_for_route: RouteInfo,
    pub booking_window: BookingWindowResponse,
}

impl AvailableVehicleResponse {
    pub fn new(
        vehicle: Vehicle,
        hours: f64,
        query: &SearchVehiclesQuery,
        window: TimeWindow,
    ) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            capacity_kg: vehicle.capacity_kg,
            tyres: vehicle.tyres,
            estimated_ride_duration_hours: hours,
            available_for_route: RouteInfo {
                from: query.from_pincode.clone(),
                to: query.to_pincode.clone(),
            },
            booking_window: window.into(),
        }
    }
}

// Criterios de búsqueda ecoados en la respuesta
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteriaResponse {
    pub capacity_required: i32,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
    pub estimated_ride_duration_hours: f64,
}

// Response de búsqueda de disponibilidad
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVehiclesResponse {
    pub available_vehicles: Vec<AvailableVehicleResponse>,
    pub search_criteria: SearchCriteriaResponse,
}
