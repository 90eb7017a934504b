//! Controllers de la API
//!
//! Capa fina entre los handlers HTTP y los servicios: arma las
//! dependencias desde el estado compartido y traduce modelos a DTOs.

pub mod booking_controller;
pub mod dashboard_controller;
pub mod vehicle_controller;
