//! FleetLink backend: motor de disponibilidad y reservas de flota.
//!
//! La librería expone el motor completo (modelos, repositorios, servicios
//! y el router HTTP) para que el binario y los tests de integración
//! monten exactamente la misma aplicación.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
