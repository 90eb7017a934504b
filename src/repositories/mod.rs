//! Repositorios de almacenamiento
//!
//! Traits de acceso al roster de vehículos y al ledger de reservas,
//! con sus implementaciones en memoria.

pub mod booking_repository;
pub mod vehicle_repository;
