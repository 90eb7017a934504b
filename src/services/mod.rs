//! Services module
//!
//! Este módulo contiene la lógica de dominio del motor: estimación de
//! rutas, búsqueda de disponibilidad, protocolo de reserva y agregación
//! del dashboard.

pub mod booking_service;
pub mod dashboard_service;
pub mod route_estimator;
pub mod search_service;
