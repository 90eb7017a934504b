//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos del motor de flota:
//! vehículos, reservas, ventanas de tiempo y los predicados de
//! disponibilidad que comparten búsqueda, ledger y dashboard.

pub mod availability;
pub mod booking;
pub mod time_window;
pub mod vehicle;
