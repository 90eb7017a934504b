//! Middleware del sistema
//!
//! Este módulo contiene el middleware de CORS del servicio.

pub mod cors;

pub use cors::*;
