//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, validación
//! y el reloj inyectable del motor.

pub mod clock;
pub mod errors;
pub mod validation;
