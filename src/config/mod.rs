//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno
//! del servicio.

pub mod environment;

pub use environment::*;
