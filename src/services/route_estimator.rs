//! Estimador de duración de ruta
//!
//! Función pura y determinista pincode → horas estimadas. Búsqueda y
//! reserva recalculan la ventana con esta misma función, así que el
//! chequeo de solape de ambas opera sobre ventanas idénticas.

use crate::utils::errors::{validation_error, AppResult};
use crate::utils::validation::validate_pincode;

/// Duración mínima de un viaje en horas. Mantiene `start < end` incluso
/// cuando la diferencia de pincodes es 0 o un múltiplo de 24.
pub const MIN_RIDE_DURATION_HOURS: f64 = 0.5;

/// Estimador basado en la distancia numérica entre pincodes.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteEstimator;

impl RouteEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Estimar la duración del viaje en horas: diferencia absoluta de los
    /// pincodes interpretados como enteros, módulo 24, con el suelo de
    /// `MIN_RIDE_DURATION_HOURS`.
    pub fn estimate_hours(&self, from_pincode: &str, to_pincode: &str) -> AppResult<f64> {
        let from = parse_pincode("fromPincode", from_pincode)?;
        let to = parse_pincode("toPincode", to_pincode)?;

        let base = ((to - from).abs() % 24) as f64;
        if base == 0.0 {
            Ok(MIN_RIDE_DURATION_HOURS)
        } else {
            Ok(base)
        }
    }
}

fn parse_pincode(field: &'static str, value: &str) -> AppResult<i64> {
    if validate_pincode(value).is_err() {
        return Err(validation_error(
            field,
            "El pincode debe tener exactamente 6 dígitos",
        ));
    }
    value
        .parse::<i64>()
        .map_err(|_| validation_error(field, "El pincode debe tener exactamente 6 dígitos"))
}
