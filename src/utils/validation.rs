//! Utilidades de validación
//!
//! Este módulo contiene el regex de pincode que comparten los derives de
//! `validator` y funciones helper de validación de datos.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Pincode indio: exactamente 6 dígitos.
    pub static ref PINCODE_REGEX: Regex = Regex::new(r"^\d{6}$").unwrap();
}

/// Validar que un pincode tenga exactamente 6 dígitos
pub fn validate_pincode(value: &str) -> Result<(), ValidationError> {
    if !PINCODE_REGEX.is_match(value) {
        let mut error = ValidationError::new("pincode");
        error.message = Some("El pincode debe tener exactamente 6 dígitos".into());
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar el nombre de un vehículo: no vacío tras recortar espacios
/// y hasta 100 caracteres
pub fn validate_vehicle_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        let mut error = ValidationError::new("name_required");
        error.message = Some("El nombre del vehículo es requerido".into());
        return Err(error);
    }
    if trimmed.chars().count() > 100 {
        let mut error = ValidationError::new("name_too_long");
        error.message = Some("El nombre no puede superar los 100 caracteres".into());
        error.add_param("max".into(), &100);
        error.add_param("actual".into(), &trimmed.chars().count());
        return Err(error);
    }
    Ok(())
}

/// Validar el identificador de cliente: no vacío tras recortar espacios
pub fn validate_customer_id(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("customer_required");
        error.message = Some("El identificador de cliente es requerido".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_pincode() {
        assert!(validate_pincode("110001").is_ok());
        assert!(validate_pincode("000000").is_ok());

        assert!(validate_pincode("11001").is_err());
        assert!(validate_pincode("1100011").is_err());
        assert!(validate_pincode("11000a").is_err());
        assert!(validate_pincode("").is_err());
        assert!(validate_pincode(" 110001").is_err());
    }

    #[test]
    fn test_validate_vehicle_name() {
        assert!(validate_vehicle_name("Tata Ace").is_ok());
        assert!(validate_vehicle_name("  Tata Ace  ").is_ok());

        assert!(validate_vehicle_name("").is_err());
        assert!(validate_vehicle_name("   ").is_err());
        assert!(validate_vehicle_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_validate_customer_id() {
        assert!(validate_customer_id("customer-42").is_ok());
        assert!(validate_customer_id("").is_err());
        assert!(validate_customer_id("  ").is_err());
    }
}
