//! DTOs de la API
//!
//! Structs de request y response del wire. Los nombres de campo viajan
//! en camelCase; los modelos internos no se serializan directamente.

pub mod booking_dto;
pub mod dashboard_dto;
pub mod vehicle_dto;
