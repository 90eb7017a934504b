//! Ventana de tiempo de una reserva
//!
//! Este módulo define el intervalo semiabierto `[start, end)` que comparten
//! la búsqueda, el ledger de reservas y el dashboard. La semántica de
//! solape vive únicamente aquí: ningún llamador la re-deriva por su cuenta.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Intervalo semiabierto `[start, end)` durante el cual un vehículo está
/// comprometido con un cliente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Crear una ventana. Invariante: `start < end`; los constructores del
    /// motor lo garantizan porque la duración estimada siempre es positiva.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        debug_assert!(start < end, "TimeWindow requiere start < end");
        Self { start, end }
    }

    /// Construir la ventana a partir del inicio y la duración estimada en horas.
    pub fn from_start_and_hours(start: DateTime<Utc>, hours: f64) -> Self {
        let millis = (hours * 3_600_000.0).round() as i64;
        Self::new(start, start + Duration::milliseconds(millis))
    }

    /// Dos ventanas solapan si comparten al menos un instante bajo semántica
    /// semiabierta: `a.start < b.end && b.start < a.end`. Extremos que se
    /// tocan (`a.end == b.start`) no solapan.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Test puntual `start <= t < end`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Duración de la ventana en horas.
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_milliseconds() as f64 / 3_600_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn window(start_min: i64, end_min: i64) -> TimeWindow {
        TimeWindow::new(
            base() + Duration::minutes(start_min),
            base() + Duration::minutes(end_min),
        )
    }

    #[test]
    fn test_overlaps_is_symmetric() {
        let pairs = [
            (window(0, 60), window(30, 90)),
            (window(0, 60), window(60, 120)),
            (window(0, 60), window(0, 60)),
            (window(0, 60), window(120, 180)),
            (window(0, 180), window(30, 60)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }
    }

    #[test]
    fn test_touching_windows_do_not_overlap() {
        let a = window(0, 60);
        let b = window(60, 120);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_identical_windows_overlap() {
        let a = window(0, 60);
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_nested_and_partial_overlap() {
        assert!(window(0, 180).overlaps(&window(30, 60)));
        assert!(window(0, 60).overlaps(&window(30, 90)));
        assert!(!window(0, 60).overlaps(&window(90, 120)));
    }

    #[test]
    fn test_contains_is_half_open() {
        let w = window(0, 60);
        assert!(w.contains(base()));
        assert!(w.contains(base() + Duration::minutes(59)));
        assert!(!w.contains(base() + Duration::minutes(60)));
        assert!(!w.contains(base() - Duration::minutes(1)));
    }

    #[test]
    fn test_from_start_and_hours() {
        let w = TimeWindow::from_start_and_hours(base(), 1.5);
        assert_eq!(w.start, base());
        assert_eq!(w.end, base() + Duration::minutes(90));
        assert_eq!(w.duration_hours(), 1.5);
    }
}
