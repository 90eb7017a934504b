//! Reloj inyectable
//!
//! El motor nunca llama a `Utc::now()` directamente: recibe el instante a
//! través de este trait, de modo que los escenarios dependientes del
//! tiempo (ventanas futuras, dashboard) son deterministas en tests.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

/// Fuente del instante presente.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reloj del sistema.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Reloj controlado manualmente para tests.
#[derive(Debug)]
pub struct ManualClock {
    instant: RwLock<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            instant: RwLock::new(start),
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        *self.instant.write().unwrap() = instant;
    }

    pub fn advance(&self, delta: Duration) {
        let mut guard = self.instant.write().unwrap();
        *guard = *guard + delta;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.read().unwrap()
    }
}
