use serde::{Deserialize, Serialize};

use crate::dto::booking_dto::BookingResponse;
use crate::services::dashboard_service::DashboardStats;

// Query del dashboard
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    pub recent_limit: Option<usize>,
}

// Response de estadísticas de flota
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStatsResponse {
    pub total_vehicles: usize,
    pub available_vehicles: usize,
    pub active_bookings: usize,
    pub completed_bookings: usize,
    pub recent_bookings: Vec<BookingResponse>,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_vehicles: stats.total_vehicles,
            available_vehicles: stats.available_vehicles,
            active_bookings: stats.active_bookings,
            completed_bookings: stats.completed_bookings,
            recent_bookings: stats
                .recent_bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect(),
        }
    }
}
