use crate::dto::dashboard_dto::{DashboardQuery, DashboardStatsResponse};
use crate::services::dashboard_service::DashboardService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct DashboardController {
    service: DashboardService,
    default_recent_limit: usize,
}

impl DashboardController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: DashboardService::new(
                state.vehicles.clone(),
                state.bookings.clone(),
                state.clock.clone(),
            ),
            default_recent_limit: state.config.recent_bookings_limit,
        }
    }

    pub async fn stats(&self, query: DashboardQuery) -> AppResult<DashboardStatsResponse> {
        let limit = query.recent_limit.unwrap_or(self.default_recent_limit);
        let stats = self.service.stats(limit).await?;
        Ok(stats.into())
    }
}
