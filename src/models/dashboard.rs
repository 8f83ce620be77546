use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::common::ServeMode;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardStats {
    pub mode: ServeMode,
    pub total_members: usize,
    pub active_members: usize,
    pub today_visitors: usize,
    /// Headcount of the most recent saved service, if any attendance exists.
    pub latest_service_attendance: Option<usize>,
    pub month_donations_cents: i64,
    pub upcoming_events: usize,
}
