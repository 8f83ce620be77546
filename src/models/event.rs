use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Events and their notification flag live only in this process; they are
/// never written to the remote store, in either mode.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub event_date: NaiveDate,
    pub event_time: String,
    pub location: String,
    pub recurrence: String,
    pub notified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateEventRequest {
    #[schema(example = "Youth Conference")]
    pub title: String,
    #[schema(example = "2025-07-12")]
    pub event_date: String, // YYYY-MM-DD
    #[schema(example = "4:00 PM")]
    pub event_time: String,
    #[schema(example = "Main Auditorium")]
    pub location: String,
    /// `none`, `weekly` or `monthly`.
    #[schema(example = "none")]
    pub recurrence: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub event_date: Option<String>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub recurrence: Option<String>,
}
