use std::sync::Arc;

use chrono::Utc;
use log::info;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{parse_date, require};
use crate::error::{AppError, AppResult};
use crate::models::*;

const RECURRENCES: [&str; 3] = ["none", "weekly", "monthly"];

/// Events are process-local in both modes; the list starts empty and is lost
/// on restart.
#[derive(Clone, Default)]
pub struct EventService {
    events: Arc<RwLock<Vec<Event>>>,
}

impl EventService {
    pub fn new() -> Self {
        Self::default()
    }

    fn validate_recurrence(value: &str) -> AppResult<String> {
        let value = value.trim().to_lowercase();
        if !RECURRENCES.contains(&value.as_str()) {
            return Err(AppError::ValidationError(format!(
                "recurrence must be one of: {}",
                RECURRENCES.join(", ")
            )));
        }
        Ok(value)
    }

    /// Sorted soonest first.
    pub async fn list(&self) -> Vec<Event> {
        let mut events = self.events.read().await.clone();
        events.sort_by(|a, b| {
            a.event_date
                .cmp(&b.event_date)
                .then_with(|| a.event_time.cmp(&b.event_time))
        });
        events
    }

    pub async fn create(&self, request: CreateEventRequest) -> AppResult<Event> {
        require(&request.title, "title")?;
        require(&request.event_time, "event_time")?;
        require(&request.location, "location")?;
        let event_date = parse_date(&request.event_date, "event_date")?;
        let recurrence = Self::validate_recurrence(request.recurrence.as_deref().unwrap_or("none"))?;

        let event = Event {
            id: Uuid::new_v4(),
            title: request.title.trim().to_string(),
            event_date,
            event_time: request.event_time.trim().to_string(),
            location: request.location.trim().to_string(),
            recurrence,
            notified: false,
            created_at: Utc::now(),
        };
        self.events.write().await.push(event.clone());
        Ok(event)
    }

    pub async fn update(&self, id: Uuid, request: UpdateEventRequest) -> AppResult<Event> {
        let event_date = request
            .event_date
            .as_deref()
            .map(|d| parse_date(d, "event_date"))
            .transpose()?;
        let recurrence = request
            .recurrence
            .as_deref()
            .map(Self::validate_recurrence)
            .transpose()?;

        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No event with id {id}")))?;

        if let Some(title) = request.title {
            require(&title, "title")?;
            event.title = title.trim().to_string();
        }
        if let Some(date) = event_date {
            event.event_date = date;
        }
        if let Some(time) = request.event_time {
            event.event_time = time.trim().to_string();
        }
        if let Some(location) = request.location {
            event.location = location.trim().to_string();
        }
        if let Some(recurrence) = recurrence {
            event.recurrence = recurrence;
        }
        Ok(event.clone())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.events.write().await.retain(|e| e.id != id);
        Ok(())
    }

    /// Marks the event announced. Delivery itself (email, SMS, projection
    /// slide) happens outside this system.
    pub async fn notify(&self, id: Uuid) -> AppResult<Event> {
        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No event with id {id}")))?;

        event.notified = true;
        info!("Notification sent for event '{}' on {}", event.title, event.event_date);
        Ok(event.clone())
    }

    pub async fn upcoming_count(&self, today: chrono::NaiveDate) -> usize {
        self.events
            .read()
            .await
            .iter()
            .filter(|e| e.event_date >= today)
            .count()
    }
}
