use chrono::{Datelike, Local};

use super::{EventService, seed_on_transient};
use crate::demo::demo_data;
use crate::error::AppResult;
use crate::models::*;
use crate::repositories::Repositories;

#[derive(Clone)]
pub struct DashboardService {
    repos: Repositories,
    events: EventService,
}

impl DashboardService {
    pub fn new(repos: Repositories, events: EventService) -> Self {
        Self { repos, events }
    }

    pub async fn stats(&self) -> AppResult<DashboardStats> {
        let members = seed_on_transient(self.repos.members.list().await, "members", || {
            demo_data().members
        })?;
        let visitors = seed_on_transient(self.repos.visitors.list().await, "visitors", || {
            demo_data().visitors
        })?;
        let attendance = seed_on_transient(self.repos.attendance.list().await, "attendance", || {
            demo_data().attendance
        })?;
        let donations = seed_on_transient(self.repos.donations.list().await, "donations", || {
            demo_data().donations
        })?;

        let today = Local::now().date_naive();

        let latest_service_attendance = attendance
            .iter()
            .map(|r| r.service_date)
            .max()
            .map(|latest| {
                attendance
                    .iter()
                    .filter(|r| r.service_date == latest && r.present)
                    .count()
            });

        let month: Vec<Donation> = donations
            .into_iter()
            .filter(|d| {
                d.donation_date.year() == today.year() && d.donation_date.month() == today.month()
            })
            .collect();

        Ok(DashboardStats {
            mode: self.repos.mode,
            total_members: members.len(),
            active_members: members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count(),
            today_visitors: visitors.iter().filter(|v| v.visit_date == today).count(),
            latest_service_attendance,
            month_donations_cents: total_cents(&month),
            upcoming_events: self.events.upcoming_count(today).await,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_stats_mirror_the_seed() {
        let repos = Repositories::demo();
        let members = repos.members.list().await.unwrap();
        let visitors = repos.visitors.list().await.unwrap();

        let service = DashboardService::new(repos, EventService::new());
        let stats = service.stats().await.unwrap();

        assert_eq!(stats.mode, ServeMode::Demo);
        assert_eq!(stats.total_members, members.len());
        assert_eq!(stats.today_visitors, visitors.len());
        assert_eq!(
            stats.active_members,
            members
                .iter()
                .filter(|m| m.status == MemberStatus::Active)
                .count()
        );
        // the seed's latest service is the most recent Sunday, six present
        assert_eq!(stats.latest_service_attendance, Some(6));
        // one seed donation is dated today
        assert!(stats.month_donations_cents >= 50_000);
        assert_eq!(stats.upcoming_events, 0);
    }

    #[tokio::test]
    async fn test_upcoming_events_counted() {
        let events = EventService::new();
        events
            .create(CreateEventRequest {
                title: "Harvest Service".to_string(),
                event_date: "2099-11-01".to_string(),
                event_time: "9:00 AM".to_string(),
                location: "Main Auditorium".to_string(),
                recurrence: None,
            })
            .await
            .unwrap();

        let service = DashboardService::new(Repositories::demo(), events);
        assert_eq!(service.stats().await.unwrap().upcoming_events, 1);
    }
}
