use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub member_id: Uuid,
    pub service_date: NaiveDate,
    pub service_type: String,
    pub present: bool,
    pub check_in_time: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewAttendanceRecord {
    pub member_id: Uuid,
    pub service_date: NaiveDate,
    pub service_type: String,
    pub present: bool,
    pub check_in_time: Option<String>,
}

/// The check-in sheet for one (date, service) pair: a presence map keyed by
/// member id. A member with no entry reads as absent.
#[derive(Debug, Clone)]
pub struct AttendanceSheet {
    pub service_date: NaiveDate,
    pub service_type: String,
    presence: HashMap<Uuid, bool>,
}

impl AttendanceSheet {
    pub fn new(service_date: NaiveDate, service_type: impl Into<String>) -> Self {
        Self {
            service_date,
            service_type: service_type.into(),
            presence: HashMap::new(),
        }
    }

    pub fn from_records(
        service_date: NaiveDate,
        service_type: impl Into<String>,
        records: &[AttendanceRecord],
    ) -> Self {
        let mut sheet = Self::new(service_date, service_type);
        for record in records {
            sheet.presence.insert(record.member_id, record.present);
        }
        sheet
    }

    pub fn is_present(&self, member_id: Uuid) -> bool {
        self.presence.get(&member_id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, member_id: Uuid, present: bool) {
        self.presence.insert(member_id, present);
    }

    /// Flip one member's checkbox. An untracked member flips to present.
    pub fn toggle(&mut self, member_id: Uuid) {
        let flipped = !self.is_present(member_id);
        self.presence.insert(member_id, flipped);
    }

    pub fn present_count(&self) -> usize {
        self.presence.values().filter(|p| **p).count()
    }

    pub fn present_member_ids(&self) -> Vec<Uuid> {
        self.presence
            .iter()
            .filter(|(_, present)| **present)
            .map(|(id, _)| *id)
            .collect()
    }
}

/// One row of the sheet as the console renders it: the member roll joined
/// with the day's saved records.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SheetRow {
    pub member_id: Uuid,
    pub member_name: String,
    pub department: String,
    pub present: bool,
    pub check_in_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SheetEntry {
    pub member_id: Uuid,
    pub present: bool,
    pub check_in_time: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaveAttendanceRequest {
    #[schema(example = "2025-06-01")]
    pub service_date: String, // YYYY-MM-DD
    #[schema(example = "Sunday Service")]
    pub service_type: String,
    pub entries: Vec<SheetEntry>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AttendanceQuery {
    pub service_date: String,
    pub service_type: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AttendanceRecordsQuery {
    /// Inclusive YYYY-MM-DD bounds.
    pub from: Option<String>,
    pub to: Option<String>,
    pub service_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_absent_member_defaults_to_false() {
        let sheet = AttendanceSheet::new(date(), "Sunday Service");
        assert!(!sheet.is_present(Uuid::new_v4()));
    }

    #[test]
    fn test_toggle_flips_and_untracked_becomes_present() {
        let mut sheet = AttendanceSheet::new(date(), "Sunday Service");
        let id = Uuid::new_v4();

        sheet.toggle(id);
        assert!(sheet.is_present(id));
        sheet.toggle(id);
        assert!(!sheet.is_present(id));
    }

    #[test]
    fn test_from_records_carries_presence() {
        let present_id = Uuid::new_v4();
        let absent_id = Uuid::new_v4();
        let records = vec![AttendanceRecord {
            id: Uuid::new_v4(),
            member_id: present_id,
            service_date: date(),
            service_type: "Sunday Service".to_string(),
            present: true,
            check_in_time: Some("09:05 AM".to_string()),
            created_at: None,
        }];

        let sheet = AttendanceSheet::from_records(date(), "Sunday Service", &records);
        assert!(sheet.is_present(present_id));
        assert!(!sheet.is_present(absent_id));
        assert_eq!(sheet.present_count(), 1);
    }
}
