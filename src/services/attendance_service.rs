use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use super::{Loaded, load_or_seed, parse_date, require};
use crate::demo::demo_data;
use crate::error::AppResult;
use crate::models::*;
use crate::repositories::{AttendanceRepository, MemberRepository};

#[derive(Clone)]
pub struct AttendanceService {
    attendance: Arc<dyn AttendanceRepository>,
    members: Arc<dyn MemberRepository>,
}

impl AttendanceService {
    pub fn new(
        attendance: Arc<dyn AttendanceRepository>,
        members: Arc<dyn MemberRepository>,
    ) -> Self {
        Self {
            attendance,
            members,
        }
    }

    /// The check-in sheet: the full member roll joined with whatever was
    /// saved for the (date, service) pair. Unsaved members read as absent.
    pub async fn sheet(&self, query: &AttendanceQuery) -> AppResult<Loaded<SheetRow>> {
        let service_date = parse_date(&query.service_date, "service_date")?;
        require(&query.service_type, "service_type")?;

        let members = load_or_seed(self.members.list().await, "members", || {
            demo_data().members
        })?;
        // An unreachable store also means no saved records; the sheet then
        // shows the seeded roll with everyone absent.
        let records = load_or_seed(
            self.attendance
                .list_for(service_date, query.service_type.trim())
                .await,
            "attendance",
            Vec::new,
        )?;

        let sheet =
            AttendanceSheet::from_records(service_date, query.service_type.trim(), &records.items);
        let check_ins: HashMap<Uuid, Option<String>> = records
            .items
            .iter()
            .map(|r| (r.member_id, r.check_in_time.clone()))
            .collect();

        Ok(Loaded {
            items: members
                .items
                .iter()
                .map(|m| SheetRow {
                    member_id: m.id,
                    member_name: m.name.clone(),
                    department: m.department.clone(),
                    present: sheet.is_present(m.id),
                    check_in_time: check_ins.get(&m.id).cloned().flatten(),
                })
                .collect(),
            notice: members.notice.or(records.notice),
        })
    }

    /// Full overwrite of the day: only rows marked present are persisted, so
    /// reading the sheet back defaults everyone else to absent.
    pub async fn save(&self, request: SaveAttendanceRequest) -> AppResult<Vec<AttendanceRecord>> {
        let service_date = parse_date(&request.service_date, "service_date")?;
        require(&request.service_type, "service_type")?;
        let service_type = request.service_type.trim().to_string();

        let records: Vec<NewAttendanceRecord> = request
            .entries
            .into_iter()
            .filter(|e| e.present)
            .map(|e| NewAttendanceRecord {
                member_id: e.member_id,
                service_date,
                service_type: service_type.clone(),
                present: true,
                check_in_time: e.check_in_time,
            })
            .collect();

        self.attendance
            .replace_day(service_date, &service_type, records)
            .await
    }

    pub async fn records(
        &self,
        query: &AttendanceRecordsQuery,
    ) -> AppResult<Loaded<AttendanceRecord>> {
        let from = query
            .from
            .as_deref()
            .map(|d| parse_date(d, "from"))
            .transpose()?;
        let to = query
            .to
            .as_deref()
            .map(|d| parse_date(d, "to"))
            .transpose()?;

        let mut loaded = load_or_seed(self.attendance.list().await, "attendance", || {
            demo_data().attendance
        })?;

        loaded.items.retain(|r| {
            from.is_none_or(|from| r.service_date >= from)
                && to.is_none_or(|to| r.service_date <= to)
                && query
                    .service_type
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .is_none_or(|s| r.service_type.eq_ignore_ascii_case(s))
        });
        Ok(loaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Repositories;

    fn demo_service() -> (AttendanceService, Repositories) {
        let repos = Repositories::demo();
        (
            AttendanceService::new(repos.attendance.clone(), repos.members.clone()),
            repos,
        )
    }

    fn save_request(date: &str, entries: Vec<SheetEntry>) -> SaveAttendanceRequest {
        SaveAttendanceRequest {
            service_date: date.to_string(),
            service_type: "Sunday First Service".to_string(),
            entries,
        }
    }

    #[tokio::test]
    async fn test_sheet_covers_whole_roll() {
        let (service, repos) = demo_service();
        let rows = service
            .sheet(&AttendanceQuery {
                service_date: "2030-01-06".to_string(),
                service_type: "Sunday First Service".to_string(),
            })
            .await
            .unwrap()
            .items;

        let roll = repos.members.list().await.unwrap();
        assert_eq!(rows.len(), roll.len());
        assert!(rows.iter().all(|r| !r.present));
    }

    #[tokio::test]
    async fn test_save_then_sheet_round_trip() {
        let (service, repos) = demo_service();
        let roll = repos.members.list().await.unwrap();

        let entries = vec![
            SheetEntry {
                member_id: roll[0].id,
                present: true,
                check_in_time: Some("09:01 AM".to_string()),
            },
            SheetEntry {
                member_id: roll[1].id,
                present: false,
                check_in_time: None,
            },
        ];
        let saved = service.save(save_request("2030-01-06", entries)).await.unwrap();
        // absent entries are dropped, not stored as false rows
        assert_eq!(saved.len(), 1);

        let rows = service
            .sheet(&AttendanceQuery {
                service_date: "2030-01-06".to_string(),
                service_type: "Sunday First Service".to_string(),
            })
            .await
            .unwrap()
            .items;
        let first = rows.iter().find(|r| r.member_id == roll[0].id).unwrap();
        let second = rows.iter().find(|r| r.member_id == roll[1].id).unwrap();

        assert!(first.present);
        assert_eq!(first.check_in_time.as_deref(), Some("09:01 AM"));
        assert!(!second.present);
    }

    #[tokio::test]
    async fn test_save_twice_is_idempotent() {
        let (service, repos) = demo_service();
        let roll = repos.members.list().await.unwrap();
        let entries = vec![SheetEntry {
            member_id: roll[0].id,
            present: true,
            check_in_time: None,
        }];

        service
            .save(save_request("2030-01-06", entries.clone()))
            .await
            .unwrap();
        service
            .save(save_request("2030-01-06", entries))
            .await
            .unwrap();

        let rows = service
            .sheet(&AttendanceQuery {
                service_date: "2030-01-06".to_string(),
                service_type: "Sunday First Service".to_string(),
            })
            .await
            .unwrap()
            .items;
        assert_eq!(rows.iter().filter(|r| r.present).count(), 1);
    }

    #[tokio::test]
    async fn test_records_range_filter() {
        let (service, _repos) = demo_service();
        let all = service
            .records(&AttendanceRecordsQuery::default())
            .await
            .unwrap()
            .items;
        assert!(!all.is_empty());

        let none = service
            .records(&AttendanceRecordsQuery {
                from: Some("2000-01-01".to_string()),
                to: Some("2000-12-31".to_string()),
                service_type: None,
            })
            .await
            .unwrap()
            .items;
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_bad_date_is_rejected() {
        let (service, _repos) = demo_service();
        let result = service
            .sheet(&AttendanceQuery {
                service_date: "next sunday".to_string(),
                service_type: "Sunday First Service".to_string(),
            })
            .await;
        assert!(result.is_err());
    }
}
