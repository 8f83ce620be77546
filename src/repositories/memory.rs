//! In-memory repositories backing demo mode. Ids are generated here and only
//! here; new records go to the head of the list so the console shows them
//! first without a reload.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AttendanceRepository, DonationRepository, MemberRepository, VisitorRepository};
use crate::error::{AppError, AppResult};
use crate::models::{
    AttendanceRecord, Donation, DonationPatch, Member, MemberPatch, NewAttendanceRecord,
    NewDonation, NewMember, NewVisitor, Visitor, VisitorPatch,
};

pub struct MemoryMemberRepository {
    members: RwLock<Vec<Member>>,
}

impl MemoryMemberRepository {
    pub fn new(seed: Vec<Member>) -> Self {
        Self {
            members: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl MemberRepository for MemoryMemberRepository {
    async fn list(&self) -> AppResult<Vec<Member>> {
        Ok(self.members.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> AppResult<Member> {
        self.members
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No member with id {id}")))
    }

    async fn create(&self, input: NewMember) -> AppResult<Member> {
        let member = Member {
            id: Uuid::new_v4(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            department: input.department,
            join_date: input.join_date,
            status: input.status,
            photo_url: input.photo_url,
            notes: input.notes,
            created_at: Some(Utc::now()),
        };
        self.members.write().await.insert(0, member.clone());
        Ok(member)
    }

    async fn update(&self, id: Uuid, patch: MemberPatch) -> AppResult<Member> {
        let mut members = self.members.write().await;
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No member with id {id}")))?;
        patch.apply(member);
        Ok(member.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.members.write().await.retain(|m| m.id != id);
        Ok(())
    }
}

pub struct MemoryVisitorRepository {
    visitors: RwLock<Vec<Visitor>>,
}

impl MemoryVisitorRepository {
    pub fn new(seed: Vec<Visitor>) -> Self {
        Self {
            visitors: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl VisitorRepository for MemoryVisitorRepository {
    async fn list(&self) -> AppResult<Vec<Visitor>> {
        Ok(self.visitors.read().await.clone())
    }

    async fn create(&self, input: NewVisitor) -> AppResult<Visitor> {
        let visitor = Visitor {
            id: Uuid::new_v4(),
            name: input.name,
            phone: input.phone,
            email: input.email,
            address: input.address,
            visit_date: input.visit_date,
            visit_time: input.visit_time,
            service: input.service,
            first_time: input.first_time,
            follow_up_needed: input.follow_up_needed,
            notes: input.notes,
            created_at: Some(Utc::now()),
        };
        self.visitors.write().await.insert(0, visitor.clone());
        Ok(visitor)
    }

    async fn update(&self, id: Uuid, patch: VisitorPatch) -> AppResult<Visitor> {
        let mut visitors = self.visitors.write().await;
        let visitor = visitors
            .iter_mut()
            .find(|v| v.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No visitor with id {id}")))?;
        patch.apply(visitor);
        Ok(visitor.clone())
    }
}

pub struct MemoryAttendanceRepository {
    records: RwLock<Vec<AttendanceRecord>>,
}

impl MemoryAttendanceRepository {
    pub fn new(seed: Vec<AttendanceRecord>) -> Self {
        Self {
            records: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl AttendanceRepository for MemoryAttendanceRepository {
    async fn list(&self) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self.records.read().await.clone())
    }

    async fn list_for(
        &self,
        service_date: NaiveDate,
        service_type: &str,
    ) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|r| r.service_date == service_date && r.service_type == service_type)
            .cloned()
            .collect())
    }

    async fn replace_day(
        &self,
        service_date: NaiveDate,
        service_type: &str,
        records: Vec<NewAttendanceRecord>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let mut stored = self.records.write().await;
        stored.retain(|r| !(r.service_date == service_date && r.service_type == service_type));

        let mut saved = Vec::with_capacity(records.len());
        for input in records {
            let record = AttendanceRecord {
                id: Uuid::new_v4(),
                member_id: input.member_id,
                service_date: input.service_date,
                service_type: input.service_type,
                present: input.present,
                check_in_time: input.check_in_time,
                created_at: Some(Utc::now()),
            };
            stored.push(record.clone());
            saved.push(record);
        }
        Ok(saved)
    }
}

pub struct MemoryDonationRepository {
    donations: RwLock<Vec<Donation>>,
}

impl MemoryDonationRepository {
    pub fn new(seed: Vec<Donation>) -> Self {
        Self {
            donations: RwLock::new(seed),
        }
    }
}

#[async_trait]
impl DonationRepository for MemoryDonationRepository {
    async fn list(&self) -> AppResult<Vec<Donation>> {
        Ok(self.donations.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> AppResult<Donation> {
        self.donations
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("No donation with id {id}")))
    }

    async fn create(&self, input: NewDonation) -> AppResult<Donation> {
        let donation = Donation {
            id: Uuid::new_v4(),
            member_id: input.member_id,
            donor_name: input.donor_name,
            amount_cents: input.amount_cents,
            donation_type: input.donation_type,
            payment_method: input.payment_method,
            donation_date: input.donation_date,
            receipt_number: input.receipt_number,
            notes: input.notes,
            created_at: Some(Utc::now()),
        };
        self.donations.write().await.insert(0, donation.clone());
        Ok(donation)
    }

    async fn update(&self, id: Uuid, patch: DonationPatch) -> AppResult<Donation> {
        let mut donations = self.donations.write().await;
        let donation = donations
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| AppError::NotFound(format!("No donation with id {id}")))?;
        patch.apply(donation);
        Ok(donation.clone())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.donations.write().await.retain(|d| d.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberStatus;
    use std::collections::HashSet;

    fn new_member(name: &str) -> NewMember {
        NewMember {
            name: name.to_string(),
            phone: "+233 24 555 0000".to_string(),
            email: None,
            address: None,
            department: "Choir".to_string(),
            join_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
            status: MemberStatus::Active,
            photo_url: None,
            notes: None,
        }
    }

    fn entry(member_id: Uuid, date: NaiveDate) -> NewAttendanceRecord {
        NewAttendanceRecord {
            member_id,
            service_date: date,
            service_type: "Sunday Service".to_string(),
            present: true,
            check_in_time: None,
        }
    }

    #[tokio::test]
    async fn test_create_prepends() {
        let repo = MemoryMemberRepository::new(Vec::new());
        repo.create(new_member("First")).await.unwrap();
        let second = repo.create(new_member("Second")).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[0].name, "Second");
    }

    #[tokio::test]
    async fn test_update_patches_in_place() {
        let repo = MemoryMemberRepository::new(Vec::new());
        let created = repo.create(new_member("Ama Serwaa")).await.unwrap();

        let updated = repo
            .update(
                created.id,
                MemberPatch {
                    department: Some("Media".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.department, "Media");
        assert_eq!(updated.name, "Ama Serwaa");
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let repo = MemoryMemberRepository::new(Vec::new());
        let result = repo.update(Uuid::new_v4(), MemberPatch::default()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_removes_and_tolerates_absence() {
        let repo = MemoryMemberRepository::new(Vec::new());
        let created = repo.create(new_member("Ama Serwaa")).await.unwrap();

        repo.delete(created.id).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_replace_day_is_idempotent() {
        let repo = MemoryAttendanceRepository::new(Vec::new());
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());

        let entries = vec![entry(a, date), entry(b, date)];
        repo.replace_day(date, "Sunday Service", entries.clone())
            .await
            .unwrap();
        repo.replace_day(date, "Sunday Service", entries)
            .await
            .unwrap();

        let stored = repo.list_for(date, "Sunday Service").await.unwrap();
        assert_eq!(stored.len(), 2);
        let ids: HashSet<Uuid> = stored.iter().map(|r| r.member_id).collect();
        assert_eq!(ids, HashSet::from([a, b]));
    }

    #[tokio::test]
    async fn test_replace_day_leaves_other_days_alone() {
        let repo = MemoryAttendanceRepository::new(Vec::new());
        let first = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let second = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();
        let member = Uuid::new_v4();

        repo.replace_day(first, "Sunday Service", vec![entry(member, first)])
            .await
            .unwrap();
        repo.replace_day(second, "Sunday Service", vec![entry(member, second)])
            .await
            .unwrap();
        repo.replace_day(first, "Sunday Service", Vec::new())
            .await
            .unwrap();

        assert!(repo.list_for(first, "Sunday Service").await.unwrap().is_empty());
        assert_eq!(repo.list_for(second, "Sunday Service").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_donation_create_prepends() {
        let repo = MemoryDonationRepository::new(Vec::new());
        let input = NewDonation {
            member_id: None,
            donor_name: "Anonymous".to_string(),
            amount_cents: 5_000,
            donation_type: "Offering".to_string(),
            payment_method: "Cash".to_string(),
            donation_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            receipt_number: "RCP-000001".to_string(),
            notes: None,
        };
        let created = repo.create(input).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].receipt_number, "RCP-000001");
    }
}
