//! One repository interface per entity with two implementations: remote-backed
//! and in-memory. Feature services depend only on the interfaces; which side
//! serves them is decided once at startup from the store configuration.

pub mod memory;
pub mod remote;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::StoreConfig;
use crate::demo::demo_data;
use crate::error::AppResult;
use crate::models::{
    AttendanceRecord, Donation, DonationPatch, Member, MemberPatch, NewAttendanceRecord,
    NewDonation, NewMember, NewVisitor, ServeMode, Visitor, VisitorPatch,
};
use crate::store::{self, TableClient};

#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Member>>;
    async fn get(&self, id: Uuid) -> AppResult<Member>;
    async fn create(&self, input: NewMember) -> AppResult<Member>;
    async fn update(&self, id: Uuid, patch: MemberPatch) -> AppResult<Member>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

#[async_trait]
pub trait VisitorRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Visitor>>;
    async fn create(&self, input: NewVisitor) -> AppResult<Visitor>;
    async fn update(&self, id: Uuid, patch: VisitorPatch) -> AppResult<Visitor>;
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<AttendanceRecord>>;
    async fn list_for(
        &self,
        service_date: NaiveDate,
        service_type: &str,
    ) -> AppResult<Vec<AttendanceRecord>>;

    /// Full overwrite of one (date, service) pair: every stored record for the
    /// pair is dropped and the given records inserted in their place.
    async fn replace_day(
        &self,
        service_date: NaiveDate,
        service_type: &str,
        records: Vec<NewAttendanceRecord>,
    ) -> AppResult<Vec<AttendanceRecord>>;
}

#[async_trait]
pub trait DonationRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Donation>>;
    async fn get(&self, id: Uuid) -> AppResult<Donation>;
    async fn create(&self, input: NewDonation) -> AppResult<Donation>;
    async fn update(&self, id: Uuid, patch: DonationPatch) -> AppResult<Donation>;
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// The repository set the application runs on, selected once at startup.
#[derive(Clone)]
pub struct Repositories {
    pub mode: ServeMode,
    pub members: Arc<dyn MemberRepository>,
    pub visitors: Arc<dyn VisitorRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub donations: Arc<dyn DonationRepository>,
}

impl Repositories {
    pub fn from_config(config: &StoreConfig) -> Self {
        match store::remote_handle(config) {
            Some(client) => Self::remote(client),
            None => Self::demo(),
        }
    }

    pub fn remote(client: TableClient) -> Self {
        Self {
            mode: ServeMode::Remote,
            members: Arc::new(remote::RemoteMemberRepository::new(client.clone())),
            visitors: Arc::new(remote::RemoteVisitorRepository::new(client.clone())),
            attendance: Arc::new(remote::RemoteAttendanceRepository::new(client.clone())),
            donations: Arc::new(remote::RemoteDonationRepository::new(client)),
        }
    }

    /// Seeds every entity from one dataset so weak references line up across
    /// repositories.
    pub fn demo() -> Self {
        let seed = demo_data();
        Self {
            mode: ServeMode::Demo,
            members: Arc::new(memory::MemoryMemberRepository::new(seed.members)),
            visitors: Arc::new(memory::MemoryVisitorRepository::new(seed.visitors)),
            attendance: Arc::new(memory::MemoryAttendanceRepository::new(seed.attendance)),
            donations: Arc::new(memory::MemoryDonationRepository::new(seed.donations)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    #[test]
    fn test_mode_follows_store_config() {
        let unconfigured = Repositories::from_config(&StoreConfig {
            url: String::new(),
            service_key: String::new(),
        });
        assert_eq!(unconfigured.mode, ServeMode::Demo);

        let configured = Repositories::from_config(&StoreConfig {
            url: "https://x.supabase.co".to_string(),
            service_key: "key".to_string(),
        });
        assert_eq!(configured.mode, ServeMode::Remote);
    }

    #[tokio::test]
    async fn test_demo_set_shares_one_seed() {
        let repos = Repositories::demo();
        let members = repos.members.list().await.unwrap();
        let attendance = repos.attendance.list().await.unwrap();

        for record in &attendance {
            assert!(members.iter().any(|m| m.id == record.member_id));
        }
    }
}
