//! Remote-backed repositories. Each call is one request against the table
//! API; id and created_at assignment is always the store's.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::{AttendanceRepository, DonationRepository, MemberRepository, VisitorRepository};
use crate::error::{AppError, AppResult};
use crate::models::{
    AttendanceRecord, Donation, DonationPatch, Member, MemberPatch, NewAttendanceRecord,
    NewDonation, NewMember, NewVisitor, Visitor, VisitorPatch,
};
use crate::store::{Query, TableClient};

const MEMBERS_TABLE: &str = "members";
const VISITORS_TABLE: &str = "visitors";
const ATTENDANCE_TABLE: &str = "attendance_records";
const DONATIONS_TABLE: &str = "donations";

fn single<T>(table: &str, rows: Vec<T>) -> AppResult<T> {
    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::StoreError(format!("{table}: insert returned no rows")))
}

pub struct RemoteMemberRepository {
    client: TableClient,
}

impl RemoteMemberRepository {
    pub fn new(client: TableClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MemberRepository for RemoteMemberRepository {
    async fn list(&self) -> AppResult<Vec<Member>> {
        self.client
            .select(MEMBERS_TABLE, &Query::new().order_asc("name"))
            .await
    }

    async fn get(&self, id: Uuid) -> AppResult<Member> {
        let rows: Vec<Member> = self
            .client
            .select(MEMBERS_TABLE, &Query::new().eq("id", id))
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("No member with id {id}")))
    }

    async fn create(&self, input: NewMember) -> AppResult<Member> {
        let rows = self
            .client
            .insert(MEMBERS_TABLE, std::slice::from_ref(&input))
            .await?;
        single(MEMBERS_TABLE, rows)
    }

    async fn update(&self, id: Uuid, patch: MemberPatch) -> AppResult<Member> {
        self.client.update(MEMBERS_TABLE, id, &patch).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.client
            .delete(MEMBERS_TABLE, &Query::new().eq("id", id))
            .await
    }
}

pub struct RemoteVisitorRepository {
    client: TableClient,
}

impl RemoteVisitorRepository {
    pub fn new(client: TableClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl VisitorRepository for RemoteVisitorRepository {
    async fn list(&self) -> AppResult<Vec<Visitor>> {
        self.client
            .select(VISITORS_TABLE, &Query::new().order_desc("visit_date"))
            .await
    }

    async fn create(&self, input: NewVisitor) -> AppResult<Visitor> {
        let rows = self
            .client
            .insert(VISITORS_TABLE, std::slice::from_ref(&input))
            .await?;
        single(VISITORS_TABLE, rows)
    }

    async fn update(&self, id: Uuid, patch: VisitorPatch) -> AppResult<Visitor> {
        self.client.update(VISITORS_TABLE, id, &patch).await
    }
}

pub struct RemoteAttendanceRepository {
    client: TableClient,
}

impl RemoteAttendanceRepository {
    pub fn new(client: TableClient) -> Self {
        Self { client }
    }

    fn day_query(service_date: NaiveDate, service_type: &str) -> Query {
        Query::new()
            .eq("service_date", service_date)
            .eq("service_type", service_type)
    }
}

#[async_trait]
impl AttendanceRepository for RemoteAttendanceRepository {
    async fn list(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.client
            .select(ATTENDANCE_TABLE, &Query::new().order_desc("service_date"))
            .await
    }

    async fn list_for(
        &self,
        service_date: NaiveDate,
        service_type: &str,
    ) -> AppResult<Vec<AttendanceRecord>> {
        self.client
            .select(ATTENDANCE_TABLE, &Self::day_query(service_date, service_type))
            .await
    }

    async fn replace_day(
        &self,
        service_date: NaiveDate,
        service_type: &str,
        records: Vec<NewAttendanceRecord>,
    ) -> AppResult<Vec<AttendanceRecord>> {
        self.client
            .delete(ATTENDANCE_TABLE, &Self::day_query(service_date, service_type))
            .await?;
        if records.is_empty() {
            return Ok(Vec::new());
        }
        self.client.insert(ATTENDANCE_TABLE, &records).await
    }
}

pub struct RemoteDonationRepository {
    client: TableClient,
}

impl RemoteDonationRepository {
    pub fn new(client: TableClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DonationRepository for RemoteDonationRepository {
    async fn list(&self) -> AppResult<Vec<Donation>> {
        self.client
            .select(DONATIONS_TABLE, &Query::new().order_desc("donation_date"))
            .await
    }

    async fn get(&self, id: Uuid) -> AppResult<Donation> {
        let rows: Vec<Donation> = self
            .client
            .select(DONATIONS_TABLE, &Query::new().eq("id", id))
            .await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound(format!("No donation with id {id}")))
    }

    async fn create(&self, input: NewDonation) -> AppResult<Donation> {
        let rows = self
            .client
            .insert(DONATIONS_TABLE, std::slice::from_ref(&input))
            .await?;
        single(DONATIONS_TABLE, rows)
    }

    async fn update(&self, id: Uuid, patch: DonationPatch) -> AppResult<Donation> {
        self.client.update(DONATIONS_TABLE, id, &patch).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.client
            .delete(DONATIONS_TABLE, &Query::new().eq("id", id))
            .await
    }
}
