use std::sync::Arc;

use uuid::Uuid;

use super::{Loaded, load_or_seed, parse_date, require};
use crate::demo::demo_data;
use crate::documents::export;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repositories::MemberRepository;

#[derive(Clone)]
pub struct MemberService {
    members: Arc<dyn MemberRepository>,
}

impl MemberService {
    pub fn new(members: Arc<dyn MemberRepository>) -> Self {
        Self { members }
    }

    pub async fn list(&self, filter: &MemberFilter) -> AppResult<Loaded<Member>> {
        let loaded = load_or_seed(self.members.list().await, "members", || {
            demo_data().members
        })?;
        Ok(Loaded {
            items: filter.apply(&loaded.items),
            notice: loaded.notice,
        })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Member> {
        self.members.get(id).await
    }

    pub async fn create(&self, request: CreateMemberRequest) -> AppResult<Member> {
        require(&request.name, "name")?;
        require(&request.phone, "phone")?;
        require(&request.department, "department")?;
        let join_date = parse_date(&request.join_date, "join_date")?;

        let input = NewMember {
            name: request.name.trim().to_string(),
            phone: request.phone.trim().to_string(),
            email: request.email,
            address: request.address,
            department: request.department.trim().to_string(),
            join_date,
            status: request.status.unwrap_or(MemberStatus::Active),
            photo_url: request.photo_url,
            notes: request.notes,
        };
        self.members.create(input).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateMemberRequest) -> AppResult<Member> {
        if let Some(name) = &request.name {
            require(name, "name")?;
        }
        if let Some(phone) = &request.phone {
            require(phone, "phone")?;
        }
        if let Some(department) = &request.department {
            require(department, "department")?;
        }

        let patch = MemberPatch {
            name: request.name,
            phone: request.phone,
            email: request.email,
            address: request.address,
            department: request.department,
            join_date: request
                .join_date
                .as_deref()
                .map(|d| parse_date(d, "join_date"))
                .transpose()?,
            status: request.status,
            photo_url: request.photo_url.map(Some),
            notes: request.notes,
        };
        if patch.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }
        self.members.update(id, patch).await
    }

    /// Destructive; refused unless the caller has confirmed.
    pub async fn delete(&self, id: Uuid, confirmed: bool) -> AppResult<()> {
        if !confirmed {
            return Err(AppError::ValidationError(
                "Member deletion requires confirmation".to_string(),
            ));
        }
        self.members.delete(id).await
    }

    pub async fn export_csv(&self, filter: &MemberFilter) -> AppResult<String> {
        let loaded = self.list(filter).await?;
        Ok(export::members_csv(&loaded.items))
    }

    pub async fn set_photo(&self, id: Uuid, photo: String) -> AppResult<Member> {
        require(&photo, "photo")?;
        let patch = MemberPatch {
            photo_url: Some(Some(photo)),
            ..Default::default()
        };
        self.members.update(id, patch).await
    }

    pub async fn clear_photo(&self, id: Uuid) -> AppResult<Member> {
        let patch = MemberPatch {
            photo_url: Some(None),
            ..Default::default()
        };
        self.members.update(id, patch).await
    }
}
