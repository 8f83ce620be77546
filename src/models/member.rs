use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MemberStatus::Active => write!(f, "active"),
            MemberStatus::Inactive => write!(f, "inactive"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub department: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert shape: no id, no created_at; the backing store (or the in-memory
/// repository) assigns both.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewMember {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub department: String,
    pub join_date: NaiveDate,
    pub status: MemberStatus,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

/// Patch shape: absent fields stay untouched. Serialized for the remote
/// store's targeted update, applied in place by the in-memory repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MemberPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
    /// `Some(None)` clears the photo (serialized as an explicit null).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.department.is_none()
            && self.join_date.is_none()
            && self.status.is_none()
            && self.photo_url.is_none()
            && self.notes.is_none()
    }

    pub fn apply(&self, member: &mut Member) {
        if let Some(v) = &self.name {
            member.name = v.clone();
        }
        if let Some(v) = &self.phone {
            member.phone = v.clone();
        }
        if let Some(v) = &self.email {
            member.email = Some(v.clone());
        }
        if let Some(v) = &self.address {
            member.address = Some(v.clone());
        }
        if let Some(v) = &self.department {
            member.department = v.clone();
        }
        if let Some(v) = self.join_date {
            member.join_date = v;
        }
        if let Some(v) = self.status {
            member.status = v;
        }
        if let Some(v) = &self.photo_url {
            member.photo_url = v.clone();
        }
        if let Some(v) = &self.notes {
            member.notes = Some(v.clone());
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMemberRequest {
    #[schema(example = "Sarah Mensah")]
    pub name: String,
    #[schema(example = "+15551230001")]
    pub phone: String,
    #[schema(example = "sarah@example.com")]
    pub email: Option<String>,
    pub address: Option<String>,
    #[schema(example = "Choir")]
    pub department: String,
    #[schema(example = "2024-03-17")]
    pub join_date: String, // YYYY-MM-DD
    pub status: Option<MemberStatus>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub department: Option<String>,
    #[schema(example = "2024-03-17")]
    pub join_date: Option<String>,
    pub status: Option<MemberStatus>,
    pub photo_url: Option<String>,
    pub notes: Option<String>,
}

/// Client-side list filtering: every active predicate must hold (conjunctive),
/// so the filtered result is always a subset of the input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct MemberFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<MemberStatus>,
}

impl MemberFilter {
    pub fn matches(&self, member: &Member) -> bool {
        if let Some(term) = active(&self.search) {
            let term = term.to_lowercase();
            let hit = member.name.to_lowercase().contains(&term)
                || member.phone.to_lowercase().contains(&term)
                || member
                    .email
                    .as_deref()
                    .map(|e| e.to_lowercase().contains(&term))
                    .unwrap_or(false);
            if !hit {
                return false;
            }
        }
        if let Some(dept) = active(&self.department)
            && !member.department.eq_ignore_ascii_case(dept)
        {
            return false;
        }
        if let Some(status) = self.status
            && member.status != status
        {
            return false;
        }
        true
    }

    pub fn apply(&self, members: &[Member]) -> Vec<Member> {
        members.iter().filter(|m| self.matches(m)).cloned().collect()
    }
}

/// Empty and whitespace-only filter values count as "not set"; the console
/// sends empty strings for cleared inputs.
pub(crate) fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
