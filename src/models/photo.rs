use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// One entry of the photo directory: a member and their photo reference.
/// The photo is an ownership-free string (URL or data URI), never a managed
/// resource handle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PhotoEntry {
    pub member_id: Uuid,
    pub member_name: String,
    pub department: String,
    pub photo_url: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SetPhotoRequest {
    /// URL or `data:image/...;base64,…` capture from the console.
    pub photo: String,
}
