use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Officiant details printed on certificates and receipts. Persisted through
/// the local state storage port, one key per field.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PastorProfile {
    pub pastor_name: String,
    pub pastor_title: String,
    /// Signature image as a data URI, when one has been uploaded.
    pub signature_image: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Rev. Daniel Kwarteng")]
    pub pastor_name: Option<String>,
    #[schema(example = "Senior Pastor")]
    pub pastor_title: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignatureRequest {
    /// `data:image/png;base64,…`
    pub data_uri: String,
}
