use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Where entity data is being served from. Selected once at startup and
/// reported by the status endpoint so the console can show its demo banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ServeMode {
    Remote,
    Demo,
}

impl std::fmt::Display for ServeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServeMode::Remote => write!(f, "remote"),
            ServeMode::Demo => write!(f, "demo"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    pub mode: ServeMode,
    pub church_name: String,
    pub version: String,
}

/// Destructive endpoints require `?confirm=true`; anything else is treated
/// as an accidental call and rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ConfirmQuery {
    pub confirm: Option<bool>,
}

impl ConfirmQuery {
    pub fn confirmed(&self) -> bool {
        self.confirm.unwrap_or(false)
    }
}
