use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(
        "The '{table}' table does not exist in the configured data store. \
         Create it in the store's SQL console, or clear STORE_URL / STORE_SERVICE_KEY \
         to continue in demo mode."
    )]
    TableMissing { table: String },

    #[error("Data store error: {0}")]
    StoreError(String),

    #[error("Local state storage error: {0}")]
    StorageError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

impl AppError {
    /// Transient store failures are the ones list loads may absorb by
    /// serving seed data. A missing table is not transient: it needs the
    /// operator to act, so it is surfaced with its remediation text.
    pub fn is_transient_store_error(&self) -> bool {
        matches!(self, AppError::StoreError(_) | AppError::ReqwestError(_))
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code, message) = match self {
            AppError::ValidationError(msg) => {
                log::warn!("Validation error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    msg.clone(),
                )
            }
            AppError::AuthError(msg) => {
                log::warn!("Authentication error: {msg}");
                (
                    actix_web::http::StatusCode::UNAUTHORIZED,
                    "AUTH_ERROR",
                    msg.clone(),
                )
            }
            AppError::PermissionDenied => {
                log::warn!("Permission denied");
                (
                    actix_web::http::StatusCode::FORBIDDEN,
                    "FORBIDDEN",
                    "Permission denied".to_string(),
                )
            }
            AppError::NotFound(msg) => (
                actix_web::http::StatusCode::NOT_FOUND,
                "NOT_FOUND",
                msg.clone(),
            ),
            AppError::TableMissing { .. } => {
                log::error!("{self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "TABLE_MISSING",
                    self.to_string(),
                )
            }
            AppError::StoreError(msg) => {
                log::error!("Data store error: {msg}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "STORE_ERROR",
                    "Data store request failed".to_string(),
                )
            }
            AppError::ReqwestError(err) => {
                log::error!("Data store unreachable: {err}");
                (
                    actix_web::http::StatusCode::BAD_GATEWAY,
                    "STORE_ERROR",
                    "Data store unreachable".to_string(),
                )
            }
            AppError::StorageError(msg) => {
                log::error!("Local state storage error: {msg}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Local state storage error".to_string(),
                )
            }
            _ => {
                log::error!("Internal error: {self}");
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        HttpResponse::build(status_code).json(json!({
            "success": false,
            "error": {
                "code": error_code,
                "message": message
            }
        }))
    }
}
