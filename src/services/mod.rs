pub mod attendance_service;
pub mod auth_service;
pub mod certificate_service;
pub mod dashboard_service;
pub mod donation_service;
pub mod event_service;
pub mod member_service;
pub mod photo_service;
pub mod profile_service;
pub mod visitor_service;

pub use attendance_service::*;
pub use auth_service::*;
pub use certificate_service::*;
pub use dashboard_service::*;
pub use donation_service::*;
pub use event_service::*;
pub use member_service::*;
pub use photo_service::*;
pub use profile_service::*;
pub use visitor_service::*;

use chrono::NaiveDate;
use log::warn;

use crate::error::{AppError, AppResult};

/// Notice attached to list responses that were served from seed data.
pub const STORE_FALLBACK_NOTICE: &str = "Serving demo data; the remote store is unreachable";

/// A list load together with where it was served from. `notice` is set only
/// when the store failed and the seed list was substituted, so the console
/// can tell the operator what it is looking at.
#[derive(Debug)]
pub struct Loaded<T> {
    pub items: Vec<T>,
    pub notice: Option<&'static str>,
}

/// List reads never fail the console on a transient store error: the seed
/// list is substituted and the error logged. Anything actionable (missing
/// table, auth, validation) still propagates.
pub(crate) fn load_or_seed<T>(
    result: AppResult<Vec<T>>,
    what: &str,
    seed: impl FnOnce() -> Vec<T>,
) -> AppResult<Loaded<T>> {
    match result {
        Ok(items) => Ok(Loaded {
            items,
            notice: None,
        }),
        Err(e) if e.is_transient_store_error() => {
            warn!("Serving demo {} after store error: {}", what, e);
            Ok(Loaded {
                items: seed(),
                notice: Some(STORE_FALLBACK_NOTICE),
            })
        }
        Err(e) => Err(e),
    }
}

/// `load_or_seed` for callers that aggregate and do not report serve source.
pub(crate) fn seed_on_transient<T>(
    result: AppResult<Vec<T>>,
    what: &str,
    seed: impl FnOnce() -> Vec<T>,
) -> AppResult<Vec<T>> {
    load_or_seed(result, what, seed).map(|loaded| loaded.items)
}

pub(crate) fn parse_date(value: &str, field: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::ValidationError(format!("{field} must be a YYYY-MM-DD date")))
}

/// Presence-only check for required form fields.
pub(crate) fn require(value: &str, field: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::ValidationError(format!("{field} is required")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_or_seed_substitutes_only_for_store_errors() {
        let ok: AppResult<Vec<i32>> = Ok(vec![1]);
        let loaded = load_or_seed(ok, "x", || vec![9]).unwrap();
        assert_eq!(loaded.items, vec![1]);
        assert_eq!(loaded.notice, None);

        let transient: AppResult<Vec<i32>> = Err(AppError::StoreError("down".to_string()));
        let loaded = load_or_seed(transient, "x", || vec![9]).unwrap();
        assert_eq!(loaded.items, vec![9]);
        assert_eq!(loaded.notice, Some(STORE_FALLBACK_NOTICE));

        let missing: AppResult<Vec<i32>> = Err(AppError::TableMissing {
            table: "donations".to_string(),
        });
        assert!(load_or_seed(missing, "x", || vec![9]).is_err());
    }

    #[test]
    fn test_seed_on_transient_drops_the_notice() {
        let transient: AppResult<Vec<i32>> = Err(AppError::StoreError("down".to_string()));
        assert_eq!(seed_on_transient(transient, "x", || vec![9]).unwrap(), vec![9]);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-06-01", "visit_date").unwrap(),
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
        );
        assert!(parse_date("06/01/2025", "visit_date").is_err());
        assert!(parse_date("", "visit_date").is_err());
    }

    #[test]
    fn test_require() {
        assert!(require("Ama", "name").is_ok());
        assert!(require("   ", "name").is_err());
    }
}
