use std::sync::Arc;

use super::require;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::storage::{StateStorage, keys};

/// Pastor profile and signature, kept in the local state storage rather than
/// the data store. One key per field.
#[derive(Clone)]
pub struct ProfileService {
    storage: Arc<dyn StateStorage>,
}

impl ProfileService {
    pub fn new(storage: Arc<dyn StateStorage>) -> Self {
        Self { storage }
    }

    pub fn get(&self) -> PastorProfile {
        PastorProfile {
            pastor_name: self.storage.get(keys::PASTOR_NAME).unwrap_or_default(),
            pastor_title: self
                .storage
                .get(keys::PASTOR_TITLE)
                .unwrap_or_else(|| "Senior Pastor".to_string()),
            signature_image: self.storage.get(keys::SIGNATURE_IMAGE),
        }
    }

    pub fn update(&self, request: UpdateProfileRequest) -> AppResult<PastorProfile> {
        if request.pastor_name.is_none() && request.pastor_title.is_none() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }
        if let Some(name) = &request.pastor_name {
            require(name, "pastor_name")?;
            self.storage.set(keys::PASTOR_NAME, name.trim())?;
        }
        if let Some(title) = &request.pastor_title {
            require(title, "pastor_title")?;
            self.storage.set(keys::PASTOR_TITLE, title.trim())?;
        }
        Ok(self.get())
    }

    pub fn set_signature(&self, data_uri: &str) -> AppResult<PastorProfile> {
        if !data_uri.starts_with("data:image/") {
            return Err(AppError::ValidationError(
                "Signature must be a data:image/... URI".to_string(),
            ));
        }
        self.storage.set(keys::SIGNATURE_IMAGE, data_uri)?;
        Ok(self.get())
    }

    pub fn clear_signature(&self) -> AppResult<PastorProfile> {
        self.storage.remove(keys::SIGNATURE_IMAGE)?;
        Ok(self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn service() -> ProfileService {
        ProfileService::new(Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_defaults_before_any_save() {
        let profile = service().get();
        assert_eq!(profile.pastor_name, "");
        assert_eq!(profile.pastor_title, "Senior Pastor");
        assert_eq!(profile.signature_image, None);
    }

    #[test]
    fn test_update_persists_fields() {
        let service = service();
        let profile = service
            .update(UpdateProfileRequest {
                pastor_name: Some("Rev. Daniel Kwarteng".to_string()),
                pastor_title: None,
            })
            .unwrap();

        assert_eq!(profile.pastor_name, "Rev. Daniel Kwarteng");
        assert_eq!(profile.pastor_title, "Senior Pastor");
    }

    #[test]
    fn test_signature_requires_image_data_uri() {
        let service = service();
        assert!(service.set_signature("https://example.com/sig.png").is_err());

        let profile = service
            .set_signature("data:image/png;base64,AAAA")
            .unwrap();
        assert!(profile.signature_image.is_some());

        let cleared = service.clear_signature().unwrap();
        assert_eq!(cleared.signature_image, None);
    }

    #[test]
    fn test_empty_update_is_rejected() {
        let result = service().update(UpdateProfileRequest {
            pastor_name: None,
            pastor_title: None,
        });
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
