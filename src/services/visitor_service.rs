use std::sync::Arc;

use uuid::Uuid;

use super::{Loaded, load_or_seed, parse_date, require};
use crate::demo::demo_data;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repositories::VisitorRepository;

/// Visitors expose no delete; a record that should disappear is a data-entry
/// question for the store, not a console operation.
#[derive(Clone)]
pub struct VisitorService {
    visitors: Arc<dyn VisitorRepository>,
}

impl VisitorService {
    pub fn new(visitors: Arc<dyn VisitorRepository>) -> Self {
        Self { visitors }
    }

    pub async fn list(&self, filter: &VisitorFilter) -> AppResult<Loaded<Visitor>> {
        let loaded = load_or_seed(self.visitors.list().await, "visitors", || {
            demo_data().visitors
        })?;
        Ok(Loaded {
            items: filter.apply(&loaded.items),
            notice: loaded.notice,
        })
    }

    pub async fn create(&self, request: CreateVisitorRequest) -> AppResult<Visitor> {
        require(&request.name, "name")?;
        require(&request.phone, "phone")?;
        require(&request.service, "service")?;
        let visit_date = parse_date(&request.visit_date, "visit_date")?;

        let input = NewVisitor {
            name: request.name.trim().to_string(),
            phone: request.phone.trim().to_string(),
            email: request.email,
            address: request.address,
            visit_date,
            visit_time: request.visit_time.trim().to_string(),
            service: request.service.trim().to_string(),
            first_time: request.first_time.unwrap_or(true),
            follow_up_needed: request.follow_up_needed.unwrap_or(false),
            notes: request.notes,
        };
        self.visitors.create(input).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateVisitorRequest) -> AppResult<Visitor> {
        if let Some(name) = &request.name {
            require(name, "name")?;
        }
        if let Some(phone) = &request.phone {
            require(phone, "phone")?;
        }

        let patch = VisitorPatch {
            name: request.name,
            phone: request.phone,
            email: request.email,
            address: request.address,
            visit_date: request
                .visit_date
                .as_deref()
                .map(|d| parse_date(d, "visit_date"))
                .transpose()?,
            visit_time: request.visit_time,
            service: request.service,
            first_time: request.first_time,
            follow_up_needed: request.follow_up_needed,
            notes: request.notes,
        };
        if patch.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }
        self.visitors.update(id, patch).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Repositories;

    fn demo_service() -> VisitorService {
        VisitorService::new(Repositories::demo().visitors)
    }

    fn create_request() -> CreateVisitorRequest {
        CreateVisitorRequest {
            name: "Efua Mansa".to_string(),
            phone: "+233 24 555 0299".to_string(),
            email: None,
            address: None,
            visit_date: "2025-06-01".to_string(),
            visit_time: "10:15 AM".to_string(),
            service: "Sunday Second Service".to_string(),
            first_time: None,
            follow_up_needed: Some(true),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_defaults_and_prepends() {
        let service = demo_service();
        let created = service.create(create_request()).await.unwrap();

        assert!(created.first_time);
        assert!(created.follow_up_needed);

        let listed = service.list(&VisitorFilter::default()).await.unwrap();
        assert_eq!(listed.items[0].id, created.id);
    }

    #[tokio::test]
    async fn test_create_requires_presence() {
        let service = demo_service();
        let mut request = create_request();
        request.phone = String::new();
        assert!(matches!(
            service.create(request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_update_toggles_follow_up() {
        let service = demo_service();
        let id = service.list(&VisitorFilter::default()).await.unwrap().items[0].id;

        let request = UpdateVisitorRequest {
            name: None,
            phone: None,
            email: None,
            address: None,
            visit_date: None,
            visit_time: None,
            service: None,
            first_time: None,
            follow_up_needed: Some(false),
            notes: None,
        };
        let updated = service.update(id, request).await.unwrap();
        assert!(!updated.follow_up_needed);
    }

    #[tokio::test]
    async fn test_filter_subsets_seed() {
        let service = demo_service();
        let all = service.list(&VisitorFilter::default()).await.unwrap().items;

        let follow_ups = service
            .list(&VisitorFilter {
                follow_up_needed: Some(true),
                ..Default::default()
            })
            .await
            .unwrap()
            .items;

        assert!(follow_ups.len() < all.len() || all.iter().all(|v| v.follow_up_needed));
        assert!(follow_ups.iter().all(|v| v.follow_up_needed));
    }
}
