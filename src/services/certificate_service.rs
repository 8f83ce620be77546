use std::sync::Arc;

use chrono::Local;

use super::{ProfileService, parse_date};
use crate::documents::{Document, builders};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repositories::MemberRepository;

#[derive(Clone)]
pub struct CertificateService {
    members: Arc<dyn MemberRepository>,
    profile: ProfileService,
    church_name: String,
}

impl CertificateService {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        profile: ProfileService,
        church_name: &str,
    ) -> Self {
        Self {
            members,
            profile,
            church_name: church_name.to_string(),
        }
    }

    pub fn kinds() -> Vec<CertificateKindInfo> {
        CertificateKind::all()
            .into_iter()
            .map(|kind| CertificateKindInfo {
                kind,
                title: kind.title().to_string(),
            })
            .collect()
    }

    /// Recipient comes from the member roll when an id is given, otherwise
    /// from the free-typed name.
    pub async fn render_document(&self, request: CertificateRequest) -> AppResult<Document> {
        let recipient = match request.member_id {
            Some(id) => self.members.get(id).await?.name,
            None => request
                .recipient_name
                .as_deref()
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .ok_or_else(|| {
                    AppError::ValidationError(
                        "Either member_id or recipient_name is required".to_string(),
                    )
                })?
                .to_string(),
        };

        let issued_on = match request.issued_on.as_deref() {
            Some(raw) => parse_date(raw, "issued_on")?,
            None => Local::now().date_naive(),
        };

        Ok(builders::certificate(
            request.kind,
            &recipient,
            issued_on,
            request.note.as_deref(),
            &self.church_name,
            &self.profile.get(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Repositories;
    use crate::storage::MemoryStorage;

    fn service() -> (CertificateService, Repositories) {
        let repos = Repositories::demo();
        let profile = ProfileService::new(Arc::new(MemoryStorage::new()));
        (
            CertificateService::new(repos.members.clone(), profile, "Grace Community Church"),
            repos,
        )
    }

    #[test]
    fn test_kinds_lists_all_four() {
        let kinds = CertificateService::kinds();
        assert_eq!(kinds.len(), 4);
        assert!(kinds.iter().any(|k| k.title == "Certificate of Baptism"));
    }

    #[tokio::test]
    async fn test_member_id_resolves_name() {
        let (service, repos) = service();
        let member = &repos.members.list().await.unwrap()[0];

        let doc = service
            .render_document(CertificateRequest {
                kind: CertificateKind::Membership,
                member_id: Some(member.id),
                recipient_name: None,
                issued_on: Some("2025-06-01".to_string()),
                note: None,
            })
            .await
            .unwrap();

        assert!(doc.headings().contains(&member.name.as_str()));
    }

    #[tokio::test]
    async fn test_free_typed_recipient() {
        let (service, _repos) = service();
        let doc = service
            .render_document(CertificateRequest {
                kind: CertificateKind::Baptism,
                member_id: None,
                recipient_name: Some("Akosua Darko".to_string()),
                issued_on: None,
                note: None,
            })
            .await
            .unwrap();
        assert!(doc.headings().contains(&"Akosua Darko"));
    }

    #[tokio::test]
    async fn test_missing_recipient_rejected() {
        let (service, _repos) = service();
        let result = service
            .render_document(CertificateRequest {
                kind: CertificateKind::Appreciation,
                member_id: None,
                recipient_name: Some("   ".to_string()),
                issued_on: None,
                note: None,
            })
            .await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
