use std::sync::Arc;

use super::seed_on_transient;
use crate::demo::demo_data;
use crate::documents::{Document, builders};
use crate::error::AppResult;
use crate::models::*;
use crate::repositories::MemberRepository;

/// The photo directory view over the member roll. Photo writes go through
/// the member service; this only reads.
#[derive(Clone)]
pub struct PhotoService {
    members: Arc<dyn MemberRepository>,
    church_name: String,
}

impl PhotoService {
    pub fn new(members: Arc<dyn MemberRepository>, church_name: &str) -> Self {
        Self {
            members,
            church_name: church_name.to_string(),
        }
    }

    /// Members that have a photo set, in roll order.
    pub async fn entries(&self) -> AppResult<Vec<PhotoEntry>> {
        let members =
            seed_on_transient(self.members.list().await, "members", || demo_data().members)?;

        Ok(members
            .into_iter()
            .filter_map(|m| {
                let photo_url = m.photo_url.filter(|p| !p.trim().is_empty())?;
                Some(PhotoEntry {
                    member_id: m.id,
                    member_name: m.name,
                    department: m.department,
                    photo_url,
                })
            })
            .collect())
    }

    pub async fn directory_document(&self) -> AppResult<Document> {
        let entries = self.entries().await?;
        Ok(builders::photo_directory(&entries, &self.church_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Repositories;
    use crate::services::MemberService;

    #[tokio::test]
    async fn test_entries_only_include_members_with_photos() {
        let repos = Repositories::demo();
        let members = MemberService::new(repos.members.clone());
        let photos = PhotoService::new(repos.members.clone(), "Grace Community Church");

        // seed has no photos
        assert!(photos.entries().await.unwrap().is_empty());

        let id = repos.members.list().await.unwrap()[0].id;
        members
            .set_photo(id, "data:image/png;base64,AAAA".to_string())
            .await
            .unwrap();

        let entries = photos.entries().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].member_id, id);
    }

    #[tokio::test]
    async fn test_directory_document_counts_entries() {
        let repos = Repositories::demo();
        let members = MemberService::new(repos.members.clone());
        let photos = PhotoService::new(repos.members.clone(), "Grace Community Church");

        let id = repos.members.list().await.unwrap()[0].id;
        members
            .set_photo(id, "https://example.com/p.jpg".to_string())
            .await
            .unwrap();

        let doc = photos.directory_document().await.unwrap();
        assert!(doc.headings().contains(&"Member Photo Directory"));
    }
}
