use std::sync::Arc;

use uuid::Uuid;

use super::{Loaded, load_or_seed, parse_date, require};
use crate::demo::demo_data;
use crate::documents::{Document, builders, export};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::repositories::DonationRepository;
use crate::utils::generate_receipt_number;

#[derive(Clone)]
pub struct DonationService {
    donations: Arc<dyn DonationRepository>,
    church_name: String,
}

/// Positive dollars-and-cents amount to integer cents.
fn to_cents(amount: f64, field: &str) -> AppResult<i64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::ValidationError(format!(
            "{field} must be a positive amount"
        )));
    }
    Ok((amount * 100.0).round() as i64)
}

impl DonationService {
    pub fn new(donations: Arc<dyn DonationRepository>, church_name: &str) -> Self {
        Self {
            donations,
            church_name: church_name.to_string(),
        }
    }

    pub async fn list(&self, filter: &DonationFilter) -> AppResult<Loaded<Donation>> {
        let loaded = load_or_seed(self.donations.list().await, "donations", || {
            demo_data().donations
        })?;
        Ok(Loaded {
            items: filter.apply(&loaded.items),
            notice: loaded.notice,
        })
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Donation> {
        self.donations.get(id).await
    }

    pub async fn create(&self, request: CreateDonationRequest) -> AppResult<Donation> {
        require(&request.donor_name, "donor_name")?;
        require(&request.donation_type, "donation_type")?;
        require(&request.payment_method, "payment_method")?;
        let donation_date = parse_date(&request.donation_date, "donation_date")?;
        let amount_cents = to_cents(request.amount, "amount")?;

        let input = NewDonation {
            member_id: request.member_id,
            donor_name: request.donor_name.trim().to_string(),
            amount_cents,
            donation_type: request.donation_type.trim().to_string(),
            payment_method: request.payment_method.trim().to_string(),
            donation_date,
            receipt_number: generate_receipt_number(),
            notes: request.notes,
        };
        self.donations.create(input).await
    }

    pub async fn update(&self, id: Uuid, request: UpdateDonationRequest) -> AppResult<Donation> {
        if let Some(donor_name) = &request.donor_name {
            require(donor_name, "donor_name")?;
        }

        let patch = DonationPatch {
            donor_name: request.donor_name,
            amount_cents: request
                .amount
                .map(|a| to_cents(a, "amount"))
                .transpose()?,
            donation_type: request.donation_type,
            payment_method: request.payment_method,
            donation_date: request
                .donation_date
                .as_deref()
                .map(|d| parse_date(d, "donation_date"))
                .transpose()?,
            notes: request.notes,
        };
        if patch.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }
        self.donations.update(id, patch).await
    }

    /// Destructive; refused unless the caller has confirmed.
    pub async fn delete(&self, id: Uuid, confirmed: bool) -> AppResult<()> {
        if !confirmed {
            return Err(AppError::ValidationError(
                "Donation deletion requires confirmation".to_string(),
            ));
        }
        self.donations.delete(id).await
    }

    pub async fn export_csv(&self, filter: &DonationFilter) -> AppResult<String> {
        let loaded = self.list(filter).await?;
        Ok(export::donations_csv(&loaded.items))
    }

    pub async fn receipt_document(&self, id: Uuid) -> AppResult<Document> {
        let donation = self.donations.get(id).await?;
        Ok(builders::donation_receipt(&donation, &self.church_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::Repositories;

    fn demo_service() -> DonationService {
        DonationService::new(Repositories::demo().donations, "Grace Community Church")
    }

    fn create_request(amount: f64) -> CreateDonationRequest {
        CreateDonationRequest {
            member_id: None,
            donor_name: "Kojo Antwi".to_string(),
            amount,
            donation_type: "Offering".to_string(),
            payment_method: "Cash".to_string(),
            donation_date: "2025-06-01".to_string(),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_converts_amount_and_numbers_receipt() {
        let service = demo_service();
        let created = service.create(create_request(120.50)).await.unwrap();

        assert_eq!(created.amount_cents, 12_050);
        assert!(created.receipt_number.starts_with("RCP-"));

        let listed = service.list(&DonationFilter::default()).await.unwrap();
        assert_eq!(listed.items[0].id, created.id);
    }

    #[tokio::test]
    async fn test_amount_must_be_positive() {
        let service = demo_service();
        assert!(matches!(
            service.create(create_request(0.0)).await,
            Err(AppError::ValidationError(_))
        ));
        assert!(matches!(
            service.create(create_request(-5.0)).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[tokio::test]
    async fn test_unconfirmed_delete_keeps_donation() {
        let service = demo_service();
        let before = service.list(&DonationFilter::default()).await.unwrap().items;
        let target = before[0].id;

        assert!(service.delete(target, false).await.is_err());
        let after = service.list(&DonationFilter::default()).await.unwrap().items;
        assert_eq!(after.len(), before.len());

        service.delete(target, true).await.unwrap();
        let after = service.list(&DonationFilter::default()).await.unwrap().items;
        assert_eq!(after.len(), before.len() - 1);
    }

    #[tokio::test]
    async fn test_update_amount_revalidates() {
        let service = demo_service();
        let id = service.list(&DonationFilter::default()).await.unwrap().items[0].id;

        let request = UpdateDonationRequest {
            donor_name: None,
            amount: Some(-1.0),
            donation_type: None,
            payment_method: None,
            donation_date: None,
            notes: None,
        };
        assert!(service.update(id, request).await.is_err());

        let request = UpdateDonationRequest {
            donor_name: None,
            amount: Some(300.0),
            donation_type: None,
            payment_method: None,
            donation_date: None,
            notes: None,
        };
        let updated = service.update(id, request).await.unwrap();
        assert_eq!(updated.amount_cents, 30_000);
    }

    #[tokio::test]
    async fn test_receipt_document_for_stored_donation() {
        let service = demo_service();
        let donation = service.list(&DonationFilter::default()).await.unwrap().items[0].clone();

        let doc = service.receipt_document(donation.id).await.unwrap();
        assert!(doc.title.contains(&donation.receipt_number));
    }

    #[tokio::test]
    async fn test_export_matches_filtered_list() {
        let service = demo_service();
        let filter = DonationFilter {
            donation_type: Some("Offering".to_string()),
            ..Default::default()
        };

        let csv = service.export_csv(&filter).await.unwrap();
        let listed = service.list(&filter).await.unwrap().items;
        assert_eq!(csv.lines().count() - 1, listed.len());
    }
}
