use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::member::active;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Donation {
    pub id: Uuid,
    pub member_id: Option<Uuid>,
    pub donor_name: String,
    pub amount_cents: i64,
    pub donation_type: String,
    pub payment_method: String,
    pub donation_date: NaiveDate,
    pub receipt_number: String,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Donation {
    /// Dollars-and-cents display string, e.g. `120.50`.
    pub fn amount_display(&self) -> String {
        format!("{}.{:02}", self.amount_cents / 100, self.amount_cents % 100)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewDonation {
    pub member_id: Option<Uuid>,
    pub donor_name: String,
    pub amount_cents: i64,
    pub donation_type: String,
    pub payment_method: String,
    pub donation_date: NaiveDate,
    pub receipt_number: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DonationPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donation_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DonationPatch {
    pub fn is_empty(&self) -> bool {
        self.donor_name.is_none()
            && self.amount_cents.is_none()
            && self.donation_type.is_none()
            && self.payment_method.is_none()
            && self.donation_date.is_none()
            && self.notes.is_none()
    }

    pub fn apply(&self, donation: &mut Donation) {
        if let Some(v) = &self.donor_name {
            donation.donor_name = v.clone();
        }
        if let Some(v) = self.amount_cents {
            donation.amount_cents = v;
        }
        if let Some(v) = &self.donation_type {
            donation.donation_type = v.clone();
        }
        if let Some(v) = &self.payment_method {
            donation.payment_method = v.clone();
        }
        if let Some(v) = self.donation_date {
            donation.donation_date = v;
        }
        if let Some(v) = &self.notes {
            donation.notes = Some(v.clone());
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDonationRequest {
    pub member_id: Option<Uuid>,
    #[schema(example = "Sarah Mensah")]
    pub donor_name: String,
    /// Dollars, as the console's form posts it. Converted to cents and
    /// required to be positive.
    #[schema(example = 120.5)]
    pub amount: f64,
    #[schema(example = "Tithe")]
    pub donation_type: String,
    #[schema(example = "Cash")]
    pub payment_method: String,
    #[schema(example = "2025-06-01")]
    pub donation_date: String, // YYYY-MM-DD
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateDonationRequest {
    pub donor_name: Option<String>,
    pub amount: Option<f64>,
    pub donation_type: Option<String>,
    pub payment_method: Option<String>,
    pub donation_date: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct DonationFilter {
    pub search: Option<String>,
    pub donation_type: Option<String>,
    pub payment_method: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DonationFilter {
    pub fn matches(&self, donation: &Donation) -> bool {
        if let Some(term) = active(&self.search) {
            let term = term.to_lowercase();
            let hit = donation.donor_name.to_lowercase().contains(&term)
                || donation.receipt_number.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(kind) = active(&self.donation_type)
            && !donation.donation_type.eq_ignore_ascii_case(kind)
        {
            return false;
        }
        if let Some(method) = active(&self.payment_method)
            && !donation.payment_method.eq_ignore_ascii_case(method)
        {
            return false;
        }
        if let Some(from) = self.from
            && donation.donation_date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && donation.donation_date > to
        {
            return false;
        }
        true
    }

    pub fn apply(&self, donations: &[Donation]) -> Vec<Donation> {
        donations.iter().filter(|d| self.matches(d)).cloned().collect()
    }
}

/// Sum of the given donations in cents.
pub fn total_cents(donations: &[Donation]) -> i64 {
    donations.iter().map(|d| d.amount_cents).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donation(donor: &str, kind: &str, method: &str, cents: i64, day: u32) -> Donation {
        Donation {
            id: Uuid::new_v4(),
            member_id: None,
            donor_name: donor.to_string(),
            amount_cents: cents,
            donation_type: kind.to_string(),
            payment_method: method.to_string(),
            donation_date: NaiveDate::from_ymd_opt(2025, 6, day).unwrap(),
            receipt_number: "RCP-104233".to_string(),
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_filters_combine_conjunctively() {
        let donations = vec![
            donation("Sarah Mensah", "Tithe", "Cash", 12050, 1),
            donation("Sarah Mensah", "Offering", "Cash", 2000, 1),
            donation("David Osei", "Tithe", "Bank Transfer", 50000, 8),
        ];
        let filter = DonationFilter {
            search: Some("sarah".to_string()),
            donation_type: Some("Tithe".to_string()),
            ..Default::default()
        };
        let result = filter.apply(&donations);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].amount_cents, 12050);
    }

    #[test]
    fn test_receipt_number_is_searchable() {
        let donations = vec![donation("Sarah Mensah", "Tithe", "Cash", 12050, 1)];
        let filter = DonationFilter {
            search: Some("rcp-104".to_string()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&donations).len(), 1);
    }

    #[test]
    fn test_total_is_sum_of_filtered() {
        let donations = vec![
            donation("Sarah Mensah", "Tithe", "Cash", 12050, 1),
            donation("David Osei", "Tithe", "Cash", 5000, 8),
        ];
        assert_eq!(total_cents(&donations), 17050);

        let filter = DonationFilter {
            to: Some(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
            ..Default::default()
        };
        assert_eq!(total_cents(&filter.apply(&donations)), 12050);
    }

    #[test]
    fn test_amount_display() {
        assert_eq!(donation("x", "Tithe", "Cash", 12050, 1).amount_display(), "120.50");
        assert_eq!(donation("x", "Tithe", "Cash", 5, 1).amount_display(), "0.05");
    }
}
