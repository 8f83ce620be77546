use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::member::active;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Visitor {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub visit_date: NaiveDate,
    pub visit_time: String,
    pub service: String,
    pub first_time: bool,
    pub follow_up_needed: bool,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewVisitor {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub visit_date: NaiveDate,
    pub visit_time: String,
    pub service: String,
    pub first_time: bool,
    pub follow_up_needed: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VisitorPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visit_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_time: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_up_needed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl VisitorPatch {
    pub fn is_empty(&self) -> bool {
        serde_json::to_value(self)
            .map(|v| v.as_object().map(|o| o.is_empty()).unwrap_or(true))
            .unwrap_or(true)
    }

    pub fn apply(&self, visitor: &mut Visitor) {
        if let Some(v) = &self.name {
            visitor.name = v.clone();
        }
        if let Some(v) = &self.phone {
            visitor.phone = v.clone();
        }
        if let Some(v) = &self.email {
            visitor.email = Some(v.clone());
        }
        if let Some(v) = &self.address {
            visitor.address = Some(v.clone());
        }
        if let Some(v) = self.visit_date {
            visitor.visit_date = v;
        }
        if let Some(v) = &self.visit_time {
            visitor.visit_time = v.clone();
        }
        if let Some(v) = &self.service {
            visitor.service = v.clone();
        }
        if let Some(v) = self.first_time {
            visitor.first_time = v;
        }
        if let Some(v) = self.follow_up_needed {
            visitor.follow_up_needed = v;
        }
        if let Some(v) = &self.notes {
            visitor.notes = Some(v.clone());
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateVisitorRequest {
    #[schema(example = "Ama Boateng")]
    pub name: String,
    #[schema(example = "+15551230002")]
    pub phone: String,
    pub email: Option<String>,
    pub address: Option<String>,
    #[schema(example = "2025-06-01")]
    pub visit_date: String, // YYYY-MM-DD
    #[schema(example = "10:30 AM")]
    pub visit_time: String,
    #[schema(example = "Sunday Service")]
    pub service: String,
    pub first_time: Option<bool>,
    pub follow_up_needed: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateVisitorRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub visit_date: Option<String>,
    pub visit_time: Option<String>,
    pub service: Option<String>,
    pub first_time: Option<bool>,
    pub follow_up_needed: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct VisitorFilter {
    pub search: Option<String>,
    pub service: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub follow_up_needed: Option<bool>,
}

impl VisitorFilter {
    pub fn matches(&self, visitor: &Visitor) -> bool {
        if let Some(term) = active(&self.search) {
            let term = term.to_lowercase();
            let hit = visitor.name.to_lowercase().contains(&term)
                || visitor.phone.to_lowercase().contains(&term);
            if !hit {
                return false;
            }
        }
        if let Some(service) = active(&self.service)
            && !visitor.service.eq_ignore_ascii_case(service)
        {
            return false;
        }
        if let Some(from) = self.from
            && visitor.visit_date < from
        {
            return false;
        }
        if let Some(to) = self.to
            && visitor.visit_date > to
        {
            return false;
        }
        if let Some(follow_up) = self.follow_up_needed
            && visitor.follow_up_needed != follow_up
        {
            return false;
        }
        true
    }

    pub fn apply(&self, visitors: &[Visitor]) -> Vec<Visitor> {
        visitors.iter().filter(|v| self.matches(v)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(name: &str, date: NaiveDate, follow_up: bool) -> Visitor {
        Visitor {
            id: Uuid::new_v4(),
            name: name.to_string(),
            phone: "+15550000001".to_string(),
            email: None,
            address: None,
            visit_date: date,
            visit_time: "10:30 AM".to_string(),
            service: "Sunday Service".to_string(),
            first_time: true,
            follow_up_needed: follow_up,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_date_range_is_inclusive() {
        let d = |day| NaiveDate::from_ymd_opt(2025, 6, day).unwrap();
        let visitors = vec![
            visitor("Ama", d(1), true),
            visitor("Kofi", d(8), false),
            visitor("Esi", d(15), true),
        ];
        let filter = VisitorFilter {
            from: Some(d(1)),
            to: Some(d(8)),
            ..Default::default()
        };
        let result = filter.apply(&visitors);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|v| v.visit_date >= d(1) && v.visit_date <= d(8)));
    }

    #[test]
    fn test_follow_up_and_search_combine() {
        let d = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let visitors = vec![
            visitor("Ama Boateng", d, true),
            visitor("Ama Serwaa", d, false),
        ];
        let filter = VisitorFilter {
            search: Some("ama".to_string()),
            follow_up_needed: Some(true),
            ..Default::default()
        };
        let result = filter.apply(&visitors);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Ama Boateng");
    }
}
