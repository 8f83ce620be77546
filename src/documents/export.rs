//! CSV export: comma-joined rows, first row header. Fields are quoted only
//! when they contain a comma, quote, or newline.

use crate::models::{Donation, Member};

fn field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| field(f))
        .collect::<Vec<_>>()
        .join(",")
}

pub fn members_csv(members: &[Member]) -> String {
    let mut out = String::from("Name,Phone,Email,Address,Department,Join Date,Status,Notes\n");
    for member in members {
        out.push_str(&line(&[
            member.name.clone(),
            member.phone.clone(),
            member.email.clone().unwrap_or_default(),
            member.address.clone().unwrap_or_default(),
            member.department.clone(),
            member.join_date.to_string(),
            member.status.to_string(),
            member.notes.clone().unwrap_or_default(),
        ]));
        out.push('\n');
    }
    out
}

pub fn donations_csv(donations: &[Donation]) -> String {
    let mut out =
        String::from("Receipt Number,Donor,Amount,Type,Payment Method,Date,Notes\n");
    for donation in donations {
        out.push_str(&line(&[
            donation.receipt_number.clone(),
            donation.donor_name.clone(),
            donation.amount_display(),
            donation.donation_type.clone(),
            donation.payment_method.clone(),
            donation.donation_date.to_string(),
            donation.notes.clone().unwrap_or_default(),
        ]));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MemberStatus;
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn test_field_quoting() {
        assert_eq!(field("plain"), "plain");
        assert_eq!(field("a,b"), "\"a,b\"");
        assert_eq!(field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(field("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_members_csv_shape() {
        let members = vec![Member {
            id: Uuid::new_v4(),
            name: "Mensah, Samuel".to_string(),
            phone: "+233 24 555 0101".to_string(),
            email: None,
            address: None,
            department: "Ushering".to_string(),
            join_date: NaiveDate::from_ymd_opt(2019, 2, 10).unwrap(),
            status: MemberStatus::Active,
            photo_url: None,
            notes: None,
            created_at: None,
        }];

        let csv = members_csv(&members);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "Name,Phone,Email,Address,Department,Join Date,Status,Notes"
        );
        assert!(lines[1].starts_with("\"Mensah, Samuel\",+233 24 555 0101,"));
        assert!(lines[1].contains("2019-02-10,active"));
    }

    #[test]
    fn test_donations_csv_amount_display() {
        let donations = vec![Donation {
            id: Uuid::new_v4(),
            member_id: None,
            donor_name: "Anonymous".to_string(),
            amount_cents: 7_500,
            donation_type: "Offering".to_string(),
            payment_method: "Cash".to_string(),
            donation_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            receipt_number: "RCP-142733".to_string(),
            notes: Some("loose offering".to_string()),
            created_at: None,
        }];

        let csv = donations_csv(&donations);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "RCP-142733,Anonymous,75.00,Offering,Cash,2025-06-01,loose offering"
        );
    }
}
