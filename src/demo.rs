use chrono::{Datelike, Duration, Local, NaiveDate};
use uuid::Uuid;

use crate::models::{AttendanceRecord, Donation, Member, MemberStatus, Visitor};
use crate::utils::password::hash_password;

/// Seed dataset served whenever no remote store is configured, and substituted
/// when a remote read fails mid-session. Built fresh per call; weak references
/// stay coherent because everything is derived from the same member ids.
#[derive(Debug, Clone)]
pub struct DemoData {
    pub members: Vec<Member>,
    pub visitors: Vec<Visitor>,
    pub attendance: Vec<AttendanceRecord>,
    pub donations: Vec<Donation>,
}

/// One row of the fixed demo credential table.
#[derive(Debug, Clone)]
pub struct DemoUser {
    pub email: String,
    pub name: String,
    pub role: String,
    pub password_hash: String,
}

/// The Sunday on or before `today`.
pub fn most_recent_sunday(today: NaiveDate) -> NaiveDate {
    let days_back = today.weekday().num_days_from_sunday() as i64;
    today - Duration::days(days_back)
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn member(
    name: &str,
    phone: &str,
    email: &str,
    department: &str,
    join_date: NaiveDate,
    status: MemberStatus,
) -> Member {
    Member {
        id: Uuid::new_v4(),
        name: name.to_string(),
        phone: phone.to_string(),
        email: Some(email.to_string()),
        address: None,
        department: department.to_string(),
        join_date,
        status,
        photo_url: None,
        notes: None,
        created_at: None,
    }
}

fn attendance(member_id: Uuid, service_date: NaiveDate, check_in: &str) -> AttendanceRecord {
    AttendanceRecord {
        id: Uuid::new_v4(),
        member_id,
        service_date,
        service_type: "Sunday First Service".to_string(),
        present: true,
        check_in_time: Some(check_in.to_string()),
        created_at: None,
    }
}

pub fn demo_data() -> DemoData {
    let today = Local::now().date_naive();
    let sunday = most_recent_sunday(today);

    let members = vec![
        member(
            "Samuel Mensah",
            "+233 24 555 0101",
            "samuel.mensah@example.com",
            "Ushering",
            date(2019, 2, 10),
            MemberStatus::Active,
        ),
        member(
            "Grace Owusu",
            "+233 20 555 0102",
            "grace.owusu@example.com",
            "Choir",
            date(2020, 7, 5),
            MemberStatus::Active,
        ),
        member(
            "Daniel Boateng",
            "+233 27 555 0103",
            "daniel.boateng@example.com",
            "Media",
            date(2021, 3, 14),
            MemberStatus::Active,
        ),
        member(
            "Abigail Asante",
            "+233 24 555 0104",
            "abigail.asante@example.com",
            "Women's Fellowship",
            date(2018, 11, 25),
            MemberStatus::Active,
        ),
        member(
            "Kwame Appiah",
            "+233 26 555 0105",
            "kwame.appiah@example.com",
            "Men's Fellowship",
            date(2022, 1, 9),
            MemberStatus::Active,
        ),
        member(
            "Esther Addo",
            "+233 54 555 0106",
            "esther.addo@example.com",
            "Youth",
            date(2023, 6, 18),
            MemberStatus::Active,
        ),
        member(
            "Michael Ofori",
            "+233 24 555 0107",
            "michael.ofori@example.com",
            "Choir",
            date(2020, 9, 6),
            MemberStatus::Active,
        ),
        member(
            "Lydia Amoako",
            "+233 55 555 0108",
            "lydia.amoako@example.com",
            "Ushering",
            date(2017, 4, 2),
            MemberStatus::Inactive,
        ),
    ];

    // Dated today so the dashboard's "today's visitors" count covers the whole
    // seed list.
    let visitors = vec![
        Visitor {
            id: Uuid::new_v4(),
            name: "Akosua Darko".to_string(),
            phone: "+233 24 555 0201".to_string(),
            email: Some("akosua.darko@example.com".to_string()),
            address: Some("14 Ridge Road, Accra".to_string()),
            visit_date: today,
            visit_time: "09:12 AM".to_string(),
            service: "Sunday First Service".to_string(),
            first_time: true,
            follow_up_needed: true,
            notes: Some("Invited by Grace Owusu".to_string()),
            created_at: None,
        },
        Visitor {
            id: Uuid::new_v4(),
            name: "John Tetteh".to_string(),
            phone: "+233 20 555 0202".to_string(),
            email: None,
            address: None,
            visit_date: today,
            visit_time: "09:30 AM".to_string(),
            service: "Sunday First Service".to_string(),
            first_time: false,
            follow_up_needed: false,
            notes: None,
            created_at: None,
        },
        Visitor {
            id: Uuid::new_v4(),
            name: "Mabel Quartey".to_string(),
            phone: "+233 27 555 0203".to_string(),
            email: Some("mabel.quartey@example.com".to_string()),
            address: None,
            visit_date: today,
            visit_time: "11:05 AM".to_string(),
            service: "Sunday Second Service".to_string(),
            first_time: true,
            follow_up_needed: true,
            notes: Some("Asked about the youth ministry".to_string()),
            created_at: None,
        },
    ];

    // Only present rows are stored; a member without a row reads as absent.
    let attendance = vec![
        attendance(members[0].id, sunday, "08:55 AM"),
        attendance(members[1].id, sunday, "09:02 AM"),
        attendance(members[2].id, sunday, "09:05 AM"),
        attendance(members[3].id, sunday, "09:10 AM"),
        attendance(members[4].id, sunday, "09:18 AM"),
        attendance(members[6].id, sunday, "09:21 AM"),
    ];

    let donations = vec![
        Donation {
            id: Uuid::new_v4(),
            member_id: Some(members[0].id),
            donor_name: "Samuel Mensah".to_string(),
            amount_cents: 50_000,
            donation_type: "Tithe".to_string(),
            payment_method: "Mobile Money".to_string(),
            donation_date: today,
            receipt_number: "RCP-204817".to_string(),
            notes: None,
            created_at: None,
        },
        Donation {
            id: Uuid::new_v4(),
            member_id: Some(members[3].id),
            donor_name: "Abigail Asante".to_string(),
            amount_cents: 12_050,
            donation_type: "Offering".to_string(),
            payment_method: "Cash".to_string(),
            donation_date: sunday,
            receipt_number: "RCP-198342".to_string(),
            notes: None,
            created_at: None,
        },
        Donation {
            id: Uuid::new_v4(),
            member_id: Some(members[1].id),
            donor_name: "Grace Owusu".to_string(),
            amount_cents: 100_000,
            donation_type: "Building Fund".to_string(),
            payment_method: "Bank Transfer".to_string(),
            donation_date: sunday,
            receipt_number: "RCP-176209".to_string(),
            notes: Some("Pledge installment 2 of 4".to_string()),
            created_at: None,
        },
        Donation {
            id: Uuid::new_v4(),
            member_id: None,
            donor_name: "Anonymous".to_string(),
            amount_cents: 7_500,
            donation_type: "Offering".to_string(),
            payment_method: "Cash".to_string(),
            donation_date: today - Duration::days(40),
            receipt_number: "RCP-142733".to_string(),
            notes: None,
            created_at: None,
        },
        Donation {
            id: Uuid::new_v4(),
            member_id: Some(members[4].id),
            donor_name: "Kwame Appiah".to_string(),
            amount_cents: 25_000,
            donation_type: "Missions".to_string(),
            payment_method: "Cheque".to_string(),
            donation_date: today - Duration::days(62),
            receipt_number: "RCP-118056".to_string(),
            notes: None,
            created_at: None,
        },
    ];

    DemoData {
        members,
        visitors,
        attendance,
        donations,
    }
}

/// The fixed credential table for demo sign-in. Plaintext passwords are
/// admin123 / pastor123 / staff123; only the hashes are kept in memory.
pub fn demo_users() -> Vec<DemoUser> {
    let user = |email: &str, name: &str, role: &str, password: &str| DemoUser {
        email: email.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        password_hash: hash_password(password).expect("demo credential hash"),
    };

    vec![
        user("admin@church.com", "Church Administrator", "admin", "admin123"),
        user("pastor@church.com", "Rev. Daniel Kwarteng", "pastor", "pastor123"),
        user("staff@church.com", "Abena Sarpong", "staff", "staff123"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::password::verify_password;

    #[test]
    fn test_most_recent_sunday() {
        // 2025-06-04 is a Wednesday; 2025-06-01 a Sunday.
        assert_eq!(
            most_recent_sunday(date(2025, 6, 4)),
            date(2025, 6, 1)
        );
        assert_eq!(
            most_recent_sunday(date(2025, 6, 1)),
            date(2025, 6, 1)
        );
        assert_eq!(
            most_recent_sunday(date(2025, 6, 7)),
            date(2025, 6, 1)
        );
    }

    #[test]
    fn test_seed_references_are_coherent() {
        let data = demo_data();
        let ids: Vec<Uuid> = data.members.iter().map(|m| m.id).collect();

        for record in &data.attendance {
            assert!(ids.contains(&record.member_id));
            assert!(record.present);
        }
        for donation in &data.donations {
            if let Some(member_id) = donation.member_id {
                assert!(ids.contains(&member_id));
            }
            assert!(donation.amount_cents > 0);
        }
    }

    #[test]
    fn test_seed_dates_track_the_clock() {
        let data = demo_data();
        let today = Local::now().date_naive();
        let sunday = most_recent_sunday(today);

        assert!(data.visitors.iter().all(|v| v.visit_date == today));
        assert!(data.attendance.iter().all(|a| a.service_date == sunday));
    }

    #[test]
    fn test_demo_credentials_verify() {
        let users = demo_users();
        let admin = users
            .iter()
            .find(|u| u.email == "admin@church.com")
            .unwrap();

        assert_eq!(admin.role, "admin");
        assert!(verify_password("admin123", &admin.password_hash).unwrap());
        assert!(!verify_password("admin124", &admin.password_hash).unwrap());
    }
}
