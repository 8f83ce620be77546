//! Builders from records to printable documents.

use chrono::NaiveDate;

use super::{Document, GalleryItem};
use crate::models::{CertificateKind, Donation, PastorProfile, PhotoEntry};

fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn certificate(
    kind: CertificateKind,
    recipient: &str,
    issued_on: NaiveDate,
    note: Option<&str>,
    church_name: &str,
    profile: &PastorProfile,
) -> Document {
    let mut doc = Document::new(kind.title())
        .heading(2, church_name)
        .rule()
        .heading(1, kind.title())
        .paragraph("This certificate is presented to")
        .heading(2, recipient)
        .paragraph(kind.citation());

    if let Some(note) = note {
        doc = doc.paragraph(note);
    }

    doc.paragraph(format!("Given this {}", long_date(issued_on)))
        .signature(
            profile.signature_image.clone(),
            profile.pastor_name.clone(),
            profile.pastor_title.clone(),
        )
}

pub fn donation_receipt(donation: &Donation, church_name: &str) -> Document {
    let mut doc = Document::new(format!("Receipt {}", donation.receipt_number))
        .heading(2, church_name)
        .heading(1, "Donation Receipt")
        .rule()
        .key_values(vec![
            ("Receipt No.".to_string(), donation.receipt_number.clone()),
            ("Date".to_string(), long_date(donation.donation_date)),
            ("Received From".to_string(), donation.donor_name.clone()),
            ("Donation Type".to_string(), donation.donation_type.clone()),
            ("Payment Method".to_string(), donation.payment_method.clone()),
            ("Amount".to_string(), donation.amount_display()),
        ]);

    if let Some(notes) = &donation.notes {
        doc = doc.paragraph(notes.clone());
    }

    doc.rule()
        .paragraph("Thank you for your generous giving.")
}

pub fn photo_directory(entries: &[PhotoEntry], church_name: &str) -> Document {
    let items = entries
        .iter()
        .map(|e| GalleryItem {
            image: Some(e.photo_url.clone()),
            caption: e.member_name.clone(),
            detail: e.department.clone(),
        })
        .collect();

    Document::new("Member Photo Directory")
        .heading(2, church_name)
        .heading(1, "Member Photo Directory")
        .rule()
        .gallery(items)
        .paragraph(format!("{} members pictured", entries.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Block;
    use uuid::Uuid;

    fn profile() -> PastorProfile {
        PastorProfile {
            pastor_name: "Rev. Daniel Kwarteng".to_string(),
            pastor_title: "Senior Pastor".to_string(),
            signature_image: Some("data:image/png;base64,AAAA".to_string()),
        }
    }

    #[test]
    fn test_certificate_carries_recipient_and_signature() {
        let doc = certificate(
            CertificateKind::Baptism,
            "Akosua Darko",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            None,
            "Grace Community Church",
            &profile(),
        );

        assert!(doc.headings().contains(&"Akosua Darko"));
        assert!(doc.headings().contains(&"Certificate of Baptism"));

        let signature = doc.blocks.iter().find_map(|b| match b {
            Block::Signature { image, name, title } => Some((image, name, title)),
            _ => None,
        });
        let (image, name, title) = signature.unwrap();
        assert!(image.is_some());
        assert_eq!(name, "Rev. Daniel Kwarteng");
        assert_eq!(title, "Senior Pastor");
    }

    #[test]
    fn test_certificate_note_is_optional() {
        let with_note = certificate(
            CertificateKind::Appreciation,
            "Grace Owusu",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            Some("Ten years of choir leadership"),
            "Grace Community Church",
            &profile(),
        );
        let without = certificate(
            CertificateKind::Appreciation,
            "Grace Owusu",
            NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            None,
            "Grace Community Church",
            &profile(),
        );
        assert_eq!(with_note.blocks.len(), without.blocks.len() + 1);
    }

    #[test]
    fn test_receipt_fields() {
        let donation = Donation {
            id: Uuid::new_v4(),
            member_id: None,
            donor_name: "Samuel Mensah".to_string(),
            amount_cents: 12_050,
            donation_type: "Tithe".to_string(),
            payment_method: "Cash".to_string(),
            donation_date: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            receipt_number: "RCP-204817".to_string(),
            notes: None,
            created_at: None,
        };

        let doc = donation_receipt(&donation, "Grace Community Church");
        let rows = doc
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::KeyValues { rows } => Some(rows.clone()),
                _ => None,
            })
            .unwrap();

        assert!(rows.contains(&("Receipt No.".to_string(), "RCP-204817".to_string())));
        assert!(rows.contains(&("Amount".to_string(), "120.50".to_string())));
        assert!(rows.contains(&("Date".to_string(), "June 1, 2025".to_string())));
    }

    #[test]
    fn test_photo_directory_gallery() {
        let entries = vec![
            PhotoEntry {
                member_id: Uuid::new_v4(),
                member_name: "Grace Owusu".to_string(),
                department: "Choir".to_string(),
                photo_url: "https://example.com/grace.jpg".to_string(),
            },
            PhotoEntry {
                member_id: Uuid::new_v4(),
                member_name: "Samuel Mensah".to_string(),
                department: "Ushering".to_string(),
                photo_url: "data:image/png;base64,BBBB".to_string(),
            },
        ];

        let doc = photo_directory(&entries, "Grace Community Church");
        let items = doc
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Gallery { items } => Some(items.clone()),
                _ => None,
            })
            .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].caption, "Grace Owusu");
        assert_eq!(items[1].detail, "Ushering");
    }
}
