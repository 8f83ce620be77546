use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CertificateKind {
    Baptism,
    ChildDedication,
    Membership,
    Appreciation,
}

impl CertificateKind {
    pub fn title(&self) -> &'static str {
        match self {
            CertificateKind::Baptism => "Certificate of Baptism",
            CertificateKind::ChildDedication => "Certificate of Child Dedication",
            CertificateKind::Membership => "Certificate of Membership",
            CertificateKind::Appreciation => "Certificate of Appreciation",
        }
    }

    /// The line printed under the recipient's name.
    pub fn citation(&self) -> &'static str {
        match self {
            CertificateKind::Baptism => {
                "was baptized in the name of the Father, the Son, and the Holy Spirit"
            }
            CertificateKind::ChildDedication => {
                "was dedicated to the Lord before the congregation"
            }
            CertificateKind::Membership => {
                "was received into the fellowship and membership of this church"
            }
            CertificateKind::Appreciation => {
                "is recognized with gratitude for faithful service to this church"
            }
        }
    }

    pub fn all() -> [CertificateKind; 4] {
        [
            CertificateKind::Baptism,
            CertificateKind::ChildDedication,
            CertificateKind::Membership,
            CertificateKind::Appreciation,
        ]
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateRequest {
    pub kind: CertificateKind,
    /// Either a member id or a free-typed recipient name must be given.
    pub member_id: Option<Uuid>,
    pub recipient_name: Option<String>,
    /// YYYY-MM-DD; defaults to today.
    pub issued_on: Option<String>,
    /// Optional extra line, e.g. the occasion.
    pub note: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CertificateKindInfo {
    pub kind: CertificateKind,
    pub title: String,
}
