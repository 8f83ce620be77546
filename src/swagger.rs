use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::logout,
        handlers::auth::me,
        handlers::system::get_status,
        handlers::dashboard::get_stats,
        handlers::members::get_members,
        handlers::members::create_member,
        handlers::members::export_members_csv,
        handlers::members::get_member,
        handlers::members::update_member,
        handlers::members::delete_member,
        handlers::members::set_member_photo,
        handlers::members::clear_member_photo,
        handlers::visitors::get_visitors,
        handlers::visitors::create_visitor,
        handlers::visitors::update_visitor,
        handlers::attendance::get_sheet,
        handlers::attendance::save_attendance,
        handlers::attendance::get_records,
        handlers::donations::get_donations,
        handlers::donations::create_donation,
        handlers::donations::export_donations_csv,
        handlers::donations::get_donation,
        handlers::donations::update_donation,
        handlers::donations::delete_donation,
        handlers::donations::get_receipt,
        handlers::events::get_events,
        handlers::events::create_event,
        handlers::events::update_event,
        handlers::events::delete_event,
        handlers::events::notify_event,
        handlers::certificates::get_kinds,
        handlers::certificates::render_certificate,
        handlers::photos::get_photos,
        handlers::photos::get_directory,
        handlers::profile::get_profile,
        handlers::profile::update_profile,
        handlers::profile::set_signature,
        handlers::profile::clear_signature,
    ),
    components(
        schemas(
            User,
            LoginRequest,
            LoginResponse,
            ServeMode,
            SystemStatus,
            ApiError,
            ConfirmQuery,
            DashboardStats,
            Member,
            MemberStatus,
            CreateMemberRequest,
            UpdateMemberRequest,
            MemberFilter,
            SetPhotoRequest,
            PhotoEntry,
            Visitor,
            CreateVisitorRequest,
            UpdateVisitorRequest,
            VisitorFilter,
            AttendanceRecord,
            SheetRow,
            SheetEntry,
            SaveAttendanceRequest,
            AttendanceQuery,
            AttendanceRecordsQuery,
            Donation,
            CreateDonationRequest,
            UpdateDonationRequest,
            DonationFilter,
            Event,
            CreateEventRequest,
            UpdateEventRequest,
            CertificateKind,
            CertificateKindInfo,
            CertificateRequest,
            PastorProfile,
            UpdateProfileRequest,
            SignatureRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sign-in and session API"),
        (name = "system", description = "Serve mode and deployment info"),
        (name = "dashboard", description = "Landing page statistics"),
        (name = "members", description = "Member records and CSV export"),
        (name = "visitors", description = "Visitor log and follow-up"),
        (name = "attendance", description = "Service attendance sheets"),
        (name = "donations", description = "Donations, receipts, and CSV export"),
        (name = "events", description = "Events and notifications"),
        (name = "certificates", description = "Printable certificates"),
        (name = "photos", description = "Member photo directory"),
        (name = "profile", description = "Pastor profile and signature"),
    ),
    info(
        title = "Church Admin Console API",
        version = "1.0.0",
        description = "REST API for the church administration console",
        contact(
            name = "Console Support"
        )
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
