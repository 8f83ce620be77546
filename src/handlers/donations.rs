use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use serde_json::json;
use uuid::Uuid;

use crate::documents::html;
use crate::middlewares::require_role;
use crate::models::*;
use crate::services::DonationService;

#[utoipa::path(
    get,
    path = "/donations",
    tag = "donations",
    params(
        ("search" = Option<String>, Query, description = "Match against donor name or receipt number"),
        ("donation_type" = Option<String>, Query, description = "Tithe, Offering, Building Fund, ..."),
        ("payment_method" = Option<String>, Query, description = "Cash, Mobile Money, ..."),
        ("from" = Option<String>, Query, description = "Earliest donation date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest donation date (YYYY-MM-DD)")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Filtered donation list plus a cents total", body = [Donation]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_donations(
    donation_service: web::Data<DonationService>,
    query: web::Query<DonationFilter>,
) -> Result<HttpResponse> {
    match donation_service.list(&query).await {
        Ok(loaded) => {
            let mut body = json!({
                "success": true,
                "data": loaded.items,
                "total_cents": total_cents(&loaded.items)
            });
            if let Some(notice) = loaded.notice {
                body["message"] = json!(notice);
            }
            Ok(HttpResponse::Ok().json(body))
        }
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/donations",
    tag = "donations",
    request_body = CreateDonationRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Donation recorded with a fresh receipt number", body = Donation),
        (status = 400, description = "Missing fields or non-positive amount")
    )
)]
pub async fn create_donation(
    donation_service: web::Data<DonationService>,
    request: web::Json<CreateDonationRequest>,
) -> Result<HttpResponse> {
    match donation_service.create(request.into_inner()).await {
        Ok(donation) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donation,
            "message": "Donation recorded"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/donations/export.csv",
    tag = "donations",
    params(
        ("search" = Option<String>, Query, description = "Match against donor name or receipt number"),
        ("donation_type" = Option<String>, Query, description = "Tithe, Offering, Building Fund, ..."),
        ("payment_method" = Option<String>, Query, description = "Cash, Mobile Money, ..."),
        ("from" = Option<String>, Query, description = "Earliest donation date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest donation date (YYYY-MM-DD)")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "CSV download of the filtered list"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn export_donations_csv(
    donation_service: web::Data<DonationService>,
    query: web::Query<DonationFilter>,
) -> Result<HttpResponse> {
    match donation_service.export_csv(&query).await {
        Ok(csv) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .append_header(("Content-Disposition", "attachment; filename=\"donations.csv\""))
            .body(csv)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/donations/{id}",
    tag = "donations",
    params(
        ("id" = Uuid, Path, description = "Donation id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Donation detail", body = Donation),
        (status = 404, description = "No such donation")
    )
)]
pub async fn get_donation(
    donation_service: web::Data<DonationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match donation_service.get(path.into_inner()).await {
        Ok(donation) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donation
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/donations/{id}",
    tag = "donations",
    params(
        ("id" = Uuid, Path, description = "Donation id")
    ),
    request_body = UpdateDonationRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Donation updated", body = Donation),
        (status = 400, description = "No fields to update or invalid values"),
        (status = 404, description = "No such donation")
    )
)]
pub async fn update_donation(
    donation_service: web::Data<DonationService>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateDonationRequest>,
) -> Result<HttpResponse> {
    match donation_service.update(path.into_inner(), request.into_inner()).await {
        Ok(donation) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": donation,
            "message": "Donation updated"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/donations/{id}",
    tag = "donations",
    params(
        ("id" = Uuid, Path, description = "Donation id"),
        ("confirm" = Option<bool>, Query, description = "Must be true; deletion is permanent")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Donation deleted"),
        (status = 400, description = "Deletion not confirmed"),
        (status = 403, description = "Requires the admin role")
    )
)]
pub async fn delete_donation(
    req: HttpRequest,
    donation_service: web::Data<DonationService>,
    path: web::Path<Uuid>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_role(&req, "admin") {
        return Ok(e.error_response());
    }
    match donation_service.delete(path.into_inner(), query.confirmed()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Donation deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/donations/{id}/receipt",
    tag = "donations",
    params(
        ("id" = Uuid, Path, description = "Donation id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Printable HTML receipt"),
        (status = 404, description = "No such donation")
    )
)]
pub async fn get_receipt(
    donation_service: web::Data<DonationService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match donation_service.receipt_document(path.into_inner()).await {
        Ok(document) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html::render(&document))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn donation_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/donations")
            .route("", web::get().to(get_donations))
            .route("", web::post().to(create_donation))
            .route("/export.csv", web::get().to(export_donations_csv))
            .route("/{id}", web::get().to(get_donation))
            .route("/{id}", web::put().to(update_donation))
            .route("/{id}", web::delete().to(delete_donation))
            .route("/{id}/receipt", web::get().to(get_receipt)),
    );
}
