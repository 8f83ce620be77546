use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use serde_json::json;

use crate::middlewares::require_role;
use crate::models::*;
use crate::services::ProfileService;

#[utoipa::path(
    get,
    path = "/profile",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Pastor profile used on printed documents", body = PastorProfile),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_profile(profile_service: web::Data<ProfileService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": profile_service.get()
    })))
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "profile",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = PastorProfile),
        (status = 400, description = "No fields to update"),
        (status = 403, description = "Requires the pastor role")
    )
)]
pub async fn update_profile(
    req: HttpRequest,
    profile_service: web::Data<ProfileService>,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_role(&req, "pastor") {
        return Ok(e.error_response());
    }
    match profile_service.update(request.into_inner()) {
        Ok(profile) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": profile,
            "message": "Profile updated"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/profile/signature",
    tag = "profile",
    request_body = SignatureRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signature stored", body = PastorProfile),
        (status = 400, description = "Not a data:image/ URI"),
        (status = 403, description = "Requires the pastor role")
    )
)]
pub async fn set_signature(
    req: HttpRequest,
    profile_service: web::Data<ProfileService>,
    request: web::Json<SignatureRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_role(&req, "pastor") {
        return Ok(e.error_response());
    }
    match profile_service.set_signature(&request.data_uri) {
        Ok(profile) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": profile,
            "message": "Signature stored"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/profile/signature",
    tag = "profile",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Signature cleared", body = PastorProfile),
        (status = 403, description = "Requires the pastor role")
    )
)]
pub async fn clear_signature(
    req: HttpRequest,
    profile_service: web::Data<ProfileService>,
) -> Result<HttpResponse> {
    if let Err(e) = require_role(&req, "pastor") {
        return Ok(e.error_response());
    }
    match profile_service.clear_signature() {
        Ok(profile) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": profile,
            "message": "Signature cleared"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn profile_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .route("", web::get().to(get_profile))
            .route("", web::put().to(update_profile))
            .route("/signature", web::put().to(set_signature))
            .route("/signature", web::delete().to(clear_signature)),
    );
}
