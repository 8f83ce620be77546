use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use serde_json::json;
use uuid::Uuid;

use crate::middlewares::require_role;
use crate::models::*;
use crate::services::MemberService;

#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(
        ("search" = Option<String>, Query, description = "Match against name, phone, or email"),
        ("department" = Option<String>, Query, description = "Exact department name"),
        ("status" = Option<String>, Query, description = "active or inactive")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Filtered member list", body = [Member]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_members(
    member_service: web::Data<MemberService>,
    query: web::Query<MemberFilter>,
) -> Result<HttpResponse> {
    match member_service.list(&query).await {
        Ok(loaded) => {
            let mut body = json!({"success": true, "data": loaded.items});
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
    path = "/members",
    tag = "members",
    request_body = CreateMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member registered", body = Member),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_member(
    member_service: web::Data<MemberService>,
    request: web::Json<CreateMemberRequest>,
) -> Result<HttpResponse> {
    match member_service.create(request.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member,
            "message": "Member registered"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/export.csv",
    tag = "members",
    params(
        ("search" = Option<String>, Query, description = "Match against name, phone, or email"),
        ("department" = Option<String>, Query, description = "Exact department name"),
        ("status" = Option<String>, Query, description = "active or inactive")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "CSV download of the filtered list"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn export_members_csv(
    member_service: web::Data<MemberService>,
    query: web::Query<MemberFilter>,
) -> Result<HttpResponse> {
    match member_service.export_csv(&query).await {
        Ok(csv) => Ok(HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .append_header(("Content-Disposition", "attachment; filename=\"members.csv\""))
            .body(csv)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member detail", body = Member),
        (status = 404, description = "No such member")
    )
)]
pub async fn get_member(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match member_service.get(path.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = UpdateMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 400, description = "No fields to update or invalid values"),
        (status = 404, description = "No such member")
    )
)]
pub async fn update_member(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateMemberRequest>,
) -> Result<HttpResponse> {
    match member_service.update(path.into_inner(), request.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member,
            "message": "Member updated"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id"),
        ("confirm" = Option<bool>, Query, description = "Must be true; deletion is permanent")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Member deleted"),
        (status = 400, description = "Deletion not confirmed"),
        (status = 403, description = "Requires the admin role")
    )
)]
pub async fn delete_member(
    req: HttpRequest,
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
    query: web::Query<ConfirmQuery>,
) -> Result<HttpResponse> {
    if let Err(e) = require_role(&req, "admin") {
        return Ok(e.error_response());
    }
    match member_service.delete(path.into_inner(), query.confirmed()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Member deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/members/{id}/photo",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    request_body = SetPhotoRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Photo stored", body = Member),
        (status = 400, description = "Empty photo payload"),
        (status = 404, description = "No such member")
    )
)]
pub async fn set_member_photo(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
    request: web::Json<SetPhotoRequest>,
) -> Result<HttpResponse> {
    match member_service
        .set_photo(path.into_inner(), request.into_inner().photo)
        .await
    {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/members/{id}/photo",
    tag = "members",
    params(
        ("id" = Uuid, Path, description = "Member id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Photo cleared", body = Member),
        (status = 404, description = "No such member")
    )
)]
pub async fn clear_member_photo(
    member_service: web::Data<MemberService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match member_service.clear_photo(path.into_inner()).await {
        Ok(member) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": member
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn member_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/members")
            .route("", web::get().to(get_members))
            .route("", web::post().to(create_member))
            .route("/export.csv", web::get().to(export_members_csv))
            .route("/{id}", web::get().to(get_member))
            .route("/{id}", web::put().to(update_member))
            .route("/{id}", web::delete().to(delete_member))
            .route("/{id}/photo", web::put().to(set_member_photo))
            .route("/{id}/photo", web::delete().to(clear_member_photo)),
    );
}
