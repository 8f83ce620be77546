use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use uuid::Uuid;

use crate::models::*;
use crate::services::VisitorService;

#[utoipa::path(
    get,
    path = "/visitors",
    tag = "visitors",
    params(
        ("search" = Option<String>, Query, description = "Match against name or phone"),
        ("service" = Option<String>, Query, description = "Service the visit was recorded at"),
        ("from" = Option<String>, Query, description = "Earliest visit date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest visit date (YYYY-MM-DD)"),
        ("follow_up_needed" = Option<bool>, Query, description = "Only visitors awaiting follow-up")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Filtered visitor list", body = [Visitor]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_visitors(
    visitor_service: web::Data<VisitorService>,
    query: web::Query<VisitorFilter>,
) -> Result<HttpResponse> {
    match visitor_service.list(&query).await {
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
    path = "/visitors",
    tag = "visitors",
    request_body = CreateVisitorRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visitor recorded", body = Visitor),
        (status = 400, description = "Missing or invalid fields")
    )
)]
pub async fn create_visitor(
    visitor_service: web::Data<VisitorService>,
    request: web::Json<CreateVisitorRequest>,
) -> Result<HttpResponse> {
    match visitor_service.create(request.into_inner()).await {
        Ok(visitor) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": visitor,
            "message": "Visitor recorded"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/visitors/{id}",
    tag = "visitors",
    params(
        ("id" = Uuid, Path, description = "Visitor id")
    ),
    request_body = UpdateVisitorRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Visitor updated", body = Visitor),
        (status = 400, description = "No fields to update or invalid values"),
        (status = 404, description = "No such visitor")
    )
)]
pub async fn update_visitor(
    visitor_service: web::Data<VisitorService>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateVisitorRequest>,
) -> Result<HttpResponse> {
    match visitor_service.update(path.into_inner(), request.into_inner()).await {
        Ok(visitor) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": visitor,
            "message": "Visitor updated"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn visitor_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/visitors")
            .route("", web::get().to(get_visitors))
            .route("", web::post().to(create_visitor))
            .route("/{id}", web::put().to(update_visitor)),
    );
}
