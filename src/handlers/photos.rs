use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;

use crate::documents::html;
use crate::models::*;
use crate::services::PhotoService;

#[utoipa::path(
    get,
    path = "/photos",
    tag = "photos",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Members with a stored photo", body = [PhotoEntry]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_photos(photo_service: web::Data<PhotoService>) -> Result<HttpResponse> {
    match photo_service.entries().await {
        Ok(entries) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": entries
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/photos/directory",
    tag = "photos",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Printable HTML photo directory"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_directory(photo_service: web::Data<PhotoService>) -> Result<HttpResponse> {
    match photo_service.directory_document().await {
        Ok(document) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html::render(&document))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn photo_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/photos")
            .route("", web::get().to(get_photos))
            .route("/directory", web::get().to(get_directory)),
    );
}
