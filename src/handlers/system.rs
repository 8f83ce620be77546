use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::models::SystemStatus;

/// Liveness probe, mounted outside the versioned API scope.
pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

#[utoipa::path(
    get,
    path = "/system/status",
    tag = "system",
    responses(
        (status = 200, description = "Serve mode and deployment info", body = SystemStatus)
    )
)]
pub async fn get_status(status: web::Data<SystemStatus>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": status.as_ref()
    })))
}

pub fn health_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

pub fn system_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/system").route("/status", web::get().to(get_status)));
}
