use actix_web::{web, HttpRequest, HttpResponse, Result, ResponseError};
use serde_json::json;

use crate::documents::html;
use crate::middlewares::require_role;
use crate::models::*;
use crate::services::CertificateService;

#[utoipa::path(
    get,
    path = "/certificates/kinds",
    tag = "certificates",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Certificate kinds the console can issue", body = [CertificateKindInfo]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_kinds() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": CertificateService::kinds()
    })))
}

#[utoipa::path(
    post,
    path = "/certificates/render",
    tag = "certificates",
    request_body = CertificateRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Printable HTML certificate"),
        (status = 400, description = "No recipient given"),
        (status = 403, description = "Requires the pastor role"),
        (status = 404, description = "No such member")
    )
)]
pub async fn render_certificate(
    req: HttpRequest,
    certificate_service: web::Data<CertificateService>,
    request: web::Json<CertificateRequest>,
) -> Result<HttpResponse> {
    if let Err(e) = require_role(&req, "pastor") {
        return Ok(e.error_response());
    }
    match certificate_service.render_document(request.into_inner()).await {
        Ok(document) => Ok(HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html::render(&document))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn certificate_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/certificates")
            .route("/kinds", web::get().to(get_kinds))
            .route("/render", web::post().to(render_certificate)),
    );
}
