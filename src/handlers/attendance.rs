use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;

use crate::models::*;
use crate::services::AttendanceService;

#[utoipa::path(
    get,
    path = "/attendance/sheet",
    tag = "attendance",
    params(
        ("service_date" = String, Query, description = "Service date (YYYY-MM-DD)"),
        ("service_type" = String, Query, description = "Service name, e.g. Sunday First Service")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Full roll with per-member presence", body = [SheetRow]),
        (status = 400, description = "Missing or malformed date")
    )
)]
pub async fn get_sheet(
    attendance_service: web::Data<AttendanceService>,
    query: web::Query<AttendanceQuery>,
) -> Result<HttpResponse> {
    match attendance_service.sheet(&query).await {
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
    path = "/attendance/save",
    tag = "attendance",
    request_body = SaveAttendanceRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Sheet saved; returns the stored records", body = [AttendanceRecord]),
        (status = 400, description = "Missing or malformed date")
    )
)]
pub async fn save_attendance(
    attendance_service: web::Data<AttendanceService>,
    request: web::Json<SaveAttendanceRequest>,
) -> Result<HttpResponse> {
    match attendance_service.save(request.into_inner()).await {
        Ok(records) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": records,
            "message": "Attendance saved"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/attendance/records",
    tag = "attendance",
    params(
        ("from" = Option<String>, Query, description = "Earliest service date (YYYY-MM-DD)"),
        ("to" = Option<String>, Query, description = "Latest service date (YYYY-MM-DD)"),
        ("service_type" = Option<String>, Query, description = "Limit to one service name")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Stored attendance history", body = [AttendanceRecord]),
        (status = 400, description = "Malformed date bound")
    )
)]
pub async fn get_records(
    attendance_service: web::Data<AttendanceService>,
    query: web::Query<AttendanceRecordsQuery>,
) -> Result<HttpResponse> {
    match attendance_service.records(&query).await {
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

pub fn attendance_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/attendance")
            .route("/sheet", web::get().to(get_sheet))
            .route("/save", web::post().to(save_attendance))
            .route("/records", web::get().to(get_records)),
    );
}
