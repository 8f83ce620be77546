use actix_web::{web, HttpResponse, Result, ResponseError};
use serde_json::json;
use uuid::Uuid;

use crate::models::*;
use crate::services::EventService;

#[utoipa::path(
    get,
    path = "/events",
    tag = "events",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Events ordered by date and time", body = [Event]),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn get_events(event_service: web::Data<EventService>) -> Result<HttpResponse> {
    let events = event_service.list().await;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": events
    })))
}

#[utoipa::path(
    post,
    path = "/events",
    tag = "events",
    request_body = CreateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event created", body = Event),
        (status = 400, description = "Missing fields or unknown recurrence")
    )
)]
pub async fn create_event(
    event_service: web::Data<EventService>,
    request: web::Json<CreateEventRequest>,
) -> Result<HttpResponse> {
    match event_service.create(request.into_inner()).await {
        Ok(event) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": event,
            "message": "Event created"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/events/{id}",
    tag = "events",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    request_body = UpdateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event updated", body = Event),
        (status = 404, description = "No such event")
    )
)]
pub async fn update_event(
    event_service: web::Data<EventService>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateEventRequest>,
) -> Result<HttpResponse> {
    match event_service.update(path.into_inner(), request.into_inner()).await {
        Ok(event) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": event,
            "message": "Event updated"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/events/{id}",
    tag = "events",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event deleted"),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn delete_event(
    event_service: web::Data<EventService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match event_service.delete(path.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "message": "Event deleted"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/events/{id}/notify",
    tag = "events",
    params(
        ("id" = Uuid, Path, description = "Event id")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event marked as notified", body = Event),
        (status = 404, description = "No such event")
    )
)]
pub async fn notify_event(
    event_service: web::Data<EventService>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match event_service.notify(path.into_inner()).await {
        Ok(event) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": event,
            "message": "Notification sent"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn event_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/events")
            .route("", web::get().to(get_events))
            .route("", web::post().to(create_event))
            .route("/{id}", web::put().to(update_event))
            .route("/{id}", web::delete().to(delete_event))
            .route("/{id}/notify", web::post().to(notify_event)),
    );
}
