use actix_web::{get, web, HttpRequest, HttpResponse};
use chrono::Utc;

use crate::{
    app_state::AppState,
    models::dto::response::{
        configured_label, HealthResponse, NotFoundResponse, ServiceInfoResponse, ServiceStatuses,
    },
};

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(ServiceInfoResponse::current())
}

#[get("/health")]
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now(),
        services: ServiceStatuses {
            sendgrid: configured_label(state.config.sendgrid_configured()),
            twilio: configured_label(state.config.twilio_configured()),
            anthropic: configured_label(state.config.anthropic_configured()),
        },
    })
}

/// Catch-all for unknown routes.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(NotFoundResponse::for_path(req.path()))
}
