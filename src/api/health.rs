//! Health check endpoints.

use actix_web::{HttpResponse, get, web};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ErrorResponse;
use crate::services::FileGateway;

/// Health check response.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    status: &'static str,
    timestamp: String,
}

/// Readiness check response.
#[derive(Serialize, ToSchema)]
pub struct ReadyResponse {
    status: &'static str,
    volume: &'static str,
    backend: &'static str,
}

/// Health check endpoint.
///
/// Returns 200 if the service is running.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339(),
    })
}

/// Readiness check endpoint.
///
/// Returns 200 when volume credentials are present. Does not contact the volume.
#[utoipa::path(
    get,
    path = "/api/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Volume not configured", body = ErrorResponse)
    )
)]
#[get("/ready")]
pub async fn ready(gateway: web::Data<FileGateway>) -> HttpResponse {
    let backend = gateway.settings().backend.display_name();
    if gateway.settings().is_configured() {
        HttpResponse::Ok().json(ReadyResponse {
            status: "ready",
            volume: "configured",
            backend,
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ErrorResponse {
            detail: format!("{} not configured", backend),
        })
    }
}

/// Configure health routes.
pub fn configure_health_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health).service(ready);
}
