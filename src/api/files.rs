//! Case file preview endpoint.
//!
//! Proxies file requests to the configured case volume.

use actix_web::{HttpResponse, get, web};

use crate::services::FileGateway;

/// Stream a case file for inline preview.
///
/// `case_id` and `filename` must match the path used at upload time.
#[utoipa::path(
    get,
    path = "/api/cases/{case_id}/files/{filename}",
    tag = "Files",
    params(
        ("case_id" = String, Path, description = "Case identifier ([A-Za-z0-9-]+)"),
        ("filename" = String, Path, description = "File name; any directory prefix is ignored")
    ),
    responses(
        (status = 200, description = "File content (application/pdf or application/octet-stream)"),
        (status = 400, description = "Invalid case id or filename", body = crate::error::ErrorResponse),
        (status = 404, description = "File not found or empty", body = crate::error::ErrorResponse),
        (status = 500, description = "Volume not configured or download failed", body = crate::error::ErrorResponse)
    )
)]
#[get("/cases/{case_id}/files/{filename}")]
pub async fn get_case_file(
    gateway: web::Data<FileGateway>,
    path: web::Path<(String, String)>,
) -> HttpResponse {
    let (case_id, filename) = path.into_inner();
    gateway.handle(&case_id, &filename).await
}

/// Configure file routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(get_case_file);
}
