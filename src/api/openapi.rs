//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Case File Gateway",
        version = "0.1.0",
        description = "Inline preview of case files stored in a Databricks volume or S3 bucket"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        api::health::health,
        api::health::ready,
        api::files::get_case_file,
    ),
    components(
        schemas(
            error::ErrorResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Files", description = "Case file preview")
    )
)]
pub struct ApiDoc;
