//! Shared test helpers for gateway E2E tests.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, dev::ServiceResponse, test, web};
use case_file_gateway_lib::config::{
    DatabricksSettings, S3Config, VolumeBackend, VolumeSettings,
};
use case_file_gateway_lib::services::FileGateway;
use case_file_gateway_lib::{api, middleware};
use secrecy::SecretString;
use serde_json::Value;

use super::mock_volume::MockVolume;

/// Volume root used by every test.
pub const TEST_ROOT: &str = "/Volumes/legal/cases/rag_pdfs";

/// Storage key the gateway should build for a case file.
pub fn key_for(case_id: &str, filename: &str) -> String {
    format!("{}/{}/{}", TEST_ROOT, case_id, filename)
}

/// Databricks volume settings, with or without credentials.
pub fn volume_settings(configured: bool) -> VolumeSettings {
    VolumeSettings {
        backend: VolumeBackend::Databricks,
        root_path: TEST_ROOT.to_string(),
        databricks: DatabricksSettings {
            host: configured.then(|| "https://adb-test.azuredatabricks.net".to_string()),
            token: configured.then(|| SecretString::from("dapi-test-token".to_string())),
            connect_timeout: Duration::from_secs(1),
            request_timeout: Duration::from_secs(1),
        },
        s3: S3Config {
            endpoint: None,
            bucket: String::new(),
            region: "us-east-1".to_string(),
            access_key: String::new(),
            secret_key: SecretString::from(String::new()),
        },
    }
}

/// Create a test gateway app backed by `volume`.
pub async fn create_test_app(
    volume: Arc<MockVolume>,
    configured: bool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    let gateway = FileGateway::new(volume_settings(configured), volume);

    test::init_service(
        App::new()
            .wrap(middleware::RequestLogger)
            .app_data(web::Data::new(gateway))
            .service(
                web::scope("/api")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_file_routes),
            ),
    )
    .await
}

/// Raw GET returning the service response.
pub async fn get<S>(app: &S, uri: &str) -> ServiceResponse
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    test::call_service(app, req).await
}

/// GET expecting a JSON body.
pub async fn get_json<S>(app: &S, uri: &str) -> (u16, Value)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let resp = get(app, uri).await;
    let status = resp.status().as_u16();
    let body: Value = test::read_body_json(resp).await;
    (status, body)
}

/// Header value as a string, if present.
pub fn header(resp: &ServiceResponse, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
