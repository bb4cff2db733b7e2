//! E2E tests: rejected, missing and failed downloads.

use std::sync::Arc;

use case_file_gateway_lib::services::StorageError;

use super::mock_volume::MockVolume;
use super::test_helpers::*;

/// Invalid case ids are rejected before the volume is touched.
#[actix_rt::test]
async fn test_invalid_case_id_rejected() {
    let volume = Arc::new(MockVolume::new());
    let app = create_test_app(volume.clone(), true).await;

    let (status, body) = get_json(&app, "/api/cases/case_1/files/summary.pdf").await;

    assert_eq!(status, 400);
    assert_eq!(body["detail"], "case_id contains invalid characters");
    assert!(volume.requested().is_empty());
}

/// Invalid filename characters are rejected.
#[actix_rt::test]
async fn test_invalid_filename_rejected() {
    let volume = Arc::new(MockVolume::new());
    let app = create_test_app(volume.clone(), true).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/bad*name.pdf").await;

    assert_eq!(status, 400);
    assert_eq!(body["detail"], "filename contains invalid characters");
    assert!(volume.requested().is_empty());
}

/// Whitespace-only identifiers are "required" failures.
#[actix_rt::test]
async fn test_blank_identifiers_rejected() {
    let volume = Arc::new(MockVolume::new());
    let app = create_test_app(volume.clone(), true).await;

    let (status, body) = get_json(&app, "/api/cases/%20%20/files/summary.pdf").await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "case_id required");

    let (status, body) = get_json(&app, "/api/cases/123456/files/%20").await;
    assert_eq!(status, 400);
    assert_eq!(body["detail"], "filename required");

    assert!(volume.requested().is_empty());
}

/// Dot-only filenames cannot address the case directory or its parent.
#[actix_rt::test]
async fn test_dot_only_filename_rejected() {
    let volume = Arc::new(MockVolume::new());
    let app = create_test_app(volume.clone(), true).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/...").await;

    assert_eq!(status, 400);
    assert_eq!(
        body["detail"],
        "filename must not be a relative directory reference"
    );
    assert!(volume.requested().is_empty());
}

/// Missing credentials yield 500 without calling the volume.
#[actix_rt::test]
async fn test_unconfigured_volume() {
    let volume = Arc::new(
        MockVolume::new().with_file(&key_for("123456", "summary.pdf"), b"%PDF"),
    );
    let app = create_test_app(volume.clone(), false).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/summary.pdf").await;

    assert_eq!(status, 500);
    assert_eq!(body["detail"], "Databricks not configured");
    assert!(volume.requested().is_empty());
}

/// Validation runs before the configuration check.
#[actix_rt::test]
async fn test_invalid_input_wins_over_missing_config() {
    let volume = Arc::new(MockVolume::new());
    let app = create_test_app(volume, false).await;

    let (status, _) = get_json(&app, "/api/cases/12.34/files/summary.pdf").await;

    assert_eq!(status, 400);
}

/// Empty payloads are treated as missing.
#[actix_rt::test]
async fn test_empty_file_is_not_found() {
    let volume = Arc::new(MockVolume::new().with_file(&key_for("123456", "summary.pdf"), b""));
    let app = create_test_app(volume, true).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/summary.pdf").await;

    assert_eq!(status, 404);
    assert_eq!(body["detail"], "File not found or empty");
}

/// Classified not-found errors map to 404.
#[actix_rt::test]
async fn test_missing_file_is_not_found() {
    let volume = Arc::new(MockVolume::new());
    let app = create_test_app(volume.clone(), true).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/summary.pdf").await;

    assert_eq!(status, 404);
    assert_eq!(body["detail"], "File not found");
    assert_eq!(volume.requested(), vec![key_for("123456", "summary.pdf")]);
}

/// Not-found detected from the error text also maps to 404.
#[actix_rt::test]
async fn test_textual_not_found_is_not_found() {
    let volume = Arc::new(MockVolume::new().with_error(
        &key_for("123456", "summary.pdf"),
        StorageError::Transfer("RESOURCE_DOES_NOT_EXIST: The file was not found".to_string()),
    ));
    let app = create_test_app(volume, true).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/summary.pdf").await;

    assert_eq!(status, 404);
    assert_eq!(body["detail"], "File not found");
}

/// Other failures become a generic 500 that hides the cause.
#[actix_rt::test]
async fn test_transfer_failure_is_generic() {
    let secret_detail = "403 Forbidden: token dapi-test-token rejected for /Volumes/legal";
    let volume = Arc::new(MockVolume::new().with_error(
        &key_for("123456", "summary.pdf"),
        StorageError::Transfer(secret_detail.to_string()),
    ));
    let app = create_test_app(volume, true).await;

    let (status, body) = get_json(&app, "/api/cases/123456/files/summary.pdf").await;

    assert_eq!(status, 500);
    assert_eq!(body["detail"], "Failed to download file");
    assert!(!body.to_string().contains("dapi-test-token"));
}
