//! Case file gateway E2E test suite.
//!
//! Drives the actix app end to end against an in-memory volume, so no
//! Databricks workspace or S3 bucket is needed.
//!
//! Run with: cargo test --test gateway

mod mock_volume;
mod test_helpers;

mod test_file_errors;
