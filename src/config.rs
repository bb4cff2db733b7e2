//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

/// HTTP header used to correlate a request across log lines.
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Development default values - NEVER use in production.
pub mod defaults {
    pub const DEV_HOST: &str = "127.0.0.1";
    pub const DEV_PORT: u16 = 8000;
    pub const DEV_VOLUME_PATH: &str = "/Volumes/main/default/case_files";
    pub const DEV_CONNECT_TIMEOUT_SECS: u64 = 10;
    pub const DEV_REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Frontend dev servers allowed to call the API in development.
    pub const DEV_CORS_ORIGINS: &[&str] = &[
        "http://localhost:5173",
        "http://127.0.0.1:5173",
        "http://localhost:3000",
        "http://127.0.0.1:3000",
    ];

    // S3/MinIO defaults for development
    pub const DEV_S3_ENDPOINT: &str = "http://localhost:9100";
    pub const DEV_S3_BUCKET: &str = "case-files";
    pub const DEV_S3_REGION: &str = "us-east-1";
    pub const DEV_S3_ACCESS_KEY: &str = "minioadmin";
    pub const DEV_S3_SECRET_KEY: &str = "minioadmin";
}

/// Runtime environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Parse environment from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    /// Check if this is a development environment.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Check if this is a production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Which remote store backs the case volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeBackend {
    Databricks,
    S3,
}

impl VolumeBackend {
    /// Parse backend from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "databricks" => Some(Self::Databricks),
            "s3" | "minio" => Some(Self::S3),
            _ => None,
        }
    }

    /// Human readable name used in client-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Databricks => "Databricks",
            Self::S3 => "S3 storage",
        }
    }
}

/// Databricks workspace credentials.
#[derive(Clone)]
pub struct DatabricksSettings {
    /// Workspace host, e.g. `https://adb-123.4.azuredatabricks.net`
    pub host: Option<String>,
    /// Personal access token
    pub token: Option<SecretString>,
    /// TCP connect timeout for the Files API client
    pub connect_timeout: Duration,
    /// Whole-request timeout for the Files API client
    pub request_timeout: Duration,
}

impl DatabricksSettings {
    /// Host and token are both present and non-blank.
    pub fn is_configured(&self) -> bool {
        let host_ok = self.host.as_deref().is_some_and(|h| !h.trim().is_empty());
        let token_ok = self
            .token
            .as_ref()
            .is_some_and(|t| !t.expose_secret().trim().is_empty());
        host_ok && token_ok
    }
}

impl std::fmt::Debug for DatabricksSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabricksSettings")
            .field("host", &self.host)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("connect_timeout", &self.connect_timeout)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// S3 storage configuration.
#[derive(Clone)]
pub struct S3Config {
    /// S3 endpoint URL (for MinIO or custom S3-compatible services)
    pub endpoint: Option<String>,
    /// S3 bucket name
    pub bucket: String,
    /// S3 region
    pub region: String,
    /// S3 access key ID
    pub access_key: String,
    /// S3 secret access key
    pub secret_key: SecretString,
}

impl S3Config {
    /// Bucket and both key halves are present.
    pub fn is_configured(&self) -> bool {
        !self.bucket.trim().is_empty()
            && !self.access_key.trim().is_empty()
            && !self.secret_key.expose_secret().trim().is_empty()
    }
}

impl std::fmt::Debug for S3Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("S3Config")
            .field("endpoint", &self.endpoint)
            .field("bucket", &self.bucket)
            .field("region", &self.region)
            .field("access_key", &self.access_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Everything the gateway needs to address the case volume.
#[derive(Debug, Clone)]
pub struct VolumeSettings {
    /// Selected backend
    pub backend: VolumeBackend,
    /// Root under which `{case_id}/{filename}` keys live
    pub root_path: String,
    /// Databricks credentials (used when `backend` is Databricks)
    pub databricks: DatabricksSettings,
    /// S3 settings (used when `backend` is S3)
    pub s3: S3Config,
}

impl VolumeSettings {
    /// Whether the selected backend has the credentials it needs.
    pub fn is_configured(&self) -> bool {
        match self.backend {
            VolumeBackend::Databricks => self.databricks.is_configured(),
            VolumeBackend::S3 => self.s3.is_configured(),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment
    pub environment: Environment,
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Origins allowed by CORS in production (empty = same origin only)
    pub cors_origins: Vec<String>,
    /// Case volume configuration
    pub volume: VolumeSettings,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Missing volume credentials are not an error here: the server still
    /// starts and reports the volume as unconfigured per request.
    ///
    /// Environment variables:
    /// - `RUST_ENV`: Environment (development/production) - REQUIRED
    /// - `GATEWAY_HOST`: Server host (default: 127.0.0.1)
    /// - `GATEWAY_PORT`: Server port (default: 8000)
    /// - `GATEWAY_CORS_ORIGINS`: Comma separated origins allowed in production
    /// - `VOLUME_BACKEND`: `databricks` (default) or `s3`
    /// - `VOLUME_PATH`: Root path of the case volume
    /// - `DATABRICKS_HOST`: Databricks workspace host
    /// - `DATABRICKS_TOKEN`: Databricks personal access token
    /// - `VOLUME_CONNECT_TIMEOUT_SECS`: Files API connect timeout (default: 10)
    /// - `VOLUME_REQUEST_TIMEOUT_SECS`: Files API request timeout (default: 60)
    /// - `S3_ENDPOINT`: S3 endpoint URL (for MinIO/custom S3)
    /// - `S3_BUCKET`: S3 bucket name
    /// - `S3_REGION`: S3 region
    /// - `S3_ACCESS_KEY`: S3 access key ID
    /// - `S3_SECRET_KEY`: S3 secret access key
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_str = env::var("RUST_ENV").map_err(|_| ConfigError::MissingEnvVar("RUST_ENV"))?;

        let environment = Environment::parse(&env_str).ok_or(ConfigError::InvalidValue(
            "RUST_ENV must be 'development' or 'production'",
        ))?;

        let host = env::var("GATEWAY_HOST").unwrap_or_else(|_| defaults::DEV_HOST.to_string());

        let port = env::var("GATEWAY_PORT")
            .unwrap_or_else(|_| defaults::DEV_PORT.to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidValue("GATEWAY_PORT must be a valid port number"))?;

        let cors_origins = env::var("GATEWAY_CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let backend = match env::var("VOLUME_BACKEND") {
            Ok(raw) => VolumeBackend::parse(&raw).ok_or(ConfigError::InvalidValue(
                "VOLUME_BACKEND must be 'databricks' or 's3'",
            ))?,
            Err(_) => VolumeBackend::Databricks,
        };

        let root_path =
            env::var("VOLUME_PATH").unwrap_or_else(|_| defaults::DEV_VOLUME_PATH.to_string());

        let connect_timeout_secs = env::var("VOLUME_CONNECT_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DEV_CONNECT_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("VOLUME_CONNECT_TIMEOUT_SECS must be a valid number")
            })?;

        let request_timeout_secs = env::var("VOLUME_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults::DEV_REQUEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::InvalidValue("VOLUME_REQUEST_TIMEOUT_SECS must be a valid number")
            })?;

        let databricks = DatabricksSettings {
            host: env::var("DATABRICKS_HOST").ok(),
            token: env::var("DATABRICKS_TOKEN").ok().map(SecretString::from),
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            request_timeout: Duration::from_secs(request_timeout_secs),
        };

        // Dev defaults only apply in development; production must set them
        let dev_or_empty = |default: &str| {
            if environment.is_development() {
                default.to_string()
            } else {
                String::new()
            }
        };

        let s3 = S3Config {
            endpoint: env::var("S3_ENDPOINT").ok().or_else(|| {
                if environment.is_development() {
                    Some(defaults::DEV_S3_ENDPOINT.to_string())
                } else {
                    None
                }
            }),
            bucket: env::var("S3_BUCKET").unwrap_or_else(|_| defaults::DEV_S3_BUCKET.to_string()),
            region: env::var("S3_REGION").unwrap_or_else(|_| defaults::DEV_S3_REGION.to_string()),
            access_key: env::var("S3_ACCESS_KEY")
                .unwrap_or_else(|_| dev_or_empty(defaults::DEV_S3_ACCESS_KEY)),
            secret_key: SecretString::from(
                env::var("S3_SECRET_KEY")
                    .unwrap_or_else(|_| dev_or_empty(defaults::DEV_S3_SECRET_KEY)),
            ),
        };

        let config = Config {
            environment,
            host,
            port,
            cors_origins,
            volume: VolumeSettings {
                backend,
                root_path,
                databricks,
                s3,
            },
        };

        if environment.is_production() {
            config.validate_production()?;
        }

        Ok(config)
    }

    /// Validate that production configuration does not use development defaults.
    fn validate_production(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if self.volume.backend == VolumeBackend::S3
            && (self.volume.s3.access_key == defaults::DEV_S3_ACCESS_KEY
                || self.volume.s3.secret_key.expose_secret() == defaults::DEV_S3_SECRET_KEY)
        {
            errors.push(
                "S3_ACCESS_KEY/S3_SECRET_KEY are using development defaults. Set production S3 credentials."
                    .to_string(),
            );
        }

        if self.volume.root_path.trim().is_empty() {
            errors.push("VOLUME_PATH must not be empty.".to_string());
        }

        if !errors.is_empty() {
            return Err(ConfigError::ProductionValidation(errors));
        }

        Ok(())
    }

    /// Get the server bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check if running in development mode.
    pub fn is_development(&self) -> bool {
        self.environment.is_development()
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| o.trim_end_matches('/').to_string())
        .collect()
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Invalid configuration value: {0}")]
    InvalidValue(&'static str),

    #[error("Production configuration validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    ProductionValidation(Vec<String>),
}
