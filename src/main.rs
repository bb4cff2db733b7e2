//! Case File Gateway - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{Level, error, info, warn};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use case_file_gateway_lib::config::{Config, REQUEST_ID_HEADER, defaults};
use case_file_gateway_lib::services::{FileGateway, build_storage_client};
use case_file_gateway_lib::{api, middleware};

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    // Simple check - just verify we can load config
    Config::from_env().is_ok()
}

fn build_cors(is_development: bool, origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::RANGE])
        .allowed_header(REQUEST_ID_HEADER)
        .expose_headers(vec![header::CONTENT_DISPOSITION])
        .max_age(3600);

    if is_development {
        for origin in defaults::DEV_CORS_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
    }
    for origin in origins {
        cors = cors.allowed_origin(origin);
    }
    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Check for --health-check flag (used by Docker HEALTHCHECK)
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|arg| arg == "--health-check") {
        dotenvy::dotenv().ok();
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - VOLUME_BACKEND must be 'databricks' or 's3'");
            error!("  - In production, S3 credentials must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Case File Gateway");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    info!(
        "Volume backend: {} (root: {})",
        config.volume.backend.display_name(),
        config.volume.root_path
    );
    if !config.volume.is_configured() {
        warn!(
            "{} credentials are missing; file requests will fail with 500 until configured",
            config.volume.backend.display_name()
        );
    }

    let client = match build_storage_client(&config.volume) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build storage client: {}", e);
            std::process::exit(1);
        }
    };
    let gateway = web::Data::new(FileGateway::new(config.volume.clone(), client));

    let bind_address = config.bind_address();
    let is_development = config.is_development();
    let cors_origins = config.cors_origins.clone();

    let worker_count = if is_development {
        info!(
            "Starting server at http://{} (4 workers - development mode)",
            bind_address
        );
        4
    } else {
        let cpus = num_cpus::get();
        info!(
            "Starting server at http://{} ({} workers)",
            bind_address, cpus
        );
        cpus
    };

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::RequestLogger)
            // Registered last so it runs first and answers preflight requests
            .wrap(build_cors(is_development, &cors_origins))
            .app_data(gateway.clone())
            .service(
                SwaggerUi::new("/api/docs/{_:.*}")
                    .url("/api/openapi.json", api::ApiDoc::openapi()),
            )
            .service(
                web::scope("/api")
                    .configure(api::configure_health_routes)
                    .configure(api::configure_file_routes),
            )
    });

    server
        .workers(worker_count)
        .bind(&bind_address)?
        .run()
        .await
}
