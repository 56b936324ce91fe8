//! Locatech API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use locatech::application::services::{RentalService, VehicleService};
use locatech::infrastructure::driven_adapters::config::AppConfig;
use locatech::infrastructure::driven_adapters::database::{create_pool, run_migrations};
use locatech::infrastructure::driven_adapters::{PostgresRentalRepository, PostgresVehicleRepository};
use locatech::infrastructure::driving_adapters::api_rest::{self, AppState};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "locatech=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json")) {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repositories
    let vehicle_repository = Arc::new(PostgresVehicleRepository::new(pool.clone()));
    let rental_repository = Arc::new(PostgresRentalRepository::new(pool));

    // Create services
    let max_page_size = config.pagination.max_page_size;
    let vehicle_service = Arc::new(VehicleService::new(vehicle_repository.clone(), max_page_size));
    let rental_service = Arc::new(RentalService::new(rental_repository, vehicle_repository, max_page_size));

    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app = api_rest::router(AppState {
        config: Arc::new(config),
        vehicle_service,
        rental_service,
    });

    // Start server
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
