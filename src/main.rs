//! Prints the dashboard snapshot as JSON.
//!
//! Usage: `kpi-dashboard [YYYY-MM-DD]`. Without a date, "today" is taken from
//! the system clock in the configured reporting timezone.

use chrono::NaiveDate;
use std::error::Error;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kpi_dashboard::adapters::{
    PostgresProductionLedger, PostgresSalesLedger, PostgresSettingsRepository, SystemClock,
};
use kpi_dashboard::application::{ComputeDashboardSnapshotHandler, ComputeDashboardSnapshotQuery};
use kpi_dashboard::config::{AppConfig, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging)?;

    let pool = config
        .database
        .pool_options()
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Migrations applied");
    }

    let handler = ComputeDashboardSnapshotHandler::new(
        Arc::new(PostgresSettingsRepository::new(pool.clone())),
        Arc::new(PostgresSalesLedger::new(pool.clone())),
        Arc::new(PostgresProductionLedger::new(pool)),
        config.reporting.bands(),
    );

    let query = match std::env::args().nth(1) {
        Some(arg) => ComputeDashboardSnapshotQuery {
            today: NaiveDate::parse_from_str(&arg, "%Y-%m-%d")?,
        },
        None => ComputeDashboardSnapshotQuery::for_now(&config.reporting.calendar()?, &SystemClock),
    };

    info!(today = %query.today, timezone = %config.reporting.timezone, "Computing dashboard");

    let snapshot = handler.handle(query).await?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let json = logging.json;

    tracing_subscriber::registry()
        .with(logging.env_filter()?)
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .try_init()?;

    Ok(())
}
