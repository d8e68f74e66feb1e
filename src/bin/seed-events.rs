//! Inserts the featured events into the configured store.
//!
//! Events whose slug is already taken are skipped, so the seed can be re-run.

use std::process::ExitCode;
use std::sync::Arc;

use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use devevent_server::config::Config;
use devevent_server::db::Database;
use devevent_server::models::featured::FEATURED_EVENTS;
use devevent_server::repository::{EventRepository, PgEventRepository};
use devevent_server::utils::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "refusing to seed");
            return ExitCode::FAILURE;
        }
    };

    let database = Arc::new(Database::from_config(&config.database));
    let repo = PgEventRepository::new(database.clone());

    let mut inserted = 0;
    let mut skipped = 0;
    let mut status = ExitCode::SUCCESS;

    for featured in FEATURED_EVENTS {
        match repo.insert(featured.to_new_event()).await {
            Ok(id) => {
                tracing::info!(%id, slug = featured.slug, "seeded event");
                inserted += 1;
            }
            Err(AppError::Conflict(reason)) => {
                tracing::info!(slug = featured.slug, %reason, "skipping existing event");
                skipped += 1;
            }
            Err(e) => {
                tracing::error!(slug = featured.slug, error = %e, "seeding failed");
                status = ExitCode::FAILURE;
                break;
            }
        }
    }

    database.close().await;
    tracing::info!(inserted, skipped, "seed finished");
    status
}
