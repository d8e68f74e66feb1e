//! Connection manager for the event store.
//!
//! A [`ConnectionManager`] owns at most one connection handle for its whole
//! lifetime. The handle is opened lazily by the first [`connect`] call;
//! callers that arrive while that attempt is still pending wait on it instead
//! of opening their own. A failed attempt leaves the manager empty so the next
//! call tries again; nothing is retried automatically.
//!
//! [`connect`]: ConnectionManager::connect

use std::future::Future;

use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::OnceCell;

use crate::config::DatabaseConfig;
use crate::utils::error::{AppError, BoxError};

/// Opens the underlying handle. Called at most once per successful connect.
pub trait Connector: Send + Sync {
    type Handle: Send + Sync;

    /// Failures to reach the store are [`AppError::Connection`]; anything
    /// that goes wrong once it answered is [`AppError::Persistence`].
    fn open(&self) -> impl Future<Output = Result<Self::Handle, AppError>> + Send + '_;
}

pub struct ConnectionManager<C: Connector> {
    connector: C,
    handle: OnceCell<C::Handle>,
}

impl<C: Connector> ConnectionManager<C> {
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            handle: OnceCell::new(),
        }
    }

    pub async fn connect(&self) -> Result<&C::Handle, AppError> {
        self.handle
            .get_or_try_init(|| async {
                tracing::info!("opening event store connection");
                let handle = self.connector.open().await?;
                tracing::info!("event store connection established");
                Ok::<_, AppError>(handle)
            })
            .await
            .map_err(|e| {
                tracing::error!(kind = e.kind(), error = %e, "event store connection failed");
                e
            })
    }

    /// The handle, if a previous [`connect`](Self::connect) succeeded.
    pub fn get(&self) -> Option<&C::Handle> {
        self.handle.get()
    }

    pub fn connector(&self) -> &C {
        &self.connector
    }
}

/// Opens a Postgres pool and brings the schema up to date.
pub struct PgConnector {
    config: DatabaseConfig,
}

impl PgConnector {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }
}

impl Connector for PgConnector {
    type Handle = PgPool;

    fn open(&self) -> impl Future<Output = Result<PgPool, AppError>> + Send + '_ {
        async move {
            let pool = PgPoolOptions::new()
                .max_connections(self.config.max_connections)
                .acquire_timeout(self.config.acquire_timeout)
                .connect(&self.config.url)
                .await
                .map_err(|e| AppError::Connection(e.into()))?;

            if let Err(e) = sqlx::migrate!().run(&pool).await {
                pool.close().await;
                return Err(migration_error(e));
            }
            tracing::info!("event store migrations applied");

            Ok::<_, AppError>(pool)
        }
    }
}

fn migration_error(err: MigrateError) -> AppError {
    AppError::Persistence(BoxError::from(format!("migration failed: {err}")))
}

pub type Database = ConnectionManager<PgConnector>;

impl Database {
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self::new(PgConnector::new(config.clone()))
    }

    /// Closes the pool if one was opened. Used on shutdown.
    pub async fn close(&self) {
        if let Some(pool) = self.get() {
            pool.close().await;
            tracing::info!("event store connection closed");
        }
    }
}
