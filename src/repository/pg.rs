use std::future::Future;
use std::sync::Arc;

use uuid::Uuid;

use crate::db::Database;
use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;
use crate::utils::error::AppError;

const INSERT_EVENT: &str = "INSERT INTO events \
     (id, title, description, location, event_date, event_time, image, slug) \
     VALUES ($1, $2, $3, $4, $5, $6, $7, $8)";

const LIST_RECENT_EVENTS: &str = "SELECT id, title, description, location, event_date, \
     event_time, image, slug, created_at FROM events ORDER BY created_at DESC";

#[derive(Clone)]
pub struct PgEventRepository {
    db: Arc<Database>,
}

impl PgEventRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

impl EventRepository for PgEventRepository {
    fn insert(&self, event: NewEvent) -> impl Future<Output = Result<Uuid, AppError>> + Send + '_ {
        async move {
            let pool = self.db.connect().await?;
            let id = Uuid::new_v4();

            sqlx::query(INSERT_EVENT)
                .bind(id)
                .bind(&event.title)
                .bind(&event.description)
                .bind(&event.location)
                .bind(&event.date)
                .bind(&event.time)
                .bind(&event.image)
                .bind(&event.slug)
                .execute(pool)
                .await
                .map_err(|e| map_insert_error(e, &event.slug))?;

            Ok(id)
        }
    }

    fn list_recent(&self) -> impl Future<Output = Result<Vec<Event>, AppError>> + Send + '_ {
        async move {
            let pool = self.db.connect().await?;

            sqlx::query_as::<_, Event>(LIST_RECENT_EVENTS)
                .fetch_all(pool)
                .await
                .map_err(|e| AppError::Persistence(e.into()))
        }
    }
}

fn map_insert_error(err: sqlx::Error, slug: &str) -> AppError {
    match err {
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
            AppError::Conflict(format!("an event with slug '{slug}' already exists"))
        }
        other => AppError::Persistence(other.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::config::DatabaseConfig;

    fn unreachable_repository() -> PgEventRepository {
        PgEventRepository::new(Arc::new(Database::from_config(&DatabaseConfig {
            url: "postgres://devevent@127.0.0.1:1/devevent".to_string(),
            max_connections: 1,
            acquire_timeout: Duration::from_secs(1),
        })))
    }

    #[tokio::test]
    async fn test_operations_fail_with_connection_error_when_store_is_down() {
        let repo = unreachable_repository();

        let err = repo.list_recent().await.unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));

        let err = repo.insert(NewEvent::new("Test Conf")).await.unwrap_err();
        assert!(matches!(err, AppError::Connection(_)));
    }

    #[test]
    fn test_non_constraint_errors_are_persistence_errors() {
        let err = map_insert_error(sqlx::Error::RowNotFound, "test-conf");
        assert_eq!(err.kind(), "persistence");
    }

    /// Runs against a live database when `DEVEVENT_TEST_DATABASE_URL` is set,
    /// and is skipped otherwise.
    #[tokio::test]
    async fn test_round_trip_against_live_postgres() {
        let Ok(url) = std::env::var("DEVEVENT_TEST_DATABASE_URL") else {
            return;
        };
        let db = Arc::new(Database::from_config(&DatabaseConfig {
            url,
            max_connections: 2,
            acquire_timeout: Duration::from_secs(5),
        }));
        let repo = PgEventRepository::new(db.clone());
        let run = Uuid::new_v4().simple().to_string();

        let mut older = NewEvent::new("Older Conf");
        older.slug = format!("older-conf-{run}");
        older.location = "Berlin".to_string();
        older.date = Some("May 23, 2026".to_string());
        older.time = Some("09:00 AM".to_string());
        let older_id = repo.insert(older.clone()).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;

        let mut newer = NewEvent::new("Newer Conf");
        newer.slug = format!("newer-conf-{run}");
        let newer_id = repo.insert(newer).await.unwrap();

        let events = repo.list_recent().await.unwrap();
        let newer_pos = events.iter().position(|e| e.id == newer_id).unwrap();
        let older_pos = events.iter().position(|e| e.id == older_id).unwrap();
        assert!(newer_pos < older_pos);

        let stored = &events[older_pos];
        assert_eq!(stored.slug, older.slug);
        assert_eq!(stored.location, "Berlin");
        assert_eq!(stored.date.as_deref(), Some("May 23, 2026"));
        assert_eq!(stored.time.as_deref(), Some("09:00 AM"));
        assert_eq!(stored.description, None);

        let err = repo.insert(older).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));

        db.close().await;
    }
}
