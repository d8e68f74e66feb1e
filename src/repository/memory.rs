use std::future::Future;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::{Event, NewEvent};
use crate::repository::EventRepository;
use crate::utils::error::AppError;

/// In-process event store with the same ordering and slug rules as the
/// Postgres backend.
#[derive(Default)]
pub struct MemoryEventRepository {
    events: RwLock<Vec<Event>>,
}

impl MemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventRepository for MemoryEventRepository {
    fn insert(&self, event: NewEvent) -> impl Future<Output = Result<Uuid, AppError>> + Send + '_ {
        async move {
            let mut events = self.events.write().await;
            if events.iter().any(|existing| existing.slug == event.slug) {
                return Err(AppError::Conflict(format!(
                    "an event with slug '{}' already exists",
                    event.slug
                )));
            }

            let id = Uuid::new_v4();
            events.push(Event {
                id,
                title: event.title,
                description: event.description,
                location: event.location,
                date: event.date,
                time: event.time,
                image: event.image,
                slug: event.slug,
                created_at: Utc::now(),
            });
            Ok(id)
        }
    }

    fn list_recent(&self) -> impl Future<Output = Result<Vec<Event>, AppError>> + Send + '_ {
        async move {
            // Newest insert first so equal timestamps keep insertion recency.
            let mut events: Vec<Event> = self.events.read().await.iter().rev().cloned().collect();
            events.sort_by(|a, b| b.created_at.cmp(&a.created_at));
            Ok(events)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_is_newest_first() {
        let repo = MemoryEventRepository::new();
        let first = repo.insert(NewEvent::new("First Meetup")).await.unwrap();
        let second = repo.insert(NewEvent::new("Second Meetup")).await.unwrap();
        let third = repo.insert(NewEvent::new("Third Meetup")).await.unwrap();

        let events = repo.list_recent().await.unwrap();
        let ids: Vec<Uuid> = events.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third, second, first]);
        assert!(events
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at));
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_a_conflict() {
        let repo = MemoryEventRepository::new();
        repo.insert(NewEvent::new("Test Conf")).await.unwrap();

        let err = repo.insert(NewEvent::new("test conf")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list_recent().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_store_lists_nothing() {
        let repo = MemoryEventRepository::new();
        assert!(repo.list_recent().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_unique_numbers_a_taken_title_slug() {
        let repo = MemoryEventRepository::new();
        let (_, first) = repo.insert_unique(NewEvent::new("Rust Meetup")).await.unwrap();
        let (_, second) = repo.insert_unique(NewEvent::new("Rust Meetup")).await.unwrap();
        let (_, third) = repo.insert_unique(NewEvent::new("rust meetup")).await.unwrap();

        assert_eq!(first, "rust-meetup");
        assert_eq!(second, "rust-meetup-2");
        assert_eq!(third, "rust-meetup-3");
    }

    #[tokio::test]
    async fn test_insert_unique_keeps_an_explicit_slug_conflict() {
        let repo = MemoryEventRepository::new();
        repo.insert(NewEvent::new("Rust Meetup")).await.unwrap();

        let mut chosen = NewEvent::new("Another Meetup");
        chosen.slug = "rust-meetup".to_string();
        chosen.derived_slug = false;
        let err = repo.insert_unique(chosen).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.list_recent().await.unwrap().len(), 1);
    }
}
