//! The `EventRepository` trait and its backends.
//!
//! The HTTP layer depends only on the trait. [`PgEventRepository`] is the
//! production backend; [`MemoryEventRepository`] keeps events in process and
//! backs the router tests.

use std::future::Future;

use uuid::Uuid;

use crate::models::{Event, NewEvent};
use crate::utils::error::AppError;

pub mod memory;
pub mod pg;

pub use memory::MemoryEventRepository;
pub use pg::PgEventRepository;

/// Highest numbered variant tried for a title-derived slug.
const MAX_SLUG_SUFFIX: u32 = 100;

/// Typed access to the `events` collection.
///
/// Reads always go to the backend; no implementation keeps an authoritative
/// copy of the events it has returned.
pub trait EventRepository: Send + Sync + 'static {
    /// Persist `event` and return its new id. A taken slug is an
    /// [`AppError::Conflict`].
    fn insert(&self, event: NewEvent) -> impl Future<Output = Result<Uuid, AppError>> + Send + '_;

    /// Every event, most recently created first.
    fn list_recent(&self) -> impl Future<Output = Result<Vec<Event>, AppError>> + Send + '_;

    /// [`insert`](Self::insert), numbering a title-derived slug
    /// (`rust-meetup-2`, `rust-meetup-3`, ...) until one is free. A taken
    /// submitter-chosen slug is still a conflict.
    fn insert_unique(
        &self,
        event: NewEvent,
    ) -> impl Future<Output = Result<(Uuid, String), AppError>> + Send + '_ {
        async move {
            let mut candidate = event.clone();
            let mut suffix = 1;
            loop {
                let slug = candidate.slug.clone();
                match self.insert(candidate).await {
                    Ok(id) => return Ok((id, slug)),
                    Err(AppError::Conflict(reason))
                        if event.derived_slug && suffix < MAX_SLUG_SUFFIX =>
                    {
                        tracing::debug!(%slug, %reason, "derived slug taken, numbering");
                        suffix += 1;
                        candidate = event.with_slug_suffix(suffix);
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }
}
