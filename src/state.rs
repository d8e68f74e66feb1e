use std::sync::Arc;

use crate::repository::EventRepository;
use crate::views::PageRenderer;

/// Shared per-process state handed to every handler.
pub struct AppState<R> {
    pub events: Arc<R>,
    pub pages: Arc<PageRenderer>,
}

impl<R: EventRepository> AppState<R> {
    pub fn new(events: Arc<R>, pages: PageRenderer) -> Self {
        Self {
            events,
            pages: Arc::new(pages),
        }
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            events: self.events.clone(),
            pages: self.pages.clone(),
        }
    }
}
