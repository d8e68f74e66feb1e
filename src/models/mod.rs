pub mod event;
pub mod featured;

pub use event::{slugify, Event, NewEvent};
