use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::error::AppError;

/// A persisted event listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    #[sqlx(rename = "event_date")]
    pub date: Option<String>,
    #[sqlx(rename = "event_time")]
    pub time: Option<String>,
    pub image: Option<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// A validated create request. Only `title` is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: Option<String>,
    pub location: String,
    pub date: Option<String>,
    pub time: Option<String>,
    pub image: Option<String>,
    pub slug: String,
    /// `slug` came from the title rather than the submitter, so a numbered
    /// variant may stand in for it on collision.
    pub derived_slug: bool,
}

impl NewEvent {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            slug: slugify(&title),
            title,
            description: None,
            location: String::new(),
            date: None,
            time: None,
            image: None,
            derived_slug: true,
        }
    }

    /// Copy of this event using the `n`th numbered variant of its slug.
    pub fn with_slug_suffix(&self, n: u32) -> Self {
        Self {
            slug: format!("{}-{n}", self.slug),
            ..self.clone()
        }
    }

    /// Validates submitted form fields. Unknown fields are ignored and blank
    /// values count as absent.
    pub fn from_fields(mut fields: HashMap<String, String>) -> Result<Self, AppError> {
        let mut take = |key: &str| {
            fields
                .remove(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let title = take("title")
            .ok_or_else(|| AppError::Validation("title is required".to_string()))?;

        let explicit_slug = take("slug");
        let derived_slug = explicit_slug.is_none();
        let slug = match explicit_slug {
            Some(slug) => {
                let normalized = slugify(&slug);
                if normalized != slug {
                    return Err(AppError::Validation(format!(
                        "slug '{slug}' may only contain lowercase letters, digits and dashes"
                    )));
                }
                slug
            }
            None => slugify(&title),
        };
        if slug.is_empty() {
            return Err(AppError::Validation(
                "title must contain at least one letter or digit".to_string(),
            ));
        }

        Ok(Self {
            description: take("description"),
            location: take("location").unwrap_or_default(),
            date: take("date"),
            time: take("time"),
            image: take("image"),
            title,
            slug,
            derived_slug,
        })
    }
}

/// Lowercase ASCII letters and digits, with every other run of characters
/// collapsed to a single `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
