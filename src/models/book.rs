//! Book model

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};
use utoipa::{IntoParams, ToSchema};

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    /// Total number of pages
    pub page_count: u32,
    /// Pages read so far, never greater than `page_count`
    pub read_page: u32,
    /// True when `read_page == page_count`
    pub finished: bool,
    pub reading: bool,
    #[serde(serialize_with = "serialize_millis")]
    pub inserted_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_millis")]
    pub updated_at: DateTime<Utc>,
}

/// ISO 8601 in UTC with millisecond precision, e.g. `2024-01-31T08:15:00.123Z`
fn serialize_millis<S: Serializer>(at: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}

impl Book {
    /// Build a new record from an already validated payload.
    pub fn new(id: String, name: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            page_count: payload.page_count,
            read_page: payload.read_page,
            finished: payload.read_page == payload.page_count,
            reading: payload.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Rebuild this record from an already validated payload, keeping `id`
    /// and `inserted_at`.
    pub fn replaced_with(&self, name: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        Self {
            id: self.id.clone(),
            inserted_at: self.inserted_at,
            ..Self::new(String::new(), name, payload, now)
        }
    }
}

/// Create / update book request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Required, must not be empty
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    pub page_count: u32,
    #[serde(default)]
    pub read_page: u32,
    #[serde(default)]
    pub reading: bool,
}

/// Book as shown in listings
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

impl From<&Book> for BookSummary {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Raw list query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// "1" for books being read, anything else for the others
    pub reading: Option<String>,
    /// "1" for finished books, anything else for the others
    pub finished: Option<String>,
}

/// Filters applied when listing books. Every present condition must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub name: Option<String>,
    pub reading: Option<bool>,
    pub finished: Option<bool>,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(ref name) = self.name {
            if !book.name.to_lowercase().contains(name) {
                return false;
            }
        }
        if self.reading.is_some_and(|reading| book.reading != reading) {
            return false;
        }
        if self.finished.is_some_and(|finished| book.finished != finished) {
            return false;
        }
        true
    }
}

impl From<BookQuery> for BookFilter {
    fn from(query: BookQuery) -> Self {
        Self {
            name: query
                .name
                .filter(|name| !name.is_empty())
                .map(|name| name.to_lowercase()),
            reading: query.reading.map(|value| value == "1"),
            finished: query.finished.map(|value| value == "1"),
        }
    }
}
