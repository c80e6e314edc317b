//! Bookshelf service: validation, filtering and in-memory CRUD

use chrono::Utc;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookFilter, BookPayload, BookSummary},
    repository::Repository,
};

/// Write operation a validation failure is reported for
#[derive(Debug, Clone, Copy)]
enum WriteAction {
    Add,
    Update,
}

impl WriteAction {
    fn failure_prefix(self) -> &'static str {
        match self {
            WriteAction::Add => "Failed to add book",
            WriteAction::Update => "Failed to update book",
        }
    }
}

/// Check the payload and hand back the book name it carries.
///
/// The name is checked before the page bounds.
fn validate(payload: &BookPayload, action: WriteAction) -> AppResult<String> {
    let name = match payload.name.as_deref() {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => {
            return Err(AppError::Validation(format!(
                "{}. Please provide the book name",
                action.failure_prefix()
            )))
        }
    };

    if payload.read_page > payload.page_count {
        return Err(AppError::Validation(format!(
            "{}. readPage must not be greater than pageCount",
            action.failure_prefix()
        )));
    }

    Ok(name)
}

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Add a book and return its generated id
    pub async fn create(&self, payload: BookPayload) -> AppResult<String> {
        let name = validate(&payload, WriteAction::Add).map_err(|e| {
            tracing::debug!("Book rejected: {}", e);
            e
        })?;

        let id = Uuid::new_v4().to_string();
        let book = Book::new(id.clone(), name, payload, Utc::now());

        let mut shelf = self.repository.lock().await;
        shelf.append(book);
        tracing::info!("Book {} added ({} on shelf)", id, shelf.len());

        Ok(id)
    }

    /// List books matching every condition of `filter`, in insertion order
    pub async fn list(&self, filter: &BookFilter) -> AppResult<Vec<BookSummary>> {
        let shelf = self.repository.lock().await;
        let books: Vec<BookSummary> = shelf
            .books()
            .iter()
            .filter(|book| filter.matches(book))
            .map(BookSummary::from)
            .collect();

        tracing::debug!("Listed {} of {} books with {:?}", books.len(), shelf.len(), filter);
        Ok(books)
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        let shelf = self.repository.lock().await;
        shelf
            .position(id)
            .and_then(|position| shelf.get(position))
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Replace every field of a book except its id and insertion time.
    ///
    /// Existence is checked before the payload is validated.
    pub async fn update(&self, id: &str, payload: BookPayload) -> AppResult<()> {
        self.update_with(id, move || Ok(payload)).await
    }

    /// Same as [`update`](Self::update) for a raw JSON body, which is only
    /// decoded once the book is known to exist.
    pub async fn update_from_json(&self, id: &str, body: &[u8]) -> AppResult<()> {
        self.update_with(id, || Ok(serde_json::from_slice::<BookPayload>(body)?))
            .await
    }

    async fn update_with<F>(&self, id: &str, decode: F) -> AppResult<()>
    where
        F: FnOnce() -> AppResult<BookPayload>,
    {
        let mut shelf = self.repository.lock().await;

        let (position, current) = shelf
            .position(id)
            .and_then(|position| shelf.get(position).map(|book| (position, book)))
            .ok_or_else(|| AppError::NotFound("Failed to update book. Id not found".to_string()))?;

        let (name, payload) = decode()
            .and_then(|payload| Ok((validate(&payload, WriteAction::Update)?, payload)))
            .map_err(|e| {
                tracing::debug!("Update of book {} rejected: {}", id, e);
                e
            })?;

        let updated = current.replaced_with(name, payload, Utc::now());
        shelf.replace(position, updated);
        tracing::info!("Book {} updated", id);

        Ok(())
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut shelf = self.repository.lock().await;

        let position = shelf
            .position(id)
            .ok_or_else(|| AppError::NotFound("Failed to delete book. Id not found".to_string()))?;

        shelf.remove(position);
        tracing::info!("Book {} deleted ({} left on shelf)", id, shelf.len());

        Ok(())
    }
}
