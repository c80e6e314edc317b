//! Book endpoints

use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, ResponseStatus},
    models::book::{Book, BookFilter, BookPayload, BookQuery, BookSummary},
};

use super::AppJson;

/// Body of a successful write that carries no data
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageResponse {
    fn success(message: &str) -> Self {
        Self {
            status: ResponseStatus::Success,
            message: message.to_string(),
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub status: ResponseStatus,
    pub message: String,
    pub data: BookIdData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: ResponseStatus,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookDetailResponse {
    pub status: ResponseStatus,
    pub data: BookData,
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book added", body = BookCreatedResponse),
        (status = 400, description = "Missing name or readPage greater than pageCount", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<BookCreatedResponse>)> {
    let book_id = state.services.books.create(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BookCreatedResponse {
            status: ResponseStatus::Success,
            message: "Book added successfully".to_string(),
            data: BookIdData { book_id },
        }),
    ))
}

/// List books, optionally filtered by name, reading and finished state
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books", body = BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<BookListResponse>> {
    let filter = BookFilter::from(query);
    let books = state.services.books.list(&filter).await?;

    Ok(Json(BookListResponse {
        status: ResponseStatus::Success,
        data: BookListData { books },
    }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookDetailResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookDetailResponse>> {
    let book = state.services.books.get_by_id(&book_id).await?;

    Ok(Json(BookDetailResponse {
        status: ResponseStatus::Success,
        data: BookData { book },
    }))
}

/// Replace a book
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = String, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name or readPage greater than pageCount", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    body: Bytes,
) -> AppResult<Json<MessageResponse>> {
    // Decoded by the service once the book is known to exist
    state.services.books.update_from_json(&book_id, &body).await?;
    Ok(Json(MessageResponse::success("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&book_id).await?;
    Ok(Json(MessageResponse::success("Book deleted successfully")))
}
