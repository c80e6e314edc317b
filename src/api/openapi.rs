//! OpenAPI documentation

use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::api::books;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "1.0.0",
        description = "In-memory bookshelf REST API"
    ),
    paths(
        books::create_book,
        books::list_books,
        books::get_book,
        books::update_book,
        books::delete_book,
    ),
    components(
        schemas(
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookSummary,
            books::MessageResponse,
            books::BookIdData,
            books::BookCreatedResponse,
            books::BookListData,
            books::BookListResponse,
            books::BookData,
            books::BookDetailResponse,
            crate::error::ResponseStatus,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "books", description = "Bookshelf management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
