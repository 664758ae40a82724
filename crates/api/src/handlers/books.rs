//! Handlers for the `/authors/{author_id}/books` resource.
//!
//! Books are a child resource: every route first checks the parent
//! author and answers 404 when it is missing. PUT and PATCH upsert —
//! a request against a nonexistent book creates it under the given ID
//! and answers 201.

use std::collections::BTreeMap;

use alexandria_core::CoreError;
use alexandria_db::models::{Book, BookForManipulation, CreateBook};
use alexandria_db::repositories::{AuthorRepo, BookRepo};
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use uuid::Uuid;

use crate::dto::BookDto;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

const MAX_TITLE_LEN: usize = 100;
const MAX_DESCRIPTION_LEN: usize = 500;

/// GET /authors/{author_id}/books
pub async fn list_for_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    ensure_author_exists(&state, author_id).await?;

    let books = BookRepo::list_for_author(&state.pool, author_id).await?;
    let dtos: Vec<BookDto> = books.into_iter().map(BookDto::from).collect();

    Ok(Json(DataResponse { data: dtos }))
}

/// GET /authors/{author_id}/books/{book_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    ensure_author_exists(&state, author_id).await?;

    let book = find_book(&state, author_id, book_id).await?;
    Ok(Json(DataResponse {
        data: BookDto::from(book),
    }))
}

/// POST /authors/{author_id}/books
pub async fn create(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
    Json(input): Json<CreateBook>,
) -> AppResult<impl IntoResponse> {
    validate_book(&input.title, input.description.as_deref())?;
    ensure_author_exists(&state, author_id).await?;

    let created = BookRepo::create(&state.pool, author_id, &input).await?;
    Ok(created_response(author_id, BookDto::from(created)))
}

/// PUT /authors/{author_id}/books/{book_id}
///
/// Full update. Upserts: responds 201 with the created book when no
/// book with that ID exists for the author, 204 otherwise.
pub async fn update(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
    Json(input): Json<BookForManipulation>,
) -> AppResult<Response> {
    validate_book(&input.title, input.description.as_deref())?;
    ensure_author_exists(&state, author_id).await?;

    match BookRepo::update_for_author(&state.pool, author_id, book_id, &input).await? {
        Some(_) => Ok(StatusCode::NO_CONTENT.into_response()),
        None => {
            let created = BookRepo::create_with_id(&state.pool, author_id, book_id, &input).await?;
            Ok(created_response(author_id, BookDto::from(created)).into_response())
        }
    }
}

/// PATCH /authors/{author_id}/books/{book_id}
///
/// Applies an RFC 6902 patch document to the book's updatable
/// representation. Upserts like PUT: a patch against a missing book is
/// applied to an empty representation and the result is created under
/// the given ID. The patched result passes the same validation as
/// PUT/POST bodies.
pub async fn patch(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
    Json(patch_doc): Json<json_patch::Patch>,
) -> AppResult<Response> {
    ensure_author_exists(&state, author_id).await?;

    let existing = BookRepo::find_for_author(&state.pool, author_id, book_id).await?;

    let base = match &existing {
        Some(book) => BookForManipulation {
            title: book.title.clone(),
            description: book.description.clone(),
        },
        None => BookForManipulation::default(),
    };

    let patched = apply_patch(base, &patch_doc)?;
    validate_book(&patched.title, patched.description.as_deref())?;

    match existing {
        Some(_) => {
            BookRepo::update_for_author(&state.pool, author_id, book_id, &patched).await?;
            Ok(StatusCode::NO_CONTENT.into_response())
        }
        None => {
            let created =
                BookRepo::create_with_id(&state.pool, author_id, book_id, &patched).await?;
            Ok(created_response(author_id, BookDto::from(created)).into_response())
        }
    }
}

/// DELETE /authors/{author_id}/books/{book_id}
pub async fn delete(
    State(state): State<AppState>,
    Path((author_id, book_id)): Path<(Uuid, Uuid)>,
) -> AppResult<impl IntoResponse> {
    ensure_author_exists(&state, author_id).await?;

    let deleted = BookRepo::delete_for_author(&state.pool, author_id, book_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "book",
            id: book_id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_author_exists(state: &AppState, author_id: Uuid) -> AppResult<()> {
    if !AuthorRepo::exists(&state.pool, author_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "author",
            id: author_id,
        }));
    }
    Ok(())
}

async fn find_book(state: &AppState, author_id: Uuid, book_id: Uuid) -> AppResult<Book> {
    BookRepo::find_for_author(&state.pool, author_id, book_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "book",
                id: book_id,
            })
        })
}

fn created_response(author_id: Uuid, dto: BookDto) -> impl IntoResponse {
    let location = format!("/api/v1/authors/{author_id}/books/{}", dto.id);
    (
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: dto }),
    )
}

/// Apply an RFC 6902 document to the updatable book representation.
/// Malformed documents (bad paths, failed test ops) are client errors.
fn apply_patch(
    base: BookForManipulation,
    patch_doc: &json_patch::Patch,
) -> Result<BookForManipulation, AppError> {
    let mut value = serde_json::to_value(base)
        .map_err(|e| AppError::InternalError(format!("serializing book for patch: {e}")))?;

    json_patch::patch(&mut value, patch_doc)
        .map_err(|e| AppError::BadRequest(format!("invalid JSON patch document: {e}")))?;

    serde_json::from_value(value)
        .map_err(|e| AppError::BadRequest(format!("patched book is not valid: {e}")))
}

/// Validate the book manipulation rules shared by POST, PUT, and PATCH.
///
/// Collects every violation into a field -> messages map so clients
/// can fix all problems in one round trip.
fn validate_book(title: &str, description: Option<&str>) -> Result<(), AppError> {
    let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();

    let trimmed_title = title.trim();
    if trimmed_title.is_empty() {
        errors
            .entry("title".to_string())
            .or_default()
            .push("You should fill out a title.".to_string());
    } else if title.chars().count() > MAX_TITLE_LEN {
        errors
            .entry("title".to_string())
            .or_default()
            .push(format!(
                "The title shouldn't have more than {MAX_TITLE_LEN} characters."
            ));
    }

    if let Some(description) = description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            errors
                .entry("description".to_string())
                .or_default()
                .push(format!(
                    "The description shouldn't have more than {MAX_DESCRIPTION_LEN} characters."
                ));
        }
        if !trimmed_title.is_empty() && description.trim() == trimmed_title {
            errors
                .entry("description".to_string())
                .or_default()
                .push("The provided description should be different from the title.".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::UnprocessableEntity(errors))
    }
}
