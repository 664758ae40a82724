//! Handlers for the `/authors` resource.

use alexandria_core::query::{has_fields, shape, shape_collection};
use alexandria_core::CoreError;
use alexandria_db::models::{AuthorPageQuery, CreateAuthor};
use alexandria_db::repositories::AuthorRepo;
use axum::extract::{Path, Query, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::dto::author::{self, AuthorDto};
use crate::error::{AppError, AppResult};
use crate::pagination::PaginationMetadata;
use crate::query::{AuthorListParams, FieldsParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Base path used in Location headers and pagination links.
pub const AUTHORS_PATH: &str = "/api/v1/authors";

/// GET /authors
///
/// Paged, sortable, searchable author listing with data shaping.
/// `orderBy` and `fields` are validated before any repository call;
/// pagination metadata is emitted in the `X-Pagination` header.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<AuthorListParams>,
) -> AppResult<impl IntoResponse> {
    if !state.sort_mappings.is_valid_order_expression(
        author::SORT_SOURCE,
        author::SORT_TARGET,
        &params.order_by,
    ) {
        return Err(AppError::BadRequest(format!(
            "orderBy contains unknown sort fields: {}",
            params.order_by
        )));
    }

    if !has_fields::<AuthorDto>(params.fields.as_deref()) {
        return Err(AppError::BadRequest(format!(
            "fields contains unknown field names: {}",
            params.fields.as_deref().unwrap_or_default()
        )));
    }

    let order =
        state
            .sort_mappings
            .translate(author::SORT_SOURCE, author::SORT_TARGET, &params.order_by);

    let page = AuthorRepo::list_page(
        &state.pool,
        &AuthorPageQuery {
            genre: params.genre.clone(),
            search_query: params.search_query.clone(),
            order,
            page_number: params.page_number,
            page_size: params.page_size,
        },
    )
    .await?;

    let headers = PaginationMetadata::for_page(&page, &params, AUTHORS_PATH).to_headers()?;

    let dtos = page.map_items(AuthorDto::from);
    let shaped = shape_collection(&dtos.items, params.fields.as_deref());

    Ok((headers, Json(DataResponse { data: shaped })))
}

/// GET /authors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(params): Query<FieldsParams>,
) -> AppResult<impl IntoResponse> {
    if !has_fields::<AuthorDto>(params.fields.as_deref()) {
        return Err(AppError::BadRequest(format!(
            "fields contains unknown field names: {}",
            params.fields.as_deref().unwrap_or_default()
        )));
    }

    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "author",
            id,
        })?;

    let shaped = shape(&AuthorDto::from(author), params.fields.as_deref());
    Ok(Json(DataResponse { data: shaped }))
}

/// POST /authors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    let created = AuthorRepo::create(&state.pool, &input).await?;
    let dto = AuthorDto::from(created);

    Ok((
        StatusCode::CREATED,
        [(LOCATION, format!("{AUTHORS_PATH}/{}", dto.id))],
        Json(DataResponse { data: dto }),
    ))
}

/// POST /authors/{id}
///
/// Creation with a caller-chosen ID is not supported: answers 409 when
/// the author exists (you cannot recreate it) and 404 otherwise.
pub async fn block_creation(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    if AuthorRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "author {id} already exists"
        ))));
    }

    Err(AppError::Core(CoreError::NotFound {
        entity: "author",
        id,
    }))
}

/// DELETE /authors/{id}
///
/// Deleting an author also deletes their books (FK cascade).
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let deleted = AuthorRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "author",
            id,
        }));
    }

    Ok(StatusCode::NO_CONTENT)
}
