//! Handlers for the `/authorcollections` bulk resource.
//!
//! Allows creating several authors in one request and fetching a set of
//! authors by a comma-separated ID list.

use alexandria_core::CoreError;
use alexandria_db::models::CreateAuthor;
use alexandria_db::repositories::AuthorRepo;
use axum::extract::{Path, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use crate::dto::AuthorDto;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /authorcollections
///
/// Creates every author in the body in one statement; the Location
/// header addresses the whole batch via the comma-separated ID list.
pub async fn create_collection(
    State(state): State<AppState>,
    Json(inputs): Json<Vec<CreateAuthor>>,
) -> AppResult<impl IntoResponse> {
    if inputs.is_empty() {
        return Err(AppError::BadRequest(
            "author collection must not be empty".to_string(),
        ));
    }

    let created = AuthorRepo::create_many(&state.pool, &inputs).await?;
    let dtos: Vec<AuthorDto> = created.into_iter().map(AuthorDto::from).collect();

    let ids: Vec<String> = dtos.iter().map(|dto| dto.id.to_string()).collect();
    let location = format!("/api/v1/authorcollections/{}", ids.join(","));

    Ok((
        StatusCode::CREATED,
        [(LOCATION, location)],
        Json(DataResponse { data: dtos }),
    ))
}

/// GET /authorcollections/{ids}
///
/// `ids` is a comma-separated UUID list. Responds 404 unless every
/// requested ID resolves to an author.
pub async fn get_collection(
    State(state): State<AppState>,
    Path(ids): Path<String>,
) -> AppResult<impl IntoResponse> {
    let ids = parse_id_list(&ids)?;

    let authors = AuthorRepo::find_by_ids(&state.pool, &ids).await?;

    if authors.len() != ids.len() {
        let found: Vec<Uuid> = authors.iter().map(|a| a.id).collect();
        let missing = ids
            .into_iter()
            .find(|id| !found.contains(id))
            .unwrap_or_default();
        return Err(AppError::Core(CoreError::NotFound {
            entity: "author",
            id: missing,
        }));
    }

    let dtos: Vec<AuthorDto> = authors.into_iter().map(AuthorDto::from).collect();
    Ok(Json(DataResponse { data: dtos }))
}

/// Parse a comma-separated UUID list, rejecting empty and duplicate
/// entries (duplicates would make the found/requested count comparison
/// meaningless).
fn parse_id_list(raw: &str) -> Result<Vec<Uuid>, AppError> {
    let mut ids = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let id = token
            .parse::<Uuid>()
            .map_err(|_| AppError::BadRequest(format!("invalid author id: {token}")))?;
        if ids.contains(&id) {
            return Err(AppError::BadRequest(format!("duplicate author id: {id}")));
        }
        ids.push(id);
    }

    if ids.is_empty() {
        return Err(AppError::BadRequest(
            "no author ids provided".to_string(),
        ));
    }

    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn parses_comma_separated_uuids() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let ids = parse_id_list(&format!("{a}, {b}")).unwrap();
        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn rejects_malformed_uuid() {
        assert_matches!(
            parse_id_list("not-a-uuid"),
            Err(AppError::BadRequest(_))
        );
    }

    #[test]
    fn rejects_duplicates_and_empty_lists() {
        let a = Uuid::new_v4();
        assert_matches!(
            parse_id_list(&format!("{a},{a}")),
            Err(AppError::BadRequest(_))
        );
        assert_matches!(parse_id_list(" , "), Err(AppError::BadRequest(_)));
    }
}
