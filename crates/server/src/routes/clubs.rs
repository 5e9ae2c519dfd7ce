use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::{ClubDto, ClubPatch};
use tracing::{error, info};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/clubs", tag = "clubs",
    request_body = crate::openapi::ClubDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ClubDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<ClubDto>) -> Result<(StatusCode, Json<ClubDto>), JsonApiError> {
    let created = state.club_svc.create_club(input).await?;
    info!(id = ?created.id, name = %created.name, "created club");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/clubs/{id}", tag = "clubs",
    params(("id" = i64, Path, description = "Club ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClubDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<ClubDto>, JsonApiError> {
    state
        .club_svc
        .get_club_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(format!("club {id} not found")))
}

#[utoipa::path(
    get, path = "/clubs", tag = "clubs",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ClubDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ClubDto>>, JsonApiError> {
    let clubs = state.club_svc.get_all_clubs().await?;
    info!(count = clubs.len(), "list clubs");
    Ok(Json(clubs))
}

/// Full replace. The path id wins over any id in the body; a missing row is 404, never an insert.
#[utoipa::path(
    put, path = "/clubs/{id}", tag = "clubs",
    params(("id" = i64, Path, description = "Club ID")),
    request_body = crate::openapi::ClubDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClubDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn full_update(State(state): State<ServerState>, Path(id): Path<i64>, Json(mut input): Json<ClubDto>) -> Result<Json<ClubDto>, JsonApiError> {
    input.id = Some(id);
    let updated = state.club_svc.replace_club(input, id).await?;
    info!(id, "replaced club");
    Ok(Json(updated))
}

#[utoipa::path(
    patch, path = "/clubs/{id}", tag = "clubs",
    params(("id" = i64, Path, description = "Club ID")),
    request_body = crate::openapi::ClubPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClubDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn partial_update(State(state): State<ServerState>, Path(id): Path<i64>, Json(patch): Json<ClubPatch>) -> Result<Json<ClubDto>, JsonApiError> {
    if !state.club_svc.club_exists(id).await? {
        return Err(JsonApiError::not_found(format!("club {id} not found")));
    }
    let updated = state.club_svc.partial_update_club(patch, id).await?;
    info!(id, "patched club");
    Ok(Json(updated))
}

/// Always 204, whether or not the club existed.
#[utoipa::path(
    delete, path = "/clubs/{id}", tag = "clubs",
    params(("id" = i64, Path, description = "Club ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match state.club_svc.delete_club_by_id(id).await {
        Ok(()) => { info!(id, "deleted club"); StatusCode::NO_CONTENT },
        Err(e) => { error!(err = %e, id, "delete club failed"); StatusCode::INTERNAL_SERVER_ERROR },
    }
}
