use axum::{extract::{Path, State}, http::StatusCode, Json};
use service::{PlayerDto, PlayerPatch};
use tracing::{error, info};

use crate::{errors::JsonApiError, state::ServerState};

#[utoipa::path(
    post, path = "/players", tag = "players",
    request_body = crate::openapi::PlayerDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PlayerDoc),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(State(state): State<ServerState>, Json(input): Json<PlayerDto>) -> Result<(StatusCode, Json<PlayerDto>), JsonApiError> {
    let created = state.player_svc.create_player(input).await?;
    info!(id = ?created.id, last_name = %created.last_name, "created player");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::PlayerDoc),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Lookup Failed")
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<PlayerDto>, JsonApiError> {
    state
        .player_svc
        .get_player_by_id(id)
        .await?
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(format!("player {id} not found")))
}

#[utoipa::path(
    get, path = "/players", tag = "players",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::PlayerDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<PlayerDto>>, JsonApiError> {
    let players = state.player_svc.get_all_players().await?;
    info!(count = players.len(), "list players");
    Ok(Json(players))
}

/// Full replace. The path id wins over any id in the body; a missing row is 404, never an insert.
#[utoipa::path(
    put, path = "/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    request_body = crate::openapi::PlayerDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PlayerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn full_update(State(state): State<ServerState>, Path(id): Path<i64>, Json(mut input): Json<PlayerDto>) -> Result<Json<PlayerDto>, JsonApiError> {
    input.id = Some(id);
    let updated = state.player_svc.replace_player(input, id).await?;
    info!(id, "replaced player");
    Ok(Json(updated))
}

#[utoipa::path(
    patch, path = "/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    request_body = crate::openapi::PlayerPatchDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::PlayerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn partial_update(State(state): State<ServerState>, Path(id): Path<i64>, Json(patch): Json<PlayerPatch>) -> Result<Json<PlayerDto>, JsonApiError> {
    if !state.player_svc.player_exists(id).await? {
        return Err(JsonApiError::not_found(format!("player {id} not found")));
    }
    let updated = state.player_svc.partial_update_player(patch, id).await?;
    info!(id, "patched player");
    Ok(Json(updated))
}

/// Always 204, whether or not the player existed.
#[utoipa::path(
    delete, path = "/players/{id}", tag = "players",
    params(("id" = i64, Path, description = "Player ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> StatusCode {
    match state.player_svc.delete_player_by_id(id).await {
        Ok(()) => { info!(id, "deleted player"); StatusCode::NO_CONTENT },
        Err(e) => { error!(err = %e, id, "delete player failed"); StatusCode::INTERNAL_SERVER_ERROR },
    }
}
