use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::models::{Game, GameUpdate, NewGame};
use crate::store::AppState;

pub(crate) async fn list_games(State(state): State<AppState>) -> Json<Vec<Game>> {
    let games = state.games().read().await;
    Json(games.list().to_vec())
}

pub(crate) async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Game>> {
    let games = state.games().read().await;
    games
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::GameNotFound)
}

pub(crate) async fn add_game(
    State(state): State<AppState>,
    payload: Result<Json<NewGame>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Game>)> {
    let Json(new_game) = payload?;
    let game = state.games().write().await.insert(new_game);
    Ok((StatusCode::CREATED, Json(game)))
}

pub(crate) async fn update_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<GameUpdate>, JsonRejection>,
) -> ApiResult<Json<Game>> {
    let Json(update) = payload?;
    let mut games = state.games().write().await;
    games
        .update(&id, update)
        .map(Json)
        .ok_or(ApiError::GameNotFound)
}

pub(crate) async fn delete_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<Value> {
    state.games().write().await.remove(&id);
    Json(json!({ "message": "Game deleted" }))
}
