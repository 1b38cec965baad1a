//! Room API endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        aula::{Aula, AulaInput},
        Ack,
    },
    AppState,
};

/// List all rooms
#[utoipa::path(
    get,
    path = "/api/aulas",
    tag = "aulas",
    responses(
        (status = 200, description = "Rooms ordered by id", body = Vec<Aula>)
    )
)]
pub async fn list_aulas(State(state): State<AppState>) -> AppResult<Json<Vec<Aula>>> {
    let aulas = state.services.aulas.list().await?;
    Ok(Json(aulas))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/api/aulas",
    tag = "aulas",
    request_body = AulaInput,
    responses(
        (status = 200, description = "Room created", body = Ack)
    )
)]
pub async fn create_aula(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<AulaInput>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.aulas.create(&data).await?;
    Ok(Json(Ack::OK))
}

/// Rename a room
#[utoipa::path(
    put,
    path = "/api/aulas/{id}",
    tag = "aulas",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = AulaInput,
    responses(
        (status = 200, description = "Room updated", body = Ack)
    )
)]
pub async fn update_aula(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
    WithRejection(Json(data), _): WithRejection<Json<AulaInput>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.aulas.update(id, &data).await?;
    Ok(Json(Ack::OK))
}

/// Delete a room and its equipment
#[utoipa::path(
    delete,
    path = "/api/aulas/{id}",
    tag = "aulas",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted", body = Ack)
    )
)]
pub async fn delete_aula(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.aulas.delete(id).await?;
    Ok(Json(Ack::OK))
}
