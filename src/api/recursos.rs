//! Equipment API endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        recurso::{CreateRecurso, Recurso, RecursoQuery},
        Ack,
    },
    AppState,
};

/// List equipment, optionally for a single room
#[utoipa::path(
    get,
    path = "/api/recursos",
    tag = "recursos",
    params(RecursoQuery),
    responses(
        (status = 200, description = "Equipment ordered by id", body = Vec<Recurso>)
    )
)]
pub async fn list_recursos(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<RecursoQuery>, AppError>,
) -> AppResult<Json<Vec<Recurso>>> {
    let recursos = state.services.recursos.list(query.aula_id).await?;
    Ok(Json(recursos))
}

/// Register equipment in a room
#[utoipa::path(
    post,
    path = "/api/recursos",
    tag = "recursos",
    request_body = CreateRecurso,
    responses(
        (status = 200, description = "Equipment created", body = Ack)
    )
)]
pub async fn create_recurso(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateRecurso>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.recursos.create(&data).await?;
    Ok(Json(Ack::OK))
}

/// Delete equipment
#[utoipa::path(
    delete,
    path = "/api/recursos/{id}",
    tag = "recursos",
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment deleted", body = Ack)
    )
)]
pub async fn delete_recurso(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.recursos.delete(id).await?;
    Ok(Json(Ack::OK))
}
