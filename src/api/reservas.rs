//! Reservation API endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{
        reserva::{CreateReserva, LiberarAula},
        Ack,
    },
    AppState,
};

/// Reserve a room
#[utoipa::path(
    post,
    path = "/api/reservas",
    tag = "reservas",
    request_body = CreateReserva,
    responses(
        (status = 200, description = "Room reserved and marked occupied", body = Ack)
    )
)]
pub async fn create_reserva(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateReserva>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.reservas.reserve(&data).await?;
    Ok(Json(Ack::OK))
}

/// Release a room
#[utoipa::path(
    post,
    path = "/api/liberar",
    tag = "reservas",
    request_body = LiberarAula,
    responses(
        (status = 200, description = "Active reservations finished, room free", body = Ack)
    )
)]
pub async fn liberar_aula(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<LiberarAula>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.reservas.release(data.aula_id).await?;
    Ok(Json(Ack::OK))
}
