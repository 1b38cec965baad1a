//! Repair API endpoints

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::{
    error::{AppError, AppResult},
    models::{reparacion::CreateReparacion, Ack},
    AppState,
};

/// Record a repair, closing its report
#[utoipa::path(
    post,
    path = "/api/reparaciones",
    tag = "reparaciones",
    request_body = CreateReparacion,
    responses(
        (status = 200, description = "Repair recorded", body = Ack)
    )
)]
pub async fn create_reparacion(
    State(state): State<AppState>,
    WithRejection(Json(data), _): WithRejection<Json<CreateReparacion>, AppError>,
) -> AppResult<Json<Ack>> {
    state.services.reparaciones.repair(&data).await?;
    Ok(Json(Ack::OK))
}
