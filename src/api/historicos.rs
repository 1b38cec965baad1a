//! History API endpoint

use axum::{extract::State, Json};

use crate::{error::AppResult, models::Historicos, AppState};

/// Latest 100 reservations, reports and repairs, newest first
#[utoipa::path(
    get,
    path = "/api/historicos",
    tag = "historicos",
    responses(
        (status = 200, description = "Recent history", body = Historicos)
    )
)]
pub async fn get_historicos(State(state): State<AppState>) -> AppResult<Json<Historicos>> {
    let historicos = state.services.historicos.recent().await?;
    Ok(Json(historicos))
}
