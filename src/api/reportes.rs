//! Damage report API endpoint

use axum::{extract::State, Json};
use axum_extra::extract::{Multipart, WithRejection};

use crate::{
    error::{AppError, AppResult},
    models::Ack,
    services::reportes::{NewReporte, Photo},
    AppState,
};

/// File a damage report with an optional photo
#[utoipa::path(
    post,
    path = "/api/reportes",
    tag = "reportes",
    request_body(content = crate::models::reporte::ReporteForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Report opened, equipment marked damaged", body = Ack)
    )
)]
pub async fn create_reporte(
    State(state): State<AppState>,
    WithRejection(multipart, _): WithRejection<Multipart, AppError>,
) -> AppResult<Json<Ack>> {
    let report = read_form(multipart).await?;
    state.services.reportes.report(report).await?;
    Ok(Json(Ack::OK))
}

async fn read_form(mut multipart: Multipart) -> AppResult<NewReporte> {
    let mut aula_id = None;
    let mut recurso_id = None;
    let mut descripcion = None;
    let mut foto = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "Aula_ID" => aula_id = parse_id(&name, &field.text().await?)?,
            "Recurso_ID" => recurso_id = parse_id(&name, &field.text().await?)?,
            "Descripcion" => descripcion = Some(field.text().await?),
            "foto" => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?;
                // Browsers send an empty part when no file was picked.
                if !file_name.is_empty() || !bytes.is_empty() {
                    foto = Some(Photo {
                        file_name: if file_name.is_empty() { "foto".to_string() } else { file_name },
                        bytes: bytes.to_vec(),
                    });
                }
            }
            other => tracing::debug!(field = other, "Ignoring unknown report field"),
        }
    }

    Ok(NewReporte {
        aula_id: aula_id.ok_or_else(|| AppError::BadRequest("Aula_ID is required".to_string()))?,
        recurso_id,
        descripcion: descripcion.unwrap_or_default(),
        foto,
    })
}

/// Blank values mean "not given"
fn parse_id(field: &str, value: &str) -> AppResult<Option<i32>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer, got {:?}", field, value)))
}
