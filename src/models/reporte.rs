//! Reporte (damage report) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::EstadoReporte;

/// Damage report record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reporte {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Aula_ID")]
    pub aula_id: i32,
    #[serde(rename = "Recurso_ID")]
    pub recurso_id: Option<i32>,
    #[serde(rename = "Descripcion")]
    pub descripcion: String,
    /// Public path of the attached photo, under `/uploads`
    #[serde(rename = "FotoRuta")]
    pub foto_ruta: Option<String>,
    #[serde(rename = "Estado")]
    pub estado: EstadoReporte,
    #[serde(rename = "Fecha")]
    pub fecha: DateTime<Utc>,
}

/// Damage report fields, as extracted from the multipart form
#[derive(Debug, Clone)]
pub struct CreateReporte {
    pub aula_id: i32,
    pub recurso_id: Option<i32>,
    pub descripcion: String,
    pub foto_ruta: Option<String>,
}

/// Multipart form accepted by `POST /api/reportes` (documentation only)
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct ReporteForm {
    #[serde(rename = "Aula_ID")]
    aula_id: i32,
    #[serde(rename = "Recurso_ID")]
    recurso_id: Option<i32>,
    #[serde(rename = "Descripcion")]
    descripcion: String,
    #[schema(value_type = Option<String>, format = Binary)]
    foto: Option<Vec<u8>>,
}
