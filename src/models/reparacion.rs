//! Reparacion (repair) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::enums::EstadoReparacion;

/// Repair record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reparacion {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Reporte_ID")]
    pub reporte_id: i32,
    #[serde(rename = "Tecnico")]
    pub tecnico: String,
    #[serde(rename = "Fecha")]
    pub fecha: DateTime<Utc>,
    #[serde(rename = "Estado")]
    pub estado: EstadoReparacion,
}

/// Record a repair for a report
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReparacion {
    #[serde(rename = "Reporte_ID")]
    pub reporte_id: i32,
    #[serde(rename = "Tecnico")]
    pub tecnico: String,
}
