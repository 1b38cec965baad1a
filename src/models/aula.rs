//! Aula (room) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Room record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Aula {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Modulo")]
    pub modulo: Option<String>,
    /// User holding the active reservation, if any
    #[serde(rename = "OcupadaPor")]
    pub ocupada_por: Option<String>,
}

/// Create or update room request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AulaInput {
    #[serde(rename = "Nombre")]
    pub nombre: String,
    #[serde(rename = "Modulo", default)]
    pub modulo: Option<String>,
}
