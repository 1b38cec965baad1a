//! Recurso (equipment) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

use super::{de, enums::EstadoRecurso};

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Recurso {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Aula_ID")]
    pub aula_id: i32,
    #[serde(rename = "Tipo")]
    pub tipo: String,
    #[serde(rename = "Codigo")]
    pub codigo: String,
    #[serde(rename = "Estado")]
    pub estado: EstadoRecurso,
}

/// Create equipment request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecurso {
    #[serde(rename = "Aula_ID")]
    pub aula_id: i32,
    #[serde(rename = "Tipo")]
    pub tipo: String,
    #[serde(rename = "Codigo")]
    pub codigo: String,
}

/// Equipment listing filter
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecursoQuery {
    /// Only list equipment of this room
    #[serde(rename = "aulaId", default, deserialize_with = "de::empty_as_none")]
    pub aula_id: Option<i32>,
}
