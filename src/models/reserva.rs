//! Reserva (reservation) model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::{de, enums::EstadoReserva};

/// Reservation record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Reserva {
    #[serde(rename = "Id")]
    pub id: i32,
    #[serde(rename = "Aula_ID")]
    pub aula_id: i32,
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "FechaHoraInicio")]
    pub fecha_hora_inicio: NaiveDateTime,
    #[serde(rename = "FechaHoraFin")]
    pub fecha_hora_fin: NaiveDateTime,
    #[serde(rename = "Estado")]
    pub estado: EstadoReserva,
}

/// Reserve a room
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateReserva {
    #[serde(rename = "Aula_ID")]
    pub aula_id: i32,
    #[serde(rename = "Usuario")]
    pub usuario: String,
    #[serde(rename = "Inicio", deserialize_with = "de::datetime")]
    #[schema(value_type = String, example = "2024-05-06T08:30")]
    pub inicio: NaiveDateTime,
    #[serde(rename = "Fin", deserialize_with = "de::datetime")]
    #[schema(value_type = String, example = "2024-05-06T10:00")]
    pub fin: NaiveDateTime,
}

/// Release a room, closing its active reservations
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LiberarAula {
    #[serde(rename = "Aula_ID")]
    pub aula_id: i32,
}
