//! Recent history across reservations, reports and repairs

use serde::Serialize;
use utoipa::ToSchema;

use super::{reparacion::Reparacion, reporte::Reporte, reserva::Reserva};

/// Rows returned per category by the history endpoint
pub const HISTORY_LIMIT: i64 = 100;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Historicos {
    pub reservas: Vec<Reserva>,
    pub reportes: Vec<Reporte>,
    pub reparaciones: Vec<Reparacion>,
}
