//! Data models for the Aulas server

pub mod aula;
pub mod de;
pub mod enums;
pub mod historico;
pub mod recurso;
pub mod reparacion;
pub mod reporte;
pub mod reserva;

// Re-export commonly used types
pub use aula::Aula;
pub use enums::{EstadoRecurso, EstadoReparacion, EstadoReporte, EstadoReserva};
pub use historico::Historicos;
pub use recurso::Recurso;
pub use reparacion::Reparacion;
pub use reporte::Reporte;
pub use reserva::Reserva;

use serde::Serialize;
use utoipa::ToSchema;

/// Acknowledgement returned by every write endpoint
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct Ack {
    pub ok: bool,
}

impl Ack {
    pub const OK: Ack = Ack { ok: true };
}
