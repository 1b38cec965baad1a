//! Read-only access to the most recent history rows

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{historico::HISTORY_LIMIT, Reparacion, Reporte, Reserva},
};

#[derive(Clone)]
pub struct HistoricosRepository {
    pool: Pool<Postgres>,
}

impl HistoricosRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn recent_reservas(&self) -> AppResult<Vec<Reserva>> {
        let rows = sqlx::query_as::<_, Reserva>(
            r#"
            SELECT id, aula_id, usuario, fecha_hora_inicio, fecha_hora_fin, estado
            FROM reservas
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn recent_reportes(&self) -> AppResult<Vec<Reporte>> {
        let rows = sqlx::query_as::<_, Reporte>(
            r#"
            SELECT id, aula_id, recurso_id, descripcion, foto_ruta, estado, fecha
            FROM reportes
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn recent_reparaciones(&self) -> AppResult<Vec<Reparacion>> {
        let rows = sqlx::query_as::<_, Reparacion>(
            r#"
            SELECT id, reporte_id, tecnico, fecha, estado
            FROM reparaciones
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(HISTORY_LIMIT)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
