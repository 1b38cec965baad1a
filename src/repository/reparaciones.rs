//! Reparaciones repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        enums::{EstadoRecurso, EstadoReparacion, EstadoReporte},
        reparacion::CreateReparacion,
    },
};

#[derive(Clone)]
pub struct ReparacionesRepository {
    pool: Pool<Postgres>,
}

impl ReparacionesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Record a repair, put the reported equipment back in service and close
    /// the report.
    ///
    /// An unknown report id is not an error: the repair row is still written
    /// and only the equipment update is skipped.
    pub async fn create(&self, data: &CreateReparacion) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reparaciones (reporte_id, tecnico, fecha, estado)
            VALUES ($1, $2, NOW(), $3)
            RETURNING id
            "#,
        )
        .bind(data.reporte_id)
        .bind(&data.tecnico)
        .bind(EstadoReparacion::Reparado)
        .fetch_one(&mut *tx)
        .await?;

        let recurso_id = sqlx::query_scalar::<_, Option<i32>>(
            "SELECT recurso_id FROM reportes WHERE id = $1",
        )
        .bind(data.reporte_id)
        .fetch_optional(&mut *tx)
        .await?
        .flatten();

        match recurso_id {
            Some(recurso_id) => {
                sqlx::query("UPDATE recursos SET estado = $1 WHERE id = $2")
                    .bind(EstadoRecurso::Ok)
                    .bind(recurso_id)
                    .execute(&mut *tx)
                    .await?;
            }
            None => tracing::debug!(
                reporte_id = data.reporte_id,
                "Report has no equipment attached, skipping restore"
            ),
        }

        sqlx::query("UPDATE reportes SET estado = $1 WHERE id = $2")
            .bind(EstadoReporte::Cerrado)
            .bind(data.reporte_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }
}
