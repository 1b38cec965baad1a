//! Reportes repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        enums::{EstadoRecurso, EstadoReporte},
        reporte::CreateReporte,
    },
};

#[derive(Clone)]
pub struct ReportesRepository {
    pool: Pool<Postgres>,
}

impl ReportesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Open a damage report and flag the reported equipment as damaged
    pub async fn create(&self, data: &CreateReporte) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reportes (aula_id, recurso_id, descripcion, foto_ruta, estado, fecha)
            VALUES ($1, $2, $3, $4, $5, NOW())
            RETURNING id
            "#,
        )
        .bind(data.aula_id)
        .bind(data.recurso_id)
        .bind(&data.descripcion)
        .bind(&data.foto_ruta)
        .bind(EstadoReporte::Abierto)
        .fetch_one(&mut *tx)
        .await?;

        if let Some(recurso_id) = data.recurso_id {
            sqlx::query("UPDATE recursos SET estado = $1 WHERE id = $2")
                .bind(EstadoRecurso::Danado)
                .bind(recurso_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(id)
    }
}
