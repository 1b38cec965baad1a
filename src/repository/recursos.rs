//! Recursos repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{
        enums::EstadoRecurso,
        recurso::{CreateRecurso, Recurso},
    },
};

#[derive(Clone)]
pub struct RecursosRepository {
    pool: Pool<Postgres>,
}

impl RecursosRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment, optionally limited to one room
    pub async fn list(&self, aula_id: Option<i32>) -> AppResult<Vec<Recurso>> {
        let rows = sqlx::query_as::<_, Recurso>(
            r#"
            SELECT id, aula_id, tipo, codigo, estado
            FROM recursos
            WHERE ($1::int IS NULL OR aula_id = $1)
            ORDER BY id
            "#,
        )
        .bind(aula_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Register equipment in working condition
    pub async fn create(&self, data: &CreateRecurso) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO recursos (aula_id, tipo, codigo, estado)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.aula_id)
        .bind(&data.tipo)
        .bind(&data.codigo)
        .bind(EstadoRecurso::Ok)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM recursos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
