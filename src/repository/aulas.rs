//! Aulas repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::aula::{Aula, AulaInput},
};

#[derive(Clone)]
pub struct AulasRepository {
    pool: Pool<Postgres>,
}

impl AulasRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all rooms
    pub async fn list(&self) -> AppResult<Vec<Aula>> {
        let rows = sqlx::query_as::<_, Aula>(
            "SELECT id, nombre, modulo, ocupada_por FROM aulas ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a free room
    pub async fn create(&self, data: &AulaInput) -> AppResult<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO aulas (nombre, modulo, ocupada_por) VALUES ($1, $2, NULL) RETURNING id",
        )
        .bind(&data.nombre)
        .bind(&data.modulo)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    /// Rename a room; returns the number of rows touched
    pub async fn update(&self, id: i32, data: &AulaInput) -> AppResult<u64> {
        let result = sqlx::query("UPDATE aulas SET nombre = $1, modulo = $2 WHERE id = $3")
            .bind(&data.nombre)
            .bind(&data.modulo)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Delete a room together with its equipment
    pub async fn delete(&self, id: i32) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        // Equipment goes first: recursos.aula_id references aulas.id.
        sqlx::query("DELETE FROM recursos WHERE aula_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM aulas WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}
