//! Reservas repository for database operations
//!
//! Reserving and releasing touch both `reservas` and `aulas.ocupada_por`;
//! each pair of statements commits together.

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{enums::EstadoReserva, reserva::CreateReserva},
};

#[derive(Clone)]
pub struct ReservasRepository {
    pool: Pool<Postgres>,
}

impl ReservasRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Insert an active reservation and mark the room as occupied by its user.
    ///
    /// The room is not checked for an existing active reservation; the
    /// latest reservation wins the occupant field.
    pub async fn create(&self, data: &CreateReserva) -> AppResult<i32> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reservas (aula_id, usuario, fecha_hora_inicio, fecha_hora_fin, estado)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(data.aula_id)
        .bind(&data.usuario)
        .bind(data.inicio)
        .bind(data.fin)
        .bind(EstadoReserva::Activa)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE aulas SET ocupada_por = $1 WHERE id = $2")
            .bind(&data.usuario)
            .bind(data.aula_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(id)
    }

    /// Finish every active reservation of a room and free it.
    /// Returns the number of reservations closed.
    pub async fn release(&self, aula_id: i32) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;

        let closed = sqlx::query("UPDATE reservas SET estado = $1 WHERE aula_id = $2 AND estado = $3")
            .bind(EstadoReserva::Finalizada)
            .bind(aula_id)
            .bind(EstadoReserva::Activa)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        sqlx::query("UPDATE aulas SET ocupada_por = NULL WHERE id = $1")
            .bind(aula_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(closed)
    }
}
