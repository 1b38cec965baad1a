//! Repository layer for database operations

pub mod aulas;
pub mod historicos;
pub mod recursos;
pub mod reparaciones;
pub mod reportes;
pub mod reservas;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub aulas: aulas::AulasRepository,
    pub recursos: recursos::RecursosRepository,
    pub reservas: reservas::ReservasRepository,
    pub reportes: reportes::ReportesRepository,
    pub reparaciones: reparaciones::ReparacionesRepository,
    pub historicos: historicos::HistoricosRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            aulas: aulas::AulasRepository::new(pool.clone()),
            recursos: recursos::RecursosRepository::new(pool.clone()),
            reservas: reservas::ReservasRepository::new(pool.clone()),
            reportes: reportes::ReportesRepository::new(pool.clone()),
            reparaciones: reparaciones::ReparacionesRepository::new(pool.clone()),
            historicos: historicos::HistoricosRepository::new(pool.clone()),
            pool,
        }
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Round-trip a trivial query to check the store is reachable
    pub async fn ping(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .is_ok()
    }
}
