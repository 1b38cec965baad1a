//! Recent activity across reservations, reports and repairs

use crate::{error::AppResult, models::Historicos, repository::Repository};

#[derive(Clone)]
pub struct HistoricosService {
    repository: Repository,
}

impl HistoricosService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Latest rows of each history table, newest first
    pub async fn recent(&self) -> AppResult<Historicos> {
        let repo = &self.repository.historicos;
        let (reservas, reportes, reparaciones) = tokio::try_join!(
            repo.recent_reservas(),
            repo.recent_reportes(),
            repo.recent_reparaciones(),
        )?;

        Ok(Historicos {
            reservas,
            reportes,
            reparaciones,
        })
    }
}
