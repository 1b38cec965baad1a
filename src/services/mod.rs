//! Business logic services

pub mod aulas;
pub mod email;
pub mod historicos;
pub mod recursos;
pub mod reparaciones;
pub mod reportes;
pub mod reservas;
pub mod uploads;

use std::sync::Arc;

use crate::{
    config::AppConfig, error::AppResult, repository::Repository, ws::WsManager,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub aulas: aulas::AulasService,
    pub recursos: recursos::RecursosService,
    pub reservas: reservas::ReservasService,
    pub reportes: reportes::ReportesService,
    pub reparaciones: reparaciones::ReparacionesService,
    pub historicos: historicos::HistoricosService,
    pub live: Arc<WsManager>,
    pub repository: Repository,
}

impl Services {
    /// Create all services from configuration and the given repository
    pub fn new(repository: Repository, config: &AppConfig, live: Arc<WsManager>) -> AppResult<Self> {
        let notifications = email::NotificationSink::from_config(&config.email)?;
        Ok(Self::with_notifications(repository, config, live, notifications))
    }

    /// Same as [`Services::new`] with an explicit notification sink
    pub fn with_notifications(
        repository: Repository,
        config: &AppConfig,
        live: Arc<WsManager>,
        notifications: email::NotificationSink,
    ) -> Self {
        let uploads = uploads::UploadStore::new(&config.uploads.dir);
        Self {
            aulas: aulas::AulasService::new(repository.clone(), live.clone()),
            recursos: recursos::RecursosService::new(repository.clone(), live.clone()),
            reservas: reservas::ReservasService::new(
                repository.clone(),
                notifications.clone(),
                live.clone(),
            ),
            reportes: reportes::ReportesService::new(
                repository.clone(),
                uploads,
                notifications.clone(),
                live.clone(),
            ),
            reparaciones: reparaciones::ReparacionesService::new(
                repository.clone(),
                notifications,
                live.clone(),
            ),
            historicos: historicos::HistoricosService::new(repository.clone()),
            live,
            repository,
        }
    }
}
