//! Repair service: closes reports and restores equipment

use std::sync::Arc;

use serde_json::json;

use crate::{
    error::AppResult,
    models::reparacion::CreateReparacion,
    repository::Repository,
    services::email::NotificationSink,
    ws::{LiveEvent, WsManager},
};

#[derive(Clone)]
pub struct ReparacionesService {
    repository: Repository,
    notifications: NotificationSink,
    live: Arc<WsManager>,
}

impl ReparacionesService {
    pub fn new(repository: Repository, notifications: NotificationSink, live: Arc<WsManager>) -> Self {
        Self {
            repository,
            notifications,
            live,
        }
    }

    pub async fn repair(&self, data: &CreateReparacion) -> AppResult<i32> {
        let id = self.repository.reparaciones.create(data).await?;
        tracing::info!(reparacion_id = id, reporte_id = data.reporte_id, tecnico = %data.tecnico, "Repair recorded");

        let message = format!(
            "Reporte {} marcado como reparado por {}",
            data.reporte_id, data.tecnico
        );
        self.notifications
            .notify("Reparación completada", &message)
            .await;
        self.live.publish(LiveEvent::Reparaciones, json!({})).await;
        Ok(id)
    }
}
