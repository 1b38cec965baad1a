//! Damage report service

use std::sync::Arc;

use serde_json::json;

use crate::{
    error::AppResult,
    models::reporte::CreateReporte,
    repository::Repository,
    services::{email::NotificationSink, uploads::UploadStore},
    ws::{LiveEvent, WsManager},
};

/// Photo attached to a report, as received
pub struct Photo {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Report fields before the photo is stored
pub struct NewReporte {
    pub aula_id: i32,
    pub recurso_id: Option<i32>,
    pub descripcion: String,
    pub foto: Option<Photo>,
}

#[derive(Clone)]
pub struct ReportesService {
    repository: Repository,
    uploads: UploadStore,
    notifications: NotificationSink,
    live: Arc<WsManager>,
}

impl ReportesService {
    pub fn new(
        repository: Repository,
        uploads: UploadStore,
        notifications: NotificationSink,
        live: Arc<WsManager>,
    ) -> Self {
        Self {
            repository,
            uploads,
            notifications,
            live,
        }
    }

    /// File a damage report, storing its photo first when one is attached
    pub async fn report(&self, report: NewReporte) -> AppResult<i32> {
        let foto_ruta = match &report.foto {
            Some(photo) => Some(self.uploads.save(&photo.file_name, &photo.bytes).await?),
            None => None,
        };

        let data = CreateReporte {
            aula_id: report.aula_id,
            recurso_id: report.recurso_id,
            descripcion: report.descripcion,
            foto_ruta,
        };
        let id = self.repository.reportes.create(&data).await?;
        tracing::info!(
            reporte_id = id,
            aula_id = data.aula_id,
            recurso_id = ?data.recurso_id,
            with_photo = data.foto_ruta.is_some(),
            "Damage reported"
        );

        let recurso = data
            .recurso_id
            .map(|id| id.to_string())
            .unwrap_or_default();
        let message = format!("Aula {}, Recurso {}: {}", data.aula_id, recurso, data.descripcion);
        self.notifications
            .notify("Reporte de recurso dañado", &message)
            .await;
        self.live.publish(LiveEvent::Reportes, json!({})).await;
        Ok(id)
    }
}
