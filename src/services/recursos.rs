//! Equipment service

use std::sync::Arc;

use serde_json::json;

use crate::{
    error::AppResult,
    models::recurso::{CreateRecurso, Recurso},
    repository::Repository,
    ws::{LiveEvent, WsManager},
};

#[derive(Clone)]
pub struct RecursosService {
    repository: Repository,
    live: Arc<WsManager>,
}

impl RecursosService {
    pub fn new(repository: Repository, live: Arc<WsManager>) -> Self {
        Self { repository, live }
    }

    pub async fn list(&self, aula_id: Option<i32>) -> AppResult<Vec<Recurso>> {
        self.repository.recursos.list(aula_id).await
    }

    pub async fn create(&self, data: &CreateRecurso) -> AppResult<i32> {
        let id = self.repository.recursos.create(data).await?;
        tracing::info!(recurso_id = id, aula_id = data.aula_id, codigo = %data.codigo, "Equipment registered");
        self.live.publish(LiveEvent::Recursos, json!({})).await;
        Ok(id)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let touched = self.repository.recursos.delete(id).await?;
        tracing::info!(recurso_id = id, touched, "Equipment deleted");
        self.live.publish(LiveEvent::Recursos, json!({})).await;
        Ok(())
    }
}
