//! Room management service

use std::sync::Arc;

use serde_json::json;

use crate::{
    error::AppResult,
    models::aula::{Aula, AulaInput},
    repository::Repository,
    ws::{LiveEvent, WsManager},
};

#[derive(Clone)]
pub struct AulasService {
    repository: Repository,
    live: Arc<WsManager>,
}

impl AulasService {
    pub fn new(repository: Repository, live: Arc<WsManager>) -> Self {
        Self { repository, live }
    }

    pub async fn list(&self) -> AppResult<Vec<Aula>> {
        self.repository.aulas.list().await
    }

    pub async fn create(&self, data: &AulaInput) -> AppResult<i32> {
        let id = self.repository.aulas.create(data).await?;
        tracing::info!(aula_id = id, nombre = %data.nombre, "Room created");
        self.live.publish(LiveEvent::Aulas, json!({})).await;
        Ok(id)
    }

    pub async fn update(&self, id: i32, data: &AulaInput) -> AppResult<()> {
        let touched = self.repository.aulas.update(id, data).await?;
        tracing::info!(aula_id = id, touched, "Room updated");
        self.live.publish(LiveEvent::Aulas, json!({})).await;
        Ok(())
    }

    /// Delete a room and all of its equipment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let touched = self.repository.aulas.delete(id).await?;
        tracing::info!(aula_id = id, touched, "Room deleted");
        self.live.publish(LiveEvent::Aulas, json!({})).await;
        Ok(())
    }
}
