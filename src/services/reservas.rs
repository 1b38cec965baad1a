//! Reservation service: occupying and releasing rooms

use std::sync::Arc;

use serde_json::json;

use crate::{
    error::AppResult,
    models::reserva::CreateReserva,
    repository::Repository,
    services::email::NotificationSink,
    ws::{LiveEvent, WsManager},
};

#[derive(Clone)]
pub struct ReservasService {
    repository: Repository,
    notifications: NotificationSink,
    live: Arc<WsManager>,
}

impl ReservasService {
    pub fn new(repository: Repository, notifications: NotificationSink, live: Arc<WsManager>) -> Self {
        Self {
            repository,
            notifications,
            live,
        }
    }

    /// Reserve a room for a user. A room that is already occupied is
    /// silently taken over by the new reservation.
    pub async fn reserve(&self, data: &CreateReserva) -> AppResult<i32> {
        let id = self.repository.reservas.create(data).await?;
        tracing::info!(reserva_id = id, aula_id = data.aula_id, usuario = %data.usuario, "Room reserved");

        let message = format!(
            "Reserva creada para Aula {} por {} de {} a {}",
            data.aula_id,
            data.usuario,
            data.inicio.format("%Y-%m-%d %H:%M"),
            data.fin.format("%Y-%m-%d %H:%M"),
        );
        self.notifications.notify("Reserva de aula", &message).await;
        self.live.publish(LiveEvent::Reservas, json!({})).await;
        Ok(id)
    }

    /// Finish the active reservations of a room and mark it free
    pub async fn release(&self, aula_id: i32) -> AppResult<()> {
        let closed = self.repository.reservas.release(aula_id).await?;
        tracing::info!(aula_id, closed, "Room released");

        let message = format!("Aula {} liberada", aula_id);
        self.notifications.notify("Aula liberada", &message).await;
        self.live.publish(LiveEvent::Reservas, json!({})).await;
        Ok(())
    }
}
