use std::collections::HashMap;

use axum::extract::ws::Message;
use serde::Serialize;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

/// Channel sender half for pushing messages to a WebSocket connection.
pub type WsSender = mpsc::UnboundedSender<Message>;

/// Change signals understood by the browser client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveEvent {
    Aulas,
    Recursos,
    Reservas,
    Reportes,
    Reparaciones,
}

impl LiveEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            LiveEvent::Aulas => "aulas:update",
            LiveEvent::Recursos => "recursos:update",
            LiveEvent::Reservas => "reservas:update",
            LiveEvent::Reportes => "reportes:update",
            LiveEvent::Reparaciones => "reparaciones:update",
        }
    }
}

impl std::fmt::Display for LiveEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Text frame sent to clients.
#[derive(Debug, Serialize)]
struct LiveMessage<'a> {
    event: &'a str,
    payload: &'a serde_json::Value,
}

/// Registry of live connections.
///
/// Thread-safe via interior `RwLock`; shared across the application behind
/// an `Arc`.
pub struct WsManager {
    connections: RwLock<HashMap<Uuid, WsSender>>,
}

impl WsManager {
    pub fn new() -> Self {
        Self {
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Register a new connection.
    ///
    /// Returns the receiver half of the message channel so the caller can
    /// forward messages to the WebSocket sink.
    pub async fn add(&self, conn_id: Uuid) -> mpsc::UnboundedReceiver<Message> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.connections.write().await.insert(conn_id, tx);
        rx
    }

    pub async fn remove(&self, conn_id: &Uuid) {
        self.connections.write().await.remove(conn_id);
    }

    /// Send a message to all connected clients.
    ///
    /// Connections whose channels are closed are skipped; they are removed
    /// when their receive loop ends. Returns the number of connections the
    /// message was queued for.
    pub async fn broadcast(&self, message: Message) -> usize {
        let conns = self.connections.read().await;
        conns
            .values()
            .filter(|sender| sender.send(message.clone()).is_ok())
            .count()
    }

    /// Publish a change event to every connected client.
    pub async fn publish(&self, event: LiveEvent, payload: serde_json::Value) {
        let text = match serde_json::to_string(&LiveMessage {
            event: event.name(),
            payload: &payload,
        }) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(%event, error = %e, "Failed to encode live event");
                return;
            }
        };

        let delivered = self.broadcast(Message::Text(text)).await;
        tracing::debug!(%event, delivered, "Published live event");
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }

    /// Send a Close frame to every connection, then clear the registry.
    pub async fn shutdown_all(&self) {
        let mut conns = self.connections.write().await;
        let count = conns.len();
        for sender in conns.values() {
            let _ = sender.send(Message::Close(None));
        }
        conns.clear();
        tracing::info!(count, "Closed all WebSocket connections");
    }

    /// Send a Ping frame to every connected client.
    pub async fn ping_all(&self) {
        self.broadcast(Message::Ping(Vec::new())).await;
    }
}

impl Default for WsManager {
    fn default() -> Self {
        Self::new()
    }
}
