use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use uuid::Uuid;

use crate::ws::manager::WsManager;
use crate::AppState;

/// Upgrade the request to a WebSocket subscribed to live events.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    let manager = state.services.live.clone();
    ws.on_upgrade(move |socket| handle_socket(socket, manager))
}

/// Drive one connection: outbound frames come from the manager channel,
/// inbound frames are only watched for close.
async fn handle_socket(socket: WebSocket, manager: Arc<WsManager>) {
    let conn_id = Uuid::new_v4();
    let mut rx = manager.add(conn_id).await;
    tracing::info!(conn_id = %conn_id, "Client connected");

    let (mut sink, mut stream) = socket.split();

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            let closing = matches!(msg, Message::Close(_));
            if sink.send(msg).await.is_err() || closing {
                break;
            }
        }
    });

    while let Some(result) = stream.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(Message::Pong(_)) => tracing::trace!(conn_id = %conn_id, "Pong received"),
            Ok(_) => {}
            Err(e) => {
                tracing::debug!(conn_id = %conn_id, error = %e, "WebSocket receive error");
                break;
            }
        }
    }

    manager.remove(&conn_id).await;
    send_task.abort();
    tracing::info!(conn_id = %conn_id, "Client disconnected");
}
