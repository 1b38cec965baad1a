//! Live update channel.
//!
//! Browsers hold a WebSocket open on `/ws`; every mutation publishes a
//! `<entity>:update` event to all of them and clients re-fetch the affected
//! collection. Delivery is best effort: there is no replay for clients that
//! connect later and no ordering across clients.

mod handler;
mod heartbeat;
pub mod manager;

pub use handler::ws_handler;
pub use heartbeat::start_heartbeat;
pub use manager::{LiveEvent, WsManager};
