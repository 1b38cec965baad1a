//! API handlers for the Aulas HTTP endpoints

pub mod aulas;
pub mod health;
pub mod historicos;
pub mod openapi;
pub mod recursos;
pub mod reparaciones;
pub mod reportes;
pub mod reservas;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{services::uploads::PUBLIC_PREFIX, ws, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let body_limit = state.config.uploads.max_body_bytes;
    let uploads = ServeDir::new(&state.config.uploads.dir);
    let client = ServeDir::new(&state.config.web.static_dir);

    let api = Router::new()
        // Health check
        .route("/api/health", get(health::health_check))
        .route("/api/ready", get(health::readiness_check))
        // Aulas
        .route("/api/aulas", get(aulas::list_aulas))
        .route("/api/aulas", post(aulas::create_aula))
        .route("/api/aulas/:id", put(aulas::update_aula))
        .route("/api/aulas/:id", delete(aulas::delete_aula))
        // Recursos
        .route("/api/recursos", get(recursos::list_recursos))
        .route("/api/recursos", post(recursos::create_recurso))
        .route("/api/recursos/:id", delete(recursos::delete_recurso))
        // Reservas
        .route("/api/reservas", post(reservas::create_reserva))
        .route("/api/liberar", post(reservas::liberar_aula))
        // Reportes
        .route("/api/reportes", post(reportes::create_reporte))
        // Reparaciones
        .route("/api/reparaciones", post(reparaciones::create_reparacion))
        // Historicos
        .route("/api/historicos", get(historicos::get_historicos))
        // Live updates
        .route("/ws", get(ws::ws_handler))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .nest_service(PUBLIC_PREFIX, uploads)
        .fallback_service(client)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
