//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{aulas, health, historicos, recursos, reparaciones, reportes, reservas};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aulas API",
        version = "1.0.0",
        description = "Classroom, equipment, reservation and repair tracking"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Aulas
        aulas::list_aulas,
        aulas::create_aula,
        aulas::update_aula,
        aulas::delete_aula,
        // Recursos
        recursos::list_recursos,
        recursos::create_recurso,
        recursos::delete_recurso,
        // Reservas
        reservas::create_reserva,
        reservas::liberar_aula,
        // Reportes
        reportes::create_reporte,
        // Reparaciones
        reparaciones::create_reparacion,
        // Historicos
        historicos::get_historicos,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::error::ErrorResponse,
            crate::models::Ack,
            crate::models::aula::Aula,
            crate::models::aula::AulaInput,
            crate::models::recurso::Recurso,
            crate::models::recurso::CreateRecurso,
            crate::models::reserva::Reserva,
            crate::models::reserva::CreateReserva,
            crate::models::reserva::LiberarAula,
            crate::models::reporte::Reporte,
            crate::models::reporte::ReporteForm,
            crate::models::reparacion::Reparacion,
            crate::models::reparacion::CreateReparacion,
            crate::models::historico::Historicos,
            crate::models::enums::EstadoRecurso,
            crate::models::enums::EstadoReserva,
            crate::models::enums::EstadoReporte,
            crate::models::enums::EstadoReparacion,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "aulas", description = "Rooms"),
        (name = "recursos", description = "Equipment inside rooms"),
        (name = "reservas", description = "Reserving and releasing rooms"),
        (name = "reportes", description = "Damage reports"),
        (name = "reparaciones", description = "Repairs"),
        (name = "historicos", description = "Recent activity"),
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
