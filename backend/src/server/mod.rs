//! Server construction and middleware wiring.

mod config;
mod state_builders;

pub use config::ServerConfig;

use state_builders::build_http_state;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use exam_backend::Trace;
#[cfg(debug_assertions)]
use exam_backend::doc::ApiDoc;
use exam_backend::inbound::http::configure_api;
use exam_backend::inbound::http::health::{HealthState, live, ready};
use exam_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(web::scope("/api").configure(configure_api))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: pre-built [`ServerConfig`] holding the bind address, optional
///   pool, grading mode, and re-submission policy.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr;

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use exam_backend::domain::TRACE_ID_HEADER;
    use rstest::rstest;
    use serde_json::Value;

    fn memory_state() -> web::Data<HttpState> {
        let addr = "127.0.0.1:0".parse().expect("valid address");
        build_http_state(&ServerConfig::new(addr))
    }

    #[rstest]
    #[actix_web::test]
    async fn api_routes_are_mounted_with_trace_header() {
        let app = actix_test::init_service(build_app(
            web::Data::new(HealthState::new()),
            memory_state(),
        ))
        .await;

        let request = actix_test::TestRequest::get().uri("/api/courses").to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key(TRACE_ID_HEADER));
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body.pointer("/data/list"), Some(&Value::Array(Vec::new())));
    }

    #[rstest]
    #[actix_web::test]
    async fn health_checks_sit_outside_the_api_scope() {
        let health = web::Data::new(HealthState::new());
        health.mark_ready();
        let app = actix_test::init_service(build_app(health, memory_state())).await;

        let request = actix_test::TestRequest::get().uri("/health/ready").to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
