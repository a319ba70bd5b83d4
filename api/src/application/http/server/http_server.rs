use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::http::Method;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::routing::get;
use axum_prometheus::PrometheusMetricLayer;
use foodchain_core::{
    application::create_service, domain::common::FoodchainConfig,
    infrastructure::session::InMemorySessionRepository,
};
use tower_http::cors::CorsLayer;
use tracing::{debug, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::application::http::bill::router::{BillApiDoc, bill_routes};
use crate::application::http::health::{HealthApiDoc, health_routes};
use crate::application::http::server::app_state::AppState;
use crate::application::http::server::openapi::ApiDoc;
use crate::application::http::session::router::{SessionApiDoc, session_routes};
use crate::args::Args;

pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = FoodchainConfig::from(args.as_ref().clone());
    let service = create_service(config)?;
    let session_repository = InMemorySessionRepository::new();

    Ok(AppState::new(args, service, session_repository))
}

/// Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer = tower_http::trace::TraceLayer::new_for_http().make_span_with(
        |request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        },
    );

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect::<Vec<HeaderValue>>();

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();

    let mut api_doc = ApiDoc::openapi();
    api_doc.merge(BillApiDoc::openapi());
    api_doc.merge(SessionApiDoc::openapi());
    api_doc.merge(HealthApiDoc::openapi());

    let router = Router::new()
        .merge(bill_routes(state.clone()))
        .merge(session_routes(state.clone()))
        .merge(health_routes())
        .with_state(state)
        .merge(Scalar::with_url("/docs", api_doc))
        .route("/metrics", get(|| async move { metric_handle.render() }))
        .layer(prometheus_layer)
        .layer(cors)
        .layer(trace_layer);

    Ok(router)
}
