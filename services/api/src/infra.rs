use axum::http::{HeaderValue, Method};
use learning_insights::analytics::{LearningInsightsService, ScoringConfig, StaticCatalog};
use learning_insights::config::CorsConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowOrigin, Any, CorsLayer};
use tracing::warn;

pub(crate) type InsightsService = LearningInsightsService<StaticCatalog>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_service() -> Arc<InsightsService> {
    Arc::new(LearningInsightsService::new(
        Arc::new(StaticCatalog),
        ScoringConfig::default(),
    ))
}

/// Wildcard origins cannot carry credentials, so only explicit lists allow them.
pub(crate) fn cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AnyOrigin => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::Origins(origins) => {
            let allowed: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match HeaderValue::from_str(origin) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(%origin, "ignoring CORS origin that is not a valid header value");
                        None
                    }
                })
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(allowed))
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(AllowHeaders::mirror_request())
                .allow_credentials(true)
        }
    }
}
