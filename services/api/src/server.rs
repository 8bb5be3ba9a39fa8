use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryRecommendationRepository, InMemoryStudyPlanRepository};
use crate::routes::with_guidance_routes;
use aspirant_ai::config::AppConfig;
use aspirant_ai::error::AppError;
use aspirant_ai::telemetry;
use aspirant_ai::workflows::guidance::{
    GuidanceService, LinearModelScorer, RecommendationEngine, RoleCatalog,
};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let recommendations = Arc::new(InMemoryRecommendationRepository::default());
    let plans = Arc::new(InMemoryStudyPlanRepository::default());
    let guidance_service = Arc::new(GuidanceService::with_engine(
        recommendations,
        plans,
        build_engine(&config),
    ));

    let app = with_guidance_routes(guidance_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "career guidance service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

/// The external scorer is strictly optional: a missing or unreadable
/// artifact downgrades to deterministic scoring instead of failing startup.
fn build_engine(config: &AppConfig) -> RecommendationEngine {
    let catalog = RoleCatalog::standard();
    let Some(path) = config.model.path.as_deref() else {
        return RecommendationEngine::new(catalog);
    };

    match LinearModelScorer::from_path(path) {
        Ok(scorer) => {
            info!(path = %path.display(), "external scorer loaded");
            RecommendationEngine::with_external_scorer(catalog, Arc::new(scorer))
        }
        Err(error) => {
            warn!(%error, path = %path.display(), "external scorer unavailable, scoring deterministically");
            RecommendationEngine::new(catalog)
        }
    }
}
