use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryNoticeRepository};
use crate::routes::with_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use fait_terrain::avis::AvisDePaiementService;
use fait_terrain::config::AppConfig;
use fait_terrain::error::AppError;
use fait_terrain::telemetry;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

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
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryNoticeRepository::default());
    let notice_service = Arc::new(AvisDePaiementService::new(repository, config.notices));

    let app = with_routes(notice_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        payment_delay_days = config.notices.payment_delay_days,
        "fait terrain service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
