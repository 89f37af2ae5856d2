use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Extension;
use axum::Json;
use fait_terrain::avis::{notice_router, AvisDePaiementService, NoticeRepository};
use fait_terrain::tarification::tariff_router;
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_routes<R>(service: Arc<AvisDePaiementService<R>>) -> axum::Router
where
    R: NoticeRepository + 'static,
{
    notice_router(service)
        .merge(tariff_router())
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryNoticeRepository;
    use axum::body::Body;
    use axum::http::Request;
    use fait_terrain::config::NoticeConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    fn router() -> axum::Router {
        let service = Arc::new(AvisDePaiementService::new(
            Arc::new(InMemoryNoticeRepository::default()),
            NoticeConfig::default(),
        ));
        with_routes(service)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn healthcheck_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn merged_router_serves_tariffs_and_notices() {
        let response = router()
            .oneshot(
                Request::post("/api/v1/tariffs/words")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"amount":95}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["words"], "QUATRE-VINGT-QUINZE ARIARY");

        let response = router()
            .oneshot(Request::get("/api/v1/avis").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let page = body_json(response).await;
        assert_eq!(page["total"], 0);
        assert_eq!(page["per_page"], 20);
    }
}
