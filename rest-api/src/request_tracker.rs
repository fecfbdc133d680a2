//! Observability wrapper for every HTTP request
//!
//! Logs each request on arrival and completion, and records the request
//! counter and latency histogram. Layered over the whole router, so
//! unmatched paths and error responses are tracked the same as successes.

use std::sync::Arc;
use std::time::Instant;

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use tracing::info;

use crate::metrics::ApiMetrics;

/// Pre/post middleware around every route.
///
/// The status observed here is the final wire status; handler errors have
/// already been mapped to responses by the time the post-phase runs.
pub async fn track_requests(
    State(metrics): State<Arc<ApiMetrics>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    info!(method = %method, path = %path, "Request started");

    let response = next.run(request).await;

    let elapsed = started.elapsed();
    let status = response.status().as_u16();
    metrics.observe_request(method.as_str(), &path, status, elapsed);

    info!(
        method = %method,
        path = %path,
        status = status,
        duration = %format!("{:.3}s", elapsed.as_secs_f64()),
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::util::ServiceExt;

    fn tracked_router(metrics: Arc<ApiMetrics>) -> Router {
        Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route(
                "/boom",
                get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
            )
            .layer(middleware::from_fn_with_state(metrics, track_requests))
    }

    #[tokio::test]
    async fn test_successful_request_is_counted() {
        let metrics = Arc::new(ApiMetrics::new().unwrap());
        let app = tracked_router(Arc::clone(&metrics));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/ok")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let (body, _) = metrics.render().unwrap();
        assert!(
            body.contains(r#"api_requests_total{endpoint="/ok",method="GET",status="200"} 1"#)
        );
        assert!(body.contains(r#"api_request_duration_seconds_count{endpoint="/ok"} 1"#));
    }

    #[tokio::test]
    async fn test_error_status_is_counted() {
        let metrics = Arc::new(ApiMetrics::new().unwrap());
        let app = tracked_router(Arc::clone(&metrics));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/boom")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let (body, _) = metrics.render().unwrap();
        assert!(
            body.contains(r#"api_requests_total{endpoint="/boom",method="GET",status="500"} 1"#)
        );
    }

    #[tokio::test]
    async fn test_unmatched_route_is_counted() {
        let metrics = Arc::new(ApiMetrics::new().unwrap());
        let app = tracked_router(Arc::clone(&metrics));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/no/such/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let (body, _) = metrics.render().unwrap();
        assert!(body.contains(
            r#"api_requests_total{endpoint="/no/such/route",method="GET",status="404"} 1"#
        ));
    }
}
