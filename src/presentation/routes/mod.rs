// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::job_runner::JobRunner;
use crate::domain::repositories::metrics_repository::MetricsRepository;
use crate::presentation::handlers::{job_handler, metrics_handler};
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(runner: Arc<JobRunner>, metrics: Arc<dyn MetricsRepository>) -> Router {
    Router::new()
        .route("/", post(job_handler::submit_job))
        .route("/metrics", get(metrics_handler::metrics))
        .route("/health", get(health_check))
        .route("/version", get(version))
        .layer(Extension(runner))
        .layer(Extension(metrics))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::CrawlerSettings;
    use crate::engines::reqwest_engine::ReqwestEngine;
    use crate::infrastructure::repositories::metrics_repo_impl::InMemoryMetricsRepository;
    use crate::infrastructure::storage::InMemoryStorage;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    fn app() -> Router {
        let metrics: Arc<dyn MetricsRepository> = Arc::new(InMemoryMetricsRepository::new());
        let runner = Arc::new(JobRunner::new(
            Arc::new(ReqwestEngine::new(&CrawlerSettings::default()).unwrap()),
            Arc::new(InMemoryStorage::new()),
            metrics.clone(),
            1,
        ));
        routes(runner, metrics)
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn test_submit_accepts_body_without_content_type() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .body(Body::from(r#"{"jobname":"plain","urls":[]}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).starts_with("Done job: plain in "));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
