// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum_test::TestServer;
use imgcrawl::application::use_cases::job_runner::JobRunner;
use imgcrawl::config::settings::CrawlerSettings;
use imgcrawl::domain::repositories::metrics_repository::MetricsRepository;
use imgcrawl::engines::reqwest_engine::ReqwestEngine;
use imgcrawl::infrastructure::repositories::metrics_repo_impl::InMemoryMetricsRepository;
use imgcrawl::infrastructure::storage::LocalStorage;
use imgcrawl::presentation::routes;
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub server: TestServer,
    pub output_dir: TempDir,
}

/// 使用临时输出目录构建完整应用
pub fn spawn_app() -> TestApp {
    let output_dir = TempDir::new().unwrap();
    let settings = CrawlerSettings {
        request_timeout_secs: 5,
        ..CrawlerSettings::default()
    };
    let metrics: Arc<dyn MetricsRepository> = Arc::new(InMemoryMetricsRepository::new());
    let runner = Arc::new(JobRunner::new(
        Arc::new(ReqwestEngine::new(&settings).unwrap()),
        Arc::new(LocalStorage::new(output_dir.path())),
        metrics.clone(),
        settings.per_page_concurrency,
    ));

    let server = TestServer::new(routes::routes(runner, metrics)).unwrap();
    TestApp { server, output_dir }
}

/// 两个页面，共三张可下载图片
pub async fn image_site() -> MockServer {
    let server = MockServer::start().await;
    let uri = server.uri();

    let pages = [
        (
            "/gallery",
            format!(r#"<img src="{uri}/img/one.jpg"><img src="/relative.png"> {uri}/img/two.png"#),
        ),
        (
            "/blog",
            format!(r#"<img class="x" src="{uri}/img/three.jpg"> {uri}/img/broken.gif"#),
        ),
    ];
    for (route, body) in pages {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }

    for route in ["/img/one.jpg", "/img/two.png", "/img/three.jpg"] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"image".to_vec()))
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/img/broken.gif"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    server
}
