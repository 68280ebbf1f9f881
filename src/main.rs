// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use imgcrawl::application::use_cases::job_runner::JobRunner;
use imgcrawl::config::settings::Settings;
use imgcrawl::domain::repositories::metrics_repository::MetricsRepository;
use imgcrawl::engines::reqwest_engine::ReqwestEngine;
use imgcrawl::infrastructure::repositories::metrics_repo_impl::InMemoryMetricsRepository;
use imgcrawl::infrastructure::storage::LocalStorage;
use imgcrawl::presentation::routes;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use imgcrawl::utils::telemetry;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting imgcrawl...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    imgcrawl::infrastructure::metrics::init_metrics(
        settings.telemetry.prometheus_addr.as_deref(),
    )?;

    // 3. Initialize Components
    let fetcher = Arc::new(ReqwestEngine::new(&settings.crawler)?);
    let storage = Arc::new(LocalStorage::new(&settings.storage.output_dir));
    let metrics: Arc<dyn MetricsRepository> = Arc::new(InMemoryMetricsRepository::new());
    let runner = Arc::new(JobRunner::new(
        fetcher,
        storage,
        metrics.clone(),
        settings.crawler.per_page_concurrency,
    ));
    info!(
        output_dir = %settings.storage.output_dir,
        per_page_concurrency = settings.crawler.per_page_concurrency,
        "Job runner initialized"
    );

    // 4. Start HTTP server
    let app = routes::routes(runner, metrics);

    let addr = settings.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
