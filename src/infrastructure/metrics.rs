// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use anyhow::Context;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const JOBS_COMPLETED: &str = "imgcrawl_jobs_completed_total";
pub const JOBS_REJECTED: &str = "imgcrawl_jobs_rejected_total";
pub const JOB_DURATION: &str = "imgcrawl_job_duration_seconds";
pub const PAGES_FAILED: &str = "imgcrawl_pages_failed_total";
pub const IMAGES_DOWNLOADED: &str = "imgcrawl_images_downloaded_total";
pub const IMAGES_FAILED: &str = "imgcrawl_images_failed_total";

/// 启动 Prometheus 导出器
///
/// 未配置地址时不安装记录器，计数器调用为空操作
pub fn init_metrics(addr: Option<&str>) -> anyhow::Result<()> {
    let Some(addr) = addr else {
        return Ok(());
    };
    let addr: SocketAddr = addr
        .parse()
        .with_context(|| format!("Invalid metrics address: {}", addr))?;

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return Ok(());
    }

    info!("Metrics exporter listening on {}", addr);
    Ok(())
}
