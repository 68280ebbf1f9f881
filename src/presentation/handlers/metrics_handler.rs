// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

use crate::domain::models::metric::Metric;
use crate::domain::repositories::metrics_repository::MetricsRepository;

/// 返回所有已完成任务的指标，键为任务名
pub async fn metrics(
    Extension(repo): Extension<Arc<dyn MetricsRepository>>,
) -> Json<BTreeMap<String, Metric>> {
    let snapshot = repo.snapshot();
    debug!(jobs = snapshot.len(), "Metrics handler called");
    Json(snapshot)
}
