// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::collections::BTreeMap;

use crate::domain::models::metric::Metric;
use crate::utils::errors::RepositoryError;

/// 指标仓库特质
///
/// 每个任务名只写入一次，读取不修改状态
pub trait MetricsRepository: Send + Sync {
    /// 记录任务指标，同名指标已存在时返回 `RepositoryError::AlreadyExists`
    fn record(&self, job_name: &str, metric: Metric) -> Result<(), RepositoryError>;

    fn get(&self, job_name: &str) -> Option<Metric>;

    /// 所有已记录指标的快照，按任务名排序
    fn snapshot(&self) -> BTreeMap<String, Metric>;
}
