// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::collections::BTreeMap;

use crate::domain::models::metric::Metric;
use crate::domain::repositories::metrics_repository::MetricsRepository;
use crate::utils::errors::RepositoryError;

/// 内存指标仓库
///
/// 进程启动时为空，只增不删，重启后不保留
#[derive(Debug, Default)]
pub struct InMemoryMetricsRepository {
    metrics: DashMap<String, Metric>,
}

impl InMemoryMetricsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MetricsRepository for InMemoryMetricsRepository {
    fn record(&self, job_name: &str, metric: Metric) -> Result<(), RepositoryError> {
        match self.metrics.entry(job_name.to_string()) {
            Entry::Occupied(_) => Err(RepositoryError::AlreadyExists(job_name.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(metric);
                Ok(())
            }
        }
    }

    fn get(&self, job_name: &str) -> Option<Metric> {
        self.metrics.get(job_name).map(|entry| entry.value().clone())
    }

    fn snapshot(&self) -> BTreeMap<String, Metric> {
        self.metrics
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    fn metric(files: u64) -> Metric {
        Metric::new(vec!["http://a.test".to_string()], Duration::from_millis(5), files)
    }

    #[test]
    fn test_empty_snapshot() {
        let repo = InMemoryMetricsRepository::new();
        assert!(repo.snapshot().is_empty());
        assert!(repo.get("missing").is_none());
    }

    #[test]
    fn test_record_is_write_once() {
        let repo = InMemoryMetricsRepository::new();
        repo.record("job", metric(3)).unwrap();

        let err = repo.record("job", metric(7)).unwrap_err();
        assert_eq!(err, RepositoryError::AlreadyExists("job".to_string()));
        assert_eq!(repo.get("job").unwrap().files_count, 3);
    }

    #[test]
    fn test_snapshot_sorted_by_name() {
        let repo = InMemoryMetricsRepository::new();
        repo.record("zebra", metric(1)).unwrap();
        repo.record("alpha", metric(2)).unwrap();

        let names: Vec<String> = repo.snapshot().into_keys().collect();
        assert_eq!(names, vec!["alpha", "zebra"]);
    }

    #[test]
    fn test_concurrent_writes_to_distinct_keys() {
        let repo = Arc::new(InMemoryMetricsRepository::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    repo.record(&format!("job-{}", i), metric(i)).unwrap();
                    repo.snapshot().len()
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap() >= 1);
        }
        assert_eq!(repo.snapshot().len(), 16);
    }
}
