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

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashSet;
use futures::stream::{self, FuturesUnordered, StreamExt};
use metrics::{counter, histogram};
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::domain::models::job::{InvalidTransition, Job, JobLifecycle, JobState};
use crate::domain::models::metric::Metric;
use crate::domain::repositories::metrics_repository::MetricsRepository;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::domain::services::download_service::{DownloadOutcome, DownloadService, FileCounter};
use crate::domain::services::extraction_service::ExtractionService;
use crate::engines::traits::{EngineError, Fetcher};
use crate::infrastructure::metrics::{
    IMAGES_DOWNLOADED, IMAGES_FAILED, JOBS_COMPLETED, JOBS_REJECTED, JOB_DURATION, PAGES_FAILED,
};
use crate::utils::errors::RepositoryError;

#[derive(Error, Debug)]
pub enum JobError {
    #[error("Job already exists: {0}")]
    AlreadyExists(String),
    #[error("Storage error: {0}")]
    Storage(StorageError),
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    InvalidTransition(#[from] InvalidTransition),
}

/// 单个页面任务的失败原因
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Page fetch failed: {0}")]
    Fetch(#[from] EngineError),
    #[error("Page task aborted: {0}")]
    Aborted(String),
}

/// 单个页面的处理结果
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PageSummary {
    pub candidates: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// 任务完成报告
#[derive(Debug, Clone)]
pub struct JobReport {
    pub job_name: String,
    pub metric: Metric,
}

/// 页面处理器
///
/// 每个页面任务持有一份拷贝
#[derive(Clone)]
struct PageProcessor {
    fetcher: Arc<dyn Fetcher>,
    downloader: DownloadService,
    per_page_concurrency: usize,
}

impl PageProcessor {
    async fn process(
        &self,
        job_name: &str,
        url: &str,
        files: &FileCounter,
    ) -> Result<PageSummary, PageError> {
        let body = self.fetcher.fetch_page(url).await?;
        let candidates = ExtractionService::extract_image_urls(&body);
        debug!(job = job_name, url, candidates = candidates.len(), "Page crawled");

        let mut summary = PageSummary {
            candidates: candidates.len(),
            ..PageSummary::default()
        };

        let outcomes: Vec<_> = stream::iter(candidates.into_iter().enumerate())
            .map(|(index, candidate)| async move {
                let result = self
                    .downloader
                    .download_candidate(job_name, index, &candidate, files)
                    .await;
                (candidate, result)
            })
            .buffer_unordered(self.per_page_concurrency)
            .collect()
            .await;

        for (candidate, result) in outcomes {
            match result {
                Ok(DownloadOutcome::Saved { .. }) => {
                    summary.downloaded += 1;
                    counter!(IMAGES_DOWNLOADED).increment(1);
                }
                Ok(DownloadOutcome::Skipped) => summary.skipped += 1,
                Err(e) => {
                    summary.failed += 1;
                    counter!(IMAGES_FAILED).increment(1);
                    warn!(job = job_name, url = %candidate.url, error = %e, "Image download failed");
                }
            }
        }

        Ok(summary)
    }
}

/// 任务执行器
///
/// 预留任务目录后为每个页面 URL 启动一个并发任务，
/// 全部结束后一次性写入任务指标
pub struct JobRunner {
    storage: Arc<dyn StorageRepository>,
    metrics: Arc<dyn MetricsRepository>,
    processor: PageProcessor,
    /// 已被接纳的任务名（运行中或已完成）
    admitted: DashSet<String>,
}

impl JobRunner {
    pub fn new(
        fetcher: Arc<dyn Fetcher>,
        storage: Arc<dyn StorageRepository>,
        metrics: Arc<dyn MetricsRepository>,
        per_page_concurrency: usize,
    ) -> Self {
        let downloader = DownloadService::new(fetcher.clone(), storage.clone());
        Self {
            storage,
            metrics,
            processor: PageProcessor {
                fetcher,
                downloader,
                per_page_concurrency: per_page_concurrency.max(1),
            },
            admitted: DashSet::new(),
        }
    }

    fn reject(&self, lifecycle: &mut JobLifecycle, name: String) -> Result<JobReport, JobError> {
        lifecycle.advance(JobState::Rejected)?;
        counter!(JOBS_REJECTED).increment(1);
        warn!(job = %name, "Job rejected, name already in use");
        Err(JobError::AlreadyExists(name))
    }

    /// 执行任务
    ///
    /// # 返回值
    ///
    /// * `Ok(JobReport)` - 任务完成，指标已记录
    /// * `Err(JobError::AlreadyExists)` - 同名任务已记录指标、正在运行或目录已存在，
    ///   未做任何工作
    ///
    /// 任务目录被外部删除后，同名任务仍然会被拒绝
    pub async fn submit(&self, job: Job) -> Result<JobReport, JobError> {
        let mut lifecycle = JobLifecycle::new();

        if self.metrics.get(&job.name).is_some() || !self.admitted.insert(job.name.clone()) {
            return self.reject(&mut lifecycle, job.name);
        }

        match self.storage.reserve_job_dir(&job.name).await {
            Ok(()) => {
                lifecycle.advance(JobState::DirectoryReserved)?;
            }
            Err(StorageError::AlreadyExists(_)) => {
                self.admitted.remove(&job.name);
                return self.reject(&mut lifecycle, job.name);
            }
            Err(e) => {
                self.admitted.remove(&job.name);
                error!(job = %job.name, error = %e, "Failed to reserve job directory");
                return Err(JobError::Storage(e));
            }
        }

        let start = Instant::now();
        let files = Arc::new(FileCounter::new());
        let job_name: Arc<str> = Arc::from(job.name.as_str());

        lifecycle.advance(JobState::Running {
            outstanding: job.page_urls.len(),
        })?;
        info!(job = %job.name, pages = job.page_urls.len(), "Job started");

        let mut tasks: FuturesUnordered<_> = job
            .page_urls
            .iter()
            .cloned()
            .map(|url| {
                let processor = self.processor.clone();
                let files = files.clone();
                let job_name = job_name.clone();
                tokio::spawn(async move {
                    let result = processor.process(&job_name, &url, &files).await;
                    (url, result)
                })
            })
            .collect();

        let mut pages_failed = 0;
        while let Some(joined) = tasks.next().await {
            lifecycle.page_finished()?;

            let (url, result) = match joined {
                Ok(done) => done,
                Err(e) => {
                    pages_failed += 1;
                    counter!(PAGES_FAILED).increment(1);
                    error!(job = %job.name, error = %PageError::Aborted(e.to_string()), "Page task aborted");
                    continue;
                }
            };

            match result {
                Ok(summary) => {
                    debug!(
                        job = %job.name,
                        url = %url,
                        candidates = summary.candidates,
                        downloaded = summary.downloaded,
                        skipped = summary.skipped,
                        failed = summary.failed,
                        "Page finished"
                    );
                }
                Err(e) => {
                    pages_failed += 1;
                    counter!(PAGES_FAILED).increment(1);
                    warn!(job = %job.name, url = %url, error = %e, "Page failed");
                }
            }
        }

        let elapsed = start.elapsed();
        let metric = Metric::new(job.page_urls, elapsed, files.get());
        self.metrics.record(&job.name, metric.clone())?;
        lifecycle.advance(JobState::Completed)?;

        counter!(JOBS_COMPLETED).increment(1);
        histogram!(JOB_DURATION).record(elapsed.as_secs_f64());
        info!(
            job = %job.name,
            elapsed = %metric.time,
            files = metric.files_count,
            pages_failed,
            state = ?lifecycle.state(),
            "Done job"
        );

        Ok(JobReport {
            job_name: job.name,
            metric,
        })
    }
}

#[cfg(test)]
#[path = "job_runner_test.rs"]
mod tests;
