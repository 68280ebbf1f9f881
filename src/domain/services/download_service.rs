// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::domain::models::image::ImageCandidate;
use crate::domain::repositories::storage_repository::{StorageError, StorageRepository};
use crate::engines::traits::{EngineError, Fetcher};

/// 标签候选统一使用的扩展名，标记中通常拿不到真实扩展名
const TAG_IMAGE_EXTENSION: &str = "png";

/// 下载错误类型
#[derive(Error, Debug)]
pub enum DownloadError {
    #[error("Fetch failed: {0}")]
    Fetch(#[from] EngineError),
    #[error("Write failed: {0}")]
    Storage(#[from] StorageError),
}

/// 下载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// 已写入存储
    Saved { key: String, bytes: usize },
    /// 地址为空，未尝试下载
    Skipped,
}

/// 任务内共享的成功文件计数
#[derive(Debug, Default)]
pub struct FileCounter(AtomicU64);

impl FileCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::SeqCst)
    }
}

/// 计算候选图片的存储键
///
/// 标签候选命名为 `<job>/<index>.png`，直接地址取最后一个 `/` 之后的部分
pub fn destination_key(job_name: &str, index: usize, candidate: &ImageCandidate) -> String {
    if candidate.is_tag() {
        format!("{}/{}.{}", job_name, index, TAG_IMAGE_EXTENSION)
    } else {
        let file_name = candidate.url.rsplit('/').next().unwrap_or_default();
        format!("{}/{}", job_name, file_name)
    }
}

/// 下载服务
///
/// 获取图片字节并写入任务目录
#[derive(Clone)]
pub struct DownloadService {
    fetcher: Arc<dyn Fetcher>,
    storage: Arc<dyn StorageRepository>,
}

impl DownloadService {
    pub fn new(fetcher: Arc<dyn Fetcher>, storage: Arc<dyn StorageRepository>) -> Self {
        Self { fetcher, storage }
    }

    /// 下载 `url` 并保存到 `key`，`url` 为空时跳过
    pub async fn download_image(
        &self,
        url: &str,
        key: &str,
    ) -> Result<DownloadOutcome, DownloadError> {
        if url.is_empty() {
            return Ok(DownloadOutcome::Skipped);
        }

        let data = self.fetcher.fetch_resource(url).await?;
        self.storage.save(key, &data).await?;
        debug!(url, key, bytes = data.len(), "Image saved");

        Ok(DownloadOutcome::Saved {
            key: key.to_string(),
            bytes: data.len(),
        })
    }

    /// 下载一个候选，成功时计数加一
    pub async fn download_candidate(
        &self,
        job_name: &str,
        index: usize,
        candidate: &ImageCandidate,
        files: &FileCounter,
    ) -> Result<DownloadOutcome, DownloadError> {
        if !candidate.is_downloadable() {
            return Ok(DownloadOutcome::Skipped);
        }

        let key = destination_key(job_name, index, candidate);
        let outcome = self.download_image(&candidate.url, &key).await?;
        if matches!(outcome, DownloadOutcome::Saved { .. }) {
            files.increment();
        }
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "download_service_test.rs"]
mod tests;
