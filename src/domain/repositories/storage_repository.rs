// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use thiserror::Error;

/// 存储错误类型
#[derive(Error, Debug)]
pub enum StorageError {
    /// 同名条目已存在
    #[error("Entry already exists: {0}")]
    AlreadyExists(String),
    /// IO错误
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// 存储仓库特质
///
/// 键为相对于存储根目录的路径，例如 `job/0.png`
#[async_trait]
pub trait StorageRepository: Send + Sync {
    /// 以独占方式创建任务目录
    ///
    /// 同名条目（文件或目录）已存在时返回 `StorageError::AlreadyExists`
    async fn reserve_job_dir(&self, job_name: &str) -> Result<(), StorageError>;

    /// 使用指定键保存数据，已存在时覆盖
    async fn save(&self, key: &str, data: &[u8]) -> Result<(), StorageError>;
}
