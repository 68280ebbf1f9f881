// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use thiserror::Error;

/// 仓库层错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("数据已存在: {0}")]
    AlreadyExists(String),
}
