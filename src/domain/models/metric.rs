// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 任务指标
///
/// 任务完成时创建一次，之后不再修改
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    /// 任务提交的页面 URL，保持原始顺序
    pub urls: Vec<String>,
    /// 耗时文本
    pub time: String,
    /// 成功下载的图片数量
    #[serde(rename = "filesCount")]
    pub files_count: u64,
}

impl Metric {
    pub fn new(urls: Vec<String>, elapsed: Duration, files_count: u64) -> Self {
        Self {
            urls,
            time: format_elapsed(elapsed),
            files_count,
        }
    }
}

/// 将耗时格式化为文本，例如 `1.502345ms`
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:?}", elapsed)
}
