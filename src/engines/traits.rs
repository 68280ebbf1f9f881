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

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// 引擎错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 请求失败（连接、DNS、超时等）
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    /// 非 2xx 响应
    #[error("Received non-success status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },
}

/// 获取器特质
///
/// 单次 GET，不重试，使用默认重定向策略
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// 获取页面内容
    ///
    /// 不检查响应状态，任何状态的响应体都会返回
    async fn fetch_page(&self, url: &str) -> Result<Bytes, EngineError>;

    /// 获取资源内容
    ///
    /// 非 2xx 响应返回 `EngineError::UnexpectedStatus`
    async fn fetch_resource(&self, url: &str) -> Result<Bytes, EngineError>;
}
