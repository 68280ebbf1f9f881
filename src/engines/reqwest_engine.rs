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

use crate::config::settings::CrawlerSettings;
use crate::engines::traits::{EngineError, Fetcher};
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

/// 抓取引擎
///
/// 基于reqwest实现的HTTP获取器，所有请求共享同一个客户端
#[derive(Clone)]
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 根据抓取配置构建客户端
    pub fn new(settings: &CrawlerSettings) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.request_timeout())
            .build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, EngineError> {
        let response = self.client.get(url).send().await?;
        debug!(url, status = response.status().as_u16(), "GET completed");
        Ok(response)
    }
}

#[async_trait]
impl Fetcher for ReqwestEngine {
    async fn fetch_page(&self, url: &str) -> Result<Bytes, EngineError> {
        let response = self.get(url).await?;
        Ok(response.bytes().await?)
    }

    async fn fetch_resource(&self, url: &str) -> Result<Bytes, EngineError> {
        let response = self.get(url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::UnexpectedStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response.bytes().await?)
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
