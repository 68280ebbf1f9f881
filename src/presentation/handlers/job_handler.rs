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

use axum::{
    body::Bytes,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::{
    application::{
        dto::job_request::JobRequestDto,
        use_cases::job_runner::{JobError, JobRunner},
    },
    domain::models::job::Job,
    presentation::errors::AppError,
};

pub const JOB_EXISTS_MESSAGE: &str = "JOB EXISTS ALREADY, CHANGE JOB NAME";

/// 提交抓取任务
///
/// 请求体按 JSON 解析，不要求 Content-Type。任务在独立的 tokio 任务中执行，
/// 客户端断开时仍会完成并记录指标
///
/// # 响应
///
/// * `200 OK` - `Done job: <name> in <elapsed>`
/// * `400 Bad Request` - 请求体不是合法 JSON 或任务名不合法
/// * `409 Conflict` - 任务名已被使用，响应体为 `JOB EXISTS ALREADY, CHANGE JOB NAME`
///   （冲突不返回 200）
pub async fn submit_job(
    Extension(runner): Extension<Arc<JobRunner>>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: JobRequestDto = serde_json::from_slice(&body)?;
    payload.validate()?;
    info!(job = %payload.jobname, urls = payload.urls.len(), "Job received");

    let job: Job = payload.into();
    let result = tokio::spawn(async move { runner.submit(job).await }).await?;

    match result {
        Ok(report) => Ok((
            StatusCode::OK,
            format!("Done job: {} in {}", report.job_name, report.metric.time),
        )
            .into_response()),
        Err(JobError::AlreadyExists(_)) => {
            Ok((StatusCode::CONFLICT, JOB_EXISTS_MESSAGE).into_response())
        }
        Err(e) => Err(e.into()),
    }
}
