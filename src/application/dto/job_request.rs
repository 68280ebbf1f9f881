// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::models::job::Job;

/// 提交任务请求
#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct JobRequestDto {
    /// 任务名，同时作为输出目录名
    #[validate(length(min = 1), custom(function = "validate_job_name"))]
    pub jobname: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// 文件名长度上限（字节）
const MAX_JOB_NAME_BYTES: usize = 255;

/// 任务名必须是单个路径分量，且 UTF-8 编码不超过 255 字节
fn validate_job_name(name: &str) -> Result<(), ValidationError> {
    if name.len() > MAX_JOB_NAME_BYTES {
        return Err(ValidationError::new("job_name_too_long")
            .with_message("jobname must be at most 255 bytes".into()));
    }
    if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
        return Err(ValidationError::new("invalid_job_name")
            .with_message("jobname must be a single path component".into()));
    }
    Ok(())
}

impl From<JobRequestDto> for Job {
    fn from(dto: JobRequestDto) -> Self {
        Job::new(dto.jobname, dto.urls)
    }
}
