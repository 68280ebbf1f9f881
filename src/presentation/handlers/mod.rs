// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// - 任务处理器（job_handler）：提交抓取任务
/// - 指标处理器（metrics_handler）：查询已完成任务的指标
pub mod job_handler;
pub mod metrics_handler;
