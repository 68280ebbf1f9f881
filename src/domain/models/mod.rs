// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// - 图片候选（image）：从页面中提取出的可能的图片引用
/// - 任务（job）：一次抓取请求及其生命周期状态
/// - 指标（metric）：已完成任务的记录结果
pub mod image;
pub mod job;
pub mod metric;
