// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 定义领域层的持久化抽象，具体实现由基础设施层提供：
/// - 指标仓库（metrics_repository）：按任务名保存任务指标
/// - 存储仓库（storage_repository）：任务目录与下载文件
pub mod metrics_repository;
pub mod storage_repository;
