// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 提供领域层抽象接口的技术实现：
/// - 指标（metrics）：Prometheus 导出器与计数器名称
/// - 仓库实现（repositories）：内存指标仓库
/// - 存储（storage）：本地文件系统与内存存储
pub mod metrics;
pub mod repositories;
pub mod storage;
