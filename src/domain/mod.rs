// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：任务、指标和图片候选
/// - 仓库接口（repositories）：存储与指标持久化抽象接口
/// - 服务（services）：图片地址提取与下载
pub mod models;
pub mod repositories;
pub mod services;
