// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 测试主模块
///
/// 集成测试通过 HTTP 接口驱动完整应用，单元测试覆盖公开工具函数
mod integration;

// === Unit Tests ===
mod unit;
