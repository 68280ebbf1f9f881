// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域服务模块
///
/// - 下载服务（download_service）：下载单张图片并写入任务目录
/// - 提取服务（extraction_service）：从页面内容中匹配图片地址
pub mod download_service;
pub mod extraction_service;
