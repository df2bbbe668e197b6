// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 编码模块
///
/// 实现定长编码的字母表与里程计式递增算法
pub mod codes;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 引擎模块
///
/// 实现页面抓取与图片下载引擎及其能力接口
pub mod engines;

/// 提取模块
///
/// 从页面HTML中定位截图图片地址
pub mod extraction;

/// OCR模块
///
/// 封装文字识别引擎
pub mod ocr;

/// 扫描模块
///
/// 实现逐编码处理管线、关键词匹配与主循环驱动器
pub mod scan;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
