// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 编码枚举模块
///
/// 定义编码字母表并实现里程计式递增
pub mod enumerator;
