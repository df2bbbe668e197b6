// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::ScanError;
use async_trait::async_trait;
use std::path::Path;

pub mod recognizer;

/// 文字识别特质
///
/// 对已落盘的图片执行OCR，产出纯文本
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// 识别图片中的文字
    async fn recognize(&self, image: &Path) -> Result<String, ScanError>;
}
