// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::engines::traits::{ImageLocator, ScanError};
use scraper::{Html, Selector};

/// 截图定位器
///
/// 负责从截图页面HTML中提取内嵌图片的src属性
pub struct ScreenshotLocator {
    selector: Selector,
}

impl ScreenshotLocator {
    /// 创建新的截图定位器实例
    pub fn new() -> Self {
        Self {
            selector: Selector::parse("img.screenshot-image").unwrap(),
        }
    }
}

impl Default for ScreenshotLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLocator for ScreenshotLocator {
    /// 提取截图图片地址
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - src属性原文，可能是协议相对地址
    /// * `Err(ScanError::MissingImage)` - 页面中没有匹配元素或src属性
    fn locate_image(&self, html: &str) -> Result<String, ScanError> {
        let document = Html::parse_document(html);
        document
            .select(&self.selector)
            .next()
            .and_then(|element| element.value().attr("src"))
            .map(|src| src.to_string())
            .ok_or(ScanError::MissingImage)
    }
}
