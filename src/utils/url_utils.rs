// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将协议相对的图片URL规范化为带scheme的绝对URL
///
/// `//host/path` 形式补全为 `https://host/path`，其余原样解析。
pub fn normalize_image_url(raw: &str) -> Result<Url, ParseError> {
    if let Some(rest) = raw.strip_prefix("//") {
        Url::parse(&format!("https://{}", rest))
    } else {
        Url::parse(raw)
    }
}
