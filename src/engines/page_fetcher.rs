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

use crate::engines::traits::{PageFetcher, ScanError};
use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderName, HeaderValue};

/// 页面抓取引擎
///
/// 基于reqwest实现的截图页面抓取，直连目标站点并携带浏览器化请求头
pub struct HttpPageFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpPageFetcher {
    /// 创建新的页面抓取引擎实例
    ///
    /// # 参数
    ///
    /// * `base_url` - 页面URL模板，编码直接追加在其后
    pub fn new(base_url: &str) -> Result<Self, ScanError> {
        // Browser-like headers so the page host serves the regular document
        let mut headers = HeaderMap::new();
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
        headers.insert(
            HeaderName::from_static("upgrade-insecure-requests"),
            HeaderValue::from_static("1"),
        );
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.9"),
        );

        let client = reqwest::Client::builder()
            .user_agent(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/107.0.0.0 Safari/537.36",
            )
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    /// 抓取编码对应的页面
    ///
    /// 任何失败对驱动器而言都是致命的，包括404：页面对任意编码都应存在，
    /// 不存在的只可能是页面背后的图片。
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 页面HTML
    /// * `Err(ScanError)` - 传输失败或非成功状态码
    async fn fetch_page(&self, code: &str) -> Result<String, ScanError> {
        let url = format!("{}{}", self.base_url, code);
        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus { status, url });
        }

        Ok(response.text().await?)
    }
}
