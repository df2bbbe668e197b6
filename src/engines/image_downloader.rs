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

use crate::config::settings::ProxySettings;
use crate::engines::traits::{ImageDownloader, ScanError};
use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;

/// 图片下载引擎
///
/// 通过出站代理下载截图图片并按编码写入本地存储。
/// 图片主机的证书经由代理后无法独立校验，TLS验证被有意放宽。
pub struct ProxyImageDownloader {
    client: reqwest::Client,
    images_dir: PathBuf,
}

impl ProxyImageDownloader {
    /// 创建新的图片下载引擎实例
    ///
    /// # 参数
    ///
    /// * `proxy` - 出站代理配置，host留空时直连
    /// * `images_dir` - 图片输出目录
    pub fn new(proxy: &ProxySettings, images_dir: impl Into<PathBuf>) -> Result<Self, ScanError> {
        let mut builder = reqwest::Client::builder().danger_accept_invalid_certs(true);

        if !proxy.host.is_empty() {
            let proxy_url = format!("{}://{}", proxy.scheme, proxy.host);
            let mut outbound = reqwest::Proxy::all(&proxy_url)?;
            if !proxy.user.is_empty() {
                outbound = outbound.basic_auth(&proxy.user, &proxy.pass);
            }
            builder = builder.proxy(outbound);
        }

        Ok(Self {
            client: builder.build()?,
            images_dir: images_dir.into(),
        })
    }
}

#[async_trait]
impl ImageDownloader for ProxyImageDownloader {
    /// 下载图片并落盘
    ///
    /// # 返回值
    ///
    /// * `Ok(PathBuf)` - 写入的文件路径，命名为 `<code>.png`
    /// * `Err(ScanError)` - 传输失败、非成功状态码或写入失败；
    ///   其中404由调用方归类为可跳过
    async fn download(&self, code: &str, image_url: &Url) -> Result<PathBuf, ScanError> {
        let response = self.client.get(image_url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::HttpStatus {
                status,
                url: image_url.to_string(),
            });
        }

        let bytes = response.bytes().await?;

        let path = self.images_dir.join(format!("{}.png", code));
        let mut file = fs::File::create(&path).await?;
        file.write_all(&bytes).await?;
        file.flush().await?;

        Ok(path)
    }
}
