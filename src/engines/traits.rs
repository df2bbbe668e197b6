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

use async_trait::async_trait;
use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;
use url::Url;

use crate::codes::enumerator::CodeError;

/// 扫描错误类型
#[derive(Error, Debug)]
pub enum ScanError {
    /// 请求构造或传输失败
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// 非成功HTTP状态码
    #[error("Unexpected status {status} for {url}")]
    HttpStatus { status: StatusCode, url: String },

    /// 页面中缺少截图图片属性
    #[error("Screenshot image attribute not found in page")]
    MissingImage,

    /// 提取到的图片URL无法解析
    #[error("Invalid image url {url}: {source}")]
    InvalidImageUrl {
        url: String,
        source: url::ParseError,
    },

    /// 本地文件创建或写入失败
    #[error("File write failed: {0}")]
    Io(#[from] std::io::Error),

    /// 文字识别失败
    #[error("Text recognition failed: {0}")]
    Recognition(String),

    /// 编码递增失败
    #[error(transparent)]
    Code(#[from] CodeError),
}

impl ScanError {
    /// 判断错误是否为资源不存在
    ///
    /// 只有图片下载步骤的404属于可恢复错误，驱动器据此跳过当前编码。
    ///
    /// # 返回值
    ///
    /// 如果错误是HTTP 404状态则返回true，否则返回false
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScanError::HttpStatus { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

/// 页面抓取特质
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// 获取指定编码对应的页面HTML
    async fn fetch_page(&self, code: &str) -> Result<String, ScanError>;
}

/// 图片定位特质
pub trait ImageLocator: Send + Sync {
    /// 从页面HTML中提取截图图片地址
    fn locate_image(&self, html: &str) -> Result<String, ScanError>;
}

/// 图片下载特质
#[async_trait]
pub trait ImageDownloader: Send + Sync {
    /// 下载图片并按编码落盘，返回存储路径
    async fn download(&self, code: &str, image_url: &Url) -> Result<PathBuf, ScanError>;
}
