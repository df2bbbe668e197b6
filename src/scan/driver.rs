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

use thiserror::Error;
use tracing::{debug, info};

use crate::codes::enumerator::{self, CodeError};
use crate::engines::traits::{ImageDownloader, ImageLocator, PageFetcher, ScanError};
use crate::ocr::TextRecognizer;
use crate::scan::matcher;
use crate::utils::url_utils;

/// 单个编码的处理结果
#[derive(Debug, PartialEq, Eq)]
pub enum CodeReport {
    /// 识别文本命中关键词
    Matched {
        /// 规范化后的图片URL
        image_url: String,
        /// 首个命中的关键词
        keyword: String,
    },
    /// 完整处理但未命中任何关键词
    NoMatch,
    /// 图片已不存在（下载404），跳过识别与匹配
    Skipped,
}

/// 编码空间耗尽时的扫描总结
#[derive(Debug)]
pub struct ScanSummary {
    /// 最后处理的编码（全部为最大符号）
    pub last_code: String,
    /// 已处理的编码数量
    pub codes_scanned: u64,
}

/// 致命扫描失败
///
/// 携带触发失败的编码以便诊断
#[derive(Error, Debug)]
#[error("Scan failed at code {code}: {source}")]
pub struct ScanFailure {
    /// 失败时的当前编码
    pub code: String,
    /// 底层错误
    #[source]
    pub source: ScanError,
}

/// 扫描驱动器
///
/// 顺序执行逐编码管线：抓取页面 → 定位图片 → 下载图片 → 文字识别 →
/// 关键词匹配 → 递增编码。进程中唯一的可变循环状态是当前编码。
pub struct ScanDriver<F, L, D, R>
where
    F: PageFetcher,
    L: ImageLocator,
    D: ImageDownloader,
    R: TextRecognizer,
{
    fetcher: F,
    locator: L,
    downloader: D,
    recognizer: R,
    keywords: Vec<String>,
    code: String,
}

impl<F, L, D, R> ScanDriver<F, L, D, R>
where
    F: PageFetcher,
    L: ImageLocator,
    D: ImageDownloader,
    R: TextRecognizer,
{
    /// 创建新的扫描驱动器实例
    pub fn new(
        fetcher: F,
        locator: L,
        downloader: D,
        recognizer: R,
        start_code: String,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            fetcher,
            locator,
            downloader,
            recognizer,
            keywords,
            code: start_code,
        }
    }

    /// 运行扫描主循环
    ///
    /// 逐个处理编码直到编码空间耗尽或发生致命错误。
    /// 不重试任何操作：失败要么是资源已删除（跳过），
    /// 要么是值得停下来的系统性问题（终止）。
    ///
    /// # 返回值
    ///
    /// * `Ok(ScanSummary)` - 编码空间耗尽，干净收尾
    /// * `Err(ScanFailure)` - 致命错误，携带触发错误的编码
    pub async fn run(mut self) -> Result<ScanSummary, ScanFailure> {
        info!(
            start_code = %self.code,
            keywords = self.keywords.len(),
            "Scan started"
        );

        let mut codes_scanned: u64 = 0;

        loop {
            let report = match self.process_code(&self.code).await {
                Ok(report) => report,
                Err(source) => {
                    return Err(ScanFailure {
                        code: self.code,
                        source,
                    });
                }
            };
            codes_scanned += 1;

            if let CodeReport::Matched { image_url, keyword } = &report {
                // One observable line per match: the scan's success signal
                info!(image_url = %image_url, keyword = %keyword, "Keyword match");
            }

            match enumerator::increment(&self.code) {
                Ok(next) => self.code = next,
                Err(CodeError::Exhausted) => {
                    return Ok(ScanSummary {
                        last_code: self.code,
                        codes_scanned,
                    });
                }
                Err(source) => {
                    return Err(ScanFailure {
                        code: self.code,
                        source: source.into(),
                    });
                }
            }
        }
    }

    /// 处理单个编码
    ///
    /// 只有图片下载步骤的404是可恢复的：页面对任意编码都应存在，
    /// 而页面背后的图片可能已被删除。其余任何步骤的任何失败均向上传播。
    ///
    /// # 返回值
    ///
    /// * `Ok(CodeReport)` - 命中、未命中或已跳过
    /// * `Err(ScanError)` - 致命错误
    pub async fn process_code(&self, code: &str) -> Result<CodeReport, ScanError> {
        let html = self.fetcher.fetch_page(code).await?;
        let raw_src = self.locator.locate_image(&html)?;

        let image_url =
            url_utils::normalize_image_url(&raw_src).map_err(|source| {
                ScanError::InvalidImageUrl {
                    url: raw_src.clone(),
                    source,
                }
            })?;

        let stored = match self.downloader.download(code, &image_url).await {
            Ok(path) => path,
            Err(e) if e.is_not_found() => {
                // The image behind the page has been deleted: skip this code
                debug!(code, image_url = %image_url, "Image gone, advancing");
                return Ok(CodeReport::Skipped);
            }
            Err(e) => return Err(e),
        };

        let text = self.recognizer.recognize(&stored).await?;

        match matcher::find_keyword(&text, &self.keywords) {
            Some(keyword) => Ok(CodeReport::Matched {
                image_url: image_url.as_str().to_string(),
                keyword: keyword.to_string(),
            }),
            None => Ok(CodeReport::NoMatch),
        }
    }
}
