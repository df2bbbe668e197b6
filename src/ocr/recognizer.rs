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

use crate::engines::traits::ScanError;
use crate::ocr::TextRecognizer;
use async_trait::async_trait;
use leptess::LepTess;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Tesseract文字识别引擎
///
/// 引擎句柄在进程启动时获取一次，整个扫描周期内复用，
/// 避免每次识别都支付模型加载成本。
pub struct TesseractRecognizer {
    engine: Arc<Mutex<LepTess>>,
}

impl TesseractRecognizer {
    /// 创建新的识别引擎实例
    ///
    /// # 参数
    ///
    /// * `languages` - Tesseract语言代码，如 "eng"
    pub fn new(languages: &str) -> Result<Self, ScanError> {
        let engine = LepTess::new(None, languages).map_err(|e| {
            ScanError::Recognition(format!("failed to initialize tesseract: {}", e))
        })?;

        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
        })
    }
}

#[async_trait]
impl TextRecognizer for TesseractRecognizer {
    /// 识别图片中的文字
    ///
    /// Tesseract调用是阻塞的，移到blocking线程池上执行。
    ///
    /// # 返回值
    ///
    /// * `Ok(String)` - 识别出的文本
    /// * `Err(ScanError::Recognition)` - 引擎设置图片或识别失败
    async fn recognize(&self, image: &Path) -> Result<String, ScanError> {
        let engine = Arc::clone(&self.engine);
        let path = image.to_path_buf();

        tokio::task::spawn_blocking(move || {
            let mut engine = engine.blocking_lock();
            engine
                .set_image(&path)
                .map_err(|e| ScanError::Recognition(format!("failed to set image: {}", e)))?;
            engine
                .get_utf8_text()
                .map_err(|e| ScanError::Recognition(format!("failed to extract text: {}", e)))
        })
        .await
        .map_err(|e| ScanError::Recognition(format!("recognition task panicked: {}", e)))?
    }
}
