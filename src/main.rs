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

use shotscan::config::settings::Settings;
use shotscan::engines::image_downloader::ProxyImageDownloader;
use shotscan::engines::page_fetcher::HttpPageFetcher;
use shotscan::extraction::image_locator::ScreenshotLocator;
use shotscan::ocr::recognizer::TesseractRecognizer;
use shotscan::scan::driver::ScanDriver;
use shotscan::utils::telemetry;
use tracing::{error, info};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动扫描循环
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting shotscan...");

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Prepare the image output directory
    tokio::fs::create_dir_all(&settings.scan.images_dir).await?;

    // 4. Initialize adapters; the OCR engine handle lives for the whole run
    let fetcher = HttpPageFetcher::new(&settings.scan.base_url)?;
    let locator = ScreenshotLocator::new();
    let downloader = ProxyImageDownloader::new(&settings.proxy, &settings.scan.images_dir)?;
    let recognizer = TesseractRecognizer::new(&settings.scan.ocr_languages)?;
    info!("Adapters initialized");

    // 5. Run the scan loop until exhaustion or a fatal error
    let driver = ScanDriver::new(
        fetcher,
        locator,
        downloader,
        recognizer,
        settings.scan.start_code.clone(),
        settings.scan.keywords.clone(),
    );

    match driver.run().await {
        Ok(summary) => {
            error!(
                last_code = %summary.last_code,
                codes_scanned = summary.codes_scanned,
                "Code space exhausted"
            );
            anyhow::bail!(
                "code space exhausted after {} codes (last code {})",
                summary.codes_scanned,
                summary.last_code
            )
        }
        Err(failure) => {
            error!(code = %failure.code, error = %failure.source, "Scan aborted");
            Err(failure.into())
        }
    }
}
