// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shotscan::config::settings::ProxySettings;
use shotscan::engines::image_downloader::ProxyImageDownloader;
use shotscan::engines::page_fetcher::HttpPageFetcher;
use shotscan::engines::traits::ScanError;
use shotscan::extraction::image_locator::ScreenshotLocator;
use shotscan::ocr::TextRecognizer;
use shotscan::scan::driver::{CodeReport, ScanDriver};

/// 固定文本识别器
///
/// 集成测试不依赖系统安装的Tesseract，识别结果由测试脚本化
struct FixedTextRecognizer {
    text: &'static str,
}

#[async_trait]
impl TextRecognizer for FixedTextRecognizer {
    async fn recognize(&self, image: &Path) -> Result<String, ScanError> {
        // The driver must hand over a file the downloader actually wrote
        assert!(image.exists(), "recognizer called without a stored image");
        Ok(self.text.to_string())
    }
}

fn direct_connection() -> ProxySettings {
    ProxySettings {
        scheme: "http".to_string(),
        host: String::new(),
        user: String::new(),
        pass: String::new(),
    }
}

fn page_html(image_url: &str) -> String {
    format!(
        r#"<html><body><img class="screenshot-image" src="{}"></body></html>"#,
        image_url
    )
}

async fn mount_page(server: &MockServer, code: &str, image_url: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", code)))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_html(image_url)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_process_code_downloads_and_matches() {
    let server = MockServer::start().await;
    let image_url = format!("{}/img/aa8.png", server.uri());
    mount_page(&server, "aa8", &image_url).await;
    Mock::given(method("GET"))
        .and(path("/img/aa8.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(b"fake png bytes".to_vec()))
        .mount(&server)
        .await;

    let images_dir = tempfile::tempdir().unwrap();
    let driver = ScanDriver::new(
        HttpPageFetcher::new(&format!("{}/", server.uri())).unwrap(),
        ScreenshotLocator::new(),
        ProxyImageDownloader::new(&direct_connection(), images_dir.path()).unwrap(),
        FixedTextRecognizer {
            text: "login: admin password: hunter2",
        },
        "aa8".to_string(),
        vec!["hunter2".to_string()],
    );

    let report = driver.process_code("aa8").await.unwrap();
    assert_eq!(
        report,
        CodeReport::Matched {
            image_url,
            keyword: "hunter2".to_string(),
        }
    );

    let stored = images_dir.path().join("aa8.png");
    assert_eq!(std::fs::read(&stored).unwrap(), b"fake png bytes");
}

#[tokio::test]
async fn test_gone_image_skips_without_writing_a_file() {
    let server = MockServer::start().await;
    let image_url = format!("{}/img/aa9.png", server.uri());
    mount_page(&server, "aa9", &image_url).await;
    Mock::given(method("GET"))
        .and(path("/img/aa9.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let images_dir = tempfile::tempdir().unwrap();
    let driver = ScanDriver::new(
        HttpPageFetcher::new(&format!("{}/", server.uri())).unwrap(),
        ScreenshotLocator::new(),
        ProxyImageDownloader::new(&direct_connection(), images_dir.path()).unwrap(),
        FixedTextRecognizer { text: "hunter2" },
        "aa9".to_string(),
        vec!["hunter2".to_string()],
    );

    let report = driver.process_code("aa9").await.unwrap();
    assert_eq!(report, CodeReport::Skipped);
    assert!(!images_dir.path().join("aa9.png").exists());
}

#[tokio::test]
async fn test_download_server_error_halts_without_writing_a_file() {
    let server = MockServer::start().await;
    let image_url = format!("{}/img/abc.png", server.uri());
    mount_page(&server, "abc", &image_url).await;
    Mock::given(method("GET"))
        .and(path("/img/abc.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let images_dir = tempfile::tempdir().unwrap();
    let driver = ScanDriver::new(
        HttpPageFetcher::new(&format!("{}/", server.uri())).unwrap(),
        ScreenshotLocator::new(),
        ProxyImageDownloader::new(&direct_connection(), images_dir.path()).unwrap(),
        FixedTextRecognizer { text: "" },
        "abc".to_string(),
        Vec::new(),
    );

    let result = driver.process_code("abc").await;
    assert!(matches!(result, Err(ScanError::HttpStatus { .. })));
    assert!(!images_dir.path().join("abc.png").exists());
}

#[tokio::test]
async fn test_run_advances_over_gone_images_and_halts_on_page_failure() {
    let server = MockServer::start().await;
    // Codes advance aa8 -> aa9 -> aba; the first two pages exist with
    // deleted images, the third page is not mounted so the fetch gets 404
    // and the run stops there.
    for code in ["aa8", "aa9"] {
        let image_url = format!("{}/img/{}.png", server.uri(), code);
        mount_page(&server, code, &image_url).await;
    }
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let images_dir = tempfile::tempdir().unwrap();
    let driver = ScanDriver::new(
        HttpPageFetcher::new(&format!("{}/", server.uri())).unwrap(),
        ScreenshotLocator::new(),
        ProxyImageDownloader::new(&direct_connection(), images_dir.path()).unwrap(),
        FixedTextRecognizer { text: "" },
        "aa8".to_string(),
        Vec::new(),
    );

    let failure = driver.run().await.unwrap_err();
    assert_eq!(failure.code, "aba");
    assert!(matches!(failure.source, ScanError::HttpStatus { .. }));
    assert!(!images_dir.path().join("aa8.png").exists());
    assert!(!images_dir.path().join("aa9.png").exists());
}
