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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含扫描目标与出站代理的所有配置项
#[derive(Debug, Deserialize)]
pub struct Settings {
    /// 扫描配置
    pub scan: ScanSettings,
    /// 图片下载代理配置
    pub proxy: ProxySettings,
}

/// 扫描配置设置
#[derive(Debug, Deserialize)]
pub struct ScanSettings {
    /// 截图页面URL模板，编码追加在其后
    pub base_url: String,
    /// 起始编码
    pub start_code: String,
    /// 图片输出目录
    pub images_dir: String,
    /// 待检测的关键词列表（按配置顺序匹配）
    pub keywords: Vec<String>,
    /// OCR识别语言
    pub ocr_languages: String,
}

/// 代理配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ProxySettings {
    /// 代理协议 (http, https)
    pub scheme: String,
    /// 代理地址 host:port，留空则直连
    pub host: String,
    /// 代理用户名
    pub user: String,
    /// 代理密码
    pub pass: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 从配置文件与环境变量加载配置，支持默认值
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Config::builder()
            // Default scan settings
            .set_default("scan.base_url", "https://prnt.sc/")?
            .set_default("scan.start_code", "sjgmm9")?
            .set_default("scan.images_dir", "images")?
            .set_default("scan.keywords", Vec::<String>::new())?
            .set_default("scan.ocr_languages", "eng")?
            // Default proxy settings
            .set_default("proxy.scheme", "http")?
            .set_default("proxy.host", "")?
            .set_default("proxy.user", "")?
            .set_default("proxy.pass", "")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(Environment::with_prefix("SHOTSCAN").separator("__"));

        builder.build()?.try_deserialize()
    }
}
