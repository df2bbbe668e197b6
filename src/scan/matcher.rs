// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 在识别文本中查找首个命中的关键词
///
/// 按配置顺序扫描关键词，返回第一个以连续子串形式出现在文本中的关键词。
/// 匹配区分大小写，不做分词或归一化。列表为空或全部未命中时返回None。
pub fn find_keyword<'a>(text: &str, keywords: &'a [String]) -> Option<&'a str> {
    keywords
        .iter()
        .find(|keyword| text.contains(keyword.as_str()))
        .map(String::as_str)
}
