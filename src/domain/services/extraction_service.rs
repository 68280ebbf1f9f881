// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

use crate::domain::models::image::ImageCandidate;

/// `<img>` 标签标记
const IMG_TAG_MARKER: &str = "<img";

/// 图片地址或 `<img ... src="...">` 标签
static IMAGE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?-u)https?:[/.:\w-]*\.(?:jpg|gif|png|svg)|<img[^>]+\bsrc=["']([^"']+)["']"#)
        .expect("Failed to compile image regex")
});

/// 更宽泛的 URL 形状，用于从标签中取出真正的地址
static NESTED_URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?-u)https?://[-a-zA-Z0-9@:%._+~#=]{1,256}\b[-a-zA-Z0-9()@:%_+.~#?&/=]*")
        .expect("Failed to compile nested url regex")
});

/// 提取服务
///
/// 负责从原始页面字节中找出图片候选
pub struct ExtractionService;

impl ExtractionService {
    /// 提取图片候选
    ///
    /// 按出现顺序返回所有匹配，不去重。匹配文本包含 `<img` 时视为标签，
    /// 再用宽泛的 URL 模式从 `src` 中取地址；取不到时候选地址为空
    pub fn extract_image_urls(page: &[u8]) -> Vec<ImageCandidate> {
        IMAGE_PATTERN
            .captures_iter(page)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let raw = String::from_utf8_lossy(whole.as_bytes()).into_owned();
                if !raw.contains(IMG_TAG_MARKER) {
                    return Some(ImageCandidate::direct(raw));
                }

                let src = caps.get(1).map_or(whole.as_bytes(), |m| m.as_bytes());
                let url = Self::extract_nested_url(src);
                Some(ImageCandidate::tag(raw, url))
            })
            .collect()
    }

    /// 取出片段中的第一个 URL，没有时返回空字符串
    pub fn extract_nested_url(fragment: &[u8]) -> String {
        NESTED_URL_PATTERN
            .find(fragment)
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "extraction_service_test.rs"]
mod tests;
