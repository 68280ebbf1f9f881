// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 候选来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// 直接可用的图片 URL
    Direct,
    /// 来自 `<img>` 标签，需要二次提取 `src`
    Tag,
}

/// 图片候选
///
/// 页面中匹配到的一段文本，`url` 是解析后的下载地址；
/// 标签候选无法恢复地址时 `url` 为空
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageCandidate {
    pub raw: String,
    pub kind: CandidateKind,
    pub url: String,
}

impl ImageCandidate {
    pub fn direct(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            url: raw.clone(),
            raw,
            kind: CandidateKind::Direct,
        }
    }

    pub fn tag(raw: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            kind: CandidateKind::Tag,
            url: url.into(),
        }
    }

    pub fn is_tag(&self) -> bool {
        self.kind == CandidateKind::Tag
    }

    /// 是否有可下载的地址
    pub fn is_downloadable(&self) -> bool {
        !self.url.is_empty()
    }
}
