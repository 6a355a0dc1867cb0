// Window Value Objects
//
// 窗口相关的值对象定义

use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// 窗口标识符
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowLabel(String);

impl WindowLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 主窗口标识
    pub fn main() -> Self {
        Self("main".to_string())
    }
}

impl Default for WindowLabel {
    fn default() -> Self {
        Self::main()
    }
}

impl From<&str> for WindowLabel {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for WindowLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 拼写检查语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpellcheckLanguage {
    #[serde(rename = "en-GB")]
    EnglishUk,
    #[serde(rename = "en-US")]
    EnglishUs,
    #[serde(rename = "fr-FR")]
    French,
}

impl SpellcheckLanguage {
    /// 菜单中的显示顺序
    pub const ALL: [SpellcheckLanguage; 3] = [
        SpellcheckLanguage::EnglishUk,
        SpellcheckLanguage::EnglishUs,
        SpellcheckLanguage::French,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SpellcheckLanguage::EnglishUk => "en-GB",
            SpellcheckLanguage::EnglishUs => "en-US",
            SpellcheckLanguage::French => "fr-FR",
        }
    }

    /// 系统拼写词典名（Enchant/Hunspell 使用下划线）
    pub fn dictionary_name(&self) -> &'static str {
        match self {
            SpellcheckLanguage::EnglishUk => "en_GB",
            SpellcheckLanguage::EnglishUs => "en_US",
            SpellcheckLanguage::French => "fr_FR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SpellcheckLanguage::EnglishUk => "English (UK)",
            SpellcheckLanguage::EnglishUs => "English (US)",
            SpellcheckLanguage::French => "French",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }
}

/// 页面缩放级别，每级 0.5，缩放系数为 1.2^(级数 * 0.5)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ZoomLevel(i32);

impl ZoomLevel {
    /// 约 25%
    pub const MIN: i32 = -15;
    /// 约 500%
    pub const MAX: i32 = 17;

    pub fn steps(&self) -> i32 {
        self.0
    }

    pub fn zoom_in(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    pub fn zoom_out(self) -> Self {
        Self((self.0 - 1).max(Self::MIN))
    }

    pub fn reset() -> Self {
        Self(0)
    }

    pub fn factor(&self) -> f64 {
        1.2_f64.powf(self.0 as f64 * 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spellcheck_language_codes() {
        assert_eq!(SpellcheckLanguage::EnglishUk.code(), "en-GB");
        assert_eq!(SpellcheckLanguage::French.label(), "French");
        assert_eq!(
            SpellcheckLanguage::from_code("en-us"),
            Some(SpellcheckLanguage::EnglishUs)
        );
        assert_eq!(SpellcheckLanguage::from_code("de-DE"), None);
    }

    #[test]
    fn test_dictionary_names_match_codes() {
        for lang in SpellcheckLanguage::ALL {
            assert_eq!(lang.dictionary_name().replace('_', "-"), lang.code());
        }
    }

    #[test]
    fn test_spellcheck_language_serializes_as_code() {
        let json = serde_json::to_string(&SpellcheckLanguage::French).unwrap();
        assert_eq!(json, "\"fr-FR\"");
    }

    #[test]
    fn test_zoom_level_is_clamped() {
        let mut zoom = ZoomLevel::default();
        assert_eq!(zoom.factor(), 1.0);

        for _ in 0..100 {
            zoom = zoom.zoom_in();
        }
        assert_eq!(zoom.steps(), ZoomLevel::MAX);
        assert!(zoom.factor() <= 5.0);

        for _ in 0..100 {
            zoom = zoom.zoom_out();
        }
        assert_eq!(zoom.steps(), ZoomLevel::MIN);
        assert!(zoom.factor() >= 0.25);
        assert_eq!(ZoomLevel::reset().factor(), 1.0);
    }

    #[test]
    fn test_zoom_in_enlarges() {
        assert!(ZoomLevel::default().zoom_in().factor() > 1.0);
        assert!(ZoomLevel::default().zoom_out().factor() < 1.0);
    }
}
