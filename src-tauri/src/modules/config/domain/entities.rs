// Config Domain Entities
//
// 配置领域实体定义
//
// 所有配置在编译期确定，没有命令行参数也没有持久化文件

use serde::{Deserialize, Serialize};
use url::Url;

use super::errors::ConfigError;
use super::value_objects::{Shortcut, Size, ThemePolicy};
use crate::modules::window::SpellcheckLanguage;

/// WhatsApp Web 地址
pub const DEFAULT_HOME_URL: &str = "https://web.whatsapp.com/";

/// 桌面浏览器 UA，避免页面显示"浏览器不受支持"
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.6367.78 Safari/537.36";

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSettings {
    pub label: String,
    pub title: String,
    pub size: Size,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            label: "main".to_string(),
            title: "WhatsApp".to_string(),
            size: Size::default(),
        }
    }
}

/// 网页内容配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSettings {
    pub home_url: String,
    pub user_agent: String,
    /// 持久化存储分区名，登录状态跨重启保留
    pub storage_partition: String,
    pub spellcheck_languages: Vec<SpellcheckLanguage>,
    pub default_spellcheck_language: SpellcheckLanguage,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            home_url: DEFAULT_HOME_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            storage_partition: "main".to_string(),
            spellcheck_languages: SpellcheckLanguage::ALL.to_vec(),
            default_spellcheck_language: SpellcheckLanguage::EnglishUs,
        }
    }
}

/// 托盘配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraySettings {
    pub id: String,
    pub tooltip: String,
    /// 托盘图标边长，大于该尺寸的图标会被缩小
    pub icon_size: u32,
}

impl Default for TraySettings {
    fn default() -> Self {
        Self {
            id: "main".to_string(),
            tooltip: "WhatsApp".to_string(),
            icon_size: 24,
        }
    }
}

/// 快捷键配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortcutSettings {
    pub show_window: Shortcut,
}

impl Default for ShortcutSettings {
    fn default() -> Self {
        Self {
            show_window: Shortcut::new("Control+Alt+W"),
        }
    }
}

/// 图标配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconSettings {
    /// 打包资源中的兜底图标，相对资源目录
    pub bundled_fallback: String,
}

impl Default for IconSettings {
    fn default() -> Self {
        Self {
            bundled_fallback: "icons/icon.png".to_string(),
        }
    }
}

/// 外观配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppearanceSettings {
    pub theme_policy: ThemePolicy,
}

/// 应用配置聚合根
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellConfig {
    pub window: WindowSettings,
    pub content: ContentSettings,
    pub tray: TraySettings,
    pub shortcuts: ShortcutSettings,
    pub appearance: AppearanceSettings,
    pub icon: IconSettings,
}

impl ShellConfig {
    /// 创建新的默认配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 解析后的首页地址
    pub fn home_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.content.home_url)
            .map_err(|e| ConfigError::Invalid(format!("home url: {}", e)))
    }

    /// 验证配置是否有效
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.home_url() {
            errors.push(e.to_string());
        }
        if self.window.label.trim().is_empty() {
            errors.push("Window label must not be empty".to_string());
        }
        if self.window.size.is_empty() {
            errors.push("Window size must be non-zero".to_string());
        }
        if self.content.storage_partition.trim().is_empty() {
            errors.push("Storage partition must not be empty".to_string());
        }
        if !self
            .content
            .spellcheck_languages
            .contains(&self.content.default_spellcheck_language)
        {
            errors.push("Default spellcheck language must be one of the offered languages".to_string());
        }
        if self.icon.bundled_fallback.trim().is_empty() {
            errors.push("Bundled fallback icon must not be empty".to_string());
        }
        if self.tray.icon_size == 0 {
            errors.push("Tray icon size must be non-zero".to_string());
        }
        if !self.shortcuts.show_window.is_valid() {
            errors.push("Invalid show window shortcut".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::ValidationError { errors })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_config_default() {
        let config = ShellConfig::default();
        assert_eq!(config.window.label, "main");
        assert_eq!(config.window.size, Size::new(1100, 800));
        assert_eq!(config.content.home_url, "https://web.whatsapp.com/");
        assert_eq!(config.content.storage_partition, "main");
        assert_eq!(config.tray.icon_size, 24);
        assert_eq!(config.shortcuts.show_window.keys(), "Control+Alt+W");
        assert_eq!(config.appearance.theme_policy, ThemePolicy::FollowSystem);
        assert_eq!(config.icon.bundled_fallback, "icons/icon.png");
    }

    #[test]
    fn test_shell_config_validate() {
        let config = ShellConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid = ShellConfig::default();
        invalid.content.home_url = "not a url".to_string();
        invalid.tray.icon_size = 0;
        match invalid.validate() {
            Err(ConfigError::ValidationError { errors }) => assert_eq!(errors.len(), 2),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_default_spellcheck_language_must_be_offered() {
        let mut config = ShellConfig::default();
        config.content.spellcheck_languages = vec![SpellcheckLanguage::French];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serializes_camel_case() {
        let json = serde_json::to_value(ShellConfig::default()).unwrap();
        assert!(json["content"]["homeUrl"].is_string());
        assert_eq!(json["appearance"]["themePolicy"], "follow-system");
    }
}
