// Window Domain Entities
//
// 窗口领域实体定义

use serde::{Deserialize, Serialize};
use url::Url;

use super::value_objects::{SpellcheckLanguage, WindowLabel};
use crate::modules::config::{ShellConfig, Size};
use crate::modules::icon::IconImage;
use crate::modules::window::ports::WindowError;

/// 主窗口配置实体
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub label: WindowLabel,
    pub title: String,
    pub size: Size,
    pub url: Url,
    pub user_agent: String,
    /// 存储分区名，对应 `<app data>/partitions/<name>`
    pub storage_partition: String,
    pub spellcheck_language: SpellcheckLanguage,
    /// 右键菜单中可选的语言
    pub spellcheck_languages: Vec<SpellcheckLanguage>,
    pub always_on_top: bool,
    pub icon: Option<IconImage>,
}

impl WindowConfig {
    /// 从应用配置创建主窗口配置
    pub fn from_settings(config: &ShellConfig) -> Result<Self, WindowError> {
        let url = config
            .home_url()
            .map_err(|e| WindowError::InvalidConfig(e.to_string()))?;

        Ok(Self {
            label: WindowLabel::new(config.window.label.clone()),
            title: config.window.title.clone(),
            size: config.window.size,
            url,
            user_agent: config.content.user_agent.clone(),
            storage_partition: config.content.storage_partition.clone(),
            spellcheck_language: config.content.default_spellcheck_language,
            spellcheck_languages: config.content.spellcheck_languages.clone(),
            always_on_top: false,
            icon: None,
        })
    }

    pub fn with_icon(mut self, icon: Option<IconImage>) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_always_on_top(mut self, always_on_top: bool) -> Self {
        self.always_on_top = always_on_top;
        self
    }
}

/// 主窗口生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WindowLifecycle {
    /// 尚未创建，或已被系统销毁但进程未退出
    #[default]
    Absent,
    Visible,
    /// 用户关闭后隐藏，窗口对象仍然存在
    Hidden,
    /// 退出时销毁，终态
    Destroyed,
}

impl WindowLifecycle {
    pub fn as_str(&self) -> &'static str {
        match self {
            WindowLifecycle::Absent => "absent",
            WindowLifecycle::Visible => "visible",
            WindowLifecycle::Hidden => "hidden",
            WindowLifecycle::Destroyed => "destroyed",
        }
    }

    /// 窗口对象是否存在
    pub fn has_window(&self) -> bool {
        matches!(self, WindowLifecycle::Visible | WindowLifecycle::Hidden)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, WindowLifecycle::Destroyed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_config_from_defaults() {
        let config = WindowConfig::from_settings(&ShellConfig::default()).unwrap();
        assert_eq!(config.label, WindowLabel::main());
        assert_eq!(config.title, "WhatsApp");
        assert_eq!(config.size, Size::new(1100, 800));
        assert_eq!(config.url.as_str(), "https://web.whatsapp.com/");
        assert_eq!(config.storage_partition, "main");
        assert!(config.user_agent.contains("Chrome/124.0.6367.78"));
        assert!(!config.always_on_top);
        assert_eq!(config.spellcheck_languages, SpellcheckLanguage::ALL.to_vec());
    }

    #[test]
    fn test_window_config_rejects_bad_url() {
        let mut settings = ShellConfig::default();
        settings.content.home_url = "::".to_string();
        assert!(matches!(
            WindowConfig::from_settings(&settings),
            Err(WindowError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_lifecycle_states() {
        assert!(!WindowLifecycle::Absent.has_window());
        assert!(WindowLifecycle::Hidden.has_window());
        assert!(WindowLifecycle::Destroyed.is_terminal());
        assert_eq!(WindowLifecycle::default(), WindowLifecycle::Absent);
    }
}
