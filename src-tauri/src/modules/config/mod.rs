// Config Module
//
// 配置模块
//
// 行为在编译期固定：默认值即配置，启动时统一校验一次

pub mod domain;

pub use domain::{
    AppearanceSettings, ConfigError, ContentSettings, IconSettings, ShellConfig, Shortcut,
    ShortcutSettings, Size, ThemePolicy, TraySettings, WindowSettings, DEFAULT_HOME_URL,
    DEFAULT_USER_AGENT,
};

/// 加载并校验配置
pub fn load() -> Result<ShellConfig, ConfigError> {
    let config = ShellConfig::new();
    config.validate()?;
    tracing::debug!(
        "Config loaded: home_url={}, theme_policy={}",
        config.content.home_url,
        config.appearance.theme_policy.as_str()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_returns_validated_defaults() {
        let config = load().unwrap();
        assert_eq!(config.home_url().unwrap().host_str(), Some("web.whatsapp.com"));
    }
}
