use thiserror::Error;

use crate::modules::appearance::AppearanceError;
use crate::modules::attention::AttentionError;
use crate::modules::config::ConfigError;
use crate::modules::icon::IconError;
use crate::modules::shell::{AppMenuError, ShortcutError};
use crate::modules::tray::TrayError;
use crate::modules::window::WindowError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Window error: {0}")]
    Window(#[from] WindowError),

    #[error("Tray error: {0}")]
    Tray(#[from] TrayError),

    #[error("Appearance error: {0}")]
    Appearance(#[from] AppearanceError),

    #[error("Icon error: {0}")]
    Icon(#[from] IconError),

    #[error("Shortcut error: {0}")]
    Shortcut(#[from] ShortcutError),

    #[error("Menu error: {0}")]
    AppMenu(#[from] AppMenuError),

    #[error("Attention error: {0}")]
    Attention(#[from] AttentionError),

    #[error("Session unavailable: {0}")]
    SessionUnavailable(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl serde::Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
