// Tauri External Opener
//
// 通过 opener 插件用系统默认程序打开地址

use tauri::AppHandle;
use tauri_plugin_opener::OpenerExt;
use url::Url;

use crate::modules::window::ports::{ExternalOpener, WindowError};

pub struct TauriOpener {
    app_handle: AppHandle,
}

impl TauriOpener {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ExternalOpener for TauriOpener {
    fn open(&self, url: &Url) -> Result<(), WindowError> {
        self.app_handle
            .opener()
            .open_url(url.as_str(), None::<&str>)
            .map_err(|e| WindowError::OperationFailed(e.to_string()))
    }
}
