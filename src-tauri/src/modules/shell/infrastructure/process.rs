// Tauri Process
//
// 进程退出

use tauri::AppHandle;

use crate::modules::shell::ports::ProcessPort;

pub struct TauriProcess {
    app_handle: AppHandle,
}

impl TauriProcess {
    pub fn new(app_handle: AppHandle) -> Self {
        Self { app_handle }
    }
}

impl ProcessPort for TauriProcess {
    /// 触发 RunEvent::ExitRequested，窗口随后以退出状态关闭
    fn exit(&self, code: i32) {
        self.app_handle.exit(code);
    }
}
