use std::sync::{Mutex, TryLockError};
use tauri::{AppHandle, Manager};

use crate::modules::shell::{EventOutcome, ShellEvent, ShellSession};

/// 应用全局状态
///
/// 会话只在主线程事件回调中被修改；若回调重入时会话正忙，
/// 事件被推迟到主线程队列中重新分发
pub struct SessionState {
    session: Mutex<ShellSession>,
}

impl SessionState {
    pub fn new(session: ShellSession) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }

    pub fn dispatch(&self, app: &AppHandle, event: ShellEvent) -> EventOutcome {
        match self.session.try_lock() {
            Ok(mut session) => session.handle(event),
            Err(TryLockError::Poisoned(poisoned)) => {
                tracing::warn!("Session lock poisoned, recovering");
                poisoned.into_inner().handle(event)
            }
            Err(TryLockError::WouldBlock) => {
                let name = event.name();
                let handle = app.clone();
                match app.run_on_main_thread(move || {
                    dispatch(&handle, event);
                }) {
                    Ok(()) => {
                        tracing::debug!("Session busy, deferred {}", name);
                        EventOutcome::Deferred
                    }
                    Err(e) => {
                        tracing::warn!("Failed to defer {}: {}", name, e);
                        EventOutcome::Failed
                    }
                }
            }
        }
    }
}

/// 把事件交给会话处理；会话尚未就绪时忽略
pub fn dispatch(app: &AppHandle, event: ShellEvent) -> EventOutcome {
    match app.try_state::<SessionState>() {
        Some(state) => state.dispatch(app, event),
        None => {
            tracing::debug!("Session not ready, dropping {}", event.name());
            EventOutcome::Ignored
        }
    }
}
