// Attention Module
//
// 提醒信号模块：窗口未聚焦时有新未读消息，按平台族闪烁窗口或跳动 Dock 图标

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{AttentionOutcome, AttentionRequest, PlatformFamily};
pub use infrastructure::TauriAttentionAdapter;
pub use ports::{AttentionError, AttentionPort};

use std::sync::Arc;

/// 提醒信号
///
/// 两个方向都是幂等的：已在提醒时再次请求、未提醒时清除都不会调用底层端口
pub struct AttentionSignal {
    port: Arc<dyn AttentionPort>,
    family: PlatformFamily,
    active: bool,
}

impl AttentionSignal {
    pub fn new(port: Arc<dyn AttentionPort>) -> Self {
        Self::with_family(port, PlatformFamily::current())
    }

    pub fn with_family(port: Arc<dyn AttentionPort>, family: PlatformFamily) -> Self {
        Self {
            port,
            family,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// 请求用户注意
    pub fn demand(&mut self) -> AttentionOutcome {
        let request = self.family.request();
        if self.active {
            return AttentionOutcome::Requested(request);
        }

        match self.port.request(request) {
            Ok(()) => {
                self.active = true;
                tracing::debug!("Attention requested: {:?}", request);
                AttentionOutcome::Requested(request)
            }
            Err(e) => {
                tracing::debug!("Attention request skipped: {}", e);
                AttentionOutcome::Unsupported
            }
        }
    }

    /// 清除提醒（窗口获得焦点或未读清零时）
    pub fn clear(&mut self) -> AttentionOutcome {
        if !self.active {
            return AttentionOutcome::Cleared;
        }

        match self.port.clear() {
            Ok(()) => {
                self.active = false;
                tracing::debug!("Attention cleared");
                AttentionOutcome::Cleared
            }
            Err(e) => {
                tracing::debug!("Attention clear skipped: {}", e);
                AttentionOutcome::Unsupported
            }
        }
    }

    /// 窗口被重建后，旧的提醒状态不再有效
    pub fn reset(&mut self) {
        self.active = false;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) enum AttentionCall {
        Request(AttentionRequest),
        Clear,
    }

    #[derive(Default)]
    pub(crate) struct RecordingAttention {
        pub(crate) calls: Mutex<Vec<AttentionCall>>,
        pub(crate) unsupported: bool,
    }

    impl AttentionPort for RecordingAttention {
        fn request(&self, request: AttentionRequest) -> Result<(), AttentionError> {
            if self.unsupported {
                return Err(AttentionError::Unsupported("no urgency hint".to_string()));
            }
            self.calls.lock().unwrap().push(AttentionCall::Request(request));
            Ok(())
        }

        fn clear(&self) -> Result<(), AttentionError> {
            self.calls.lock().unwrap().push(AttentionCall::Clear);
            Ok(())
        }
    }

    #[test]
    fn test_frame_flash_family_flashes_frame() {
        let port = Arc::new(RecordingAttention::default());
        let mut signal = AttentionSignal::with_family(port.clone(), PlatformFamily::FrameFlash);

        assert_eq!(
            signal.demand(),
            AttentionOutcome::Requested(AttentionRequest::FlashFrame)
        );
        assert_eq!(
            *port.calls.lock().unwrap(),
            vec![AttentionCall::Request(AttentionRequest::FlashFrame)]
        );
    }

    #[test]
    fn test_dock_bounce_family_requests_bounce() {
        let port = Arc::new(RecordingAttention::default());
        let mut signal = AttentionSignal::with_family(port.clone(), PlatformFamily::DockBounce);

        signal.demand();
        assert_eq!(
            *port.calls.lock().unwrap(),
            vec![AttentionCall::Request(AttentionRequest::DockBounce)]
        );
    }

    #[test]
    fn test_demand_and_clear_are_idempotent() {
        let port = Arc::new(RecordingAttention::default());
        let mut signal = AttentionSignal::with_family(port.clone(), PlatformFamily::FrameFlash);

        assert_eq!(signal.clear(), AttentionOutcome::Cleared);
        signal.demand();
        signal.demand();
        signal.clear();
        signal.clear();

        assert_eq!(
            *port.calls.lock().unwrap(),
            vec![
                AttentionCall::Request(AttentionRequest::FlashFrame),
                AttentionCall::Clear,
            ]
        );
        assert!(!signal.is_active());
    }

    #[test]
    fn test_unsupported_platform_is_skipped_silently() {
        let port = Arc::new(RecordingAttention {
            unsupported: true,
            ..Default::default()
        });
        let mut signal = AttentionSignal::with_family(port, PlatformFamily::FrameFlash);

        assert_eq!(signal.demand(), AttentionOutcome::Unsupported);
        assert!(!signal.is_active());
    }
}
