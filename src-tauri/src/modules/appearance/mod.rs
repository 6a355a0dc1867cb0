// Appearance Module
//
// 外观模块：暗色模式样式的注入与移除
//
// 请求经由单槽 watch 通道串行化，只有最新的请求会被执行，
// 由唯一的后台任务消费，保证同一时刻最多存在一个暗色样式

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{StyleHandle, StyleOutcome, DARK_MODE_CSS};
pub use infrastructure::WebviewStyleAdapter;
pub use ports::{AppearanceError, StylePort};

use std::sync::Arc;
use tokio::sync::watch;

/// 当前已注入的暗色样式
#[derive(Debug, Default)]
pub struct DarkModeStyles {
    active: Option<StyleHandle>,
}

impl DarkModeStyles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&StyleHandle> {
        self.active.as_ref()
    }

    /// 先移除已有样式，再按需注入新样式
    pub async fn apply(&mut self, port: &dyn StylePort, enable: bool) -> StyleOutcome {
        if !port.is_available() {
            self.active = None;
            return StyleOutcome::NoWindow;
        }

        let removed = match self.active.take() {
            Some(handle) => {
                if let Err(e) = port.remove_css(&handle).await {
                    tracing::warn!("Failed to remove style {}: {}", handle, e);
                }
                true
            }
            None => false,
        };

        if !enable {
            return if removed {
                StyleOutcome::Removed
            } else {
                StyleOutcome::Unchanged
            };
        }

        match port.insert_css(DARK_MODE_CSS).await {
            Ok(handle) => {
                self.active = Some(handle.clone());
                StyleOutcome::Applied(handle)
            }
            Err(e) => {
                tracing::warn!("Failed to inject dark mode style: {}", e);
                if removed {
                    StyleOutcome::Removed
                } else {
                    StyleOutcome::Unchanged
                }
            }
        }
    }
}

/// 暗色模式控制器（请求端）
pub struct AppearanceController {
    tx: watch::Sender<Option<bool>>,
}

impl AppearanceController {
    /// 创建控制器和对应的后台任务
    pub fn new(port: Arc<dyn StylePort>) -> (Self, AppearanceWorker) {
        let (tx, rx) = watch::channel(None);
        let worker = AppearanceWorker {
            rx,
            port,
            styles: DarkModeStyles::new(),
        };
        (Self { tx }, worker)
    }

    /// 请求开启/关闭暗色模式，未处理的旧请求会被覆盖
    pub fn set_dark_mode(&self, enable: bool) {
        tracing::debug!("Dark mode requested: {}", enable);
        self.tx.send_replace(Some(enable));
    }

    /// 页面重新加载后样式丢失，重新提交最近一次请求
    pub fn reapply(&self) {
        if self.is_dark_requested() {
            self.tx.send_modify(|_| {});
        }
    }

    /// 最近一次请求的值
    pub fn requested(&self) -> Option<bool> {
        *self.tx.borrow()
    }

    pub fn is_dark_requested(&self) -> bool {
        self.requested() == Some(true)
    }
}

/// 暗色模式后台任务（消费端）
pub struct AppearanceWorker {
    rx: watch::Receiver<Option<bool>>,
    port: Arc<dyn StylePort>,
    styles: DarkModeStyles,
}

impl AppearanceWorker {
    /// 持续处理请求，直到控制器被丢弃
    pub async fn run(mut self) {
        while self.next_request().await {}
        tracing::debug!("Appearance worker stopped");
    }

    /// 等待并处理最新的一个请求，控制器被丢弃时返回 false
    async fn next_request(&mut self) -> bool {
        if self.rx.changed().await.is_err() {
            return false;
        }
        let requested = *self.rx.borrow_and_update();
        if let Some(enable) = requested {
            let outcome = self.styles.apply(self.port.as_ref(), enable).await;
            tracing::debug!("Dark mode {} -> {:?}", enable, outcome);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// 记录页面上当前存在的样式
    struct FakeStylePort {
        available: AtomicBool,
        styles: Mutex<Vec<StyleHandle>>,
        inserts: AtomicUsize,
        removals: AtomicUsize,
    }

    impl FakeStylePort {
        fn new() -> Self {
            Self {
                available: AtomicBool::new(true),
                styles: Mutex::new(Vec::new()),
                inserts: AtomicUsize::new(0),
                removals: AtomicUsize::new(0),
            }
        }

        fn live_styles(&self) -> usize {
            self.styles.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl StylePort for FakeStylePort {
        fn is_available(&self) -> bool {
            self.available.load(Ordering::SeqCst)
        }

        async fn insert_css(&self, css: &str) -> Result<StyleHandle, AppearanceError> {
            assert_eq!(css, DARK_MODE_CSS);
            self.inserts.fetch_add(1, Ordering::SeqCst);
            let handle = StyleHandle::generate();
            self.styles.lock().unwrap().push(handle.clone());
            Ok(handle)
        }

        async fn remove_css(&self, handle: &StyleHandle) -> Result<(), AppearanceError> {
            self.removals.fetch_add(1, Ordering::SeqCst);
            self.styles.lock().unwrap().retain(|h| h != handle);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_enable_twice_keeps_one_style() {
        let port = FakeStylePort::new();
        let mut styles = DarkModeStyles::new();

        styles.apply(&port, true).await;
        let outcome = styles.apply(&port, true).await;

        assert!(matches!(outcome, StyleOutcome::Applied(_)));
        assert_eq!(port.live_styles(), 1);
        assert_eq!(port.removals.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_disable_without_style_is_noop() {
        let port = FakeStylePort::new();
        let mut styles = DarkModeStyles::new();

        assert_eq!(styles.apply(&port, false).await, StyleOutcome::Unchanged);
        assert_eq!(port.inserts.load(Ordering::SeqCst), 0);
        assert_eq!(port.removals.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enable_then_disable_leaves_no_style() {
        let port = FakeStylePort::new();
        let mut styles = DarkModeStyles::new();

        styles.apply(&port, true).await;
        assert_eq!(styles.apply(&port, false).await, StyleOutcome::Removed);
        assert_eq!(port.live_styles(), 0);
        assert!(styles.active().is_none());
    }

    #[tokio::test]
    async fn test_missing_window_is_noop() {
        let port = FakeStylePort::new();
        port.available.store(false, Ordering::SeqCst);
        let mut styles = DarkModeStyles::new();

        assert_eq!(styles.apply(&port, true).await, StyleOutcome::NoWindow);
        assert_eq!(port.inserts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_worker_only_runs_latest_request() {
        let port = Arc::new(FakeStylePort::new());
        let (controller, worker) = AppearanceController::new(port.clone());

        controller.set_dark_mode(true);
        controller.set_dark_mode(true);
        controller.set_dark_mode(false);
        controller.set_dark_mode(true);
        drop(controller);

        worker.run().await;

        assert_eq!(port.inserts.load(Ordering::SeqCst), 1);
        assert_eq!(port.live_styles(), 1);
    }

    #[tokio::test]
    async fn test_worker_processes_requests_in_order() {
        let port = Arc::new(FakeStylePort::new());
        let (controller, mut worker) = AppearanceController::new(port.clone());

        controller.set_dark_mode(true);
        assert!(worker.next_request().await);
        assert_eq!(port.live_styles(), 1);

        controller.set_dark_mode(false);
        assert!(worker.next_request().await);
        assert_eq!(port.live_styles(), 0);
        assert_eq!(port.removals.load(Ordering::SeqCst), 1);

        drop(controller);
        assert!(!worker.next_request().await);
    }

    #[test]
    fn test_reapply_only_when_dark_requested() {
        let port = Arc::new(FakeStylePort::new());
        let (controller, mut worker) = AppearanceController::new(port);

        controller.reapply();
        assert!(!worker.rx.has_changed().unwrap());

        controller.set_dark_mode(true);
        worker.rx.borrow_and_update();
        controller.reapply();
        assert!(worker.rx.has_changed().unwrap());
        assert!(controller.is_dark_requested());
    }
}
