// Navigation Guard
//
// 顶层导航拦截：离开当前页面的导航和新窗口请求都交给系统浏览器

use std::sync::{Arc, Mutex};
use url::Url;

use crate::modules::window::ports::ExternalOpener;

/// 页面内部使用的协议，不会被拦截
const INTERNAL_SCHEMES: [&str; 3] = ["about", "blob", "data"];

/// 导航决策
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    /// 留在内嵌页面中
    Allow,
    /// 取消并交给系统默认处理程序
    OpenExternally(Url),
    /// 取消，不做其他处理
    Deny,
}

impl NavigationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, NavigationDecision::Allow)
    }
}

/// 导航守卫
///
/// 记录当前加载的页面地址，可在页面加载回调与导航回调之间共享
#[derive(Debug, Clone)]
pub struct NavigationGuard {
    home: Url,
    current: Arc<Mutex<Option<Url>>>,
}

impl NavigationGuard {
    pub fn new(home: Url) -> Self {
        Self {
            home,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// 当前已加载的地址
    pub fn current(&self) -> Option<Url> {
        match self.current.lock() {
            Ok(current) => current.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 页面加载完成时更新当前地址
    pub fn page_loaded(&self, url: &Url) {
        let mut current = match self.current.lock() {
            Ok(current) => current,
            Err(poisoned) => poisoned.into_inner(),
        };
        *current = Some(url.clone());
    }

    /// 顶层导航决策：目标与当前页面相同（忽略片段）才放行
    pub fn decide(&self, target: &Url) -> NavigationDecision {
        if is_internal(target) {
            return NavigationDecision::Allow;
        }

        // 首次加载前只放行首页
        let current = self.current().unwrap_or_else(|| self.home.clone());
        if same_document(&current, target) {
            NavigationDecision::Allow
        } else {
            NavigationDecision::OpenExternally(target.clone())
        }
    }

    /// 新窗口请求一律拒绝，外部地址交给系统浏览器
    pub fn decide_new_window(&self, target: &Url) -> NavigationDecision {
        if is_internal(target) {
            NavigationDecision::Deny
        } else {
            NavigationDecision::OpenExternally(target.clone())
        }
    }

    /// 执行决策，返回是否允许在内嵌页面中继续
    pub fn apply(&self, decision: NavigationDecision, opener: &dyn ExternalOpener) -> bool {
        match decision {
            NavigationDecision::Allow => true,
            NavigationDecision::Deny => false,
            NavigationDecision::OpenExternally(url) => {
                tracing::debug!("Opening {} externally", url);
                if let Err(e) = opener.open(&url) {
                    tracing::warn!("Failed to open {} externally: {}", url, e);
                }
                false
            }
        }
    }
}

fn is_internal(url: &Url) -> bool {
    INTERNAL_SCHEMES.contains(&url.scheme())
}

fn same_document(a: &Url, b: &Url) -> bool {
    let mut a = a.clone();
    let mut b = b.clone();
    a.set_fragment(None);
    b.set_fragment(None);
    a == b
}
