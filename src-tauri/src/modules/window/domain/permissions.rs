// Permission Gating
//
// 页面权限请求的决策表：只允许通知，其余全部拒绝
//
// 网页引擎的原生权限回调（WebKitGTK、WebView2）按此表放行或拒绝，
// 同一张表也被编译成页面初始化脚本，覆盖没有原生回调的平台

use serde::{Deserialize, Serialize};

/// 页面可能请求的权限
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PermissionKind {
    Notifications,
    Geolocation,
    Camera,
    Microphone,
    DisplayCapture,
    ClipboardRead,
    Midi,
    PersistentStorage,
    Other(String),
}

/// 权限决策
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionDecision {
    Grant,
    Deny,
}

impl PermissionKind {
    /// 已知权限，按脚本生成顺序排列
    pub fn known() -> [PermissionKind; 8] {
        [
            PermissionKind::Notifications,
            PermissionKind::Geolocation,
            PermissionKind::Camera,
            PermissionKind::Microphone,
            PermissionKind::DisplayCapture,
            PermissionKind::ClipboardRead,
            PermissionKind::Midi,
            PermissionKind::PersistentStorage,
        ]
    }

    /// Permissions API 中的名称
    pub fn name(&self) -> &str {
        match self {
            PermissionKind::Notifications => "notifications",
            PermissionKind::Geolocation => "geolocation",
            PermissionKind::Camera => "camera",
            PermissionKind::Microphone => "microphone",
            PermissionKind::DisplayCapture => "display-capture",
            PermissionKind::ClipboardRead => "clipboard-read",
            PermissionKind::Midi => "midi",
            PermissionKind::PersistentStorage => "persistent-storage",
            PermissionKind::Other(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        Self::known()
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or_else(|| PermissionKind::Other(name.to_string()))
    }

    /// WebKitGTK 权限请求的 GType 名称
    ///
    /// 媒体请求需要区分音视频，由调用方根据请求属性处理
    pub fn from_webkit_type(type_name: &str) -> Self {
        match type_name {
            "WebKitNotificationPermissionRequest" => PermissionKind::Notifications,
            "WebKitGeolocationPermissionRequest" => PermissionKind::Geolocation,
            "WebKitClipboardPermissionRequest" => PermissionKind::ClipboardRead,
            "WebKitWebsiteDataAccessPermissionRequest" => PermissionKind::PersistentStorage,
            other => {
                let name = other
                    .strip_prefix("WebKit")
                    .and_then(|rest| rest.strip_suffix("PermissionRequest"))
                    .unwrap_or(other);
                PermissionKind::Other(name.to_ascii_lowercase())
            }
        }
    }

    /// 网页引擎的媒体采集请求
    pub fn user_media(video: bool, display: bool) -> Self {
        if display {
            PermissionKind::DisplayCapture
        } else if video {
            PermissionKind::Camera
        } else {
            PermissionKind::Microphone
        }
    }

    pub fn decision(&self) -> PermissionDecision {
        match self {
            PermissionKind::Notifications => PermissionDecision::Grant,
            _ => PermissionDecision::Deny,
        }
    }

    /// 拒绝该权限时注入的页面脚本片段
    fn deny_snippet(&self) -> Option<&'static str> {
        match self {
            PermissionKind::Notifications | PermissionKind::Other(_) => None,
            PermissionKind::Geolocation => Some(
                "if(navigator.geolocation){var geoDenied=function(s,e){if(typeof e==='function'){e({code:1,message:'User denied Geolocation',PERMISSION_DENIED:1});}return 0;};navigator.geolocation.getCurrentPosition=geoDenied;navigator.geolocation.watchPosition=geoDenied;}",
            ),
            PermissionKind::Camera | PermissionKind::Microphone => Some(
                "if(navigator.mediaDevices){navigator.mediaDevices.getUserMedia=function(){return Promise.reject(denied('getUserMedia'));};}",
            ),
            PermissionKind::DisplayCapture => Some(
                "if(navigator.mediaDevices){navigator.mediaDevices.getDisplayMedia=function(){return Promise.reject(denied('getDisplayMedia'));};}",
            ),
            PermissionKind::ClipboardRead => Some(
                "if(navigator.clipboard){navigator.clipboard.read=function(){return Promise.reject(denied('clipboard.read'));};navigator.clipboard.readText=function(){return Promise.reject(denied('clipboard.readText'));};}",
            ),
            PermissionKind::Midi => Some(
                "if(navigator.requestMIDIAccess){navigator.requestMIDIAccess=function(){return Promise.reject(denied('requestMIDIAccess'));};}",
            ),
            PermissionKind::PersistentStorage => Some(
                "if(navigator.storage&&navigator.storage.persist){navigator.storage.persist=function(){return Promise.resolve(false);};}",
            ),
        }
    }
}

/// 生成权限拦截脚本
pub fn permission_gate_script() -> String {
    let kinds = PermissionKind::known();
    let denied: Vec<&str> = kinds
        .iter()
        .filter(|kind| kind.decision() == PermissionDecision::Deny)
        .map(|kind| kind.name())
        .collect();
    // 序列化纯字符串数组不会失败
    let denied_names = serde_json::to_string(&denied).unwrap_or_else(|_| "[]".to_string());

    let mut snippets: Vec<&str> = Vec::new();
    for kind in kinds.iter().filter(|kind| kind.decision() == PermissionDecision::Deny) {
        if let Some(snippet) = kind.deny_snippet() {
            if !snippets.contains(&snippet) {
                snippets.push(snippet);
            }
        }
    }

    format!(
        "(function(){{\
var denied=function(what){{return new DOMException(what+' denied','NotAllowedError');}};\
var deniedNames={denied_names};\
{snippets}\
if(navigator.permissions&&navigator.permissions.query){{var query=navigator.permissions.query.bind(navigator.permissions);\
navigator.permissions.query=function(desc){{if(desc&&deniedNames.indexOf(desc.name)>=0){{return Promise.resolve({{name:desc.name,state:'denied',onchange:null}});}}return query(desc);}};}}\
}})();",
        snippets = snippets.join("")
    )
}

impl PermissionDecision {
    pub fn is_grant(&self) -> bool {
        matches!(self, PermissionDecision::Grant)
    }
}
