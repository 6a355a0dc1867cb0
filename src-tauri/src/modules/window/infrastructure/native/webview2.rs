// WebView2 Hooks
//
// PermissionRequested 与 ContextMenuRequested 事件处理

use tauri::webview::PlatformWebview;
use webview2_com::Microsoft::Web::WebView2::Win32::{
    ICoreWebView2ContextMenuRequestedEventArgs, ICoreWebView2_11, COREWEBVIEW2_PERMISSION_KIND,
    COREWEBVIEW2_PERMISSION_KIND_CAMERA, COREWEBVIEW2_PERMISSION_KIND_CLIPBOARD_READ,
    COREWEBVIEW2_PERMISSION_KIND_GEOLOCATION, COREWEBVIEW2_PERMISSION_KIND_MICROPHONE,
    COREWEBVIEW2_PERMISSION_KIND_MIDI_SYSTEM_EXCLUSIVE_MESSAGES,
    COREWEBVIEW2_PERMISSION_KIND_NOTIFICATIONS, COREWEBVIEW2_PERMISSION_STATE_ALLOW,
    COREWEBVIEW2_PERMISSION_STATE_DENY,
};
use webview2_com::{take_pwstr, ContextMenuRequestedEventHandler, PermissionRequestedEventHandler};
use windows::core::{Interface, Result, PWSTR};
use windows::Win32::Foundation::POINT;

use super::NativeHooks;
use crate::modules::window::domain::{ContentEvent, ContextMenuParams, PermissionKind};

/// 拼写建议条目的名称
const SPELLCHECK_ITEM_NAME: &str = "spellCheck";

pub fn install(platform: &PlatformWebview, hooks: NativeHooks, scale: f64) -> Result<()> {
    unsafe {
        let webview = platform.controller().CoreWebView2()?;
        let mut token = 0;

        webview.add_PermissionRequested(
            &PermissionRequestedEventHandler::create(Box::new(|_, args| {
                let Some(args) = args else {
                    return Ok(());
                };
                let mut raw = COREWEBVIEW2_PERMISSION_KIND::default();
                args.PermissionKind(&mut raw)?;
                let kind = permission_kind(raw);
                let decision = kind.decision();
                args.SetState(if decision.is_grant() {
                    COREWEBVIEW2_PERMISSION_STATE_ALLOW
                } else {
                    COREWEBVIEW2_PERMISSION_STATE_DENY
                })?;
                tracing::debug!("Permission {} -> {:?}", kind.name(), decision);
                Ok(())
            })),
            &mut token,
        )?;

        let webview: ICoreWebView2_11 = webview.cast()?;
        webview.add_ContextMenuRequested(
            &ContextMenuRequestedEventHandler::create(Box::new(move |_, args| {
                let Some(args) = args else {
                    return Ok(());
                };
                let params = context_menu_params(&args, scale)?;
                args.SetHandled(true)?;
                (hooks.sink)(ContentEvent::ContextMenuRequested(params));
                Ok(())
            })),
            &mut token,
        )?;
    }

    tracing::debug!("WebView2 hooks installed");
    Ok(())
}

fn permission_kind(raw: COREWEBVIEW2_PERMISSION_KIND) -> PermissionKind {
    match raw {
        COREWEBVIEW2_PERMISSION_KIND_NOTIFICATIONS => PermissionKind::Notifications,
        COREWEBVIEW2_PERMISSION_KIND_GEOLOCATION => PermissionKind::Geolocation,
        COREWEBVIEW2_PERMISSION_KIND_CAMERA => PermissionKind::Camera,
        COREWEBVIEW2_PERMISSION_KIND_MICROPHONE => PermissionKind::Microphone,
        COREWEBVIEW2_PERMISSION_KIND_CLIPBOARD_READ => PermissionKind::ClipboardRead,
        COREWEBVIEW2_PERMISSION_KIND_MIDI_SYSTEM_EXCLUSIVE_MESSAGES => PermissionKind::Midi,
        other => PermissionKind::Other(format!("webview2-{}", other.0)),
    }
}

/// 位置为物理像素，转换成窗口逻辑坐标
unsafe fn context_menu_params(
    args: &ICoreWebView2ContextMenuRequestedEventArgs,
    scale: f64,
) -> Result<ContextMenuParams> {
    let mut location = POINT::default();
    args.Location(&mut location)?;

    let target = args.ContextMenuTarget()?;
    let mut editable = Default::default();
    target.IsEditable(&mut editable)?;
    let mut selection = PWSTR::null();
    target.SelectionText(&mut selection)?;

    let items = args.MenuItems()?;
    let mut count = 0u32;
    items.Count(&mut count)?;
    let mut suggestions = Vec::new();
    for index in 0..count {
        let item = items.GetValueAtIndex(index)?;
        let mut name = PWSTR::null();
        item.Name(&mut name)?;
        if take_pwstr(name) != SPELLCHECK_ITEM_NAME {
            continue;
        }
        let mut label = PWSTR::null();
        item.Label(&mut label)?;
        // 标签里的 '&' 是加速键标记
        suggestions.push(take_pwstr(label).replace('&', ""));
    }

    let scale = if scale > 0.0 { scale } else { 1.0 };
    Ok(ContextMenuParams::from_engine(
        location.x as f64 / scale,
        location.y as f64 / scale,
        editable.as_bool(),
        take_pwstr(selection),
        suggestions,
    ))
}
