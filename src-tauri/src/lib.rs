pub mod commands;
pub mod infrastructure;
pub mod modules;
pub mod shared;

use std::path::PathBuf;
use std::sync::Arc;
use tauri::path::BaseDirectory;
use tauri::{AppHandle, Manager, RunEvent, Theme, WindowEvent};
use tracing_subscriber::EnvFilter;

use infrastructure::{dispatch, SessionState};
use modules::appearance::{AppearanceController, WebviewStyleAdapter};
use modules::attention::{AttentionSignal, TauriAttentionAdapter};
use modules::config::{self, ShellConfig};
use modules::icon::IconResolver;
use modules::shell::{
    register_show_shortcut, unregister_all, AppMenuConfig, MenuCommand, ShellEvent, ShellSession,
    ShortcutHandler, ShowSource, TauriAppMenu, TauriProcess,
};
use modules::tray::{TauriTrayHandler, TrayClickHandler, TrayConfig};
use modules::window::{
    ContentEventSink, NavigationGuard, TauriOpener, TauriWindowAdapter, WindowConfig, WindowLabel,
};

const DEFAULT_LOG_FILTER: &str = "info,whatsapp_shell_lib=debug";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // 初始化日志
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_target(true)
        .init();

    tracing::info!("WhatsApp shell starting...");

    let config = match config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration: {}", e);
            return;
        }
    };
    let main_label = config.window.label.clone();

    let mut builder = tauri::Builder::default();

    // 必须最先注册：第二个实例在这里直接退出
    #[cfg(desktop)]
    {
        builder = builder.plugin(tauri_plugin_single_instance::init(|app, _args, _cwd| {
            tracing::info!("Second instance launched, restoring main window");
            dispatch(app, ShellEvent::ShowRequested(ShowSource::SecondInstance));
        }));
    }

    let app = builder
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_opener::init())
        .setup(move |app| {
            setup_shell(app.handle(), &config)?;
            Ok(())
        })
        .on_menu_event(|app, event| match MenuCommand::from_id(event.id().as_ref()) {
            Some(command) => {
                dispatch(app, ShellEvent::Menu(command));
            }
            None => tracing::debug!("Unhandled menu id: {}", event.id().as_ref()),
        })
        .on_window_event(move |window, event| {
            if window.label() != main_label {
                return;
            }
            let app = window.app_handle();
            let shell_event = match event {
                WindowEvent::CloseRequested { api, .. } => {
                    if dispatch(app, ShellEvent::CloseRequested).prevents_close() {
                        api.prevent_close();
                    }
                    return;
                }
                WindowEvent::Focused(focused) => ShellEvent::FocusChanged(*focused),
                WindowEvent::ThemeChanged(theme) => ShellEvent::SystemThemeChanged {
                    dark: *theme == Theme::Dark,
                },
                WindowEvent::Destroyed => ShellEvent::WindowDestroyed,
                _ => return,
            };
            dispatch(app, shell_event);
        })
        .invoke_handler(tauri::generate_handler![commands::content_context_menu])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app, event| match event {
        RunEvent::ExitRequested { code, api, .. } => {
            if code.is_none() {
                // 最后一个窗口被系统销毁，托盘仍然保留进程
                api.prevent_exit();
                return;
            }
            dispatch(app, ShellEvent::ExitRequested);
        }
        RunEvent::Exit => {
            if let Err(e) = unregister_all(app) {
                tracing::warn!("Failed to release global shortcuts: {}", e);
            }
            tracing::info!("WhatsApp shell exited");
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => {
            dispatch(app, ShellEvent::ShowRequested(ShowSource::Reopen));
        }
        _ => {}
    });
}

/// 启动流程：图标 → 会话 → 应用菜单 → 托盘 → 主窗口 → 快捷键
fn setup_shell(handle: &AppHandle, config: &ShellConfig) -> shared::AppResult<()> {
    let fallback = handle
        .path()
        .resolve(&config.icon.bundled_fallback, BaseDirectory::Resource)
        .unwrap_or_else(|e| {
            tracing::warn!("Cannot resolve bundled icon: {}", e);
            PathBuf::from(&config.icon.bundled_fallback)
        });
    let home_dir = handle.path().home_dir().ok();
    let (resolved, icon) = IconResolver::new(home_dir.as_deref(), fallback).resolve_image();
    tracing::debug!("Icon: {} (fallback: {})", resolved.path.display(), resolved.is_fallback);

    let label = WindowLabel::new(config.window.label.clone());
    let window_config = WindowConfig::from_settings(config)?.with_icon(icon.clone());

    let sink: ContentEventSink = {
        let handle = handle.clone();
        Arc::new(move |event| {
            dispatch(&handle, ShellEvent::Content(event));
        })
    };
    let window = Arc::new(TauriWindowAdapter::new(
        handle.clone(),
        label.clone(),
        NavigationGuard::new(window_config.url.clone()),
        Arc::new(TauriOpener::new(handle.clone())),
        sink,
        window_config.spellcheck_language,
    ));

    let (appearance, worker) = AppearanceController::new(Arc::new(WebviewStyleAdapter::new(
        handle.clone(),
        label.as_str(),
    )));
    tauri::async_runtime::spawn(worker.run());

    let attention = AttentionSignal::new(Arc::new(TauriAttentionAdapter::new(
        handle.clone(),
        label.as_str(),
    )));

    let mut session = ShellSession::new(
        config,
        window_config,
        window,
        Arc::new(TauriProcess::new(handle.clone())),
        attention,
        appearance,
    );

    let menu_config = AppMenuConfig::shell(session.always_on_top(), cfg!(debug_assertions));
    match TauriAppMenu::install(handle, &menu_config) {
        Ok(menu) => session.attach_app_menu(Arc::new(menu)),
        Err(e) => tracing::warn!("Application menu unavailable: {}", e),
    }

    let on_click: TrayClickHandler = Arc::new(|app: &AppHandle| {
        dispatch(app, ShellEvent::ShowRequested(ShowSource::TrayClick));
    });
    let tray_config = TrayConfig::from_settings(&config.tray, session.always_on_top());
    match TauriTrayHandler::build(handle, &tray_config, icon, on_click) {
        Ok(tray) => session.attach_tray(Arc::new(tray)),
        Err(e) => tracing::warn!("Tray unavailable: {}", e),
    }

    handle.manage(SessionState::new(session));
    dispatch(handle, ShellEvent::ShowRequested(ShowSource::Launch));

    let on_shortcut: ShortcutHandler = Arc::new(|app: &AppHandle| {
        dispatch(app, ShellEvent::ShowRequested(ShowSource::Shortcut));
    });
    if let Err(e) = register_show_shortcut(handle, &config.shortcuts.show_window, on_shortcut) {
        tracing::warn!("Global shortcut unavailable: {}", e);
    }

    tracing::info!("Shell ready");
    Ok(())
}
