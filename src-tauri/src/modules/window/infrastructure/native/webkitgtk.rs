// WebKitGTK Hooks
//
// permission-request 与 context-menu 信号处理，拼写词典设置

use gtk::gio;
use gtk::glib::prelude::*;
use webkit2gtk::{
    ContextMenu, ContextMenuAction, ContextMenuExt, ContextMenuItem, ContextMenuItemExt,
    HitTestResultExt, PermissionRequest, PermissionRequestExt, UserMediaPermissionRequest,
    WebContextExt, WebView, WebViewExt,
};

use super::NativeHooks;
use crate::modules::window::domain::{
    ContentEvent, ContextMenuCommand, ContextMenuEntry, ContextMenuModel, ContextMenuParams,
    PermissionKind, SpellcheckLanguage,
};

pub fn install(webview: &WebView, hooks: NativeHooks) {
    apply_language(webview, hooks.current_language());

    webview.connect_permission_request(|_, request| {
        let kind = request_kind(request);
        let decision = kind.decision();
        if decision.is_grant() {
            request.allow();
        } else {
            request.deny();
        }
        tracing::debug!("Permission {} -> {:?}", kind.name(), decision);
        true
    });

    webview.connect_context_menu(move |_, menu, event, hit| {
        let (x, y) = event.coords().unwrap_or((0.0, 0.0));
        let guesses: Vec<ContextMenuItem> = menu
            .items()
            .into_iter()
            .filter(|item| item.stock_action() == ContextMenuAction::SpellingGuess)
            .collect();

        if guesses.is_empty() {
            let params = ContextMenuParams {
                x,
                y,
                editable: hit.context_is_editable(),
                ..Default::default()
            };
            (hooks.sink)(ContentEvent::ContextMenuRequested(params));
            return true;
        }

        // 引擎的建议项保留原生替换行为，只重排整个菜单
        let model = ContextMenuModel::layout(
            x,
            y,
            vec![String::new(); guesses.len()],
            &hooks.languages,
            hooks.current_language(),
        );
        menu.remove_all();
        for entry in &model.entries {
            if let Some(item) = native_item(entry, &guesses, &hooks) {
                menu.append(&item);
            }
        }
        false
    });

    tracing::debug!("WebKitGTK hooks installed");
}

pub fn apply_language(webview: &WebView, language: SpellcheckLanguage) {
    let Some(context) = webview.context() else {
        tracing::warn!("WebKit context unavailable, spellcheck language not applied");
        return;
    };
    context.set_spell_checking_enabled(true);
    context.set_spell_checking_languages(&[language.dictionary_name()]);
    tracing::debug!("WebKit dictionary: {}", language.dictionary_name());
}

fn request_kind(request: &PermissionRequest) -> PermissionKind {
    if request.is::<UserMediaPermissionRequest>() {
        let video = request.property::<bool>("is-for-video-device");
        let display = request.find_property("is-for-display-device").is_some()
            && request.property::<bool>("is-for-display-device");
        return PermissionKind::user_media(video, display);
    }
    PermissionKind::from_webkit_type(request.type_().name())
}

fn native_item(
    entry: &ContextMenuEntry,
    guesses: &[ContextMenuItem],
    hooks: &NativeHooks,
) -> Option<ContextMenuItem> {
    match entry {
        ContextMenuEntry::Submenu { title, items } => {
            let submenu = ContextMenu::new();
            for item in items {
                if let Some(native) = native_item(item, guesses, hooks) {
                    submenu.append(&native);
                }
            }
            Some(ContextMenuItem::with_submenu(title, &submenu))
        }
        ContextMenuEntry::Radio { id, title, checked } => {
            let command = ContextMenuCommand::from_id(id)?;
            let ContextMenuCommand::SetSpellcheckLanguage(language) = command else {
                return None;
            };
            // GAction 名称只允许字母数字、'-' 和 '.'
            let action = gio::SimpleAction::new_stateful(
                &format!("spellcheck-{}", language.code()),
                None,
                &checked.to_variant(),
            );
            let sink = hooks.sink.clone();
            action.connect_activate(move |_, _| sink(ContentEvent::ContextMenuCommand(command)));
            Some(ContextMenuItem::from_gaction(&action, title, None))
        }
        ContextMenuEntry::Item { id, .. } => match ContextMenuCommand::from_id(id)? {
            ContextMenuCommand::ReplaceMisspelling(index) => guesses.get(index).cloned(),
            ContextMenuCommand::SetSpellcheckLanguage(_) => None,
        },
        ContextMenuEntry::Separator => Some(ContextMenuItem::new_separator()),
        ContextMenuEntry::Copy => Some(ContextMenuItem::from_stock_action(ContextMenuAction::Copy)),
        ContextMenuEntry::Paste => Some(ContextMenuItem::from_stock_action(ContextMenuAction::Paste)),
        ContextMenuEntry::SelectAll => {
            Some(ContextMenuItem::from_stock_action(ContextMenuAction::SelectAll))
        }
    }
}
