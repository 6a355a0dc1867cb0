// Content Scripts
//
// 注入到 WhatsApp 页面中的脚本：
// - 权限拦截
// - 右键菜单转发到 content_context_menu 命令（仅在引擎没有原生右键回调时注入）
// - 拼写检查语言与建议替换

use super::permissions::permission_gate_script;
use super::value_objects::SpellcheckLanguage;
use crate::modules::window::ports::WindowError;

/// 页面调用的命令名，与 build.rs 中的命令清单一致
pub const CONTEXT_MENU_COMMAND: &str = "content_context_menu";

/// 右键事件的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuSource {
    /// 引擎原生回调，能拿到拼写建议
    Engine,
    /// 页面脚本转发，可编辑区域保留系统菜单以便显示拼写建议
    PageScript,
}

/// 页面初始化脚本
pub fn initialization_script(language: SpellcheckLanguage, source: ContextMenuSource) -> String {
    let mut parts = vec![permission_gate_script()];
    if source == ContextMenuSource::PageScript {
        parts.push(context_menu_bridge_script());
    }
    parts.push(spellcheck_language_script(language));
    parts.join("\n")
}

fn context_menu_bridge_script() -> String {
    format!(
        "(function(){{\
if(window.__whatsappShellContextMenu){{return;}}window.__whatsappShellContextMenu=true;\
document.addEventListener('contextmenu',function(e){{\
var internals=window.__TAURI_INTERNALS__;if(!internals||typeof internals.invoke!=='function'){{return;}}\
var t=e.target;if(t&&(t.isContentEditable||t.tagName==='INPUT'||t.tagName==='TEXTAREA')){{return;}}\
e.preventDefault();\
var selection=window.getSelection?String(window.getSelection()):'';\
internals.invoke('{command}',{{params:{{x:e.clientX,y:e.clientY,editable:false,selectionText:selection}}}}).catch(function(){{}});\
}},true);\
}})();",
        command = CONTEXT_MENU_COMMAND
    )
}

/// 设置页面拼写检查语言
pub fn spellcheck_language_script(language: SpellcheckLanguage) -> String {
    format!(
        "(function(){{\
var lang='{code}';window.__whatsappShellSpellcheck=lang;\
var apply=function(){{var root=document.documentElement;if(root){{root.setAttribute('lang',lang);root.setAttribute('spellcheck','true');}}}};\
if(document.readyState==='loading'){{document.addEventListener('DOMContentLoaded',apply);}}else{{apply();}}\
}})();",
        code = language.code()
    )
}

/// 用建议替换当前选中的拼写错误单词
pub fn replace_misspelling_script(replacement: &str) -> Result<String, WindowError> {
    let text = serde_json::to_string(replacement)
        .map_err(|e| WindowError::OperationFailed(e.to_string()))?;
    Ok(format!(
        "(function(){{document.execCommand('insertText',false,{text});}})();"
    ))
}
