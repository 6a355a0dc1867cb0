// Content Context Menu
//
// 页面右键菜单模型：拼写检查语言 / 拼写建议 / 复制粘贴全选

use serde::{Deserialize, Serialize};

use super::value_objects::SpellcheckLanguage;

const SPELLCHECK_ID_PREFIX: &str = "context:spellcheck:";
const SUGGESTION_ID_PREFIX: &str = "context:suggestion:";

/// 页面右键时上报的参数
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextMenuParams {
    pub x: f64,
    pub y: f64,
    pub editable: bool,
    pub selection_text: String,
    pub misspelled_word: Option<String>,
    pub dictionary_suggestions: Vec<String>,
}

impl ContextMenuParams {
    /// 由引擎原生右键回调构造
    ///
    /// 引擎右键时会选中光标下的单词，有建议时把选中文本当作拼写错误的单词
    pub fn from_engine(
        x: f64,
        y: f64,
        editable: bool,
        selection_text: String,
        suggestions: Vec<String>,
    ) -> Self {
        let misspelled_word = if suggestions.is_empty() || selection_text.trim().is_empty() {
            None
        } else {
            Some(selection_text.trim().to_string())
        };
        Self {
            x,
            y,
            editable,
            selection_text,
            misspelled_word,
            dictionary_suggestions: suggestions,
        }
    }

    /// 右键是否落在拼写错误的单词上
    pub fn misspelled(&self) -> Option<&str> {
        self.misspelled_word
            .as_deref()
            .map(str::trim)
            .filter(|word| !word.is_empty())
    }
}

/// 右键菜单条目
#[derive(Debug, Clone, PartialEq)]
pub enum ContextMenuEntry {
    Submenu {
        title: String,
        items: Vec<ContextMenuEntry>,
    },
    /// 单选项
    Radio {
        id: String,
        title: String,
        checked: bool,
    },
    Item {
        id: String,
        title: String,
    },
    Separator,
    Copy,
    Paste,
    SelectAll,
}

/// 右键菜单模型
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuModel {
    pub x: f64,
    pub y: f64,
    pub entries: Vec<ContextMenuEntry>,
    /// 建议条目对应的替换文本，下标即菜单 id 中的序号
    pub suggestions: Vec<String>,
}

impl ContextMenuModel {
    pub fn build(
        params: &ContextMenuParams,
        languages: &[SpellcheckLanguage],
        current: SpellcheckLanguage,
    ) -> Self {
        let suggestions = if params.misspelled().is_some() {
            params.dictionary_suggestions.clone()
        } else {
            Vec::new()
        };
        Self::layout(params.x, params.y, suggestions, languages, current)
    }

    /// 语言子菜单、建议、分隔线、复制粘贴全选
    pub fn layout(
        x: f64,
        y: f64,
        suggestions: Vec<String>,
        languages: &[SpellcheckLanguage],
        current: SpellcheckLanguage,
    ) -> Self {
        let language_items = languages
            .iter()
            .map(|lang| ContextMenuEntry::Radio {
                id: ContextMenuCommand::SetSpellcheckLanguage(*lang).id(),
                title: lang.label().to_string(),
                checked: *lang == current,
            })
            .collect();

        let mut entries = vec![ContextMenuEntry::Submenu {
            title: "Spellcheck Language".to_string(),
            items: language_items,
        }];

        for (index, suggestion) in suggestions.iter().enumerate() {
            entries.push(ContextMenuEntry::Item {
                id: ContextMenuCommand::ReplaceMisspelling(index).id(),
                title: suggestion.clone(),
            });
        }

        entries.push(ContextMenuEntry::Separator);
        entries.push(ContextMenuEntry::Copy);
        entries.push(ContextMenuEntry::Paste);
        entries.push(ContextMenuEntry::SelectAll);

        Self {
            x,
            y,
            entries,
            suggestions,
        }
    }
}

/// 右键菜单动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextMenuCommand {
    SetSpellcheckLanguage(SpellcheckLanguage),
    /// 用第 n 个建议替换拼写错误的单词
    ReplaceMisspelling(usize),
}

impl ContextMenuCommand {
    pub fn id(&self) -> String {
        match self {
            ContextMenuCommand::SetSpellcheckLanguage(lang) => {
                format!("{}{}", SPELLCHECK_ID_PREFIX, lang.code())
            }
            ContextMenuCommand::ReplaceMisspelling(index) => {
                format!("{}{}", SUGGESTION_ID_PREFIX, index)
            }
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        if let Some(code) = id.strip_prefix(SPELLCHECK_ID_PREFIX) {
            return SpellcheckLanguage::from_code(code).map(ContextMenuCommand::SetSpellcheckLanguage);
        }
        id.strip_prefix(SUGGESTION_ID_PREFIX)
            .and_then(|index| index.parse().ok())
            .map(ContextMenuCommand::ReplaceMisspelling)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(misspelled: Option<&str>, suggestions: &[&str]) -> ContextMenuParams {
        ContextMenuParams {
            x: 10.0,
            y: 20.0,
            editable: true,
            misspelled_word: misspelled.map(str::to_string),
            dictionary_suggestions: suggestions.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_menu_without_misspelling() {
        let model = ContextMenuModel::build(
            &params(None, &["ignored"]),
            &SpellcheckLanguage::ALL,
            SpellcheckLanguage::EnglishUs,
        );

        assert!(model.suggestions.is_empty());
        assert_eq!(model.entries.len(), 5);
        assert_eq!(model.entries[1], ContextMenuEntry::Separator);
        assert_eq!(model.entries[4], ContextMenuEntry::SelectAll);
    }

    #[test]
    fn test_language_submenu_reflects_current_language() {
        let model = ContextMenuModel::build(
            &params(None, &[]),
            &SpellcheckLanguage::ALL,
            SpellcheckLanguage::French,
        );

        let ContextMenuEntry::Submenu { items, .. } = &model.entries[0] else {
            panic!("expected language submenu");
        };
        let checked: Vec<bool> = items
            .iter()
            .map(|item| matches!(item, ContextMenuEntry::Radio { checked: true, .. }))
            .collect();
        assert_eq!(checked, vec![false, false, true]);
    }

    #[test]
    fn test_suggestions_follow_language_submenu() {
        let model = ContextMenuModel::build(
            &params(Some("helo"), &["hello", "help"]),
            &SpellcheckLanguage::ALL,
            SpellcheckLanguage::EnglishUk,
        );

        assert_eq!(model.suggestions, vec!["hello", "help"]);
        assert_eq!(
            model.entries[1],
            ContextMenuEntry::Item {
                id: "context:suggestion:0".to_string(),
                title: "hello".to_string(),
            }
        );
        assert_eq!(model.entries[3], ContextMenuEntry::Separator);
    }

    #[test]
    fn test_engine_params_use_selected_word() {
        let params = ContextMenuParams::from_engine(
            4.0,
            8.0,
            true,
            " teh ".to_string(),
            vec!["the".to_string(), "ten".to_string()],
        );
        assert_eq!(params.misspelled(), Some("teh"));

        let model = ContextMenuModel::build(&params, &SpellcheckLanguage::ALL, SpellcheckLanguage::EnglishUs);
        assert_eq!(model.suggestions, vec!["the", "ten"]);
        assert_eq!((model.x, model.y), (4.0, 8.0));
    }

    #[test]
    fn test_engine_params_without_suggestions() {
        let params = ContextMenuParams::from_engine(0.0, 0.0, false, "word".to_string(), Vec::new());
        assert_eq!(params.misspelled(), None);
    }

    #[test]
    fn test_command_ids_round_trip() {
        let lang = ContextMenuCommand::SetSpellcheckLanguage(SpellcheckLanguage::EnglishUk);
        assert_eq!(lang.id(), "context:spellcheck:en-GB");
        assert_eq!(ContextMenuCommand::from_id(&lang.id()), Some(lang));
        assert_eq!(
            ContextMenuCommand::from_id("context:suggestion:3"),
            Some(ContextMenuCommand::ReplaceMisspelling(3))
        );
        assert_eq!(ContextMenuCommand::from_id("context:spellcheck:de-DE"), None);
        assert_eq!(ContextMenuCommand::from_id("tray:show"), None);
    }

    #[test]
    fn test_params_deserialize_from_page_payload() {
        let json = r#"{"x":1,"y":2,"editable":true,"selectionText":"","misspelledWord":"teh","dictionarySuggestions":["the"]}"#;
        let params: ContextMenuParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.misspelled(), Some("teh"));
        assert_eq!(params.dictionary_suggestions, vec!["the"]);

        let sparse: ContextMenuParams = serde_json::from_str(r#"{"x":5}"#).unwrap();
        assert_eq!(sparse.misspelled(), None);
    }
}
