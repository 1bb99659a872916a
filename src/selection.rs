use crate::i18n::Language;

/// Local-storage key marking that the visitor picked a language themselves.
pub const LANGUAGE_SELECTED_KEY: &str = "i18nextUserSelected";
/// Local-storage key holding the chosen language code.
pub const LANGUAGE_CODE_KEY: &str = "i18nextLng";
/// Same-window broadcast fired after an explicit selection.
pub const LANGUAGE_SELECTED_EVENT: &str = "languageSelected";

const STORED_TRUE: &str = "true";

/// Only the exact string `"true"` counts as a stored selection.
pub fn flag_from_storage(raw: Option<&str>) -> bool {
    raw == Some(STORED_TRUE)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    /// First explicit choice in this storage context.
    First,
    /// Already selected, language switched.
    Switched,
    /// Already selected, same language picked again.
    Unchanged,
}

/// Whether the visitor chose a language, and which one is active.
///
/// Selecting is one-way: nothing in the UI clears the flag. Only a storage
/// change coming from outside (another tab, cleared storage) can reset it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LanguageSelection {
    selected: bool,
    language: Language,
}

impl LanguageSelection {
    /// Rebuilds state from storage. The active language comes from the saved
    /// code, then the browser language, then English.
    pub fn restore(flag: Option<&str>, saved_code: Option<&str>, browser: Option<&str>) -> Self {
        let language = saved_code
            .and_then(Language::from_code)
            .or_else(|| browser.and_then(Language::from_code))
            .unwrap_or_default();
        Self {
            selected: flag_from_storage(flag),
            language,
        }
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn select(&mut self, language: Language) -> SelectionChange {
        let change = if !self.selected {
            SelectionChange::First
        } else if self.language != language {
            SelectionChange::Switched
        } else {
            SelectionChange::Unchanged
        };
        self.selected = true;
        self.language = language;
        change
    }

    /// Applies a storage change made outside this window. Returns whether
    /// anything changed.
    pub fn sync_from_storage(&mut self, flag: Option<&str>, saved_code: Option<&str>) -> bool {
        let before = *self;
        self.selected = flag_from_storage(flag);
        if let Some(language) = saved_code.and_then(Language::from_code) {
            self.language = language;
        }
        before != *self
    }

    /// Value to persist under [`LANGUAGE_SELECTED_KEY`], if any.
    pub fn stored_flag(&self) -> Option<&'static str> {
        self.selected.then_some(STORED_TRUE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_flag_parsing() {
        assert!(flag_from_storage(Some("true")));
        assert!(!flag_from_storage(Some("false")));
        assert!(!flag_from_storage(Some("TRUE")));
        assert!(!flag_from_storage(Some("")));
        assert!(!flag_from_storage(None));
    }

    #[test]
    fn test_select_persists_across_loads() {
        let mut storage: HashMap<&str, String> = HashMap::new();

        let mut selection = LanguageSelection::restore(
            storage.get(LANGUAGE_SELECTED_KEY).map(String::as_str),
            storage.get(LANGUAGE_CODE_KEY).map(String::as_str),
            None,
        );
        assert!(!selection.is_selected());
        assert_eq!(selection.stored_flag(), None);

        assert_eq!(selection.select(Language::Ru), SelectionChange::First);
        storage.insert(
            LANGUAGE_SELECTED_KEY,
            selection.stored_flag().expect("selected").to_string(),
        );
        storage.insert(LANGUAGE_CODE_KEY, selection.language().code().to_string());
        assert_eq!(storage[LANGUAGE_SELECTED_KEY], "true");

        let reloaded = LanguageSelection::restore(
            storage.get(LANGUAGE_SELECTED_KEY).map(String::as_str),
            storage.get(LANGUAGE_CODE_KEY).map(String::as_str),
            Some("en-US"),
        );
        assert!(reloaded.is_selected());
        assert_eq!(reloaded.language(), Language::Ru);
    }

    #[test]
    fn test_selection_is_one_way() {
        let mut selection = LanguageSelection::default();
        selection.select(Language::Me);
        assert_eq!(selection.select(Language::Ru), SelectionChange::Switched);
        assert_eq!(selection.select(Language::Ru), SelectionChange::Unchanged);
        assert!(selection.is_selected());
    }

    #[test]
    fn test_restore_language_order() {
        let s = LanguageSelection::restore(None, None, Some("ru-RU"));
        assert_eq!(s.language(), Language::Ru);
        assert!(!s.is_selected());
        let s = LanguageSelection::restore(Some("true"), Some("me"), Some("ru-RU"));
        assert_eq!(s.language(), Language::Me);
        let s = LanguageSelection::restore(None, Some("xx"), Some("fr"));
        assert_eq!(s.language(), Language::En);
    }

    #[test]
    fn test_external_storage_change() {
        let mut selection = LanguageSelection::default();
        selection.select(Language::En);
        assert!(!selection.sync_from_storage(Some("true"), Some("en")));
        assert!(selection.sync_from_storage(Some("true"), Some("ru")));
        assert_eq!(selection.language(), Language::Ru);
        // cleared storage in another tab
        assert!(selection.sync_from_storage(None, None));
        assert!(!selection.is_selected());
        assert_eq!(selection.language(), Language::Ru);
    }
}
