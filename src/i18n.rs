use dashmap::DashMap;
use rust_embed::Embed;
use serde_json::Value;
use std::{collections::HashMap, fmt, str::FromStr, sync::Arc, sync::LazyLock};
use thiserror::Error;

pub static GLOBAL_DICTIONARY_CACHE: LazyLock<DashMap<Language, Arc<Dictionary>>> =
    LazyLock::new(DashMap::new);

/// Languages shown by auto-cycling text before the visitor picks one.
pub const CYCLE_ORDER: [Language; 2] = [Language::En, Language::Ru];
pub const CYCLE_INTERVAL_MS: u64 = 5000;

#[derive(Embed)]
#[folder = "locales"]
struct Locales;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Ru,
    Me,
}

pub const LANGUAGES: [Language; 3] = [Language::En, Language::Ru, Language::Me];

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
            Language::Me => "me",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ru => "Русский",
            Language::Me => "Crnogorski",
        }
    }

    pub fn country_code(self) -> &'static str {
        match self {
            Language::En => "GB",
            Language::Ru => "RU",
            Language::Me => "ME",
        }
    }

    /// Flag emoji built from the country code's regional indicator symbols.
    pub fn flag(self) -> String {
        self.country_code()
            .chars()
            .filter_map(|c| char::from_u32(0x1F1E6 + (c as u32 - 'A' as u32)))
            .collect()
    }

    /// Accepts bare codes and browser tags like `ru-RU` or `en_GB`.
    pub fn from_code(code: &str) -> Option<Self> {
        let base = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        LANGUAGES.into_iter().find(|l| l.code() == base)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s).ok_or_else(|| I18nError::UnknownLanguage(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum I18nError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),
    #[error("No dictionary for language {0}")]
    MissingDictionary(Language),
    #[error("Couldn't parse dictionary for {lang}: {reason}")]
    ParseError { lang: Language, reason: String },
}

/// Flattened key -> string table; nested objects become dotted keys.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let value = serde_json::from_str::<Value>(json)?;
        let mut entries = HashMap::new();
        flatten("", &value, &mut entries);
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k.clone()
                } else {
                    format!("{prefix}.{k}")
                };
                flatten(&key, v, out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        // arrays and nulls have no string form in the dictionaries
        Value::Array(_) | Value::Null => {}
    }
}

pub fn dictionary(lang: Language) -> Result<Arc<Dictionary>, I18nError> {
    let cache = &*GLOBAL_DICTIONARY_CACHE;
    if let Some(d) = cache.get(&lang) {
        return Ok(d.clone());
    }
    let file = Locales::get(&format!("{}.json", lang.code()))
        .ok_or(I18nError::MissingDictionary(lang))?;
    let text = std::str::from_utf8(&file.data).map_err(|e| I18nError::ParseError {
        lang,
        reason: e.to_string(),
    })?;
    let dict = Dictionary::from_json(text).map_err(|e| I18nError::ParseError {
        lang,
        reason: e.to_string(),
    })?;
    let dict = Arc::new(dict);
    cache.insert(lang, dict.clone());
    Ok(dict)
}

fn lookup(lang: Language, key: &str) -> Option<String> {
    match dictionary(lang) {
        Ok(d) => d.get(key).map(str::to_owned),
        Err(e) => {
            log::warn!("{e}");
            None
        }
    }
}

/// String for `key` in `lang`, falling back to English and then to the key itself.
pub fn translate(lang: Language, key: &str) -> String {
    lookup(lang, key)
        .or_else(|| {
            if lang == Language::En {
                None
            } else {
                lookup(Language::En, key)
            }
        })
        .unwrap_or_else(|| {
            log::debug!("missing translation for {key} ({lang})");
            key.to_string()
        })
}

/// Language a piece of multilingual text should show right now.
///
/// A pinned language always wins. Once the visitor has selected a language the
/// text follows it; before that it cycles through [`CYCLE_ORDER`] on `tick`.
pub fn displayed_language(
    selected: bool,
    active: Language,
    pinned: Option<Language>,
    tick: usize,
) -> Language {
    match (pinned, selected) {
        (Some(lang), _) => lang,
        (None, true) => active,
        (None, false) => CYCLE_ORDER[tick % CYCLE_ORDER.len()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("ru"), Some(Language::Ru));
        assert_eq!(Language::from_code("ru-RU"), Some(Language::Ru));
        assert_eq!(Language::from_code("EN_gb"), Some(Language::En));
        assert_eq!(Language::from_code("me"), Some(Language::Me));
        assert_eq!(Language::from_code("de-DE"), None);
        assert_eq!(Language::from_code(""), None);
        assert_eq!("ru".parse::<Language>(), Ok(Language::Ru));
        assert_eq!(
            "xx".parse::<Language>(),
            Err(I18nError::UnknownLanguage("xx".to_string()))
        );
    }

    #[test]
    fn test_flag_emoji() {
        assert_eq!(Language::Ru.flag(), "🇷🇺");
        assert_eq!(Language::En.flag(), "🇬🇧");
        assert_eq!(Language::Me.flag(), "🇲🇪");
    }

    #[test]
    fn test_dictionary_flattens_nested_keys() {
        let dict = Dictionary::from_json(
            r#"{"menu": {"intro": "Hi", "contact": "Contact"}, "greeting": "Hello", "n": 3, "list": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(dict.get("menu.intro"), Some("Hi"));
        assert_eq!(dict.get("menu.contact"), Some("Contact"));
        assert_eq!(dict.get("greeting"), Some("Hello"));
        assert_eq!(dict.get("n"), Some("3"));
        assert_eq!(dict.get("list"), None);
        assert_eq!(dict.len(), 4);
        assert!(Dictionary::from_json("{not json").is_err());
    }

    #[test]
    fn test_embedded_dictionaries_share_keys() {
        let en = dictionary(Language::En).expect("english dictionary");
        assert!(!en.is_empty());
        for lang in [Language::Ru, Language::Me] {
            let dict = dictionary(lang).expect("dictionary should load");
            for key in en.keys() {
                assert!(dict.get(key).is_some(), "{lang} is missing {key}");
            }
        }
    }

    #[test]
    fn test_translate_fallbacks() {
        assert_eq!(translate(Language::En, "menu.intro"), "Intro");
        assert_eq!(translate(Language::Ru, "menu.intro"), "Привет");
        assert_eq!(translate(Language::Ru, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_displayed_language() {
        assert_eq!(displayed_language(false, Language::Me, None, 0), Language::En);
        assert_eq!(displayed_language(false, Language::Me, None, 1), Language::Ru);
        assert_eq!(displayed_language(false, Language::Me, None, 2), Language::En);
        assert_eq!(displayed_language(true, Language::Me, None, 1), Language::Me);
        assert_eq!(
            displayed_language(true, Language::Me, Some(Language::Ru), 0),
            Language::Ru
        );
    }
}
