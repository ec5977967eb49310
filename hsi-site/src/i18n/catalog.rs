//! Localized message catalog
//!
//! One JSON message tree per locale, embedded at compile time and parsed
//! once at startup. Lookups resolve dotted key paths ("home.hero.title").
//! There is no fallback chain between locales: a key missing from the
//! requested locale's tree is a hard error, surfaced loudly instead of
//! silently rendering another language.

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

use super::Locale;

/// Message lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// No value exists at the key path in this locale's tree
    #[error("missing translation '{key}' for locale '{locale}'")]
    Missing { locale: Locale, key: String },

    /// A value exists but has the wrong JSON kind
    #[error("translation '{key}' for locale '{locale}' is not a {expected}")]
    Kind {
        locale: Locale,
        key: String,
        expected: &'static str,
    },
}

/// Parsed message trees for every supported locale
pub struct MessageCatalog {
    trees: HashMap<Locale, Value>,
}

impl MessageCatalog {
    /// Parse the embedded message trees
    pub fn load() -> Result<Self, serde_json::Error> {
        let sources: [(Locale, &str); 7] = [
            (Locale::Ko, include_str!("../../locales/ko.json")),
            (Locale::En, include_str!("../../locales/en.json")),
            (Locale::Ja, include_str!("../../locales/ja.json")),
            (Locale::Zh, include_str!("../../locales/zh.json")),
            (Locale::Es, include_str!("../../locales/es.json")),
            (Locale::Fr, include_str!("../../locales/fr.json")),
            (Locale::De, include_str!("../../locales/de.json")),
        ];

        let mut trees = HashMap::with_capacity(sources.len());
        for (locale, source) in sources {
            trees.insert(locale, serde_json::from_str(source)?);
        }
        Ok(Self { trees })
    }

    fn resolve(&self, locale: Locale, key: &str) -> Result<&Value, MessageError> {
        let mut node = self.trees.get(&locale).ok_or_else(|| MessageError::Missing {
            locale,
            key: key.to_string(),
        })?;

        for part in key.split('.') {
            node = node.get(part).ok_or_else(|| MessageError::Missing {
                locale,
                key: key.to_string(),
            })?;
        }
        Ok(node)
    }

    /// Resolve a dotted key path to a localized string
    pub fn text(&self, locale: Locale, key: &str) -> Result<&str, MessageError> {
        self.resolve(locale, key)?
            .as_str()
            .ok_or_else(|| MessageError::Kind {
                locale,
                key: key.to_string(),
                expected: "string",
            })
    }

    /// Resolve a dotted key path to a list of localized strings
    pub fn list(&self, locale: Locale, key: &str) -> Result<Vec<&str>, MessageError> {
        let items = self
            .resolve(locale, key)?
            .as_array()
            .ok_or_else(|| MessageError::Kind {
                locale,
                key: key.to_string(),
                expected: "list",
            })?;

        items
            .iter()
            .map(|item| {
                item.as_str().ok_or_else(|| MessageError::Kind {
                    locale,
                    key: key.to_string(),
                    expected: "list of strings",
                })
            })
            .collect()
    }
}
