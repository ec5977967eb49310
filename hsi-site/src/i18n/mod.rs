//! Locale handling and the localized message catalog

mod catalog;
mod text;

pub use catalog::{MessageCatalog, MessageError};
pub use text::paragraphs;

use serde::{Deserialize, Serialize};

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Ko,
    En,
    Ja,
    Zh,
    Es,
    Fr,
    De,
}

impl Locale {
    /// All supported locales, in switcher display order
    pub const ALL: [Locale; 7] = [
        Locale::Ko,
        Locale::En,
        Locale::Ja,
        Locale::Zh,
        Locale::Es,
        Locale::Fr,
        Locale::De,
    ];

    /// Locale served when none is requested
    pub const DEFAULT: Locale = Locale::En;

    /// BCP 47 primary language subtag
    pub const fn code(&self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
            Locale::Ja => "ja",
            Locale::Zh => "zh",
            Locale::Es => "es",
            Locale::Fr => "fr",
            Locale::De => "de",
        }
    }

    /// Parse a locale code, tolerating case and region tags ("ko-KR", "en_US")
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or(code);
        match primary.to_ascii_lowercase().as_str() {
            "ko" => Some(Locale::Ko),
            "en" => Some(Locale::En),
            "ja" => Some(Locale::Ja),
            "zh" => Some(Locale::Zh),
            "es" => Some(Locale::Es),
            "fr" => Some(Locale::Fr),
            "de" => Some(Locale::De),
            _ => None,
        }
    }

    /// Language name in its own language, for the locale switcher
    pub const fn native_name(&self) -> &'static str {
        match self {
            Locale::Ko => "한국어",
            Locale::En => "English",
            Locale::Ja => "日本語",
            Locale::Zh => "中文",
            Locale::Es => "Español",
            Locale::Fr => "Français",
            Locale::De => "Deutsch",
        }
    }

    /// Representative flag shown next to the language name
    pub const fn flag(&self) -> &'static str {
        match self {
            Locale::Ko => "🇰🇷",
            Locale::En => "🇺🇸",
            Locale::Ja => "🇯🇵",
            Locale::Zh => "🇨🇳",
            Locale::Es => "🇪🇸",
            Locale::Fr => "🇫🇷",
            Locale::De => "🇩🇪",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
