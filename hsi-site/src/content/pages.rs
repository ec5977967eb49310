//! Page payload assembly
//!
//! Builds the JSON payload for each site page from the message catalog.
//! Every payload carries the shared page chrome (nav and footer strings)
//! next to the page's own content block. Long text blocks are segmented
//! into paragraphs of lines before serialization.

use serde_json::{Value, json};

use crate::i18n::{Locale, MessageCatalog, MessageError, paragraphs};

/// Value cards on the home page, in display order
const VALUE_KEYS: [&str; 6] = [
    "cooperation",
    "happiness",
    "dignity",
    "democracy",
    "publicGoods",
    "technology",
];

/// Keywords marking the anthem's solidarity line, one per locale
const SOLIDARITY_KEYWORDS: [&str; 7] = [
    "연대",
    "unite",
    "連帯",
    "团结",
    "uníos",
    "unissez",
    "vereinigt",
];

/// Build the payload for a page, or `None` for an unknown page name
pub fn build(
    catalog: &MessageCatalog,
    locale: Locale,
    page: &str,
) -> Option<Result<Value, MessageError>> {
    let content = match page {
        "home" => home(catalog, locale),
        "declaration" => declaration(catalog, locale),
        "platform" => platform(catalog, locale),
        "join" => join(catalog, locale),
        "anthem" => anthem(catalog, locale),
        _ => return None,
    };

    Some(content.and_then(|content| {
        Ok(json!({
            "nav": nav(catalog, locale)?,
            "footer": footer(catalog, locale)?,
            "content": content,
        }))
    }))
}

fn nav(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    Ok(json!({
        "home": catalog.text(locale, "nav.home")?,
        "declaration": catalog.text(locale, "nav.declaration")?,
        "platform": catalog.text(locale, "nav.platform")?,
        "chapters": catalog.text(locale, "nav.chapters")?,
        "join": catalog.text(locale, "nav.join")?,
    }))
}

fn footer(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    Ok(json!({
        "tagline": catalog.text(locale, "footer.tagline")?,
        "about": catalog.text(locale, "footer.about")?,
        "declaration": catalog.text(locale, "footer.declaration")?,
        "platform": catalog.text(locale, "footer.platform")?,
        "chapters": catalog.text(locale, "footer.chapters")?,
        "get_involved": catalog.text(locale, "footer.getInvolved")?,
        "join": catalog.text(locale, "footer.join")?,
        "newsletter": catalog.text(locale, "footer.newsletter")?,
        "contact": catalog.text(locale, "footer.contact")?,
        "connect": catalog.text(locale, "footer.connect")?,
        "copyright": catalog.text(locale, "footer.copyright")?,
        "solidarity": catalog.text(locale, "footer.solidarity")?,
    }))
}

fn cta(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    Ok(json!({
        "title": catalog.text(locale, "cta.title")?,
        "description": catalog.text(locale, "cta.description")?,
        "button": catalog.text(locale, "cta.button")?,
    }))
}

fn home(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    let mut cards = Vec::with_capacity(VALUE_KEYS.len());
    for key in VALUE_KEYS {
        cards.push(json!({
            "key": key,
            "title": catalog.text(locale, &format!("home.values.{key}.title"))?,
            "description": catalog.text(locale, &format!("home.values.{key}.description"))?,
        }));
    }

    Ok(json!({
        "hero": {
            "title": catalog.text(locale, "home.hero.title")?,
            "subtitle": catalog.text(locale, "home.hero.subtitle")?,
            "description": catalog.text(locale, "home.hero.description")?,
            "join_button": catalog.text(locale, "home.hero.joinButton")?,
            "learn_more": catalog.text(locale, "home.hero.learnMore")?,
        },
        "values": {
            "title": catalog.text(locale, "home.values.title")?,
            "subtitle": catalog.text(locale, "home.values.subtitle")?,
            "cards": cards,
        },
        "chapters_teaser": {
            "title": catalog.text(locale, "chapters.title")?,
            "subtitle": catalog.text(locale, "chapters.subtitle")?,
            "korea_name": catalog.text(locale, "chapters.korea.name")?,
            "korea_status": catalog.text(locale, "chapters.korea.status")?,
            "established_label": catalog.text(locale, "chapters.established")?,
            "start_chapter_desc": catalog.text(locale, "chapters.startChapterDesc")?,
            "learn_how": catalog.text(locale, "chapters.learnHow")?,
        },
        "cta": cta(catalog, locale)?,
    }))
}

fn declaration(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    let mut sections = Vec::with_capacity(6);
    for num in 1..=6 {
        let base = format!("declaration.sections.section{num}");
        sections.push(json!({
            "title": catalog.text(locale, &format!("{base}.title"))?,
            "paragraphs": paragraphs(catalog.text(locale, &format!("{base}.content"))?),
        }));
    }

    Ok(json!({
        "subtitle": catalog.text(locale, "declaration.subtitle")?,
        "title": catalog.text(locale, "declaration.title")?,
        "slogan": catalog.text(locale, "declaration.slogan")?,
        "intro": paragraphs(catalog.text(locale, "declaration.intro")?),
        "sections": sections,
        "conclusion": {
            "title": catalog.text(locale, "declaration.conclusion.title")?,
            "paragraphs": paragraphs(catalog.text(locale, "declaration.conclusion.content")?),
        },
        "cta": cta(catalog, locale)?,
    }))
}

fn platform(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    let mut articles = Vec::with_capacity(7);
    for num in 1..=7 {
        let base = format!("platform.articles.article{num}");
        let mut article = json!({
            "title": catalog.text(locale, &format!("{base}.title"))?,
            "paragraphs": paragraphs(catalog.text(locale, &format!("{base}.content"))?),
        });
        // Shared principles lists exist on articles 2 through 6 only
        if (2..=6).contains(&num) {
            article["principles"] = json!(catalog.list(locale, &format!("{base}.principles"))?);
        }
        articles.push(article);
    }

    Ok(json!({
        "title": catalog.text(locale, "platform.title")?,
        "subtitle": catalog.text(locale, "platform.subtitle")?,
        "preamble": {
            "title": catalog.text(locale, "platform.preamble.title")?,
            "paragraphs": paragraphs(catalog.text(locale, "platform.preamble.content")?),
        },
        "articles": articles,
        "appendix": {
            "title": catalog.text(locale, "platform.appendix.title")?,
            "principles": catalog.list(locale, "platform.appendix.principles")?,
        },
        "conclusion": {
            "title": catalog.text(locale, "platform.conclusion.title")?,
            "paragraphs": paragraphs(catalog.text(locale, "platform.conclusion.content")?),
        },
        "cta": cta(catalog, locale)?,
    }))
}

fn join(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    Ok(json!({
        "title": catalog.text(locale, "join.title")?,
        "subtitle": catalog.text(locale, "join.subtitle")?,
        "individual": {
            "title": catalog.text(locale, "join.individual.title")?,
            "description": catalog.text(locale, "join.individual.description")?,
            "benefits": catalog.list(locale, "join.individual.benefits")?,
            "button": catalog.text(locale, "join.individual.button")?,
        },
        "chapter": {
            "title": catalog.text(locale, "join.chapter.title")?,
            "description": catalog.text(locale, "join.chapter.description")?,
            "steps": catalog.list(locale, "join.chapter.steps")?,
            "button": catalog.text(locale, "join.chapter.button")?,
        },
        "partner": {
            "title": catalog.text(locale, "join.partner.title")?,
            "description": catalog.text(locale, "join.partner.description")?,
            "button": catalog.text(locale, "join.partner.button")?,
        },
    }))
}

fn anthem(catalog: &MessageCatalog, locale: Locale) -> Result<Value, MessageError> {
    let lyrics = catalog.text(locale, "anthem.lyrics")?;

    Ok(json!({
        "title": catalog.text(locale, "anthem.title")?,
        "subtitle": catalog.text(locale, "anthem.subtitle")?,
        "verses": paragraphs(lyrics),
        "play_label": catalog.text(locale, "anthem.playButton")?,
        "pause_label": catalog.text(locale, "anthem.pauseButton")?,
        "solidarity_line": solidarity_line(lyrics),
    }))
}

/// First lyrics line containing any solidarity keyword.
///
/// The keyword set spans every locale; a match is not restricted to the
/// requested locale's own keyword.
pub fn solidarity_line(lyrics: &str) -> Option<&str> {
    lyrics
        .split('\n')
        .find(|line| SOLIDARITY_KEYWORDS.iter().any(|kw| line.contains(kw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageCatalog {
        MessageCatalog::load().unwrap()
    }

    #[test]
    fn test_build_unknown_page() {
        assert!(build(&catalog(), Locale::En, "manifesto").is_none());
    }

    #[test]
    fn test_build_all_pages_all_locales() {
        let catalog = catalog();
        for locale in Locale::ALL {
            for page in ["home", "declaration", "platform", "join", "anthem"] {
                let payload = build(&catalog, locale, page)
                    .unwrap_or_else(|| panic!("{page} missing"))
                    .unwrap_or_else(|e| panic!("{page}/{locale}: {e}"));
                assert!(payload["nav"]["home"].is_string());
                assert!(payload["footer"]["copyright"].is_string());
                assert!(payload["content"].is_object());
            }
        }
    }

    #[test]
    fn test_home_value_cards() {
        let payload = build(&catalog(), Locale::En, "home").unwrap().unwrap();
        let cards = payload["content"]["values"]["cards"].as_array().unwrap();
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0]["key"], "cooperation");
        assert_eq!(cards[5]["key"], "technology");
    }

    #[test]
    fn test_declaration_has_six_sections() {
        let payload = build(&catalog(), Locale::Ko, "declaration").unwrap().unwrap();
        let sections = payload["content"]["sections"].as_array().unwrap();
        assert_eq!(sections.len(), 6);
        assert!(!sections[0]["paragraphs"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_platform_principles_on_middle_articles() {
        let payload = build(&catalog(), Locale::En, "platform").unwrap().unwrap();
        let articles = payload["content"]["articles"].as_array().unwrap();
        assert_eq!(articles.len(), 7);
        assert!(articles[0].get("principles").is_none());
        assert!(articles[1]["principles"].is_array());
        assert!(articles[5]["principles"].is_array());
        assert!(articles[6].get("principles").is_none());
    }

    #[test]
    fn test_anthem_has_solidarity_line_everywhere() {
        let catalog = catalog();
        for locale in Locale::ALL {
            let payload = build(&catalog, locale, "anthem").unwrap().unwrap();
            let line = payload["content"]["solidarity_line"]
                .as_str()
                .unwrap_or_else(|| panic!("no solidarity line for {locale}"));
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn test_solidarity_line_picks_first_match() {
        let lyrics = "rise as one\nwe unite tonight\nwe unite again";
        assert_eq!(solidarity_line(lyrics), Some("we unite tonight"));
        assert_eq!(solidarity_line("no keyword here"), None);
    }
}
