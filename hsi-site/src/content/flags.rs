//! Country flag derivation

/// Offset from an ASCII uppercase letter to its regional indicator symbol
const REGIONAL_INDICATOR_OFFSET: u32 = 127_397;

/// Glyph served for malformed country codes
pub const GLOBE: &str = "🌍";

/// Derive the flag emoji for a two-letter country code.
///
/// Anything that is not exactly two ASCII letters yields the globe
/// glyph instead of an error.
pub fn country_flag(country_code: &str) -> String {
    let code = country_code.to_ascii_uppercase();
    let bytes = code.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_uppercase) {
        return GLOBE.to_string();
    }

    let mut flag = String::with_capacity(8);
    for &b in bytes {
        match char::from_u32(REGIONAL_INDICATOR_OFFSET + u32::from(b)) {
            Some(c) => flag.push(c),
            None => return GLOBE.to_string(),
        }
    }
    flag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(country_flag("KR"), "🇰🇷");
        assert_eq!(country_flag("JP"), "🇯🇵");
        assert_eq!(country_flag("US"), "🇺🇸");
        assert_eq!(country_flag("DE"), "🇩🇪");
    }

    #[test]
    fn test_lowercase_uppercased() {
        assert_eq!(country_flag("fr"), "🇫🇷");
        assert_eq!(country_flag("eS"), "🇪🇸");
    }

    #[test]
    fn test_two_codepoints_for_all_letter_pairs() {
        for a in b'A'..=b'Z' {
            for b in b'A'..=b'Z' {
                let code = String::from_utf8(vec![a, b]).unwrap();
                let flag = country_flag(&code);
                assert_eq!(flag.chars().count(), 2, "code {}", code);
                assert!(flag.chars().all(|c| ('\u{1F1E6}'..='\u{1F1FF}').contains(&c)));
            }
        }
    }

    #[test]
    fn test_malformed_input_yields_globe() {
        assert_eq!(country_flag(""), GLOBE);
        assert_eq!(country_flag("K"), GLOBE);
        assert_eq!(country_flag("KOR"), GLOBE);
        assert_eq!(country_flag("K1"), GLOBE);
        assert_eq!(country_flag("K "), GLOBE);
        assert_eq!(country_flag("대한"), GLOBE);
    }
}
