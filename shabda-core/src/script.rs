//! Script detection by code-point range
//!
//! Sanskrit forms arrive either in Latin transliteration (IAST with
//! diacritics) or in the native Devanagari script. Detection is a single
//! pass over the characters; neutral characters (whitespace, ASCII
//! punctuation, digits, dandas) never decide the script on their own.

use serde::{Deserialize, Serialize};

/// Script of a piece of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptTag {
    /// Latin transliteration, optionally with diacritics
    Latin,
    /// Devanagari
    Devanagari,
    /// Both Latin letters and Devanagari letters
    Mixed,
    /// Empty, neutral-only, or containing letters of any other script
    #[default]
    Unknown,
}

impl ScriptTag {
    /// Stable lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptTag::Latin => "latin",
            ScriptTag::Devanagari => "devanagari",
            ScriptTag::Mixed => "mixed",
            ScriptTag::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ScriptTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharScript {
    Latin,
    Native,
    Neutral,
    Foreign,
}

#[inline]
fn char_script(ch: char) -> CharScript {
    match ch {
        // Dandas and Devanagari digits are punctuation-like
        '\u{0964}' | '\u{0965}' | '\u{0966}'..='\u{096F}' => CharScript::Neutral,
        '\u{0900}'..='\u{097F}' | '\u{1CD0}'..='\u{1CFF}' | '\u{A8E0}'..='\u{A8FF}' => {
            CharScript::Native
        }
        'a'..='z' | 'A'..='Z' => CharScript::Latin,
        // Combining diacritics only appear on Latin letters here
        '\u{0300}'..='\u{036F}' => CharScript::Latin,
        '\u{00C0}'..='\u{00FF}' if ch != '\u{00D7}' && ch != '\u{00F7}' => CharScript::Latin,
        '\u{0100}'..='\u{017F}' | '\u{1E00}'..='\u{1EFF}' => CharScript::Latin,
        // Apostrophe doubles as avagraha in transliteration
        _ if ch.is_ascii() => CharScript::Neutral,
        _ if ch.is_whitespace() || ch.is_numeric() => CharScript::Neutral,
        _ if !ch.is_alphabetic() => CharScript::Neutral,
        _ => CharScript::Foreign,
    }
}

/// Classify the script of `text`
///
/// Never fails: empty or neutral-only input yields [`ScriptTag::Unknown`].
pub fn classify(text: &str) -> ScriptTag {
    let mut latin = false;
    let mut native = false;

    for ch in text.chars() {
        match char_script(ch) {
            CharScript::Latin => latin = true,
            CharScript::Native => native = true,
            CharScript::Neutral => {}
            CharScript::Foreign => return ScriptTag::Unknown,
        }
    }

    match (latin, native) {
        (true, true) => ScriptTag::Mixed,
        (false, true) => ScriptTag::Devanagari,
        (true, false) => ScriptTag::Latin,
        (false, false) => ScriptTag::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_detection() {
        assert_eq!(classify("gam"), ScriptTag::Latin);
        assert_eq!(classify("kṛṣṇa"), ScriptTag::Latin);
        assert_eq!(classify("rāmaḥ vanam gacchati."), ScriptTag::Latin);
    }

    #[test]
    fn test_devanagari_detection() {
        assert_eq!(classify("गम्"), ScriptTag::Devanagari);
        assert_eq!(classify("रामः वनं गच्छति।"), ScriptTag::Devanagari);
        assert_eq!(classify("१२ गम्"), ScriptTag::Devanagari);
    }

    #[test]
    fn test_mixed_detection() {
        assert_eq!(classify("gam गम्"), ScriptTag::Mixed);
        assert_eq!(classify("ṛ ऋ"), ScriptTag::Mixed);
    }

    #[test]
    fn test_unknown_detection() {
        assert_eq!(classify(""), ScriptTag::Unknown);
        assert_eq!(classify("  123 ,."), ScriptTag::Unknown);
        assert_eq!(classify("слово"), ScriptTag::Unknown);
        assert_eq!(classify("gam 漢字"), ScriptTag::Unknown);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ScriptTag::Latin.to_string(), "latin");
        assert_eq!(ScriptTag::Mixed.as_str(), "mixed");
    }
}
