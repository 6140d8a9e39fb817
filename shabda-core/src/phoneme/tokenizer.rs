//! Longest-listed-match phoneme tokenizer

use super::tables::{table_for, CandidateTable};
use crate::script::{self, ScriptTag};
use serde::{Deserialize, Serialize};

/// Ordered phoneme tokens together with the script that selected the table
///
/// Concatenating the tokens always reproduces the tokenized text exactly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhonemeStream {
    pub tokens: Vec<String>,
    pub script: ScriptTag,
}

impl PhonemeStream {
    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether the stream holds no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Reassemble the original text
    pub fn join(&self) -> String {
        self.tokens.concat()
    }

    /// Tokens as string slices
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

/// Tokenize `text`, detecting its script first
pub fn tokenize(text: &str) -> PhonemeStream {
    tokenize_as(text, script::classify(text))
}

/// Tokenize `text` with the candidate table for `script`
pub fn tokenize_as(text: &str, script: ScriptTag) -> PhonemeStream {
    PhonemeStream {
        tokens: segment_with(text, table_for(script)),
        script,
    }
}

/// Segment `text` against an ordered candidate table
///
/// At every cursor position the first candidate in table order that
/// matches verbatim is taken; otherwise the single code point under the
/// cursor becomes its own token. The cursor strictly advances, so this
/// terminates in time proportional to the input.
pub fn segment_with(text: &str, table: &CandidateTable) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while cursor < text.len() {
        let rest = &text[cursor..];
        let step = match table.match_prefix(rest) {
            Some(candidate) => candidate.len(),
            None => {
                // rest is non-empty, so there is always a next char
                let width = rest.chars().next().map_or(1, char::len_utf8);
                tracing::trace!(
                    offset = cursor,
                    unit = &rest[..width],
                    "no candidate, single code point"
                );
                width
            }
        };
        tokens.push(rest[..step].to_string());
        cursor += step;
    }

    tokens
}
