//! Data Transfer Objects for API

use crate::error::Result;
use shabda_core::evidence::BlockingQuery;
use shabda_core::{Decision, PhonemeStream, ScriptTag};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Where surface forms are read from
///
/// Transliterated text is often saved with a byte-order mark; it is
/// dropped so it never reaches the tokenizer as a stray unit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "source", content = "value", rename_all = "snake_case"))]
pub enum Input {
    /// Surface text given inline
    Text(String),
    /// UTF-8 file of forms
    File(PathBuf),
    /// Undecoded UTF-8 bytes
    Bytes(Vec<u8>),
    /// Standard input, read to the end
    Stdin,
}

impl Input {
    /// Inline surface text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// File of forms
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// UTF-8 bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Decode the whole source as text
    pub fn read_text(self) -> Result<String> {
        let text = match self {
            Input::Text(text) => text,
            Input::File(path) => fs::read_to_string(&path)?,
            Input::Bytes(bytes) => String::from_utf8(bytes)?,
            Input::Stdin => {
                let mut buffer = String::new();
                std::io::stdin().lock().read_to_string(&mut buffer)?;
                buffer
            }
        };
        Ok(match text.strip_prefix('\u{feff}') {
            Some(rest) => rest.to_string(),
            None => text,
        })
    }
}

/// Tokens of a surface form and the script that selected their table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TokenizeOutput {
    /// Phoneme tokens; concatenated they give back the input
    pub tokens: Vec<String>,
    /// Detected script
    pub script: ScriptTag,
}

impl From<PhonemeStream> for TokenizeOutput {
    fn from(stream: PhonemeStream) -> Self {
        Self {
            tokens: stream.tokens,
            script: stream.script,
        }
    }
}

/// Blocking classification request
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Request {
    /// One root/affix pair
    Single(BlockingQuery),
    /// Pairs evaluated in order
    Batch {
        /// Queries to classify
        queries: Vec<BlockingQuery>,
    },
}

impl Request {
    /// Number of queries carried
    pub fn len(&self) -> usize {
        match self {
            Request::Single(_) => 1,
            Request::Batch { queries } => queries.len(),
        }
    }

    /// Whether no query is carried
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Decisions answering a [`Request`], shaped like it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Response {
    /// Answer to [`Request::Single`]
    Single(Decision),
    /// Answers to [`Request::Batch`], in query order
    Batch {
        /// One decision per query
        decisions: Vec<Decision>,
    },
}

impl Response {
    /// Decisions in request order
    pub fn decisions(&self) -> &[Decision] {
        match self {
            Response::Single(decision) => std::slice::from_ref(decision),
            Response::Batch { decisions } => decisions,
        }
    }
}
