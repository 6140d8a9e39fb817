//! Script-adaptive phoneme segmentation
//!
//! Every downstream rule consumes the output of this module: the
//! tokenizer splits a surface form into indivisible phonetic units using
//! an ordered candidate table chosen by script, and the segment view maps
//! those units onto classified Latin phonemes.

pub mod segment;
pub mod tables;
pub mod tokenizer;

pub use segment::{
    canonical_latin, latin_class, latin_spelling, phonemes, phonemes_of, Phoneme, Phonemes,
    SegmentClass,
};
pub use tables::{validate_candidate_order, CandidateTable, OrderViolation};
pub use tokenizer::{segment_with, tokenize, tokenize_as, PhonemeStream};
