//! JSONL parsers for transcript files
//!
//! # Record shapes
//!
//! A transcript file holds one JSON object per non-blank line, in one of two
//! shapes, and a file is always read entirely as one of them:
//!
//! - **Messages**: `{"messages": [{"role": "...", "content": "..."}, ...]}`
//! - **Text**: `{"text": "..."}`, converted to a conversation holding a single
//!   assistant message
//!
//! # Error Handling Strategy
//!
//! Unlike a tolerant log reader, no line is ever skipped (blank lines aside). The
//! messages shape is attempted first; any failing line, or an empty first
//! conversation, rejects it for the whole file. The text shape is then attempted,
//! and its failure is fatal for the file ([`crate::ViewerError::Parse`]).

pub mod jsonl;
pub mod transcript;

pub use jsonl::parse_lines;
pub use transcript::{
    ParsedTranscript, RecordShape, load_transcript, parse_transcript, read_transcript,
};
