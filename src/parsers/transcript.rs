use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::jsonl::parse_lines;
use crate::error::{LineError, Result, ViewerError};
use crate::models::{Conversation, TextRecord};
use crate::utils::validate_file_size;

/// The line shape a whole transcript file was read as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordShape {
    /// `{"messages": [{"role": ..., "content": ...}, ...]}`
    Messages,
    /// `{"text": ...}`, one assistant message per line
    Text,
}

impl RecordShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordShape::Messages => "messages",
            RecordShape::Text => "text",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTranscript {
    pub shape: RecordShape,
    pub conversations: Vec<Conversation>,
}

/// Why the messages shape was not used for a file
#[derive(Debug)]
enum Rejection {
    Malformed(LineError),
    EmptyFirstRecord,
}

fn parse_as_messages(source: &str) -> std::result::Result<Vec<Conversation>, Rejection> {
    let conversations = parse_lines::<Conversation>(source).map_err(Rejection::Malformed)?;

    // Only the first record is checked: an empty first conversation marks a file
    // of some other shape that happened to deserialize.
    if conversations.first().is_some_and(Conversation::is_empty) {
        return Err(Rejection::EmptyFirstRecord);
    }

    Ok(conversations)
}

fn parse_as_text(source: &str) -> std::result::Result<Vec<Conversation>, LineError> {
    let records = parse_lines::<TextRecord>(source)?;
    Ok(records.into_iter().map(Conversation::from).collect())
}

/// Parse transcript text, committing to one record shape for the whole input.
///
/// The messages shape is tried first. If any line fails to deserialize, or the
/// first conversation has no messages, the entire input is re-read as text
/// records. The returned error is the text attempt's failure.
pub fn parse_transcript(source: &str) -> std::result::Result<ParsedTranscript, LineError> {
    match parse_as_messages(source) {
        Ok(conversations) => Ok(ParsedTranscript { shape: RecordShape::Messages, conversations }),
        Err(rejection) => {
            match &rejection {
                Rejection::Malformed(err) => {
                    warn!(%err, "not a messages transcript, trying text records")
                }
                Rejection::EmptyFirstRecord => {
                    warn!("first conversation is empty, trying text records")
                }
            }
            let conversations = parse_as_text(source)?;
            Ok(ParsedTranscript { shape: RecordShape::Text, conversations })
        }
    }
}

/// Read a transcript from any reader, see [`parse_transcript`]
pub fn read_transcript<R: Read>(mut reader: R) -> io::Result<std::result::Result<ParsedTranscript, LineError>> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(parse_transcript(&source))
}

/// Load a transcript file from disk.
///
/// # Errors
///
/// - [`ViewerError::FileNotFound`] if `path` does not exist (checked before reading)
/// - [`ViewerError::FileTooLarge`] if it exceeds [`crate::utils::MAX_FILE_SIZE_BYTES`]
/// - [`ViewerError::Io`] if it cannot be read as UTF-8 text
/// - [`ViewerError::Parse`] if neither record shape fits
pub fn load_transcript(path: &Path) -> Result<ParsedTranscript> {
    if !path.exists() {
        return Err(ViewerError::FileNotFound { path: path.to_path_buf() });
    }

    info!(path = %path.display(), "reading transcript");

    let io_error = |source| ViewerError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_error)?;
    validate_file_size(&file, path)?;

    read_transcript(file)
        .map_err(io_error)?
        .map_err(|source| ViewerError::Parse { path: path.to_path_buf(), source })
}
