//! Loaded transcripts and the views served from them.
//!
//! A [`ConversationStore`] is built once per file and never mutated. Loading goes
//! through [`StoreCache::get_or_load`], which hands out shared read-only
//! references; [`search`] derives filtered views without copying conversations.

pub mod cache;
pub mod search;

use std::path::{Path, PathBuf};

pub use cache::{Invalidation, StoreCache};
pub use search::{matching_indices, search};

use crate::error::Result;
use crate::models::Conversation;
use crate::parsers::{ParsedTranscript, RecordShape, load_transcript};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationStore {
    path: PathBuf,
    shape: RecordShape,
    conversations: Vec<Conversation>,
}

impl ConversationStore {
    /// Parse the file at `path`. Prefer [`StoreCache::get_or_load`], which
    /// avoids re-reading a file already loaded.
    pub fn load(path: &Path) -> Result<Self> {
        let parsed = load_transcript(path)?;
        Ok(Self::from_parsed(path, parsed))
    }

    pub fn from_parsed(path: impl Into<PathBuf>, parsed: ParsedTranscript) -> Self {
        Self { path: path.into(), shape: parsed.shape, conversations: parsed.conversations }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn shape(&self) -> RecordShape {
        self.shape
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, idx: usize) -> Option<&Conversation> {
        self.conversations.get(idx)
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Conversation> {
        self.conversations.iter()
    }
}

impl<'a> IntoIterator for &'a ConversationStore {
    type Item = &'a Conversation;
    type IntoIter = std::slice::Iter<'a, Conversation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::models::Message;

    /// Store built in memory, bypassing the filesystem
    pub fn store_of(conversations: Vec<Vec<(&str, &str)>>) -> ConversationStore {
        let conversations = conversations
            .into_iter()
            .map(|turns| {
                Conversation::new(
                    turns.into_iter().map(|(role, content)| Message::new(role, content)).collect(),
                )
            })
            .collect();
        ConversationStore::from_parsed(
            "memory.jsonl",
            ParsedTranscript { shape: RecordShape::Messages, conversations },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::store_of;
    use super::*;

    #[test]
    fn test_store_accessors() {
        let store = store_of(vec![vec![("user", "a")], vec![("assistant", "b")]]);

        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.path(), Path::new("memory.jsonl"));
        assert_eq!(store.shape(), RecordShape::Messages);
        assert_eq!(store.get(1).unwrap().messages[0].content, "b");
        assert!(store.get(2).is_none());
        assert_eq!(store.iter().count(), 2);
    }
}
