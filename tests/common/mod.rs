//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;

/// Builder for a directory of transcript files
pub struct TranscriptDirBuilder {
    temp_dir: TempDir,
}

impl TranscriptDirBuilder {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a file with raw content
    pub fn with_file(self, name: &str, content: &str) -> Self {
        fs::write(self.temp_dir.path().join(name), content).expect("Failed to write transcript");
        self
    }

    /// Write a messages-shape file, one line per conversation
    pub fn with_conversations(self, name: &str, conversations: &[ConversationBuilder]) -> Self {
        let content =
            conversations.iter().map(ConversationBuilder::to_json).collect::<Vec<_>>().join("\n");
        self.with_file(name, &content)
    }

    /// Write a text-shape file, one line per text
    pub fn with_texts(self, name: &str, texts: &[&str]) -> Self {
        let content =
            texts.iter().map(|t| json!({ "text": t }).to_string()).collect::<Vec<_>>().join("\n");
        self.with_file(name, &content)
    }

    /// Write a catalog JSON file listing the given (file, name, description) entries
    pub fn with_catalog(self, name: &str, entries: &[(&str, &str, &str)]) -> Self {
        let root = self.temp_dir.path().to_path_buf();
        let catalog: Vec<_> = entries
            .iter()
            .map(|(file, entry_name, description)| {
                json!({
                    "path": root.join(file),
                    "name": entry_name,
                    "description": description,
                })
            })
            .collect();
        self.with_file(name, &serde_json::to_string(&catalog).unwrap())
    }

    pub fn file(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for TranscriptDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one messages-shape line
#[derive(Clone, Default)]
pub struct ConversationBuilder {
    messages: Vec<(String, String)>,
}

impl ConversationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn message(mut self, role: &str, content: &str) -> Self {
        self.messages.push((role.to_string(), content.to_string()));
        self
    }

    pub fn user(self, content: &str) -> Self {
        self.message("user", content)
    }

    pub fn assistant(self, content: &str) -> Self {
        self.message("assistant", content)
    }

    pub fn system(self, content: &str) -> Self {
        self.message("system", content)
    }

    pub fn to_json(&self) -> String {
        let messages: Vec<_> = self
            .messages
            .iter()
            .map(|(role, content)| json!({ "role": role, "content": content }))
            .collect();
        json!({ "messages": messages }).to_string()
    }
}

/// The two-line messages file used throughout the scenarios
pub fn scenario_a() -> Vec<ConversationBuilder> {
    vec![
        ConversationBuilder::new().user("hi").assistant("hello"),
        ConversationBuilder::new().assistant("ok").assistant("done"),
    ]
}
