//! Data models for chat transcripts.
//!
//! - [`Message`] - A role-tagged piece of text
//! - [`Conversation`] - One recorded exchange (a `{"messages": [...]}` line)
//! - [`TextRecord`] - The alternate `{"text": "..."}` line shape
//! - [`CatalogEntry`] - A selectable transcript file

pub mod catalog;
pub mod conversation;

pub use catalog::CatalogEntry;
pub use conversation::{
    ASSISTANT_ROLE, Conversation, Message, TextRecord, display_label, format_transcript,
};
