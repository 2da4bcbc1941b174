//! Transcript Viewer - Browse and search chat transcripts stored as JSONL
//!
//! A transcript file holds one conversation per line, either as a list of
//! role-tagged messages or as a single free-text blob. This library provides:
//!
//! - Parsing both record shapes, committing to one per file
//! - A per-path cache of loaded conversation stores
//! - Substring search over assistant turns
//! - A bounded cursor for paging through the active sequence
//! - An interactive terminal viewer built on the above
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use transcript_viewer::{StoreCache, advance, search};
//!
//! let mut cache = StoreCache::default();
//! let store = cache.get_or_load(Path::new("upload/heyyy_articulate.jsonl"))?;
//! let matches = search(&store, "heyyy");
//! let position = advance(0, matches.len());
//! println!("Viewing {} of {}", position + 1, matches.len());
//! # Ok::<(), transcript_viewer::ViewerError>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod error;
pub mod models;
pub mod navigation;
pub mod parsers;
pub mod store;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use catalog::default_catalog;
pub use error::{Result, ViewerError};
pub use models::{CatalogEntry, Conversation, Message, display_label};
pub use navigation::{Cursor, advance, retreat};
pub use parsers::{RecordShape, load_transcript};
pub use store::{ConversationStore, Invalidation, StoreCache, search};
pub use utils::format_path_with_tilde;
