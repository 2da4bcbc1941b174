//! TUI session state and event handling.
//!
//! The `App` struct is the session layer: it owns the store cache, the open
//! file, the search query, the active sequence and the cursor, and runs the
//! event loop via `run()`.
//!
//! # Cursor policy
//!
//! The active sequence is the open store filtered by the query. Whenever it is
//! rebuilt (query edited, file opened or reloaded) the cursor resets to the first
//! conversation. Reads of the current conversation also clamp the cursor against
//! the active length, so a stale position is never used to index.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::{info, warn};

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use crate::clipboard::copy_conversation;
use crate::models::{CatalogEntry, Conversation};
use crate::navigation::Cursor;
use crate::store::{ConversationStore, StoreCache, matching_indices};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Longest accepted search query, in characters
const MAX_QUERY_LEN: usize = 256;
/// Lines scrolled by PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

/// Which pane receives Up/Down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Files,
    Search,
}

pub struct App {
    catalog: Vec<CatalogEntry>,
    highlighted_file: usize,
    open_file: Option<usize>,
    cache: StoreCache,
    store: Option<Arc<ConversationStore>>,
    load_error: Option<String>,
    // Store positions of the active sequence
    active: Vec<usize>,
    cursor: Cursor,
    search_query: String,
    focus: Focus,
    scroll: u16,
    should_quit: bool,
    status_message: Option<StatusMessage>,
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(catalog: Vec<CatalogEntry>, cache: StoreCache) -> Self {
        Self {
            catalog,
            highlighted_file: 0,
            open_file: None,
            cache,
            store: None,
            load_error: None,
            active: Vec::new(),
            cursor: Cursor::default(),
            search_query: String::new(),
            focus: Focus::Search,
            scroll: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true,
            last_draw_time: Instant::now(),
        }
    }

    /// Open the catalog entry at `idx`.
    ///
    /// Missing or unparseable files leave the session usable: the error is
    /// shown in place of the conversation and another file can be picked.
    pub fn open_file(&mut self, idx: usize) {
        let Some(entry) = self.catalog.get(idx) else {
            return;
        };
        let path: PathBuf = entry.path.clone();

        self.highlighted_file = idx;
        self.open_file = Some(idx);

        match self.cache.get_or_load(&path) {
            Ok(store) => {
                info!(path = %path.display(), conversations = store.len(), "opened transcript");
                self.store = Some(store);
                self.load_error = None;
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to open transcript");
                self.store = None;
                self.load_error = Some(e.to_string());
            }
        }
        self.rebuild_active();
    }

    /// Drop the open file from the cache and read it again
    fn reload(&mut self) {
        let Some(idx) = self.open_file else {
            return;
        };
        let path = self.catalog[idx].path.clone();
        self.cache.invalidate(&path);
        self.open_file(idx);
        if self.load_error.is_none() {
            self.set_status("✓ Reloaded", MessageType::Success, STATUS_SUCCESS_DURATION_MS);
        }
    }

    /// Recompute the active sequence and reset the cursor
    fn rebuild_active(&mut self) {
        self.active = match &self.store {
            Some(store) => matching_indices(store, &self.search_query),
            None => Vec::new(),
        };
        self.cursor = self.cursor.reset();
        self.scroll = 0;
        self.needs_redraw = true;
    }

    /// Conversation under the cursor, if the active sequence is non-empty
    pub fn current_conversation(&self) -> Option<&Conversation> {
        let store = self.store.as_ref()?;
        let position = self.cursor.clamp(self.active.len()).position();
        let idx = *self.active.get(position)?;
        store.get(idx)
    }

    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    fn check_and_clear_expired_status(&mut self) {
        let expired =
            self.status_message.as_ref().is_some_and(|msg| Instant::now() >= msg.expires_at);
        if expired {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();

            // Draw if dirty or if it's been >100ms (for terminal resize handling)
            let now = Instant::now();
            if self.needs_redraw || now.duration_since(self.last_draw_time) >= Duration::from_millis(100) {
                terminal.draw(|f| render_ui(f, &self.render_state()))?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn render_state(&self) -> RenderState<'_> {
        RenderState {
            catalog: &self.catalog,
            highlighted_file: self.highlighted_file,
            open_file: self.open_file,
            focus: self.focus,
            search_query: &self.search_query,
            conversation: self.current_conversation(),
            position: self.cursor.clamp(self.active.len()).position(),
            active_count: self.active.len(),
            total_count: self.store.as_ref().map_or(0, |s| s.len()),
            shape: self.store.as_ref().map(|s| s.shape()),
            load_error: self.load_error.as_deref(),
            status_message: self.status_message.as_ref(),
            scroll: self.scroll,
        }
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearSearch => {
                if self.search_query.is_empty() {
                    self.should_quit = true;
                } else {
                    self.search_query.clear();
                    self.rebuild_active();
                }
            }
            Action::Previous => self.move_cursor(self.cursor.retreat()),
            Action::Next => self.move_cursor(self.cursor.advance(self.active.len())),
            Action::MoveUp => match self.focus {
                Focus::Files => self.move_highlight(-1),
                Focus::Search => self.scroll_by(-1),
            },
            Action::MoveDown => match self.focus {
                Focus::Files => self.move_highlight(1),
                Focus::Search => self.scroll_by(1),
            },
            Action::PageUp => self.scroll_by(-(PAGE_SCROLL as i32)),
            Action::PageDown => self.scroll_by(PAGE_SCROLL as i32),
            Action::OpenFile => {
                if self.open_file == Some(self.highlighted_file) {
                    self.focus = Focus::Search;
                    self.needs_redraw = true;
                } else {
                    self.open_file(self.highlighted_file);
                }
            }
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Files => Focus::Search,
                    Focus::Search => Focus::Files,
                };
                self.needs_redraw = true;
            }
            Action::Reload => self.reload(),
            Action::CopyToClipboard => self.copy_current(),
            Action::UpdateSearch(c) => self.update_search(c),
            Action::DeleteChar => self.delete_char(),
            Action::None => {}
        }
    }

    fn move_cursor(&mut self, cursor: Cursor) {
        if cursor != self.cursor {
            self.cursor = cursor;
            self.scroll = 0;
            self.needs_redraw = true;
        }
    }

    fn move_highlight(&mut self, delta: isize) {
        if self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        let new_idx = self.highlighted_file.saturating_add_signed(delta).min(last);
        if new_idx != self.highlighted_file {
            self.highlighted_file = new_idx;
            self.needs_redraw = true;
        }
    }

    fn scroll_by(&mut self, delta: i32) {
        let new_scroll = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX)) as u16;
        if new_scroll != self.scroll {
            self.scroll = new_scroll;
            self.needs_redraw = true;
        }
    }

    fn copy_current(&mut self) {
        let result = match self.current_conversation() {
            Some(conversation) => copy_conversation(conversation),
            None => {
                self.set_status("✗ No conversation to copy", MessageType::Error, STATUS_ERROR_DURATION_MS);
                return;
            }
        };

        match result {
            Ok(()) => {
                self.set_status("✓ Copied to clipboard", MessageType::Success, STATUS_SUCCESS_DURATION_MS)
            }
            Err(e) => self.set_status(
                format!("✗ Clipboard error: {}", e),
                MessageType::Error,
                STATUS_ERROR_DURATION_MS,
            ),
        }
    }

    fn update_search(&mut self, c: char) {
        if self.search_query.chars().count() < MAX_QUERY_LEN {
            self.search_query.push(c);
            self.rebuild_active();
        }
    }

    fn delete_char(&mut self) {
        if self.search_query.pop().is_some() {
            self.rebuild_active();
        }
    }
}
