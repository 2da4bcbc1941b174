use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::app::{Focus, MessageType, StatusMessage};
use super::layout::AppLayout;
use crate::models::{CatalogEntry, Conversation};
use crate::parsers::RecordShape;
use crate::utils::sanitize_for_display;

const TITLE: &str = " Transcript Viewer ";

const BRIGHT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const EMERALD: Color = Color::Rgb(16, 185, 129);
const SKY: Color = Color::Rgb(56, 189, 248);
const AMBER: Color = Color::Rgb(245, 158, 11);
const RED: Color = Color::Rgb(239, 68, 68);
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Everything the UI draws, borrowed from the session
pub struct RenderState<'a> {
    pub catalog: &'a [CatalogEntry],
    pub highlighted_file: usize,
    pub open_file: Option<usize>,
    pub focus: Focus,
    pub search_query: &'a str,
    pub conversation: Option<&'a Conversation>,
    pub position: usize,
    pub active_count: usize,
    pub total_count: usize,
    pub shape: Option<RecordShape>,
    pub load_error: Option<&'a str>,
    pub status_message: Option<&'a StatusMessage>,
    pub scroll: u16,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let layout = AppLayout::new(frame.area());

    let title = Paragraph::new(TITLE)
        .style(Style::default().fg(BRIGHT).bg(BAR_BG).add_modifier(Modifier::BOLD));
    frame.render_widget(title, layout.title_area);

    render_file_list(frame, layout.files_area, state);
    render_description(frame, layout.description_area, state);
    render_search(frame, layout.search_area, state);
    render_conversation(frame, layout.conversation_area, state);
    render_status_bar(frame, layout.status_area, state);
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { EMERALD } else { MUTED };
    Block::default().borders(Borders::ALL).border_style(Style::default().fg(border)).title(title)
}

fn render_file_list(frame: &mut Frame, area: Rect, state: &RenderState) {
    let items: Vec<ListItem> = state
        .catalog
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let marker = if state.open_file == Some(idx) { "▶ " } else { "  " };
            let style = if idx == state.highlighted_file {
                Style::default().fg(BRIGHT).bg(EMERALD).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED)
            };
            ListItem::new(format!("{}{}", marker, entry.name)).style(style)
        })
        .collect();

    let list = List::new(items).block(pane_block(" Files ".to_string(), state.focus == Focus::Files));
    frame.render_widget(list, area);
}

fn render_description(frame: &mut Frame, area: Rect, state: &RenderState) {
    let description =
        state.catalog.get(state.highlighted_file).map(|e| e.description.as_str()).unwrap_or("");

    let paragraph = Paragraph::new(description)
        .style(Style::default().fg(MUTED).add_modifier(Modifier::ITALIC))
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(MUTED)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn render_search(frame: &mut Frame, area: Rect, state: &RenderState) {
    let focused = state.focus == Focus::Search;
    let mut spans = vec![Span::raw(state.search_query.to_string())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(EMERALD)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(pane_block(" Search ".to_string(), focused));
    frame.render_widget(paragraph, area);
}

fn role_style(role: &str) -> Style {
    let color = match role {
        "assistant" => EMERALD,
        "user" => SKY,
        "system" => AMBER,
        _ => MUTED,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn conversation_lines(conversation: &Conversation) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (label, message) in conversation.labeled_messages() {
        lines.push(Line::from(Span::styled(label, role_style(&message.role))));
        for line in sanitize_for_display(&message.content).lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn render_conversation(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (title, content) = if let Some(error) = state.load_error {
        (" Error ".to_string(), Text::from(Line::styled(error.to_string(), Style::default().fg(RED))))
    } else if state.active_count == 0 {
        let message = if state.open_file.is_none() {
            "No file open"
        } else if state.total_count == 0 {
            "No conversations"
        } else {
            "No conversations match"
        };
        (" Conversation ".to_string(), Text::from(message))
    } else {
        let title = format!(" Viewing {} of {} ", state.position + 1, state.active_count);
        let content = match state.conversation {
            Some(conversation) => Text::from(conversation_lines(conversation)),
            None => Text::from(""),
        };
        (title, content)
    };

    let paragraph = Paragraph::new(content)
        .block(pane_block(title, false))
        .wrap(Wrap { trim: false })
        .scroll((state.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, fg) = if let Some(message) = state.status_message {
        let fg = match message.message_type {
            MessageType::Success => EMERALD,
            MessageType::Error => RED,
        };
        (format!(" {} ", message.text), fg)
    } else if let Some(error) = state.load_error {
        (format!(" [ERROR] {} ", error), RED)
    } else {
        let mut parts = vec![];

        if let Some(shape) = state.shape {
            parts.push(format!("[{}]", shape.as_str().to_uppercase()));
        }

        if state.active_count < state.total_count {
            parts.push(format!("{} of {} match", state.active_count, state.total_count));
        } else {
            parts.push(format!("{} conversations", state.total_count));
        }

        parts.push("←/→: prev/next".to_string());
        parts.push("Enter: open".to_string());
        parts.push("Tab: focus".to_string());
        if !state.search_query.is_empty() {
            parts.push("Esc: clear".to_string());
        }
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), BRIGHT)
    };

    let paragraph = Paragraph::new(status_text).style(Style::default().fg(fg).bg(BAR_BG));
    frame.render_widget(paragraph, area);
}
