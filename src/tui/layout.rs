use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Pane layout
pub struct AppLayout {
    pub title_area: Rect,
    pub files_area: Rect,
    pub description_area: Rect,
    pub search_area: Rect,
    pub conversation_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// - Title: top row
    /// - File list: 30% width (left), selected file's description below it
    /// - Search input (3 rows) above the conversation view (right)
    /// - Status bar: bottom row
    pub fn new(area: Rect) -> Self {
        let vertical_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let horizontal_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(vertical_chunks[1]);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(7)])
            .split(horizontal_chunks[0]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(horizontal_chunks[1]);

        Self {
            title_area: vertical_chunks[0],
            files_area: left_chunks[0],
            description_area: left_chunks[1],
            search_area: right_chunks[0],
            conversation_area: right_chunks[1],
            status_area: vertical_chunks[2],
        }
    }
}
