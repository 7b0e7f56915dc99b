use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    service_url: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(service_url: &'a str) -> Self {
        Self { service_url }
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let line = Line::from(vec![
            Span::styled("  ", Style::default()),
            Span::styled(
                "Video AI Summarizer",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(HINT_TEXT)),
            Span::styled(self.service_url, Style::default().fg(HEADER_TEXT)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
