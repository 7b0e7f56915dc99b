use crate::ui::app::App;
use crate::ui::submission::FormField;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SEPARATOR: &str = " │ ";

/// One key hint; disabled hints are drawn struck through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hint {
    pub text: &'static str,
    pub enabled: bool,
}

impl Hint {
    fn on(text: &'static str) -> Self {
        Self { text, enabled: true }
    }

    fn off(text: &'static str) -> Self {
        Self {
            text,
            enabled: false,
        }
    }
}

/// Key hints for the current focus and submission state.
pub fn hints(app: &App) -> Vec<Hint> {
    let tab = match app.focus() {
        FormField::VideoUrl => "Tab: Edit prompt",
        FormField::Prompt => "Tab: Edit URL",
    };
    let enter = if app.can_submit() {
        Hint::on("Enter: Summarize")
    } else {
        Hint::off("Enter: Summarize")
    };

    vec![Hint::on(tab), enter, Hint::on("Esc: Quit")]
}

pub struct Footer<'a> {
    app: &'a App,
}

impl<'a> Footer<'a> {
    pub fn new(app: &'a App) -> Self {
        Self { app }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let disabled_style = Style::default()
            .fg(HINT_TEXT)
            .add_modifier(Modifier::CROSSED_OUT);

        let mut spans = vec![Span::styled(" ", text_style)];
        let mut used = 1;
        for (i, hint) in hints(self.app).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(SEPARATOR, text_style));
                used += SEPARATOR.chars().count();
            }
            used += hint.text.chars().count();
            let style = if hint.enabled { text_style } else { disabled_style };
            spans.push(Span::styled(hint.text, style));
        }

        let status = if self.app.submission().is_submitting() {
            format!("working… v{} ", VERSION)
        } else {
            format!("v{} ", VERSION)
        };
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(status.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));

        let status_style = if self.app.submission().is_submitting() {
            Style::default().fg(ACCENT)
        } else {
            text_style
        };
        spans.push(Span::styled(status, status_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
