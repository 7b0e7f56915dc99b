use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{form_regions, layout_regions};
use crate::ui::submission::{button_label, render_result_panel, FormField};
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const URL_PLACEHOLDER: &str = "https://www.youtube.com/watch?v=...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.service_url()).widget(), header);

    let regions = form_regions(body);
    render_field(frame, regions.url, app, FormField::VideoUrl);
    render_field(frame, regions.prompt, app, FormField::Prompt);
    render_button(frame, regions.button, app);
    render_result_panel(frame, regions.result, app.submission());

    frame.render_widget(Footer::new(app).widget(footer), footer);
}

fn render_field(frame: &mut Frame<'_>, area: Rect, app: &App, field: FormField) {
    if area.height == 0 {
        return;
    }

    let focused = app.focus() == field;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);

    let value = app.form().field(field);
    let text = if value.is_empty() && field == FormField::VideoUrl {
        Line::from(Span::styled(URL_PLACEHOLDER, Style::default().fg(HINT_TEXT)))
    } else {
        Line::from(Span::styled(value.to_string(), Style::default().fg(HEADER_TEXT)))
    };

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        let (x, y) = cursor_offset(value, inner.width);
        let y = y.min(inner.height.saturating_sub(1));
        frame.set_cursor_position((inner.x + x, inner.y + y));
    }
}

/// Cursor position after `value` inside a box `width` cells wide.
fn cursor_offset(value: &str, width: u16) -> (u16, u16) {
    let len = value.chars().count();
    let width = usize::from(width.max(1));
    let row = u16::try_from(len / width).unwrap_or(u16::MAX);
    // Always below `width`, which is a u16
    let col = (len % width) as u16;
    (col, row)
}

fn render_button(frame: &mut Frame<'_>, area: Rect, app: &App) {
    if area.height == 0 {
        return;
    }

    let style = if app.can_submit() {
        Style::default()
            .fg(HEADER_TEXT)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(HINT_TEXT).bg(ACTIVE_HIGHLIGHT)
    };

    let label = format!("  {}  ", button_label(app.submission()));
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style))).alignment(Alignment::Center),
        area,
    );
}
