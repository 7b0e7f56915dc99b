//! Result panel rendering for the submission state.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, HINT_TEXT, STATUS_ERROR, STATUS_OK};

use super::state::SubmissionState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

fn spinner_frame(animation_tick: u8) -> &'static str {
    SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()]
}

/// Label of the submit button for the current state.
pub fn button_label(state: &SubmissionState) -> String {
    match state {
        SubmissionState::Submitting { animation_tick, .. } => {
            format!("{} Processing Video...", spinner_frame(*animation_tick))
        }
        _ => "Summarize Video".to_string(),
    }
}

fn panel_title(state: &SubmissionState) -> &'static str {
    match state {
        SubmissionState::Idle => " Summary ",
        SubmissionState::Submitting { .. } => " Working ",
        SubmissionState::Succeeded { .. } => " Video Summary ",
        SubmissionState::Failed { .. } => " Error ",
    }
}

/// Render the panel below the form.
pub fn render_result_panel(frame: &mut Frame, area: Rect, state: &SubmissionState) {
    if area.height == 0 {
        return;
    }

    let border = match state {
        SubmissionState::Failed { .. } => STATUS_ERROR,
        SubmissionState::Succeeded { .. } => STATUS_OK,
        _ => GLOBAL_BORDER,
    };

    let block = Block::default()
        .title(panel_title(state))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let lines = match state {
        SubmissionState::Idle => vec![Line::from(Span::styled(
            "Paste a video URL and press Enter.",
            Style::default().fg(HINT_TEXT),
        ))],
        SubmissionState::Submitting { animation_tick, .. } => vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", spinner_frame(*animation_tick)),
                    Style::default().fg(STATUS_OK),
                ),
                Span::styled(
                    "Analyzing and summarizing the video...",
                    Style::default().fg(HEADER_TEXT),
                ),
            ]),
            Line::from(Span::styled(
                "This may take some time.",
                Style::default().fg(HINT_TEXT),
            )),
        ],
        SubmissionState::Succeeded { summary } => summary
            .lines()
            .map(|line| Line::from(Span::styled(line.to_string(), Style::default().fg(HEADER_TEXT))))
            .collect(),
        SubmissionState::Failed { message } => vec![Line::from(Span::styled(
            message.clone(),
            Style::default()
                .fg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
