use crate::controller::PendingSubmission;
use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Action to take after processing a key event.
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Run this request on the async runtime.
    Submit(PendingSubmission),
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Enter => match app.submit() {
            Some(pending) => InputAction::Submit(pending),
            None => InputAction::None,
        },
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.focus_next();
            InputAction::None
        }
        KeyCode::Backspace => {
            app.on_backspace();
            InputAction::None
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.on_char(ch);
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{
        HealthStatus, RequestPayload, SummarizationApi, SummarizeResponse, TransportError,
    };
    use crate::controller::SubmissionController;
    use crate::ui::submission::FormField;
    use async_trait::async_trait;
    use crossterm::event::KeyEventState;
    use std::sync::Arc;

    struct NoopApi;

    #[async_trait]
    impl SummarizationApi for NoopApi {
        async fn summarize(
            &self,
            _payload: &RequestPayload,
        ) -> Result<SummarizeResponse, TransportError> {
            Ok(SummarizeResponse::Failure { error: None })
        }

        async fn health(&self) -> Result<HealthStatus, TransportError> {
            Err(TransportError::Timeout { duration: 1 })
        }
    }

    fn make_app() -> App {
        App::new(SubmissionController::new(Arc::new(NoopApi)), "http://localhost:5000")
    }

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn press_key(code: KeyCode) -> KeyEvent {
        key(code, KeyModifiers::empty())
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Esc));
        assert!(app.should_quit());

        let mut app = make_app();
        handle_key(&mut app, key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn plain_chars_are_typed() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Char('h')));
        handle_key(&mut app, key(KeyCode::Char('Q'), KeyModifiers::SHIFT));
        assert_eq!(app.form().video_url, "hQ");
        assert!(!app.should_quit());
    }

    #[test]
    fn tab_moves_focus() {
        let mut app = make_app();
        handle_key(&mut app, press_key(KeyCode::Tab));
        assert_eq!(app.focus(), FormField::Prompt);
        handle_key(&mut app, press_key(KeyCode::BackTab));
        assert_eq!(app.focus(), FormField::VideoUrl);
    }

    #[test]
    fn enter_with_url_returns_request() {
        let mut app = make_app();
        for ch in "https://x".chars() {
            handle_key(&mut app, press_key(KeyCode::Char(ch)));
        }
        match handle_key(&mut app, press_key(KeyCode::Enter)) {
            InputAction::Submit(pending) => {
                assert_eq!(pending.payload().video_url, "https://x");
            }
            InputAction::None => panic!("expected a request"),
        }
        assert!(matches!(
            handle_key(&mut app, press_key(KeyCode::Enter)),
            InputAction::None
        ));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = make_app();
        let mut release = press_key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert_eq!(app.form().video_url, "");
    }
}
