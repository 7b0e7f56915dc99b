use crate::api::SummarizationApi;
use crate::config::Config;
use crate::controller::{PendingSubmission, SubmissionController};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::submission::FormInput;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

/// Run the interactive form until the user quits.
///
/// Requests are spawned on `runtime`; their completions come back through
/// the event channel so the controller is only touched from this thread.
pub fn run(config: &Config, api: Arc<dyn SummarizationApi>, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let form = FormInput::with_prompt(config.form.default_prompt.clone());
    let controller = SubmissionController::with_form(api, form);
    let mut app = App::new(controller, config.service.base_url.clone());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let event = match events.next(tick_rate) {
            Ok(event) => event,
            Err(RecvTimeoutError::Timeout) => continue,
            Err(RecvTimeoutError::Disconnected) => AppEvent::InputClosed,
        };

        if let Some(pending) = apply_event(&mut app, event) {
            let tx = events.sender();
            runtime.spawn(async move {
                let done = pending.run().await;
                let _ = tx.send(AppEvent::SubmissionSettled(done));
            });
        }
    }

    drop(guard);
    Ok(())
}

/// Feed one event to the app. Returns a request to spawn, if any.
fn apply_event(app: &mut App, event: AppEvent) -> Option<PendingSubmission> {
    match event {
        AppEvent::Key(key) => match handle_key(app, key) {
            InputAction::Submit(pending) => return Some(pending),
            InputAction::None => {}
        },
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize => {}
        AppEvent::SubmissionSettled(done) => app.on_submission_settled(done),
        AppEvent::InputClosed => {
            // Without input the user has no way to quit
            tracing::warn!("Terminal input closed, leaving the form");
            app.request_quit();
        }
    }
    None
}
