use crate::controller::{CompletedSubmission, PendingSubmission, SubmissionController, SubmitError};
use crate::ui::submission::{FormField, FormInput, SubmissionState};

pub struct App {
    should_quit: bool,
    focus: FormField,
    controller: SubmissionController,
    service_url: String,
}

impl App {
    pub fn new(controller: SubmissionController, service_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            focus: FormField::VideoUrl,
            controller,
            service_url: service_url.into(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn form(&self) -> &FormInput {
        self.controller.form()
    }

    pub fn submission(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn service_url(&self) -> &str {
        &self.service_url
    }

    /// The submit trigger is disabled while a request is pending.
    pub fn can_submit(&self) -> bool {
        !self.controller.state().is_submitting()
    }

    pub fn on_tick(&mut self) {
        self.controller.tick();
    }

    pub fn on_char(&mut self, ch: char) {
        let mut value = self.form().field(self.focus).to_string();
        value.push(ch);
        self.controller.update_field(self.focus, value);
    }

    pub fn on_backspace(&mut self) {
        let mut value = self.form().field(self.focus).to_string();
        if value.pop().is_some() {
            self.controller.update_field(self.focus, value);
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        // URL input is single-line
        let text = match self.focus {
            FormField::VideoUrl => text.replace(['\r', '\n'], ""),
            FormField::Prompt => text.to_string(),
        };
        let mut value = self.form().field(self.focus).to_string();
        value.push_str(&text);
        self.controller.update_field(self.focus, value);
    }

    /// Press the submit trigger.
    ///
    /// Returns the request to run when the form is valid. Validation
    /// failures are already reflected in [`App::submission`].
    pub fn submit(&mut self) -> Option<PendingSubmission> {
        if !self.can_submit() {
            return None;
        }

        match self.controller.begin() {
            Ok(pending) => Some(pending),
            Err(SubmitError::Validation { .. }) => {
                self.focus = FormField::VideoUrl;
                None
            }
            Err(SubmitError::InFlight) => None,
        }
    }

    pub fn on_submission_settled(&mut self, done: CompletedSubmission) {
        self.controller.complete(done);
    }
}
