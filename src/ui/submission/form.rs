//! Editable form fields.

use crate::api::RequestPayload;
use crate::config::DEFAULT_PROMPT;

/// Identifies one input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    VideoUrl,
    Prompt,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::VideoUrl => "Video URL",
            FormField::Prompt => "Custom Prompt (Optional)",
        }
    }

    /// The other field; the form only has two.
    pub fn next(self) -> Self {
        match self {
            FormField::VideoUrl => FormField::Prompt,
            FormField::Prompt => FormField::VideoUrl,
        }
    }
}

/// Current contents of the form, edited live by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    pub video_url: String,
    pub prompt: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self::with_prompt(DEFAULT_PROMPT)
    }
}

impl FormInput {
    /// Empty URL with the given prompt prefilled.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            video_url: String::new(),
            prompt: prompt.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::VideoUrl => &self.video_url,
            FormField::Prompt => &self.prompt,
        }
    }

    /// Replace one field. No validation happens here.
    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::VideoUrl => self.video_url = value,
            FormField::Prompt => self.prompt = value,
        }
    }

    /// Whether the URL has any non-whitespace content.
    pub fn has_video_url(&self) -> bool {
        !self.video_url.trim().is_empty()
    }

    /// Wire payload; the URL is sent exactly as typed.
    pub fn payload(&self) -> RequestPayload {
        RequestPayload {
            video_url: self.video_url.clone(),
            prompt: self.prompt.clone(),
        }
    }
}
