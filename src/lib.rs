//! Client for a remote video summarization service.
//!
//! The core is [`controller::SubmissionController`], which validates form
//! input, drives the submission state machine and maps every collaborator
//! outcome to a terminal display state. The `ui` module wraps it in a
//! terminal form; `main.rs` exposes it on the command line.

pub mod api;
pub mod config;
pub mod controller;
pub mod logging;
pub mod ui;
