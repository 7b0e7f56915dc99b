//! Unidirectional state primitives shared by the form and the controller.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! The reducer is the single place where a state value is replaced, which
//! keeps submission transitions testable without a network or a terminal.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
