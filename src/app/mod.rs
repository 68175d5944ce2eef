//! App layer - session shell state and event processing
//!
//! The App actor receives UI events, applies them to the session shell
//! state, and emits render state.

pub mod state;
pub mod actor;
pub mod commands;

pub use state::{AppState, LoginForm, Session};
pub use actor::AppActor;
