//! # iMATOMS TUI
//!
//! Terminal session shell for the iMATOMS maintenance management system.
//!
//! ## Features
//! - Login / logout session handling
//! - Flat navigation between the module screens (assets, work orders,
//!   preventive maintenance, admin, inventory, AI analytics, mobile apps,
//!   dashboard monitor)
//! - Thai/English labels with the language preference persisted across runs
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (Session shell state machine)

pub mod constants;
pub mod models;
pub mod storage;
pub mod i18n;
pub mod ui;
pub mod messages;
pub mod app;

// Re-export commonly used types
pub use models::{AppView, Language, Role, User};
pub use storage::Storage;
pub use messages::{UiEvent, RenderState, Screen};
pub use app::{AppState, AppActor, Session};
