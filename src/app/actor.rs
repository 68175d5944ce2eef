//! App actor - message loop applying UI events to the session shell

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderState, UiEvent};

/// App actor that owns the shell state and processes UI events in order
pub struct AppActor {
    state: AppState,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(state: AppState, render_tx: mpsc::UnboundedSender<RenderState>) -> Self {
        AppActor { state, render_tx }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self.render_tx.send(self.state.to_render_state());

        while let Some(event) = ui_rx.recv().await {
            if self.handle_ui_event(event) {
                tracing::info!("Quit requested");
                break;
            }
            let _ = self.render_tx.send(self.state.to_render_state());
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Login form
            UiEvent::LoginChar(c) => self.state.login_char(c),
            UiEvent::LoginBackspace => self.state.login_backspace(),
            UiEvent::LoginNextField => self.state.login_next_field(),
            UiEvent::LoginPrevField => self.state.login_prev_field(),
            UiEvent::LoginNextRole => self.state.login_next_role(),
            UiEvent::LoginPrevRole => self.state.login_prev_role(),
            UiEvent::SubmitLogin => self.state.submit_login(),

            // Dashboard
            UiEvent::MenuUp => self.state.menu_up(),
            UiEvent::MenuDown => self.state.menu_down(),
            UiEvent::OpenSelected => self.state.open_selected(),
            UiEvent::Navigate(view) => self.state.navigate(view),
            UiEvent::Logout => self.state.logout(),

            // Module screens
            UiEvent::Back => self.state.back(),

            // Shared context
            UiEvent::SetLanguage(lang) => self.state.toggle_language(lang),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Screen;
    use crate::models::{AppView, Language};
    use crate::storage::Storage;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_events_apply_in_order() {
        let dir = tempdir().unwrap();
        let state = AppState::with_storage(Storage::in_dir(dir.path()));
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let handle = tokio::spawn(AppActor::new(state, render_tx).run(ui_rx));

        for c in "mali".chars() {
            ui_tx.send(UiEvent::LoginChar(c)).unwrap();
        }
        ui_tx.send(UiEvent::LoginNextField).unwrap();
        ui_tx.send(UiEvent::LoginChar('x')).unwrap();
        ui_tx.send(UiEvent::SubmitLogin).unwrap();
        ui_tx.send(UiEvent::Navigate(AppView::Asset)).unwrap();
        ui_tx.send(UiEvent::SetLanguage(Language::En)).unwrap();
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();

        let mut last = None;
        while let Ok(state) = render_rx.try_recv() {
            last = Some(state);
        }
        let last = last.unwrap();
        assert_eq!(last.screen, Screen::AssetManager);
        assert_eq!(last.lang, Language::En);
    }

    #[tokio::test]
    async fn test_initial_render_is_login() {
        let dir = tempdir().unwrap();
        let state = AppState::with_storage(Storage::in_dir(dir.path()));
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        drop(ui_tx);
        AppActor::new(state, render_tx).run(ui_rx).await;

        let first = render_rx.recv().await.unwrap();
        assert!(first.screen.is_login());
        assert_eq!(first.lang, Language::Th);
    }
}
