//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::messages::RenderState;
use crate::models::{AppView, Language};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Login form
    LoginChar(char),
    LoginBackspace,
    LoginNextField,
    LoginPrevField,
    LoginNextRole,
    LoginPrevRole,
    SubmitLogin,

    // Dashboard
    MenuUp,
    MenuDown,
    OpenSelected,
    Navigate(AppView),
    Logout,

    // Module screens
    Back,

    // Shared context
    SetLanguage(Language),

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Focused login form field
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Role,
}

impl LoginField {
    pub fn next(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Role,
            LoginField::Role => LoginField::Username,
        }
    }

    pub fn prev(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Role,
            LoginField::Password => LoginField::Username,
            LoginField::Role => LoginField::Password,
        }
    }
}

/// Convert a key event to a UiEvent based on the screen being shown
pub fn key_to_ui_event(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            KeyCode::Char('l') => return Some(UiEvent::SetLanguage(state.lang.other())),
            _ => {}
        }
    }

    if state.show_help {
        return Some(UiEvent::CloseHelp);
    }

    if state.screen.is_login() {
        return handle_login_keys(key, state);
    }

    match key.code {
        KeyCode::Char('q') => return Some(UiEvent::Quit),
        KeyCode::Char('?') => return Some(UiEvent::ToggleHelp),
        _ => {}
    }

    if state.screen.view() == Some(AppView::Main) {
        handle_dashboard_keys(key)
    } else {
        handle_module_keys(key)
    }
}

fn handle_login_keys(key: KeyEvent, state: &RenderState) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc => Some(UiEvent::Quit),
        KeyCode::Enter => Some(UiEvent::SubmitLogin),
        KeyCode::Tab | KeyCode::Down => Some(UiEvent::LoginNextField),
        KeyCode::BackTab | KeyCode::Up => Some(UiEvent::LoginPrevField),
        KeyCode::Backspace => Some(UiEvent::LoginBackspace),
        KeyCode::Right | KeyCode::Char(' ') if state.login_field == LoginField::Role => {
            Some(UiEvent::LoginNextRole)
        }
        KeyCode::Left if state.login_field == LoginField::Role => Some(UiEvent::LoginPrevRole),
        KeyCode::Char(c) if state.login_field != LoginField::Role => Some(UiEvent::LoginChar(c)),
        _ => None,
    }
}

fn handle_dashboard_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::MenuUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::MenuDown),
        KeyCode::Enter => Some(UiEvent::OpenSelected),
        KeyCode::Char('o') => Some(UiEvent::Logout),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|n| AppView::from_shortcut(n as usize))
            .map(UiEvent::Navigate),
        _ => None,
    }
}

fn handle_module_keys(key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => Some(UiEvent::Back),
        _ => None,
    }
}
