//! Command handlers - session, navigation and screen-local operations

use crate::app::AppState;
use crate::constants::LANG_STORAGE_KEY;
use crate::i18n::Text;
use crate::messages::ui_events::LoginField;
use crate::models::{AppView, Language, User};

impl AppState {
    // ========================
    // Session
    // ========================

    /// Authenticate `user`. No validation happens here; the login screen
    /// only calls this with a complete principal.
    pub fn login(&mut self, user: User) {
        tracing::info!(username = %user.username, role = user.role.as_str(), "Login");
        self.session.start(user);
        self.view = AppView::Main;
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.session.principal() {
            tracing::info!(username = %user.username, "Logout");
        }
        self.session.clear();
        self.view = AppView::Main;
        self.login = Default::default();
        self.menu_index = 0;
        self.show_help = false;
    }

    // ========================
    // Navigation
    // ========================

    /// Any view is reachable from any other.
    pub fn navigate(&mut self, view: AppView) {
        tracing::debug!(from = self.view.as_str(), to = view.as_str(), "Navigate");
        self.view = view;
    }

    pub fn navigate_tag(&mut self, tag: &str) {
        self.navigate(AppView::from_tag(tag));
    }

    pub fn back(&mut self) {
        self.navigate(AppView::Main);
    }

    // ========================
    // Language
    // ========================

    pub fn toggle_language(&mut self, lang: Language) {
        tracing::debug!(lang = lang.as_str(), "Language changed");
        self.lang = lang;
        if let Err(e) = self.storage.set(LANG_STORAGE_KEY, lang.as_str()) {
            tracing::warn!("Failed to persist language preference: {e:#}");
        }
    }

    // ========================
    // Login form
    // ========================

    pub fn login_char(&mut self, c: char) {
        match self.login.field {
            LoginField::Username => self.login.username.push(c),
            LoginField::Password => self.login.password.push(c),
            LoginField::Role => return,
        }
        self.login.error = None;
    }

    pub fn login_backspace(&mut self) {
        match self.login.field {
            LoginField::Username => {
                self.login.username.pop();
            }
            LoginField::Password => {
                self.login.password.pop();
            }
            LoginField::Role => {}
        }
    }

    pub fn login_next_field(&mut self) {
        self.login.field = self.login.field.next();
    }

    pub fn login_prev_field(&mut self) {
        self.login.field = self.login.field.prev();
    }

    pub fn login_next_role(&mut self) {
        self.login.role = self.login.role.next();
    }

    pub fn login_prev_role(&mut self) {
        self.login.role = self.login.role.prev();
    }

    pub fn submit_login(&mut self) {
        let username = self.login.username.trim();
        if username.is_empty() || self.login.password.is_empty() {
            self.login.error = Some(Text::LoginMissingFields);
            return;
        }

        let user = User::new(username, username, self.login.role);
        self.login.password.clear();
        self.login.error = None;
        self.login(user);
    }

    // ========================
    // Dashboard menu
    // ========================

    pub fn menu_up(&mut self) {
        let len = AppView::MODULES.len();
        self.menu_index = self.menu_index.checked_sub(1).unwrap_or(len - 1);
    }

    pub fn menu_down(&mut self) {
        self.menu_index = (self.menu_index + 1) % AppView::MODULES.len();
    }

    pub fn open_selected(&mut self) {
        if let Some(view) = AppView::MODULES.get(self.menu_index).copied() {
            self.navigate(view);
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::render::Screen;
    use crate::models::Role;
    use crate::storage::Storage;
    use tempfile::{tempdir, TempDir};

    fn fresh_state() -> (AppState, TempDir) {
        let dir = tempdir().unwrap();
        let state = AppState::with_storage(Storage::in_dir(dir.path()));
        (state, dir)
    }

    fn user(name: &str) -> User {
        User::new(name, name, Role::Engineer)
    }

    #[test]
    fn test_render_follows_latest_navigation() {
        let (mut state, _dir) = fresh_state();
        state.login(user("somchai"));

        state.navigate(AppView::Asset);
        assert_eq!(state.render(), Screen::AssetManager);
        state.navigate(AppView::Inventory);
        assert!(matches!(state.render(), Screen::InventoryManager { .. }));
        state.navigate(AppView::DashboardMonitor);
        assert_eq!(state.render(), Screen::DashboardMonitor);
        state.navigate(AppView::Main);
        assert!(matches!(state.render(), Screen::MainDashboard { .. }));
    }

    #[test]
    fn test_unknown_tag_renders_dashboard() {
        let (mut state, _dir) = fresh_state();
        state.login(user("somchai"));
        state.navigate(AppView::Ppm);

        state.navigate_tag("REPORTS");
        assert_eq!(state.view, AppView::Main);
        assert!(matches!(state.render(), Screen::MainDashboard { .. }));
    }

    #[test]
    fn test_navigation_is_unrestricted() {
        let (mut state, _dir) = fresh_state();
        state.login(user("somchai"));

        state.navigate(AppView::Admin);
        state.navigate(AppView::MobileApps);
        assert_eq!(state.view, AppView::MobileApps);
    }

    #[test]
    fn test_identity_screens_receive_principal() {
        let (mut state, _dir) = fresh_state();
        let somchai = user("somchai");
        state.login(somchai.clone());

        for view in [
            AppView::Main,
            AppView::Ppm,
            AppView::Inventory,
            AppView::AiAnalytics,
            AppView::MobileApps,
        ] {
            state.navigate(view);
            assert_eq!(state.render().user(), Some(&somchai));
        }
        for view in [
            AppView::Asset,
            AppView::WorkOrder,
            AppView::Admin,
            AppView::DashboardMonitor,
        ] {
            state.navigate(view);
            assert_eq!(state.render().user(), None);
        }
    }

    #[test]
    fn test_back_returns_to_main() {
        let (mut state, _dir) = fresh_state();
        state.login(user("somchai"));

        for view in AppView::MODULES {
            state.navigate(view);
            state.back();
            assert_eq!(state.view, AppView::Main);
        }
    }

    #[test]
    fn test_logout_resets_from_any_view() {
        for view in AppView::MODULES {
            let (mut state, _dir) = fresh_state();
            state.login(user("somchai"));
            state.navigate(view);

            state.logout();
            assert_eq!(state.view, AppView::Main);
            assert!(!state.session.is_authenticated());
            assert!(state.session.principal().is_none());
            assert_eq!(state.render(), Screen::Login);
        }
    }

    #[test]
    fn test_unauthenticated_always_renders_login() {
        let (mut state, _dir) = fresh_state();
        assert_eq!(state.render(), Screen::Login);

        for view in AppView::MODULES {
            state.navigate(view);
            assert_eq!(state.render(), Screen::Login);
        }
    }

    #[test]
    fn test_login_lands_on_main() {
        let (mut state, _dir) = fresh_state();
        state.navigate(AppView::Admin);
        state.login(user("somchai"));
        assert_eq!(state.view, AppView::Main);
    }

    #[test]
    fn test_no_leakage_between_sessions() {
        let (mut state, _dir) = fresh_state();
        state.login(user("user_a"));
        state.navigate(AppView::Asset);
        state.logout();
        state.login(user("user_b"));

        match state.render() {
            Screen::MainDashboard { user, .. } => assert_eq!(user.username, "user_b"),
            other => panic!("expected main dashboard, got {:?}", other),
        }
    }

    #[test]
    fn test_default_language_is_thai() {
        let (state, _dir) = fresh_state();
        assert_eq!(state.lang, Language::Th);
    }

    #[test]
    fn test_toggle_language_persists() {
        let (mut state, dir) = fresh_state();
        state.toggle_language(Language::En);

        assert_eq!(state.lang, Language::En);
        assert_eq!(state.storage().get(LANG_STORAGE_KEY), Some("EN"));
        assert_eq!(state.to_render_state().lang, Language::En);

        let restarted = AppState::with_storage(Storage::in_dir(dir.path()));
        assert_eq!(restarted.lang, Language::En);
    }

    #[test]
    fn test_toggle_language_idempotent() {
        let (mut state, dir) = fresh_state();
        state.toggle_language(Language::En);
        let first = std::fs::read_to_string(
            dir.path().join(crate::constants::PREFERENCES_FILE),
        )
        .unwrap();

        state.toggle_language(Language::En);
        let second = std::fs::read_to_string(
            dir.path().join(crate::constants::PREFERENCES_FILE),
        )
        .unwrap();

        assert_eq!(state.lang, Language::En);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unparseable_stored_language_falls_back() {
        let dir = tempdir().unwrap();
        Storage::in_dir(dir.path())
            .set(LANG_STORAGE_KEY, "klingon")
            .unwrap();

        let state = AppState::with_storage(Storage::in_dir(dir.path()));
        assert_eq!(state.lang, Language::Th);
    }

    #[test]
    fn test_language_change_survives_storage_failure() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        std::fs::write(&blocker, "").unwrap();

        let mut state = AppState::with_storage(Storage::in_dir(&blocker));
        state.toggle_language(Language::En);
        assert_eq!(state.lang, Language::En);
    }

    #[test]
    fn test_submit_login_requires_credentials() {
        let (mut state, _dir) = fresh_state();
        state.login_char('a');
        state.submit_login();

        assert!(!state.session.is_authenticated());
        assert_eq!(state.login.error, Some(Text::LoginMissingFields));
    }

    #[test]
    fn test_submit_login_builds_principal() {
        let (mut state, _dir) = fresh_state();
        for c in "niran".chars() {
            state.login_char(c);
        }
        state.login_next_field();
        for c in "secret".chars() {
            state.login_char(c);
        }
        state.login_next_field();
        state.login_next_role();
        state.submit_login();

        let principal = state.session.principal().unwrap();
        assert_eq!(principal.username, "niran");
        assert_eq!(principal.role, Role::Admin);
        assert!(state.login.password.is_empty());
    }

    #[test]
    fn test_menu_wraps_and_opens() {
        let (mut state, _dir) = fresh_state();
        state.login(user("somchai"));

        state.menu_up();
        assert_eq!(state.menu_index, AppView::MODULES.len() - 1);
        state.menu_down();
        assert_eq!(state.menu_index, 0);
        state.menu_down();
        state.open_selected();
        assert_eq!(state.view, AppView::WorkOrder);
    }
}
