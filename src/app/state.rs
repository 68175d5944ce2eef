//! App state - pure data structure, storage is the only I/O it touches

use chrono::{DateTime, Local};

use crate::constants::{DEFAULT_LANGUAGE, LANG_STORAGE_KEY};
use crate::i18n::Text;
use crate::messages::render::Screen;
use crate::messages::ui_events::LoginField;
use crate::messages::RenderState;
use crate::models::{AppView, Language, Role, User};
use crate::storage::Storage;

/// Authentication status and the current principal.
///
/// The principal is present exactly when the session is authenticated.
#[derive(Clone, Debug, Default)]
pub struct Session {
    principal: Option<User>,
    signed_in_at: Option<DateTime<Local>>,
}

impl Session {
    pub fn start(&mut self, user: User) {
        self.principal = Some(user);
        self.signed_in_at = Some(Local::now());
    }

    pub fn clear(&mut self) {
        self.principal = None;
        self.signed_in_at = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.principal.is_some()
    }

    pub fn principal(&self) -> Option<&User> {
        self.principal.as_ref()
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Local>> {
        self.signed_in_at
    }
}

/// Login form input
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub field: LoginField,
    pub error: Option<Text>,
}

/// Main application state
pub struct AppState {
    pub session: Session,
    pub view: AppView,
    pub lang: Language,

    // Screen-local state
    pub login: LoginForm,
    pub menu_index: usize,
    pub show_help: bool,

    pub(crate) storage: Storage,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_storage(Storage::new())
    }

    /// Build the initial state, reading the language preference from `storage`
    pub fn with_storage(storage: Storage) -> Self {
        let lang = storage
            .get(LANG_STORAGE_KEY)
            .and_then(Language::parse)
            .unwrap_or(DEFAULT_LANGUAGE);

        AppState {
            session: Session::default(),
            view: AppView::Main,
            lang,
            login: LoginForm::default(),
            menu_index: 0,
            show_help: false,
            storage,
        }
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Select the visible screen from session, view and language
    pub fn render(&self) -> Screen {
        let Some(user) = self.session.principal().cloned() else {
            return Screen::Login;
        };

        match self.view {
            AppView::Asset => Screen::AssetManager,
            AppView::WorkOrder => Screen::WorkOrderManager,
            AppView::Ppm => Screen::PpmManager { user },
            AppView::Admin => Screen::AdminManager,
            AppView::Inventory => Screen::InventoryManager { user },
            AppView::AiAnalytics => Screen::AiAnalytics { user },
            AppView::MobileApps => Screen::MobileAppHub { user },
            AppView::DashboardMonitor => Screen::DashboardMonitor,
            AppView::Main => Screen::MainDashboard {
                user,
                signed_in_at: self.session.signed_in_at(),
            },
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            screen: self.render(),
            lang: self.lang,
            login_username: self.login.username.clone(),
            login_password_len: self.login.password.chars().count(),
            login_role: self.login.role,
            login_field: self.login.field,
            login_error: self.login.error,
            menu_index: self.menu_index,
            show_help: self.show_help,
        }
    }
}
