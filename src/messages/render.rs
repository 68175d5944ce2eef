//! Render state - data structure sent from App layer to UI for rendering

use chrono::{DateTime, Local};

use crate::i18n::Text;
use crate::messages::ui_events::LoginField;
use crate::models::{AppView, Language, Role, User};

/// The single visible screen, with the context each one receives
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    MainDashboard {
        user: User,
        signed_in_at: Option<DateTime<Local>>,
    },
    AssetManager,
    WorkOrderManager,
    PpmManager { user: User },
    AdminManager,
    InventoryManager { user: User },
    AiAnalytics { user: User },
    MobileAppHub { user: User },
    DashboardMonitor,
}

impl Screen {
    pub fn is_login(&self) -> bool {
        matches!(self, Screen::Login)
    }

    /// View tag this screen is rendered for, `None` for the login screen
    pub fn view(&self) -> Option<AppView> {
        let view = match self {
            Screen::Login => return None,
            Screen::MainDashboard { .. } => AppView::Main,
            Screen::AssetManager => AppView::Asset,
            Screen::WorkOrderManager => AppView::WorkOrder,
            Screen::PpmManager { .. } => AppView::Ppm,
            Screen::AdminManager => AppView::Admin,
            Screen::InventoryManager { .. } => AppView::Inventory,
            Screen::AiAnalytics { .. } => AppView::AiAnalytics,
            Screen::MobileAppHub { .. } => AppView::MobileApps,
            Screen::DashboardMonitor => AppView::DashboardMonitor,
        };
        Some(view)
    }

    /// Principal handed to the screen, if it takes one
    pub fn user(&self) -> Option<&User> {
        match self {
            Screen::MainDashboard { user, .. }
            | Screen::PpmManager { user }
            | Screen::InventoryManager { user }
            | Screen::AiAnalytics { user }
            | Screen::MobileAppHub { user } => Some(user),
            _ => None,
        }
    }
}

/// Complete state needed by the UI to render
#[derive(Debug, Clone)]
pub struct RenderState {
    pub screen: Screen,
    pub lang: Language,

    // Login form
    pub login_username: String,
    pub login_password_len: usize,
    pub login_role: Role,
    pub login_field: LoginField,
    pub login_error: Option<Text>,

    // Dashboard
    pub menu_index: usize,

    // Popups
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        use crate::constants::DEFAULT_LANGUAGE;
        RenderState {
            screen: Screen::Login,
            lang: DEFAULT_LANGUAGE,
            login_username: String::new(),
            login_password_len: 0,
            login_role: Role::default(),
            login_field: LoginField::Username,
            login_error: None,
            menu_index: 0,
            show_help: false,
        }
    }
}
