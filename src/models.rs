use serde::{Deserialize, Serialize};

/// Application view tag
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppView {
    #[default]
    Main,
    Asset,
    WorkOrder,
    Ppm,
    Admin,
    Inventory,
    AiAnalytics,
    MobileApps,
    DashboardMonitor,
}

impl AppView {
    /// Module views in dashboard menu order
    pub const MODULES: [AppView; 8] = [
        AppView::Asset,
        AppView::WorkOrder,
        AppView::Ppm,
        AppView::Admin,
        AppView::Inventory,
        AppView::AiAnalytics,
        AppView::MobileApps,
        AppView::DashboardMonitor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppView::Main => "MAIN",
            AppView::Asset => "ASSET",
            AppView::WorkOrder => "WORK_ORDER",
            AppView::Ppm => "PPM",
            AppView::Admin => "ADMIN",
            AppView::Inventory => "INVENTORY",
            AppView::AiAnalytics => "AI_ANALYTICS",
            AppView::MobileApps => "MOBILE_APPS",
            AppView::DashboardMonitor => "DASHBOARD_MONITOR",
        }
    }

    /// Parse a view tag. Unknown tags map to `Main`, which is also what
    /// the shell renders for them.
    pub fn from_tag(tag: &str) -> AppView {
        match tag.trim() {
            "ASSET" => AppView::Asset,
            "WORK_ORDER" => AppView::WorkOrder,
            "PPM" => AppView::Ppm,
            "ADMIN" => AppView::Admin,
            "INVENTORY" => AppView::Inventory,
            "AI_ANALYTICS" => AppView::AiAnalytics,
            "MOBILE_APPS" => AppView::MobileApps,
            "DASHBOARD_MONITOR" => AppView::DashboardMonitor,
            _ => AppView::Main,
        }
    }

    /// Module selected by a dashboard shortcut (1-based)
    pub fn from_shortcut(n: usize) -> Option<AppView> {
        n.checked_sub(1).and_then(|i| Self::MODULES.get(i).copied())
    }
}

/// UI language
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "TH")]
    Th,
    #[serde(rename = "EN")]
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Th => "TH",
            Language::En => "EN",
        }
    }

    pub fn parse(code: &str) -> Option<Language> {
        match code.trim() {
            "TH" => Some(Language::Th),
            "EN" => Some(Language::En),
            _ => None,
        }
    }

    pub fn other(&self) -> Language {
        match self {
            Language::Th => Language::En,
            Language::En => Language::Th,
        }
    }
}

/// Role of an authenticated user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Engineer,
    #[default]
    Technician,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Engineer => "ENGINEER",
            Role::Technician => "TECHNICIAN",
        }
    }

    pub fn next(&self) -> Role {
        match self {
            Role::Admin => Role::Engineer,
            Role::Engineer => Role::Technician,
            Role::Technician => Role::Admin,
        }
    }

    pub fn prev(&self) -> Role {
        match self {
            Role::Admin => Role::Technician,
            Role::Engineer => Role::Admin,
            Role::Technician => Role::Engineer,
        }
    }
}

/// The authenticated principal
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub name: String,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, name: impl Into<String>, role: Role) -> Self {
        User {
            username: username.into(),
            name: name.into(),
            role,
        }
    }
}
