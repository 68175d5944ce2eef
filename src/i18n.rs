//! Thai/English labels for the shell and its screens

use crate::models::{AppView, Language, Role};

/// Label keys
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Text {
    AppSubtitle,
    LoginTitle,
    Username,
    Password,
    Role,
    LoginHint,
    LoginMissingFields,
    MainTitle,
    Welcome,
    SignedInAt,
    Modules,
    DashboardHint,
    BackHint,
    Help,
    HelpLanguage,
    HelpQuit,
    HelpBack,
    HelpNavigate,
    HelpLogout,
    HelpClose,
}

pub fn text(lang: Language, key: Text) -> &'static str {
    match lang {
        Language::Th => match key {
            Text::AppSubtitle => "ระบบบริหารงานซ่อมบำรุง",
            Text::LoginTitle => "เข้าสู่ระบบ",
            Text::Username => "ชื่อผู้ใช้",
            Text::Password => "รหัสผ่าน",
            Text::Role => "บทบาท",
            Text::LoginHint => "Tab: เลื่อนช่อง  Enter: เข้าสู่ระบบ  Ctrl+L: ภาษา  Esc: ออก",
            Text::LoginMissingFields => "กรุณากรอกชื่อผู้ใช้และรหัสผ่าน",
            Text::MainTitle => "แดชบอร์ดหลัก",
            Text::Welcome => "ยินดีต้อนรับ",
            Text::SignedInAt => "เข้าสู่ระบบเมื่อ",
            Text::Modules => "โมดูล",
            Text::DashboardHint => "↑↓/1-8: เลือก  Enter: เปิด  o: ออกจากระบบ  ?: ช่วยเหลือ",
            Text::BackHint => "Esc/b: กลับหน้าหลัก  ?: ช่วยเหลือ  q: ออก",
            Text::Help => "ช่วยเหลือ",
            Text::HelpLanguage => "Ctrl+L  สลับภาษา ไทย/อังกฤษ",
            Text::HelpQuit => "q, Ctrl+C  ออกจากโปรแกรม",
            Text::HelpBack => "Esc, b  กลับหน้าหลัก",
            Text::HelpNavigate => "1-8, Enter  เปิดโมดูล",
            Text::HelpLogout => "o  ออกจากระบบ",
            Text::HelpClose => "กดปุ่มใดก็ได้เพื่อปิด",
        },
        Language::En => match key {
            Text::AppSubtitle => "Maintenance Management System",
            Text::LoginTitle => "Sign in",
            Text::Username => "Username",
            Text::Password => "Password",
            Text::Role => "Role",
            Text::LoginHint => "Tab: next field  Enter: sign in  Ctrl+L: language  Esc: quit",
            Text::LoginMissingFields => "Please enter username and password",
            Text::MainTitle => "Main Dashboard",
            Text::Welcome => "Welcome",
            Text::SignedInAt => "Signed in at",
            Text::Modules => "Modules",
            Text::DashboardHint => "↑↓/1-8: select  Enter: open  o: logout  ?: help",
            Text::BackHint => "Esc/b: back to main  ?: help  q: quit",
            Text::Help => "Help",
            Text::HelpLanguage => "Ctrl+L  toggle Thai/English",
            Text::HelpQuit => "q, Ctrl+C  quit",
            Text::HelpBack => "Esc, b  back to main dashboard",
            Text::HelpNavigate => "1-8, Enter  open module",
            Text::HelpLogout => "o  logout",
            Text::HelpClose => "Press any key to close",
        },
    }
}

/// Localized title of a view
pub fn view_title(lang: Language, view: AppView) -> &'static str {
    match (lang, view) {
        (Language::Th, AppView::Main) => "หน้าหลัก",
        (Language::Th, AppView::Asset) => "ทะเบียนทรัพย์สิน",
        (Language::Th, AppView::WorkOrder) => "ใบสั่งงาน",
        (Language::Th, AppView::Ppm) => "บำรุงรักษาเชิงป้องกัน",
        (Language::Th, AppView::Admin) => "ผู้ดูแลระบบ",
        (Language::Th, AppView::Inventory) => "คลังอะไหล่",
        (Language::Th, AppView::AiAnalytics) => "วิเคราะห์ด้วย AI",
        (Language::Th, AppView::MobileApps) => "แอปพลิเคชันมือถือ",
        (Language::Th, AppView::DashboardMonitor) => "จอติดตามสถานะ",
        (Language::En, AppView::Main) => "Main",
        (Language::En, AppView::Asset) => "Asset Management",
        (Language::En, AppView::WorkOrder) => "Work Orders",
        (Language::En, AppView::Ppm) => "Preventive Maintenance",
        (Language::En, AppView::Admin) => "Administration",
        (Language::En, AppView::Inventory) => "Inventory",
        (Language::En, AppView::AiAnalytics) => "AI Analytics",
        (Language::En, AppView::MobileApps) => "Mobile Apps",
        (Language::En, AppView::DashboardMonitor) => "Dashboard Monitor",
    }
}

/// One-line description shown on a module screen
pub fn view_description(lang: Language, view: AppView) -> &'static str {
    match (lang, view) {
        (Language::Th, AppView::Main) => "เลือกโมดูลที่ต้องการใช้งาน",
        (Language::Th, AppView::Asset) => "ข้อมูลเครื่องจักรและอุปกรณ์",
        (Language::Th, AppView::WorkOrder) => "แจ้งซ่อมและติดตามใบสั่งงาน",
        (Language::Th, AppView::Ppm) => "แผนการบำรุงรักษาตามรอบเวลา",
        (Language::Th, AppView::Admin) => "ผู้ใช้ สิทธิ์ และการตั้งค่า",
        (Language::Th, AppView::Inventory) => "สต็อกอะไหล่และการเบิกจ่าย",
        (Language::Th, AppView::AiAnalytics) => "วิเคราะห์แนวโน้มความเสียหาย",
        (Language::Th, AppView::MobileApps) => "แอปสำหรับช่างภาคสนาม",
        (Language::Th, AppView::DashboardMonitor) => "สถานะงานแบบเรียลไทม์",
        (Language::En, AppView::Main) => "Choose a module to work with",
        (Language::En, AppView::Asset) => "Machines and equipment register",
        (Language::En, AppView::WorkOrder) => "Repair requests and work order tracking",
        (Language::En, AppView::Ppm) => "Scheduled preventive maintenance plans",
        (Language::En, AppView::Admin) => "Users, permissions and settings",
        (Language::En, AppView::Inventory) => "Spare parts stock and issuing",
        (Language::En, AppView::AiAnalytics) => "Failure trend analysis",
        (Language::En, AppView::MobileApps) => "Apps for field technicians",
        (Language::En, AppView::DashboardMonitor) => "Real-time job status",
    }
}

pub fn role_label(lang: Language, role: Role) -> &'static str {
    match (lang, role) {
        (Language::Th, Role::Admin) => "ผู้ดูแลระบบ",
        (Language::Th, Role::Engineer) => "วิศวกร",
        (Language::Th, Role::Technician) => "ช่างเทคนิค",
        (Language::En, Role::Admin) => "Administrator",
        (Language::En, Role::Engineer) => "Engineer",
        (Language::En, Role::Technician) => "Technician",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles_differ_by_language() {
        for view in AppView::MODULES {
            assert_ne!(view_title(Language::Th, view), view_title(Language::En, view));
        }
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(text(Language::En, Text::LoginTitle), "Sign in");
        assert_eq!(view_title(Language::En, AppView::Ppm), "Preventive Maintenance");
        assert_eq!(role_label(Language::En, Role::Engineer), "Engineer");
    }
}
