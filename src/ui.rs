//! Screen drawing for the session shell

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION};
use crate::i18n::{role_label, text, view_description, view_title, Text};
use crate::messages::ui_events::LoginField;
use crate::messages::{RenderState, Screen};
use crate::models::{AppView, Language, Role, User};

/// Draw the whole frame for `state`
pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Screen
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);

    match &state.screen {
        Screen::Login => draw_login(f, state, chunks[1]),
        Screen::MainDashboard { user, signed_in_at } => {
            draw_dashboard(f, state, user, signed_in_at.as_ref(), chunks[1])
        }
        screen => {
            let view = screen.view().unwrap_or_default();
            draw_module(f, state.lang, view, screen.user(), chunks[1])
        }
    }

    draw_hint_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, state, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(text(state.lang, Text::AppSubtitle), Style::default().fg(Color::Gray)),
    ];

    if let Some(view) = state.screen.view() {
        spans.push(Span::raw("  › "));
        spans.push(Span::styled(
            view_title(state.lang, view),
            Style::default().fg(view_color(view)).bold(),
        ));
    }

    spans.push(Span::raw("  "));
    spans.push(language_badge(state.lang));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_hint_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hint = match &state.screen {
        Screen::Login => text(state.lang, Text::LoginHint),
        Screen::MainDashboard { .. } => text(state.lang, Text::DashboardHint),
        _ => text(state.lang, Text::BackHint),
    };

    let bar = Paragraph::new(format!(" {}  v{}", hint, APP_VERSION))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_login(f: &mut Frame, state: &RenderState, area: Rect) {
    let lang = state.lang;
    let form_area = centered_rect(50, 60, area);
    f.render_widget(Clear, form_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(format!(" {} ", text(lang, Text::LoginTitle)));
    let inner = block.inner(form_area);
    f.render_widget(block, form_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Length(3), // Role
            Constraint::Min(0),    // Error
        ])
        .split(inner);

    let masked = "•".repeat(state.login_password_len);
    let role = format!("◀ {} ▶", role_label(lang, state.login_role));

    f.render_widget(
        render_input(
            &state.login_username,
            text(lang, Text::Username),
            state.login_field == LoginField::Username,
        ),
        chunks[0],
    );
    f.render_widget(
        render_input(
            &masked,
            text(lang, Text::Password),
            state.login_field == LoginField::Password,
        ),
        chunks[1],
    );
    f.render_widget(
        render_input(&role, text(lang, Text::Role), state.login_field == LoginField::Role)
            .style(Style::default().fg(role_color(state.login_role))),
        chunks[2],
    );

    if let Some(error) = state.login_error {
        let error = Paragraph::new(text(lang, error))
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        f.render_widget(error, chunks[3]);
    }
}

fn draw_dashboard(
    f: &mut Frame,
    state: &RenderState,
    user: &User,
    signed_in_at: Option<&chrono::DateTime<chrono::Local>>,
    area: Rect,
) {
    let lang = state.lang;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0)])
        .split(area);

    let mut lines = vec![principal_line(lang, user)];
    if let Some(at) = signed_in_at {
        lines.push(Line::from(Span::styled(
            format!("{} {}", text(lang, Text::SignedInAt), at.format("%Y-%m-%d %H:%M")),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", text(lang, Text::MainTitle))),
    );
    f.render_widget(header, chunks[0]);

    let items: Vec<ListItem> = AppView::MODULES
        .iter()
        .enumerate()
        .map(|(i, view)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(view_title(lang, *view), Style::default().fg(view_color(*view))),
                Span::styled(
                    format!("  {}", view_description(lang, *view)),
                    Style::default().fg(Color::Gray),
                ),
            ]))
        })
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", text(lang, Text::Modules))),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).bold())
        .highlight_symbol("▶");

    let mut list_state = ListState::default().with_selected(Some(state.menu_index));
    f.render_stateful_widget(menu, chunks[1], &mut list_state);
}

fn draw_module(f: &mut Frame, lang: Language, view: AppView, user: Option<&User>, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            view_title(lang, view),
            Style::default().fg(view_color(view)).bold(),
        )),
        Line::from(view_description(lang, view)),
        Line::from(""),
    ];
    if let Some(user) = user {
        lines.push(principal_line(lang, user));
    }

    let body = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(view_color(view)))
            .title(format!(" {} ", view_title(lang, view))),
    );
    f.render_widget(body, area);
}

fn draw_help_popup(f: &mut Frame, state: &RenderState, area: Rect) {
    let lang = state.lang;
    let popup_area = centered_rect(60, 50, area);

    let lines: Vec<Line> = [
        Text::HelpNavigate,
        Text::HelpBack,
        Text::HelpLogout,
        Text::HelpLanguage,
        Text::HelpQuit,
    ]
    .iter()
    .map(|key| Line::from(format!(" {}", text(lang, *key))))
    .chain([
        Line::from(""),
        Line::from(Span::styled(
            format!(" {}", text(lang, Text::HelpClose)),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", text(lang, Text::Help)))
        .style(Style::default().bg(Color::Black));

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(lines).block(block), popup_area);
}

/// Renders a text input field
pub fn render_input<'a>(content: &'a str, title: &'a str, is_focused: bool) -> Paragraph<'a> {
    let style = if is_focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(title);

    Paragraph::new(content).block(block)
}

fn principal_line(lang: Language, user: &User) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{}, ", text(lang, Text::Welcome))),
        Span::styled(user.name.clone(), Style::default().bold()),
        Span::raw(" "),
        Span::styled(
            format!("[{}]", role_label(lang, user.role)),
            Style::default().fg(role_color(user.role)),
        ),
    ])
}

fn language_badge(lang: Language) -> Span<'static> {
    let (fg, bg) = match lang {
        Language::Th => (Color::White, Color::Blue),
        Language::En => (Color::Black, Color::Yellow),
    };
    Span::styled(format!(" {} ", lang.as_str()), Style::default().fg(fg).bg(bg))
}

/// Accent color of a view
pub fn view_color(view: AppView) -> Color {
    match view {
        AppView::Main => Color::White,
        AppView::Asset => Color::Cyan,
        AppView::WorkOrder => Color::Yellow,
        AppView::Ppm => Color::Green,
        AppView::Admin => Color::Red,
        AppView::Inventory => Color::Blue,
        AppView::AiAnalytics => Color::Magenta,
        AppView::MobileApps => Color::LightCyan,
        AppView::DashboardMonitor => Color::LightGreen,
    }
}

/// Role color
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Admin => Color::Red,
        Role::Engineer => Color::Cyan,
        Role::Technician => Color::Green,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
