//! UI layout and rendering logic for the TUI.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use gobi::{highlight, interpreter::php, TokenCategory};

use super::app::{App, Discovery};
use crate::utils::unicode::display_column;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

fn category_style(category: TokenCategory) -> Style {
    match category {
        TokenCategory::Keyword => Style::default().fg(Color::Magenta),
        TokenCategory::Constant => Style::default().fg(Color::LightMagenta),
        TokenCategory::StringLiteral => Style::default().fg(Color::Green),
        TokenCategory::Comment => Style::default().fg(Color::DarkGray),
        TokenCategory::Number => Style::default().fg(Color::Yellow),
        TokenCategory::Variable => Style::default().fg(Color::Cyan),
        TokenCategory::PlainText => Style::default(),
    }
}

/// Split highlighted source into styled display lines.
pub fn highlighted_lines(source: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for span in highlight(source) {
        let style = category_style(span.category);
        let mut parts = span.text(source).split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_string(), style));
            }
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    match app.discovery {
        Discovery::Pending => render_pending(frame, app),
        Discovery::Unavailable => render_not_installed(frame, app),
        Discovery::Ready => render_workspace(frame, app),
    }

    if app.show_help {
        render_help_overlay(frame);
    }
}

fn render_pending(frame: &mut Frame, app: &App) {
    let area = centered_rect(50, 20, frame.area());
    let text = format!("{} Looking for PHP...", SPINNER[app.tick % SPINNER.len()]);
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL).title("gobi"));
    frame.render_widget(paragraph, area);
}

fn render_not_installed(frame: &mut Frame, app: &App) {
    let area = centered_rect(80, 80, frame.area());
    frame.render_widget(Clear, area);

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            "PHP is not installed",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("To use gobi, you need PHP installed on your system."),
        Line::from(""),
        Line::from(Span::styled("Install with Homebrew:", bold)),
        Line::from(Span::styled(
            format!("  {}", php::INSTALL_COMMAND),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(Span::styled("Or download from:", bold)),
        Line::from(Span::styled(
            format!("  {}", php::DOWNLOAD_URL),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        Line::from(Span::styled("Searched locations:", bold)),
    ];
    lines.extend(
        app.searched
            .iter()
            .map(|p| Line::from(format!("  {}", p.display()))),
    );
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press q to quit",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().borders(Borders::ALL).title("gobi"))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_workspace(frame: &mut Frame, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Header
            Constraint::Min(5),         // Editor
            Constraint::Percentage(35), // Result
            Constraint::Length(1),      // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, layout[0]);
    render_editor(frame, app, layout[1]);
    render_result(frame, app, layout[2]);
    render_status_bar(frame, app, layout[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let version = app.version().unwrap_or("");
    let header = Paragraph::new(format!(" > {}", version)).style(Style::default().fg(Color::Gray));
    frame.render_widget(header, area);
}

fn render_editor(frame: &mut Frame, app: &App, area: Rect) {
    let editor = &app.editor;
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = if inner_height == 0 {
        0
    } else {
        editor.row.saturating_sub(inner_height - 1)
    };

    let paragraph = Paragraph::new(Text::from(highlighted_lines(&editor.text())))
        .block(Block::default().borders(Borders::ALL).title("PHP Code"))
        .scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);

    if !app.show_help {
        let x = area.x + 1 + display_column(editor.current_line(), editor.col) as u16;
        let y = area.y + 1 + (editor.row - scroll) as u16;
        let max_x = area.x + area.width.saturating_sub(2);
        frame.set_cursor_position((x.min(max_x), y));
    }
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.result {
        _ if app.is_executing => (
            format!("{} Running...", SPINNER[app.tick % SPINNER.len()]),
            Style::default().fg(Color::DarkGray),
        ),
        None => (
            "Result will display here...".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(r) if r.is_error => (r.output.clone(), Style::default().fg(Color::Red)),
        Some(r) => (r.output.clone(), Style::default()),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Result"))
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_paragraph = Paragraph::new(app.status_message.clone())
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_paragraph, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, popup_area);

    let help_lines = vec![
        Line::from("Editor Help"),
        Line::from(""),
        Line::from("  Ctrl+R / F5     - Execute the script"),
        Line::from("  Ctrl+L          - Clear the result"),
        Line::from("  PgUp / PgDn     - Scroll the result"),
        Line::from("  Arrows/Home/End - Move the cursor"),
        Line::from("  Tab             - Insert four spaces"),
        Line::from("  F1              - Toggle this help"),
        Line::from("  Ctrl+C          - Quit"),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .title_style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(help_paragraph, popup_area);
}

/// Helper function to create a centered rectangle
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
