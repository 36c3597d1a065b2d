// UI module - Rendering the query bar, result rows and footer

use crate::app::{App, NoticeKind};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tdq::Icon;

fn icon_span(icon: Icon) -> Span<'static> {
    match icon {
        Icon::App => Span::styled("• ", Style::default().fg(Color::Cyan)),
        Icon::Todo => Span::styled("○ ", Style::default().fg(Color::Yellow)),
        Icon::Done => Span::styled("✓ ", Style::default().fg(Color::Green)),
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query bar
            Constraint::Min(0),    // Results
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Footer
        ])
        .split(size);

    render_query_bar(frame, app, main_layout[0]);
    render_results(frame, app, main_layout[1]);
    render_notice(frame, app, main_layout[2]);
    render_footer(frame, app, main_layout[3]);
}

fn render_query_bar(frame: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(app.input.as_str()).block(
        Block::default()
            .title("Query")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(input, area);

    // Cursor sits after the typed text, inside the border
    let cursor_x = area.x + 1 + app.input.chars().count() as u16;
    frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
}

fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .results
        .iter()
        .map(|result| {
            let title = Line::from(vec![
                icon_span(result.icon),
                Span::styled(result.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            ]);
            let subtitle = Line::from(Span::styled(
                format!("  {}", result.subtitle),
                Style::default().fg(Color::DarkGray),
            ));
            ListItem::new(vec![title, subtitle])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title("Results")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut list_state = ListState::default();
    if !app.results.is_empty() {
        list_state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.host.notice else {
        return;
    };

    let color = match notice.kind {
        NoticeKind::Info => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let line = Line::from(vec![
        Span::styled(
            format!(" {}: ", notice.title),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(notice.body.clone()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" Enter: activate | Up/Down: select | Ctrl+U: clear | Esc: quit | {} -h: help", app.action_keyword()),
        Style::default().fg(Color::Gray),
    )];

    if let Some(copied) = &app.host.register {
        spans.push(Span::styled(
            format!(" | copied: {}", copied),
            Style::default().fg(Color::Cyan),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
