use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};
use super::rgb;

pub(super) fn draw_setup(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let area = centered_rect(80, 90, size);
    let block = Block::default().title("fritanga royale").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    let inner_all = inner(area);

    // Left-aligned to keep the letter spacing intact
    let logo = r#"
 ___ ___ ___ _____ _   _  _  ___   _
| __| _ \_ _|_   _/_\ | \| |/ __| /_\
| _||   /| |  | |/ _ \| .` | (_ |/ _ \
|_| |_|_\___| |_/_/ \_\_|\_|\___/_/ \_\
          battle royale"#;

    let logo_lines: Vec<Line> = logo
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Yellow))))
        .collect();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(logo_lines.len() as u16 + 1),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(3),
        ])
        .split(inner_all);

    let logo_para = Paragraph::new(logo_lines).alignment(Alignment::Center);
    f.render_widget(logo_para, rows[0]);

    draw_form(f, app, rows[1]);
    draw_roster(f, app, rows[2]);

    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut footer = vec![Line::from(Span::styled(
        "[Enter] Add (empty name: Start)  [←/→] Character  [↑/↓] Select  [Del] Remove  [Esc] Quit",
        dim,
    ))];
    if let Some(msg) = app.notice() {
        footer.push(Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Red))));
    }
    let footer_para = Paragraph::new(footer).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(footer_para, rows[3]);
}

fn draw_form(f: &mut Frame, app: &AppState, area: Rect) {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("Name: ", bold),
        Span::raw(app.name_input().to_string()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]));
    let character = match app.selected_character() {
        Some(c) => Span::styled(
            format!("< {} {} >", c.emoji(), c.name()),
            Style::default().fg(rgb(c.color())).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("all characters taken", Style::default().add_modifier(Modifier::DIM)),
    };
    lines.push(Line::from(vec![Span::styled("Character: ", bold), character]));
    let available: Vec<String> =
        app.game.available_characters().iter().map(|c| c.emoji().to_string()).collect();
    lines.push(Line::from(format!("Available: {}", available.join(" "))));
    let block = Block::default().title("New player").borders(Borders::ALL);
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}

fn draw_roster(f: &mut Frame, app: &AppState, area: Rect) {
    let state = app.state();
    let max = app.game.config().max_players;
    let title = format!("Players ({}/{max})", state.players().len());
    let block = Block::default().title(title).borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    if state.players().is_empty() {
        lines.push(Line::from(Span::styled(
            "No players yet. Add at least two to start.",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    for (i, p) in state.players().iter().enumerate() {
        let c = p.character();
        let mut style = Style::default().fg(rgb(c.color()));
        if i == app.roster_index {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(
            format!("{}. {} {}  ({})", i + 1, c.emoji(), p.name(), c.name()),
            style,
        )));
    }
    let para = Paragraph::new(lines).block(block);
    f.render_widget(para, area);
}
