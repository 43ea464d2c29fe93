use crate::game::{GameEvent, GamePhase, GameState, Player, PlayerId};
use crate::grid::Position;
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{board_rect, cell_size, centered_rect, inner};
use super::rgb;

pub(super) fn draw_board(f: &mut Frame, app: &AppState) {
    let size = f.area();
    let state = app.state();
    let status_height: u16 = 2 + 2; // content + borders

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // header
            Constraint::Min(8),                // grid + players
            Constraint::Length(status_height), // status bar
        ])
        .split(size);

    let elapsed = app.started.elapsed().as_secs();
    let header = Paragraph::new(Line::from(format!(
        "Round {}   Grid: {}x{}   {} players left   {:02}:{:02}",
        state.round(),
        state.grid_size(),
        state.grid_size(),
        state.active_count(),
        elapsed / 60,
        elapsed % 60,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().title("🍟 Fritanga Battle Royale").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    let grid_block = Block::default().title(state.phase().label()).borders(Borders::ALL);
    f.render_widget(grid_block, body[0]);
    draw_grid(f, app, inner(body[0]));
    draw_players(f, state, body[1]);
    draw_status(f, app, chunks[2]);

    if app.help_open() {
        draw_help(f);
    } else if app.history_open() {
        draw_history(f, app);
    } else if state.phase() == GamePhase::Finished {
        draw_game_over(f, state);
    }
}

fn draw_grid(f: &mut Frame, app: &AppState, area: Rect) {
    let state = app.state();
    let n = state.grid_size();
    let board = board_rect(area, n);
    let (cw, ch) = cell_size(area, n);
    let current = state.current_player().map(Player::id);

    for y in 0..n {
        for x in 0..n {
            let pos = Position::new(x, y);
            let cell = Rect {
                x: board.x.saturating_add(cw.saturating_mul(x as u16)),
                y: board.y.saturating_add(ch.saturating_mul(y as u16)),
                width: cw,
                height: ch,
            };
            if cell.right() > board.right() || cell.bottom() > board.bottom() {
                continue;
            }
            render_cell(f, cell, app, pos, current);
        }
    }
}

fn render_cell(
    f: &mut Frame,
    cell: Rect,
    app: &AppState,
    pos: Position,
    current: Option<PlayerId>,
) {
    let occupant = app.state().occupant(pos);
    let is_cursor = app.cursor == pos;
    let checker = if (pos.x + pos.y) % 2 == 0 {
        Color::Rgb(70, 48, 24)
    } else {
        Color::Rgb(58, 38, 18)
    };
    let bg = match occupant {
        Some(p) if Some(p.id()) == current => Color::Rgb(150, 90, 20),
        Some(_) => Color::Rgb(90, 60, 30),
        None if app.is_hint_cell(pos) => Color::Rgb(40, 90, 40),
        None => checker,
    };
    let mut style = Style::default().bg(bg);
    if is_cursor && cell.height < 3 {
        style = style.add_modifier(Modifier::REVERSED);
    }
    f.render_widget(Block::default().style(style), cell);

    let mut content_area = cell;
    if is_cursor && cell.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
        f.render_widget(block, cell);
        content_area = inner(cell);
    }

    if let Some(p) = occupant {
        let c = p.character();
        let mid = Rect {
            x: content_area.x,
            y: content_area.y + content_area.height / 2,
            width: content_area.width,
            height: content_area.height.min(1),
        };
        let text = Span::styled(c.emoji(), Style::default().fg(rgb(c.color())));
        f.render_widget(Paragraph::new(Line::from(text)).alignment(Alignment::Center), mid);
    }
}

fn draw_players(f: &mut Frame, state: &GameState, area: Rect) {
    let current = state.current_player().map(Player::id);
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Active",
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    for p in state.active_players() {
        let c = p.character();
        let marker = if Some(p.id()) == current { "▶ " } else { "  " };
        let pos = p.position().map(|pos| pos.to_string()).unwrap_or_else(|| "--".into());
        let mut style = Style::default().fg(rgb(c.color()));
        if Some(p.id()) == current {
            style = style.add_modifier(Modifier::BOLD);
        }
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(format!("{} {}", c.emoji(), p.name()), style),
            Span::styled(format!("  {pos}"), dim),
        ]));
    }
    let eliminated: Vec<&Player> = state.eliminated_players().collect();
    if !eliminated.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Eliminated",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        for p in eliminated {
            lines.push(Line::from(Span::styled(
                format!("  {} {}", p.character().emoji(), p.name()),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            )));
        }
    }
    let block = Block::default().title("Players").borders(Borders::ALL);
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: false }), area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect) {
    let state = app.state();
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let status_inner = inner(area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(status_inner);

    let mut left_info = match state.current_player() {
        Some(p) if state.has_moved_this_round() => vec![Line::from(format!(
            "{}'s turn ({}): move done, press E to end turn.",
            p.name(),
            p.character().name()
        ))],
        Some(p) => vec![Line::from(format!(
            "{}'s turn ({}): pick a cell and press Enter.",
            p.name(),
            p.character().name()
        ))],
        None => vec![Line::from("Game over. Press Enter to play again.")],
    };
    if let Some(msg) = app.notice() {
        left_info.push(Line::from(Span::styled(msg.to_string(), Style::default().fg(Color::Red))));
    }

    let right_keys = vec![
        Line::from("Arrows move • Enter step • E end"),
        Line::from("? help • H history • R reset • Q quit"),
    ];
    let left_para = Paragraph::new(left_info).wrap(Wrap { trim: true });
    let right_para =
        Paragraph::new(right_keys).wrap(Wrap { trim: true }).alignment(Alignment::Right);
    f.render_widget(left_para, cols[0]);
    f.render_widget(right_para, cols[1]);
}

fn player_label(state: &GameState, id: PlayerId) -> String {
    match state.player(id) {
        Some(p) => format!("{} {}", p.character().emoji(), p.name()),
        None => id.to_string(),
    }
}

fn describe(state: &GameState, event: &GameEvent) -> String {
    match event {
        GameEvent::Joined { player, character } => {
            format!("{} joined as {}", player_label(state, *player), character)
        }
        GameEvent::Left { player } => format!("{player} left"),
        GameEvent::Started { grid_size } => format!("Game started on {grid_size}x{grid_size}"),
        GameEvent::Moved { player, from: Some(from), to } => {
            format!("{} {} → {}", player_label(state, *player), from, to)
        }
        GameEvent::Moved { player, from: None, to } => {
            format!("{} → {}", player_label(state, *player), to)
        }
        GameEvent::TurnPassed { to, round, .. } => {
            format!("Round {round}: {} to move", player_label(state, *to))
        }
        GameEvent::GridShrunk { round, grid_size } => {
            format!("Round {round}: grid shrinks to {grid_size}x{grid_size}")
        }
        GameEvent::Eliminated { player, at } => {
            format!("{} eliminated at {}", player_label(state, *player), at)
        }
        GameEvent::Won { player } => format!("{} wins!", player_label(state, *player)),
        GameEvent::Draw => "Nobody survived".to_string(),
    }
}

fn draw_history(f: &mut Frame, app: &AppState) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("History").borders(Borders::ALL);
    let mut lines: Vec<Line> = Vec::new();
    let entries = app.game.history_recent_offset(AppState::HISTORY_PAGE_SIZE, app.history_offset());
    if entries.is_empty() {
        lines.push(Line::from("No history yet."));
    } else {
        for entry in entries {
            lines.push(Line::from(describe(app.state(), &entry)));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Up/Down scroll • Close: H or Esc",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(70, 80, f.area());
    let block = Block::default().title("Help").borders(Borders::ALL);
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Rules:", bold)),
        Line::from("- One move per turn, then end the turn"),
        Line::from("- Green cells are one step away"),
        Line::from("- Every 3 rounds the grid loses its last row and column"),
        Line::from("- Anyone left outside is eliminated; last one standing wins"),
        Line::from(""),
        Line::from(Span::styled("Board:", bold)),
        Line::from("- Arrows: move cursor"),
        Line::from("- Enter / Space: step onto cursor cell"),
        Line::from("- E: end turn"),
        Line::from("- R: reset to setup"),
        Line::from("- H: history"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    let para = Paragraph::new(lines).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}

fn draw_game_over(f: &mut Frame, state: &GameState) {
    let area = centered_rect(50, 50, f.area());
    let gold = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();
    match state.winner() {
        Some(w) => {
            let c = w.character();
            lines.push(Line::from(c.emoji()));
            lines.push(Line::from(Span::styled(format!("{} Wins!", w.name()), gold)));
            lines.push(Line::from(format!("Playing as {}", c.name())));
            lines.push(Line::from(Span::styled(
                "Champion of Fritanga!",
                Style::default().fg(rgb(c.color())),
            )));
        }
        None => lines.push(Line::from(Span::styled("Nobody survived the shrink.", gold))),
    }
    lines.push(Line::from(""));
    lines.push(Line::from(format!("Rounds survived: {}", state.round())));
    lines.push(Line::from(format!("Final grid size: {}x{}", state.grid_size(), state.grid_size())));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: play again • Q: quit",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let block = Block::default()
        .title("🏆 Game Over")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let para = Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true });
    f.render_widget(Clear, area);
    f.render_widget(block, area);
    f.render_widget(para, inner(area));
}
