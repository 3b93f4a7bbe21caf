//! Stateless UI rendering for the game screen.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_timeline::{Clock, GameSnapshot, Player, Position, Square};

/// Renders the whole screen from a snapshot of the session.
pub fn draw<C: Clock>(frame: &mut Frame, app: &App<C>) {
    let snapshot = app.game().snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Min(13),   // Winners / board / moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe (2 players only)")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let scores = Paragraph::new(snapshot.tally().to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    frame.render_widget(scores, chunks[1]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(40),
            Constraint::Percentage(30),
        ])
        .split(chunks[2]);

    draw_winners(frame, columns[0], &snapshot);
    draw_board(frame, columns[1], &snapshot, app.cursor());
    draw_moves(frame, columns[2], &snapshot, app.selected());

    let status = Paragraph::new(vec![
        Line::from(snapshot.status_line().as_str()),
        Line::from(Span::styled(
            app.status_message().to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .style(Style::default().fg(Color::Yellow))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "arrows/1-9 move  enter play  [ ] select  g go  s start  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_winners(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot) {
    let lines: Vec<Line> = if snapshot.winner_log().is_empty() {
        vec![Line::from(Span::styled(
            "No winners yet",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        snapshot
            .winner_log()
            .iter()
            .map(|event| {
                Line::from(vec![
                    Span::styled(
                        format!("{} ", event.timestamp()),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(event.message().clone(), mark_style(*event.player())),
                ])
            })
            .collect()
    };

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Winners"));
    frame.render_widget(list, area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let block = Block::default().borders(Borders::ALL).title("Board");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(center_rect(inner, 21, 9));

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(7),
                Constraint::Length(7),
                Constraint::Length(7),
            ])
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                draw_cell(frame, *cell_area, snapshot, cursor, pos);
            }
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position, pos: Position) {
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty => (" ".to_string(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(player) => (player.to_string(), mark_style(player)),
    };

    if snapshot.winning_line().is_some_and(|line| line.contains(pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(cell, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, selected: usize) {
    let lines: Vec<Line> = snapshot
        .moves()
        .iter()
        .map(|entry| {
            let marker = if *entry.index() == selected { "> " } else { "  " };
            let style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(Span::styled(format!("{}{}", marker, entry.label()), style))
        })
        .collect();

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(list, area);
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
