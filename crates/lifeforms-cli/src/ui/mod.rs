//! TUI rendering; lays out all panes.

pub mod entry_form;
pub mod record_grid;
pub mod search_bar;

use chrono::Local;
use lifeforms_core::store::LifeformStore;
use ratatui::{
  Frame,
  layout::{Constraint, Direction, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, Focus};

// ─── Root draw ────────────────────────────────────────────────────────────────

/// Main draw function called each frame.
pub fn draw<S: LifeformStore>(f: &mut Frame, app: &App<S>) {
  let area = f.area();

  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // header
      Constraint::Length(10), // entry form
      Constraint::Length(3), // search bar
      Constraint::Min(0),    // grid
      Constraint::Length(1), // status bar
    ])
    .split(area);

  draw_header(f, rows[0]);
  entry_form::draw(f, rows[1], app);
  search_bar::draw(f, rows[2], app);
  record_grid::draw(f, rows[3], app);
  draw_status(f, rows[4], app);

  if let Some(action) = &app.prompt {
    draw_prompt(f, area, action.question());
  }
}

/// Border style for a pane, highlighted when it has focus.
pub(crate) fn pane_block<'a>(title: String, focused: bool) -> Block<'a> {
  let border = if focused {
    Style::default().fg(Color::Cyan)
  } else {
    Style::default().fg(Color::DarkGray)
  };
  Block::default()
    .title(title)
    .borders(Borders::ALL)
    .border_style(border)
}

/// Style for the item under the cursor.
pub(crate) fn cursor_style() -> Style {
  Style::default()
    .bg(Color::Blue)
    .fg(Color::White)
    .add_modifier(Modifier::BOLD)
}

// ─── Header ───────────────────────────────────────────────────────────────────

fn draw_header(f: &mut Frame, area: Rect) {
  let date = Local::now().format("%Y-%m-%d").to_string();

  let left = Span::styled(
    " Wonderful Life Forms  [Tab] switch pane  [q] quit",
    Style::default()
      .fg(Color::White)
      .add_modifier(Modifier::BOLD),
  );
  let right = Span::styled(
    format!("{date} "),
    Style::default().fg(Color::Gray),
  );

  let pad = area
    .width
    .saturating_sub(left.width() as u16)
    .saturating_sub(right.width() as u16);

  let line = Line::from(vec![left, Span::raw(" ".repeat(pad as usize)), right]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::DarkGray)),
    area,
  );
}

// ─── Status bar ───────────────────────────────────────────────────────────────

fn draw_status<S: LifeformStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let (mode_label, hints) = if app.prompt.is_some() {
    ("CONFIRM", "y yes  n no")
  } else if app.editing.is_some() {
    ("EDIT", "Type to edit  Enter keep  Esc cancel")
  } else {
    match app.focus {
      Focus::Form => ("FORM", "↑↓ field  ←→ option  Enter add"),
      Focus::Grid => (
        "GRID",
        "↑↓←→ move  e edit  u update  d remove  D remove all  r reload",
      ),
      Focus::Search => ("SEARCH", "↑↓ selector  ←→ option  Enter search  r show all"),
    }
  };

  let status = if app.status_msg.is_empty() {
    hints.to_string()
  } else {
    app.status_msg.clone()
  };

  let line = Line::from(vec![
    Span::styled(
      format!(" {mode_label} "),
      Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ),
    Span::styled(
      format!(" {} ", app.shown_summary()),
      Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ),
    Span::styled(format!(" {status}"), Style::default().fg(Color::Gray)),
  ]);
  f.render_widget(
    Paragraph::new(line).style(Style::default().bg(Color::Black)),
    area,
  );
}

// ─── Confirmation prompt ──────────────────────────────────────────────────────

fn draw_prompt(f: &mut Frame, area: Rect, question: &str) {
  let width = area.width.min(50);
  let height = area.height.min(5);
  let popup = Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  };

  let block = Block::default()
    .title(" Are you sure? ")
    .borders(Borders::ALL)
    .border_style(Style::default().fg(Color::Yellow));

  let text = vec![
    Line::from(question.to_string()),
    Line::from(Span::styled("[y] Yes   [n] No", Style::default().fg(Color::Gray))),
  ];

  f.render_widget(Clear, popup);
  f.render_widget(
    Paragraph::new(text).block(block).wrap(Wrap { trim: true }),
    popup,
  );
}
