//! Record grid pane, one column per field.

use lifeforms_core::{grid::COLUMN_HEADERS, store::LifeformStore};
use ratatui::{
  Frame,
  layout::{Constraint, Rect},
  style::{Color, Modifier, Style},
  widgets::{Cell, Row, Table, TableState},
};

use super::{cursor_style, pane_block};
use crate::app::{App, Focus};

/// Render the grid into `area`.
pub fn draw<S: LifeformStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let focused = app.focus == Focus::Grid;

  let title = if app.shown.is_all() {
    format!(" Life Forms ({}) ", app.rows.len())
  } else {
    format!(
      " Life Forms ({}): life form like {:?}, rating like {:?} ",
      app.rows.len(),
      app.shown.life_form,
      app.shown.rating
    )
  };

  let header = Row::new(COLUMN_HEADERS.iter().map(|h| Cell::from(*h)))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

  let rows: Vec<Row> = app
    .rows
    .iter()
    .enumerate()
    .map(|(i, row)| {
      let selected = app.row_cursor == Some(i);
      let cells = row.iter().enumerate().map(|(col, value)| {
        let is_cell_cursor = focused && selected && col == app.column_cursor;
        match &app.editing {
          Some(edit) if is_cell_cursor && edit.column == col => {
            Cell::from(format!("{}_", edit.buffer))
              .style(Style::default().fg(Color::Black).bg(Color::Yellow))
          }
          _ if is_cell_cursor => Cell::from(value.clone()).style(cursor_style()),
          _ => Cell::from(value.clone()),
        }
      });
      Row::new(cells)
    })
    .collect();

  let widths = [
    Constraint::Length(6),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Fill(2),
    Constraint::Length(8),
    Constraint::Fill(3),
  ];

  let table = Table::new(rows, widths)
    .header(header)
    .block(pane_block(title, focused))
    .row_highlight_style(Style::default().bg(Color::DarkGray));

  let mut state = TableState::default().with_selected(app.row_cursor);
  f.render_stateful_widget(table, area, &mut state);
}
