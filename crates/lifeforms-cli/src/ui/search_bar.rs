//! Search bar pane with the life-form and rating selectors.

use lifeforms_core::store::LifeformStore;
use ratatui::{
  Frame,
  layout::Rect,
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::Paragraph,
};

use super::{cursor_style, pane_block};
use crate::app::{App, Focus, SearchField};

/// Render the search selectors into `area`.
pub fn draw<S: LifeformStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let focused = app.focus == Focus::Search;
  let block = pane_block(" Search ".to_string(), focused);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let search = &app.search;
  let selector = |label: &'static str, value: &str, field: SearchField| {
    let style = if focused && search.field == field {
      cursor_style()
    } else {
      Style::default()
    };
    [
      Span::styled(
        format!(" {label} "),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
      ),
      Span::styled(format!("< {value} >"), style),
      Span::raw("   "),
    ]
  };

  let mut spans = Vec::new();
  spans.extend(selector("Life Form", search.selected_life_form(), SearchField::LifeForm));
  spans.extend(selector("Rating", search.selected_rating(), SearchField::Rating));

  f.render_widget(Paragraph::new(Line::from(spans)), inner);
}
