//! Entry form pane: group tabs and one selector per field.

use lifeforms_core::store::LifeformStore;
use ratatui::{
  Frame,
  layout::{Constraint, Layout, Rect},
  style::{Color, Modifier, Style},
  text::{Line, Span},
  widgets::{Paragraph, Tabs},
};

use super::{cursor_style, pane_block};
use crate::app::{App, Focus, FormField, pick};

/// Render the entry form into `area`.
pub fn draw<S: LifeformStore>(f: &mut Frame, area: Rect, app: &App<S>) {
  let focused = app.focus == Focus::Form;
  let block = pane_block(" New Life Form ".to_string(), focused);
  let inner = block.inner(area);
  f.render_widget(block, area);

  let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).split(inner);

  let titles: Vec<String> = app.catalog.group_names().map(str::to_owned).collect();
  let tabs = Tabs::new(titles)
    .select(app.form.group)
    .style(Style::default().fg(Color::Gray))
    .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    .divider("|");
  f.render_widget(tabs, rows[0]);

  let lines: Vec<Line> = FormField::ALL
    .iter()
    .map(|&field| field_line(app, field, focused && field == app.form.field))
    .collect();
  f.render_widget(Paragraph::new(lines), rows[1]);
}

fn field_line<S: LifeformStore>(app: &App<S>, field: FormField, is_cursor: bool) -> Line<'static> {
  let catalog = &app.catalog;
  let form = &app.form;
  let group = catalog.group(form.group).ok();
  let choice = form.choice();

  let value = match field {
    FormField::Group => group.map(|g| g.name.clone()).unwrap_or_default(),
    FormField::MainShot => pick(&catalog.main_shots, form.main_shot).to_owned(),
    FormField::OptionShot => pick(&catalog.option_shots, form.option_shot).to_owned(),
    FormField::CloneEyes => group
      .map(|g| pick(&g.clone_eyes, choice.clone_eyes).to_owned())
      .unwrap_or_default(),
    FormField::SpWeapon => group
      .map(|g| pick(&g.sp_weapons, choice.sp_weapon).to_owned())
      .unwrap_or_default(),
    FormField::Rating => pick(&catalog.ratings, form.rating).to_owned(),
    FormField::Notes => {
      if is_cursor {
        format!("{}_", form.notes)
      } else {
        form.notes.clone()
      }
    }
  };

  let shown = if field == FormField::Notes {
    value
  } else {
    format!("< {value} >")
  };

  let value_style = if is_cursor { cursor_style() } else { Style::default() };

  Line::from(vec![
    Span::styled(
      format!(" {:<16}", field.label()),
      Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ),
    Span::styled(shown, value_style),
  ])
}
