//! Application state machine and event dispatcher.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lifeforms_core::{
  Error as CoreError,
  catalog::Catalog,
  grid::{CellPadding, GridRow, ID_COLUMN, COLUMN_COUNT, rows_to_grid, selected_row_to_record},
  record::{LifeformRecord, NewLifeform, RecordId},
  store::{LifeformFilter, LifeformStore},
};

// ─── Focus ────────────────────────────────────────────────────────────────────

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
  Form,
  Grid,
  Search,
}

impl Focus {
  fn next(self) -> Self {
    match self {
      Focus::Form => Focus::Grid,
      Focus::Grid => Focus::Search,
      Focus::Search => Focus::Form,
    }
  }

  fn prev(self) -> Self {
    match self {
      Focus::Form => Focus::Search,
      Focus::Grid => Focus::Form,
      Focus::Search => Focus::Grid,
    }
  }
}

// ─── Entry form ───────────────────────────────────────────────────────────────

/// A row of the entry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
  Group,
  MainShot,
  OptionShot,
  CloneEyes,
  SpWeapon,
  Rating,
  Notes,
}

impl FormField {
  pub const ALL: [FormField; 7] = [
    FormField::Group,
    FormField::MainShot,
    FormField::OptionShot,
    FormField::CloneEyes,
    FormField::SpWeapon,
    FormField::Rating,
    FormField::Notes,
  ];

  pub fn label(self) -> &'static str {
    match self {
      FormField::Group => "Life Form",
      FormField::MainShot => "Main Shot",
      FormField::OptionShot => "Option Shot",
      FormField::CloneEyes => "Clone Eyes",
      FormField::SpWeapon => "Special Weapon",
      FormField::Rating => "Rating",
      FormField::Notes => "Notes",
    }
  }

  fn position(self) -> usize {
    Self::ALL.iter().position(|f| *f == self).unwrap_or_default()
  }

  fn next(self) -> Self {
    Self::ALL[(self.position() + 1).min(Self::ALL.len() - 1)]
  }

  fn prev(self) -> Self {
    Self::ALL[self.position().saturating_sub(1)]
  }
}

/// Selector positions for the options that belong to one group tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupChoice {
  pub clone_eyes: usize,
  pub sp_weapon:  usize,
}

/// Current state of the entry form.
#[derive(Debug, Clone)]
pub struct Form {
  pub field:       FormField,
  /// Selected group tab.
  pub group:       usize,
  pub main_shot:   usize,
  pub option_shot: usize,
  pub rating:      usize,
  /// One entry per group, indexed by tab.
  pub per_group:   Vec<GroupChoice>,
  pub notes:       String,
}

impl Form {
  fn new(catalog: &Catalog) -> Self {
    Self {
      field:       FormField::Group,
      group:       0,
      main_shot:   0,
      option_shot: 0,
      rating:      0,
      per_group:   vec![GroupChoice::default(); catalog.groups.len()],
      notes:       String::new(),
    }
  }

  /// Selector positions for the active tab.
  pub fn choice(&self) -> GroupChoice {
    self.per_group.get(self.group).copied().unwrap_or_default()
  }
}

// ─── Search bar ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
  LifeForm,
  Rating,
}

/// The two search selectors; entry 0 of each list is the sentinel.
#[derive(Debug, Clone)]
pub struct SearchBar {
  pub field:             SearchField,
  pub life_form_options: Vec<String>,
  pub rating_options:    Vec<String>,
  pub life_form:         usize,
  pub rating:            usize,
}

impl SearchBar {
  fn new(catalog: &Catalog) -> Self {
    Self {
      field:             SearchField::LifeForm,
      life_form_options: catalog.life_form_filter_options(),
      rating_options:    catalog.rating_filter_options(),
      life_form:         0,
      rating:            0,
    }
  }

  pub fn selected_life_form(&self) -> &str { pick(&self.life_form_options, self.life_form) }

  pub fn selected_rating(&self) -> &str { pick(&self.rating_options, self.rating) }

  pub fn filter(&self) -> LifeformFilter {
    LifeformFilter::from_selection(self.selected_life_form(), self.selected_rating())
  }
}

// ─── Prompts ──────────────────────────────────────────────────────────────────

/// A destructive action waiting for a yes/no answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
  Update(LifeformRecord),
  Remove(RecordId),
  /// Remove every row; asks twice.
  RemoveAll { confirmed_once: bool },
}

impl PendingAction {
  pub fn question(&self) -> &'static str {
    match self {
      PendingAction::Update(_) => "Update life form information?",
      PendingAction::Remove(_) => "Remove Wonderful Life Form?",
      PendingAction::RemoveAll { confirmed_once: false } => {
        "Are you sure you want to delete every life form?"
      }
      PendingAction::RemoveAll { confirmed_once: true } => {
        "Really sure? This cannot be undone."
      }
    }
  }
}

/// An in-progress edit of one grid cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
  pub column: usize,
  pub buffer: String,
}

// ─── App ──────────────────────────────────────────────────────────────────────

/// Top-level application state.
pub struct App<S: LifeformStore> {
  pub store:         S,
  pub catalog:       Catalog,
  pub padding:       CellPadding,
  pub focus:         Focus,
  pub form:          Form,
  pub search:        SearchBar,
  /// Display rows currently shown in the grid.
  pub rows:          Vec<GridRow>,
  /// Filter that produced `rows`.
  pub shown:         LifeformFilter,
  /// Stored rows, filtered or not.
  pub total:         usize,
  /// Selected grid row; `None` until the user picks one.
  pub row_cursor:    Option<usize>,
  pub column_cursor: usize,
  pub editing:       Option<CellEdit>,
  pub prompt:        Option<PendingAction>,
  /// One-line status message shown in the status bar.
  pub status_msg:    String,
}

impl<S: LifeformStore> App<S> {
  pub fn new(store: S, catalog: Catalog, padding: CellPadding) -> Self {
    Self {
      form: Form::new(&catalog),
      search: SearchBar::new(&catalog),
      store,
      catalog,
      padding,
      focus: Focus::Form,
      rows: Vec::new(),
      shown: LifeformFilter::all(),
      total: 0,
      row_cursor: None,
      column_cursor: ID_COLUMN + 1,
      editing: None,
      prompt: None,
      status_msg: String::new(),
    }
  }

  /// Give the store back, e.g. to close it on shutdown.
  pub fn into_store(self) -> S { self.store }

  // ── Data loading ──────────────────────────────────────────────────────────

  /// Reload every row into the grid.
  pub fn refresh(&mut self) {
    match self.store.list_all() {
      Ok(records) => self.show(records, LifeformFilter::all()),
      Err(e) => self.report("Could not load life forms", &e),
    }
  }

  /// Run the search bar's filter and show the matches.
  pub fn run_search(&mut self) {
    let filter = self.search.filter();
    match self.store.search(&filter) {
      Ok(records) => {
        self.status_msg = format!("{} matching life forms", records.len());
        self.show(records, filter);
      }
      Err(e) => self.report("Search failed", &e),
    }
  }

  fn show(&mut self, records: Vec<LifeformRecord>, filter: LifeformFilter) {
    self.rows = rows_to_grid(&records, self.padding);
    self.total = if filter.is_all() {
      self.rows.len()
    } else {
      match self.store.count() {
        Ok(n) => n,
        Err(e) => {
          tracing::warn!(error = %e, "could not count life forms");
          self.rows.len()
        }
      }
    };
    self.shown = filter;
    self.editing = None;
    self.row_cursor = match self.row_cursor {
      _ if self.rows.is_empty() => None,
      Some(i) => Some(i.min(self.rows.len() - 1)),
      None => None,
    };
  }

  /// Row count line for the status bar.
  pub fn shown_summary(&self) -> String {
    if self.shown.is_all() {
      format!("{} life forms", self.total)
    } else {
      format!("{} of {} shown", self.rows.len(), self.total)
    }
  }

  fn report(&mut self, what: &str, err: &dyn std::error::Error) {
    tracing::warn!(error = %err, "{what}");
    self.status_msg = format!("{what}: {err}");
  }

  // ── Form ──────────────────────────────────────────────────────────────────

  /// Build a record from the entry form.
  pub fn form_input(&self) -> lifeforms_core::Result<NewLifeform> {
    let group = self.catalog.group(self.form.group)?;
    let choice = self.form.choice();
    Ok(NewLifeform {
      life_form:   group.name.clone(),
      main_shot:   pick(&self.catalog.main_shots, self.form.main_shot).to_owned(),
      option_shot: pick(&self.catalog.option_shots, self.form.option_shot).to_owned(),
      clone_eyes:  pick(&group.clone_eyes, choice.clone_eyes).to_owned(),
      sp_weapon:   pick(&group.sp_weapons, choice.sp_weapon).to_owned(),
      rating:      pick(&self.catalog.ratings, self.form.rating).to_owned(),
      notes:       self.form.notes.clone(),
    })
  }

  fn option_count(&self, field: FormField) -> usize {
    let group = self.catalog.group(self.form.group).ok();
    match field {
      FormField::Group => self.catalog.groups.len(),
      FormField::MainShot => self.catalog.main_shots.len(),
      FormField::OptionShot => self.catalog.option_shots.len(),
      FormField::CloneEyes => group.map_or(0, |g| g.clone_eyes.len()),
      FormField::SpWeapon => group.map_or(0, |g| g.sp_weapons.len()),
      FormField::Rating => self.catalog.ratings.len(),
      FormField::Notes => 0,
    }
  }

  fn cycle_form_option(&mut self, forward: bool) {
    let field = self.form.field;
    let len = self.option_count(field);
    let form = &mut self.form;
    let slot = match field {
      FormField::Group => &mut form.group,
      FormField::MainShot => &mut form.main_shot,
      FormField::OptionShot => &mut form.option_shot,
      FormField::Rating => &mut form.rating,
      FormField::CloneEyes | FormField::SpWeapon => {
        let Some(choice) = form.per_group.get_mut(form.group) else {
          return;
        };
        if field == FormField::CloneEyes {
          &mut choice.clone_eyes
        } else {
          &mut choice.sp_weapon
        }
      }
      FormField::Notes => return,
    };
    cycle(slot, len, forward);
  }

  /// Store the entry form as a new row.
  pub fn add(&mut self) {
    let input = match self.form_input() {
      Ok(input) => input,
      Err(e) => return self.report("Cannot add life form", &e),
    };

    match self.store.add(input) {
      Ok(record) => {
        self.refresh();
        self.form.notes.clear();
        self.status_msg = format!("Added {} #{}", record.life_form, record.id);
      }
      Err(e) => self.report("Could not add life form", &e),
    }
  }

  // ── Grid ──────────────────────────────────────────────────────────────────

  pub fn selected_row(&self) -> Option<&GridRow> {
    self.row_cursor.and_then(|i| self.rows.get(i))
  }

  /// The selected row read back into a record, or `None` with a status
  /// message explaining why.
  fn selected_record(&mut self, verb: &str) -> Option<LifeformRecord> {
    let Some(row) = self.selected_row() else {
      self.report(&format!("Cannot {verb}"), &CoreError::NoSelection);
      return None;
    };
    match selected_row_to_record(row, self.padding) {
      Ok(record) => Some(record),
      Err(e) => {
        self.report("Selected row is not readable", &e);
        None
      }
    }
  }

  pub fn request_update(&mut self) {
    if let Some(record) = self.selected_record("update") {
      self.prompt = Some(PendingAction::Update(record));
    }
  }

  pub fn request_remove(&mut self) {
    self.form.notes.clear();
    if let Some(record) = self.selected_record("remove") {
      self.prompt = Some(PendingAction::Remove(record.id));
    }
  }

  pub fn request_remove_all(&mut self) {
    self.form.notes.clear();
    self.prompt = Some(PendingAction::RemoveAll { confirmed_once: false });
  }

  fn begin_edit(&mut self) {
    if self.column_cursor == ID_COLUMN {
      self.status_msg = "The ID column cannot be edited".into();
      return;
    }
    let Some(row) = self.selected_row() else {
      self.report("Cannot edit", &CoreError::NoSelection);
      return;
    };
    let buffer = self.padding.strip(&row[self.column_cursor]).to_owned();
    self.editing = Some(CellEdit { column: self.column_cursor, buffer });
  }

  fn commit_edit(&mut self) {
    let (Some(edit), Some(i)) = (self.editing.take(), self.row_cursor) else {
      return;
    };
    if let Some(row) = self.rows.get_mut(i) {
      row[edit.column] = self.padding.apply(edit.buffer);
      self.status_msg = "Edited; press u to save".into();
    }
  }

  // ── Prompts ───────────────────────────────────────────────────────────────

  fn confirm(&mut self) {
    let Some(action) = self.prompt.take() else {
      return;
    };

    match action {
      PendingAction::Update(record) => {
        match self.store.update(record.id, &record.fields()) {
          Ok(n) if n.is_zero() => {
            self.refresh();
            self.status_msg = format!("Life form #{} no longer exists", record.id);
          }
          Ok(_) => {
            self.refresh();
            self.form.notes.clear();
            self.status_msg = format!("Updated #{}", record.id);
          }
          Err(e) => self.report("Could not update life form", &e),
        }
      }
      PendingAction::Remove(id) => match self.store.remove(id) {
        Ok(_) => {
          self.refresh();
          self.status_msg = format!("Removed #{id}");
        }
        Err(e) => self.report("Could not remove life form", &e),
      },
      PendingAction::RemoveAll { confirmed_once: false } => {
        self.prompt = Some(PendingAction::RemoveAll { confirmed_once: true });
      }
      PendingAction::RemoveAll { confirmed_once: true } => {
        match self.store.remove_all() {
          Ok(n) => {
            self.refresh();
            self.status_msg = format!("Removed {n} life forms");
          }
          Err(e) => self.report("Could not remove life forms", &e),
        }
      }
    }
  }

  // ── Key handling ──────────────────────────────────────────────────────────

  /// Process a key event. Returns `true` to continue, `false` to quit.
  pub fn handle_key(&mut self, key: KeyEvent) -> bool {
    // Global: Ctrl-C quits from anywhere.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
      return false;
    }

    if self.prompt.is_some() {
      self.handle_prompt_key(key);
      return true;
    }
    if self.editing.is_some() {
      self.handle_edit_key(key);
      return true;
    }

    match key.code {
      KeyCode::Tab => {
        self.focus = self.focus.next();
        return true;
      }
      KeyCode::BackTab => {
        self.focus = self.focus.prev();
        return true;
      }
      _ => {}
    }

    match self.focus {
      Focus::Form => self.handle_form_key(key),
      Focus::Grid => self.handle_grid_key(key),
      Focus::Search => self.handle_search_key(key),
    }
  }

  fn handle_prompt_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.confirm(),
      KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
        self.prompt = None;
        self.status_msg = "Cancelled".into();
      }
      _ => {}
    }
  }

  fn handle_edit_key(&mut self, key: KeyEvent) {
    let Some(edit) = self.editing.as_mut() else {
      return;
    };
    match key.code {
      KeyCode::Esc => self.editing = None,
      KeyCode::Enter => self.commit_edit(),
      KeyCode::Backspace => {
        edit.buffer.pop();
      }
      KeyCode::Char(c) => edit.buffer.push(c),
      _ => {}
    }
  }

  fn handle_form_key(&mut self, key: KeyEvent) -> bool {
    let on_notes = self.form.field == FormField::Notes;
    match key.code {
      KeyCode::Up => self.form.field = self.form.field.prev(),
      KeyCode::Down => self.form.field = self.form.field.next(),
      KeyCode::Left => self.cycle_form_option(false),
      KeyCode::Right => self.cycle_form_option(true),
      KeyCode::Enter => self.add(),
      KeyCode::Backspace if on_notes => {
        self.form.notes.pop();
      }
      KeyCode::Char(c) if on_notes => self.form.notes.push(c),
      KeyCode::Char('a') => self.add(),
      KeyCode::Char('q') => return false,
      _ => {}
    }
    true
  }

  fn handle_grid_key(&mut self, key: KeyEvent) -> bool {
    match key.code {
      KeyCode::Char('q') => return false,

      // Navigation
      KeyCode::Down | KeyCode::Char('j') => {
        if !self.rows.is_empty() {
          self.row_cursor = Some(match self.row_cursor {
            Some(i) => (i + 1).min(self.rows.len() - 1),
            None => 0,
          });
        }
      }
      KeyCode::Up | KeyCode::Char('k') => {
        if let Some(i) = self.row_cursor {
          self.row_cursor = Some(i.saturating_sub(1));
        }
      }
      KeyCode::Left | KeyCode::Char('h') => {
        self.column_cursor = self.column_cursor.saturating_sub(1).max(ID_COLUMN + 1);
      }
      KeyCode::Right | KeyCode::Char('l') => {
        self.column_cursor = (self.column_cursor + 1).min(COLUMN_COUNT - 1);
      }
      KeyCode::Esc => self.row_cursor = None,

      // Actions
      KeyCode::Enter | KeyCode::Char('e') => self.begin_edit(),
      KeyCode::Char('u') => self.request_update(),
      KeyCode::Char('d') | KeyCode::Delete => self.request_remove(),
      KeyCode::Char('D') => self.request_remove_all(),
      KeyCode::Char('r') => {
        self.refresh();
        self.status_msg = "Reloaded".into();
      }
      _ => {}
    }
    true
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> bool {
    let search = &mut self.search;
    match key.code {
      KeyCode::Char('q') => return false,
      KeyCode::Up | KeyCode::Down => {
        search.field = match search.field {
          SearchField::LifeForm => SearchField::Rating,
          SearchField::Rating => SearchField::LifeForm,
        };
      }
      KeyCode::Left | KeyCode::Right => {
        let forward = key.code == KeyCode::Right;
        match search.field {
          SearchField::LifeForm => {
            cycle(&mut search.life_form, search.life_form_options.len(), forward)
          }
          SearchField::Rating => {
            cycle(&mut search.rating, search.rating_options.len(), forward)
          }
        }
      }
      KeyCode::Enter => self.run_search(),
      KeyCode::Char('r') => {
        self.refresh();
        self.status_msg = "Showing all life forms".into();
      }
      _ => {}
    }
    true
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

pub(crate) fn pick(options: &[String], index: usize) -> &str {
  options.get(index).map(String::as_str).unwrap_or_default()
}

/// Step `index` through `0..len`, wrapping at both ends.
fn cycle(index: &mut usize, len: usize, forward: bool) {
  if len == 0 {
    return;
  }
  *index = if forward {
    (*index + 1) % len
  } else {
    (*index + len - 1) % len
  };
}
