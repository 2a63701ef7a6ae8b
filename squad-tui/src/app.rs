//! Application state — single-owner, main-thread only.
//!
//! All TUI state lives here. The roster loader thread communicates via
//! channels; everything it produces is applied through [`AppState::on_roster_loaded`].

use std::collections::VecDeque;

use chrono::NaiveDateTime;

use squad_core::filter::{self, Criteria};
use squad_core::{
    KeyValueStore, Player, PlayerId, RosterField, RosterStore, SelectionError, SelectionManager,
};

/// Squad manager as held by the app: storage is injected at startup.
pub type Squad = SelectionManager<Box<dyn KeyValueStore>>;

/// Columns in the picker result grid.
pub const RESULT_COLUMNS: usize = 4;

/// Columns in the team grid.
pub const TEAM_COLUMNS: usize = 6;

/// Which panel is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Team,
    Help,
}

impl Panel {
    pub fn index(self) -> usize {
        match self {
            Panel::Team => 0,
            Panel::Help => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Panel::Team),
            1 => Some(Panel::Help),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Panel::Team => "Team",
            Panel::Help => "Help",
        }
    }

    pub fn next(self) -> Panel {
        match self {
            Panel::Team => Panel::Help,
            Panel::Help => Panel::Team,
        }
    }

    pub fn prev(self) -> Panel {
        // Two panels: previous is next.
        self.next()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// An error record for the error history overlay.
#[derive(Debug, Clone)]
pub struct ErrorRecord {
    pub timestamp: NaiveDateTime,
    pub category: ErrorCategory,
    pub message: String,
    pub context: String,
}

/// Error category for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Load,
    Storage,
    Selection,
    Other,
}

impl ErrorCategory {
    pub fn label(self) -> &'static str {
        match self {
            ErrorCategory::Load => "LOAD",
            ErrorCategory::Storage => "STORE",
            ErrorCategory::Selection => "SQUAD",
            ErrorCategory::Other => "ERR",
        }
    }
}

/// Roster lifecycle. Interactive picking is gated on `Ready`/`Failed`.
#[derive(Debug)]
pub enum RosterState {
    Loading,
    Ready(RosterStore),
    Failed(String),
}

impl RosterState {
    /// Players available for picking; empty until loaded (and after a failure).
    pub fn players(&self) -> &[Player] {
        match self {
            RosterState::Ready(roster) => roster.players(),
            _ => &[],
        }
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        match self {
            RosterState::Ready(roster) => roster.get(id),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RosterState::Loading)
    }
}

/// Picker modal state machine: closed, browsing, or confirming a pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Closed,
    Browse,
    Detail(PlayerId),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

/// Which control in the browse panel receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterFocus {
    Name,
    Dropdown(RosterField),
    Results,
}

impl FilterFocus {
    const ORDER: [FilterFocus; 5] = [
        FilterFocus::Name,
        FilterFocus::Dropdown(RosterField::Nationality),
        FilterFocus::Dropdown(RosterField::Position),
        FilterFocus::Dropdown(RosterField::Club),
        FilterFocus::Results,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// A filter dropdown: index 0 is the "All …" entry.
#[derive(Debug, Clone)]
pub struct Dropdown {
    pub field: RosterField,
    pub options: Vec<String>,
    pub selected: usize,
}

impl Dropdown {
    pub fn new(field: RosterField) -> Self {
        Self {
            field,
            options: Vec::new(),
            selected: 0,
        }
    }

    /// Selected value, `None` for "All".
    pub fn value(&self) -> Option<&str> {
        match self.selected {
            0 => None,
            i => self.options.get(i - 1).map(String::as_str),
        }
    }

    pub fn label(&self) -> &str {
        self.value().unwrap_or(self.field.all_label())
    }

    pub fn cycle(&mut self, direction: i32) {
        let len = self.options.len() + 1;
        self.selected = if direction > 0 {
            (self.selected + 1) % len
        } else {
            (self.selected + len - 1) % len
        };
    }
}

/// Browse-panel controls.
#[derive(Debug, Clone)]
pub struct PickerState {
    pub name_query: String,
    pub dropdowns: [Dropdown; 3],
    pub focus: FilterFocus,
    pub cursor: usize,
}

impl PickerState {
    pub fn new() -> Self {
        Self {
            name_query: String::new(),
            dropdowns: RosterField::ALL.map(Dropdown::new),
            focus: FilterFocus::Name,
            cursor: 0,
        }
    }

    /// Fill the dropdown options from the roster's distinct values.
    pub fn populate(&mut self, roster: &RosterStore) {
        for dropdown in &mut self.dropdowns {
            dropdown.options = roster.distinct_values(dropdown.field);
            dropdown.selected = 0;
        }
    }

    pub fn dropdown(&self, field: RosterField) -> &Dropdown {
        &self.dropdowns[field_index(field)]
    }

    pub fn dropdown_mut(&mut self, field: RosterField) -> &mut Dropdown {
        &mut self.dropdowns[field_index(field)]
    }

    /// Criteria from the current control values.
    pub fn criteria(&self) -> Criteria {
        let mut criteria = Criteria::default().with_name(self.name_query.clone());
        for dropdown in &self.dropdowns {
            if let Some(value) = dropdown.value() {
                criteria = criteria.with_field(dropdown.field, value);
            }
        }
        criteria
    }
}

impl Default for PickerState {
    fn default() -> Self {
        Self::new()
    }
}

fn field_index(field: RosterField) -> usize {
    match field {
        RosterField::Nationality => 0,
        RosterField::Position => 1,
        RosterField::Club => 2,
    }
}

/// Alert-style message that blocks input until dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: StatusLevel,
}

/// Which overlay (if any) is shown on top of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    ErrorHistory,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,

    // Model
    pub roster: RosterState,
    pub squad: Squad,

    // Picker modal
    pub modal: Modal,
    pub picker: PickerState,

    // Team grid
    pub team_cursor: usize,

    // Cross-cutting
    pub notice: Option<Notice>,
    pub status_message: Option<(String, StatusLevel)>,
    pub error_history: VecDeque<ErrorRecord>,
    pub error_scroll: usize,
    pub overlay: Overlay,
}

impl AppState {
    /// New app over `store`; the saved squad is restored immediately, the
    /// roster arrives later from the loader.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        let squad = SelectionManager::restored(store);
        Self {
            active_panel: Panel::Team,
            running: true,
            roster: RosterState::Loading,
            squad,
            modal: Modal::Closed,
            picker: PickerState::new(),
            team_cursor: 0,
            notice: None,
            status_message: Some(("Loading roster...".to_string(), StatusLevel::Info)),
            error_history: VecDeque::with_capacity(50),
            error_scroll: 0,
            overlay: Overlay::None,
        }
    }

    /// Apply the roster loader's result.
    pub fn on_roster_loaded(&mut self, result: Result<RosterStore, String>) {
        match result {
            Ok(roster) => {
                self.picker.populate(&roster);
                self.set_status(format!("{} players available", roster.len()));
                self.roster = RosterState::Ready(roster);
            }
            Err(e) => {
                self.push_error(
                    ErrorCategory::Load,
                    "Error loading players".into(),
                    e.clone(),
                );
                self.roster = RosterState::Failed(e);
            }
        }
    }

    /// Current filtered view of the roster.
    pub fn filtered(&self) -> Vec<&Player> {
        filter::apply(self.roster.players(), &self.picker.criteria())
    }

    /// Player under the result cursor, if any.
    pub fn cursor_player(&self) -> Option<&Player> {
        self.filtered().get(self.picker.cursor).copied()
    }

    /// Keep the result cursor on a visible row after criteria change.
    pub fn clamp_result_cursor(&mut self) {
        let len = self.filtered().len();
        self.picker.cursor = self.picker.cursor.min(len.saturating_sub(1));
    }

    pub fn open_picker(&mut self) {
        if self.roster.is_loading() {
            self.set_warning("Roster is still loading...");
            return;
        }
        self.modal = Modal::Browse;
        self.clamp_result_cursor();
    }

    pub fn close_picker(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Pick the player under the result cursor.
    pub fn pick_at_cursor(&mut self) {
        if let Some(id) = self.cursor_player().map(|p| p.id.clone()) {
            self.pick(&id);
        }
    }

    /// Add a player to the squad and show their detail panel.
    ///
    /// A rejected pick shows an alert and leaves the modal on Browse.
    pub fn pick(&mut self, id: &PlayerId) {
        let Some(player) = self.roster.get(id).cloned() else {
            self.push_error(
                ErrorCategory::Other,
                "Player not found".into(),
                id.to_string(),
            );
            return;
        };

        let name = player.name.clone();
        match self.squad.add(player) {
            Ok(()) => {
                self.modal = Modal::Detail(id.clone());
                self.set_status(format!(
                    "Added {name} ({}/{})",
                    self.squad.len(),
                    self.squad.capacity()
                ));
            }
            Err(e @ (SelectionError::Duplicate { .. } | SelectionError::Capacity { .. })) => {
                self.alert(e.to_string(), StatusLevel::Warning);
            }
            Err(e) => {
                self.push_error(ErrorCategory::Storage, e.to_string(), name);
            }
        }
    }

    /// Back from the detail panel to browsing.
    pub fn cancel_detail(&mut self) {
        if matches!(self.modal, Modal::Detail(_)) {
            self.modal = Modal::Browse;
        }
    }

    /// Finalize the squad: closes the modal only when something was picked.
    pub fn confirm(&mut self) {
        match self.squad.confirm() {
            Ok(done) => {
                tracing::info!(size = done.size, "team confirmed");
                self.alert(done.to_string(), StatusLevel::Info);
                self.modal = Modal::Closed;
            }
            Err(e) => self.alert(e.to_string(), StatusLevel::Warning),
        }
    }

    /// Delete the card under the team cursor.
    pub fn remove_selected(&mut self) {
        if self.squad.is_empty() {
            return;
        }
        match self.squad.remove_at(self.team_cursor) {
            Ok(removed) => {
                self.set_status(format!("Removed {}", removed.name));
            }
            Err(e @ SelectionError::Range { .. }) => {
                self.push_error(ErrorCategory::Selection, e.to_string(), "delete".into());
            }
            Err(e) => {
                self.push_error(ErrorCategory::Storage, e.to_string(), "delete".into());
            }
        }
        // Positions shift after a removal; keep the cursor on a real card.
        self.team_cursor = self.team_cursor.min(self.squad.len().saturating_sub(1));
    }

    /// Move the team cursor by `delta` cards, staying inside the squad.
    pub fn move_team_cursor(&mut self, delta: isize) {
        let len = self.squad.len();
        if len == 0 {
            self.team_cursor = 0;
            return;
        }
        let target = self.team_cursor as isize + delta;
        if (0..len as isize).contains(&target) {
            self.team_cursor = target as usize;
        }
    }

    /// Move the result cursor by `delta` tiles, staying inside the results.
    pub fn move_result_cursor(&mut self, delta: isize) {
        let len = self.filtered().len();
        let target = self.picker.cursor as isize + delta;
        if (0..len as isize).contains(&target) {
            self.picker.cursor = target as usize;
        }
    }

    /// Show a blocking alert (and mirror it in the status bar).
    pub fn alert(&mut self, message: impl Into<String>, level: StatusLevel) {
        let message = message.into();
        self.status_message = Some((message.clone(), level));
        self.notice = Some(Notice { message, level });
    }

    /// Push an error to the history, capping at 50.
    pub fn push_error(&mut self, category: ErrorCategory, message: String, context: String) {
        tracing::error!(category = category.label(), %message, %context, "ui error");
        let record = ErrorRecord {
            timestamp: chrono::Local::now().naive_local(),
            category,
            message: message.clone(),
            context,
        };
        self.error_history.push_front(record);
        if self.error_history.len() > 50 {
            self.error_history.pop_back();
        }
        self.status_message = Some((message, StatusLevel::Error));
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
