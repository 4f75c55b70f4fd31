//! State machine of the admin console.
//!
//! `ConsoleState` is owned by the console component. The component performs
//! the HTTP calls and reports their outcome through the methods here; every
//! outcome method takes the record type the call was made for and ignores
//! results that belong to a type or transition the user has since left.
//!
//! Mode transitions are two-step: `begin_create` / `begin_view` record a
//! pending transition and keep the current display; the mode only changes when
//! the schema arrives. A failed schema fetch drops the pending transition and
//! leaves the previous display (and the type selection) in place.

pub mod busy;
pub mod debounce;
pub mod list;

use std::collections::{HashMap, HashSet};

pub use busy::{BusyControls, Control};
pub use debounce::Debouncer;
pub use list::{ListView, PageTarget};

use crate::forms::{FormDescriptor, build_create_form, build_edit_form};
use crate::model::record::{Record, RecordId};
use crate::model::record_type::RecordType;
use crate::model::schema::FieldSchema;

/// Banner shown above the console panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
}

/// A mode change waiting on the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Create(RecordType),
    View(RecordType),
}

impl Transition {
    pub fn record_type(&self) -> &RecordType {
        match self {
            Transition::Create(t) | Transition::View(t) => t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatePhase {
    Editing,
    /// The schema has no editable column; there is nothing to submit.
    NoColumns,
    /// The server accepted the last submission.
    Created,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePanel {
    pub record_type: RecordType,
    pub schema: Vec<FieldSchema>,
    pub form: FormDescriptor,
    pub phase: CreatePhase,
    /// Server error of the last submission; the form is kept for a retry.
    pub error: Option<String>,
}

impl CreatePanel {
    pub fn new(record_type: RecordType, schema: Vec<FieldSchema>) -> Self {
        let form = build_create_form(&record_type, &schema);
        let phase = if form.fields.is_empty() { CreatePhase::NoColumns } else { CreatePhase::Editing };
        Self { record_type, schema, form, phase, error: None }
    }

    /// Fresh blank form for "create another".
    pub fn reset(&mut self) {
        *self = CreatePanel::new(self.record_type.clone(), std::mem::take(&mut self.schema));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewPanel {
    pub record_type: RecordType,
    pub schema: Vec<FieldSchema>,
    pub list: ListView,
    /// Rows whose edit form is open.
    pub expanded: HashSet<RecordId>,
    /// Edit forms of opened rows, keyed by record id.
    pub drafts: HashMap<RecordId, FormDescriptor>,
    /// Set when the record list could not be loaded; the list is then empty.
    pub load_error: Option<String>,
    /// Raw text of the search box; the filter catches up after the debounce.
    pub search_input: String,
    debounce: Debouncer,
}

impl ViewPanel {
    pub fn new(record_type: RecordType, schema: Vec<FieldSchema>, records: Result<Vec<Record>, String>) -> Self {
        let mut panel = Self {
            record_type,
            schema,
            list: ListView::default(),
            expanded: HashSet::new(),
            drafts: HashMap::new(),
            load_error: None,
            search_input: String::new(),
            debounce: Debouncer::default(),
        };
        panel.records_loaded(records);
        panel
    }

    /// Full reload (initial load and the refresh button): page 1, rows collapsed.
    pub fn records_loaded(&mut self, records: Result<Vec<Record>, String>) {
        self.expanded.clear();
        self.drafts.clear();
        let list = std::mem::take(&mut self.list);
        match records {
            Ok(records) => {
                self.load_error = None;
                self.list = list.set_records(records);
            }
            Err(err) => {
                self.load_error = Some(err);
                self.list = list.set_records(Vec::new());
            }
        }
    }

    /// Refetch after a successful update of `updated`: the list is replaced
    /// with the server's copy, term and page are kept, and the edit form of
    /// the updated record is rebuilt from what the server now holds.
    pub fn records_reconciled(&mut self, updated: &RecordId, records: Vec<Record>) {
        self.list = std::mem::take(&mut self.list).reconcile(records);
        let list = &self.list;
        self.expanded.retain(|id| list.get(id).is_some());
        self.drafts.retain(|id, _| list.get(id).is_some());
        if let Some(record) = self.list.get(updated) {
            let draft = build_edit_form(&self.record_type, record, &self.schema);
            self.drafts.insert(updated.clone(), draft);
        }
    }

    pub fn record_deleted(&mut self, id: &RecordId) {
        self.list = std::mem::take(&mut self.list).reduce_after_delete(id);
        self.expanded.remove(id);
        self.drafts.remove(id);
    }

    /// Opens or closes a row; opening builds its edit form on first use.
    pub fn toggle_row(&mut self, id: &RecordId) {
        if self.expanded.remove(id) {
            return;
        }
        if let Some(record) = self.list.get(id) {
            if !self.drafts.contains_key(id) {
                let draft = build_edit_form(&self.record_type, record, &self.schema);
                self.drafts.insert(id.clone(), draft);
            }
            self.expanded.insert(id.clone());
        }
    }

    pub fn is_expanded(&self, id: &RecordId) -> bool {
        self.expanded.contains(id)
    }

    pub fn draft(&self, id: &RecordId) -> Option<&FormDescriptor> {
        self.drafts.get(id)
    }

    pub fn draft_mut(&mut self, id: &RecordId) -> Option<&mut FormDescriptor> {
        self.drafts.get_mut(id)
    }

    /// Records a keystroke in the search box and returns the ticket its
    /// debounce timer must present.
    pub fn search_typed(&mut self, text: String) -> u64 {
        self.search_input = text;
        self.debounce.ticket()
    }

    /// Runs the filter if `ticket` is the latest keystroke. Returns whether it ran.
    pub fn search_settled(&mut self, ticket: u64) -> bool {
        if !self.debounce.is_current(ticket) {
            return false;
        }
        self.list = std::mem::take(&mut self.list).apply_filter(&self.search_input);
        true
    }

    pub fn set_page(&mut self, target: PageTarget) {
        self.list = std::mem::take(&mut self.list).set_page(target);
    }
}

/// Current activity of the console.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Mode {
    #[default]
    None,
    Create(CreatePanel),
    View(ViewPanel),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsoleState {
    pub record_types: Vec<RecordType>,
    /// The type list could not be fetched and the placeholder set is shown.
    pub using_placeholders: bool,
    pub selected: Option<RecordType>,
    pub mode: Mode,
    pub pending: Option<Transition>,
    pub notice: Option<Notice>,
    pub busy: BusyControls,
}

/// Reason shown when the server describes a type without any column.
pub const NO_COLUMN_INFO: &str = "No column information available";

/// Prompt shown when an action needs a record type first.
pub const SELECT_TYPE_PROMPT: &str = "Please select an object type from the dropdown first";

impl ConsoleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcome of `/admin/tables`. Any failure falls back to the placeholder set.
    pub fn types_loaded(&mut self, types: Result<Vec<RecordType>, String>) {
        match types {
            Ok(types) => {
                self.record_types = types;
                self.using_placeholders = false;
            }
            Err(_) => {
                self.record_types = RecordType::placeholders();
                self.using_placeholders = true;
            }
        }
    }

    /// Changing the selection clears everything downstream of it.
    pub fn select_type(&mut self, record_type: Option<RecordType>) {
        self.selected = record_type;
        self.mode = Mode::None;
        self.pending = None;
        self.notice = None;
        self.busy.clear();
    }

    /// Starts the switch to create mode. `Err` carries the prompt to show
    /// when no type is selected.
    pub fn begin_create(&mut self) -> Result<RecordType, &'static str> {
        let record_type = self.selected.clone().ok_or(SELECT_TYPE_PROMPT)?;
        self.pending = Some(Transition::Create(record_type.clone()));
        self.notice = None;
        Ok(record_type)
    }

    /// Starts the switch to view mode.
    pub fn begin_view(&mut self) -> Result<RecordType, &'static str> {
        let record_type = self.selected.clone().ok_or(SELECT_TYPE_PROMPT)?;
        self.pending = Some(Transition::View(record_type.clone()));
        self.notice = None;
        Ok(record_type)
    }

    /// Schema for a pending create transition. Returns whether it was applied.
    pub fn create_schema_loaded(&mut self, record_type: &RecordType, schema: Result<Vec<FieldSchema>, String>) -> bool {
        if self.pending != Some(Transition::Create(record_type.clone())) {
            return false;
        }
        self.pending = None;
        match schema {
            Ok(schema) => {
                self.mode = Mode::Create(CreatePanel::new(record_type.clone(), schema));
            }
            Err(err) => {
                self.notice = Some(Notice::Error(format!("Error loading form fields: {err}")));
            }
        }
        true
    }

    /// Schema and records for a pending view transition. A schema failure or
    /// an empty schema aborts the transition; a record failure still enters
    /// view mode with an empty list and the error shown inline.
    pub fn view_loaded(
        &mut self,
        record_type: &RecordType,
        schema: Result<Vec<FieldSchema>, String>,
        records: Result<Vec<Record>, String>,
    ) -> bool {
        if self.pending != Some(Transition::View(record_type.clone())) {
            return false;
        }
        self.pending = None;
        match schema {
            Ok(schema) if schema.is_empty() => {
                self.notice = Some(Notice::Error(format!("Error loading columns: {NO_COLUMN_INFO}")));
            }
            Ok(schema) => {
                self.mode = Mode::View(ViewPanel::new(record_type.clone(), schema, records));
            }
            Err(err) => {
                self.notice = Some(Notice::Error(format!("Error loading columns: {err}")));
            }
        }
        true
    }

    pub fn create_panel_mut(&mut self, record_type: &RecordType) -> Option<&mut CreatePanel> {
        match &mut self.mode {
            Mode::Create(panel) if &panel.record_type == record_type => Some(panel),
            _ => None,
        }
    }

    pub fn view_panel(&self) -> Option<&ViewPanel> {
        match &self.mode {
            Mode::View(panel) => Some(panel),
            _ => None,
        }
    }

    pub fn view_panel_mut(&mut self, record_type: &RecordType) -> Option<&mut ViewPanel> {
        match &mut self.mode {
            Mode::View(panel) if &panel.record_type == record_type => Some(panel),
            _ => None,
        }
    }

    pub fn create_succeeded(&mut self, record_type: &RecordType) {
        self.busy.finish(&Control::CreateSubmit);
        if let Some(panel) = self.create_panel_mut(record_type) {
            panel.phase = CreatePhase::Created;
            panel.error = None;
        }
    }

    pub fn create_failed(&mut self, record_type: &RecordType, err: String) {
        self.busy.finish(&Control::CreateSubmit);
        if let Some(panel) = self.create_panel_mut(record_type) {
            panel.error = Some(err);
        }
    }

    /// Outcome of `POST /admin/update`. The control is released either way;
    /// a failure leaves lists and drafts as they were so the edit can be
    /// retried. Returns whether the list must be refetched to reconcile.
    pub fn update_finished(&mut self, record_type: &RecordType, id: &RecordId, result: &Result<(), String>) -> bool {
        self.busy.finish(&Control::Update(id.clone()));
        result.is_ok() && self.view_panel_mut(record_type).is_some()
    }

    /// A rejected delete only releases its control; the record stays listed.
    pub fn delete_failed(&mut self, id: &RecordId) {
        self.busy.finish(&Control::Delete(id.clone()));
    }

    pub fn record_deleted(&mut self, record_type: &RecordType, id: &RecordId) {
        self.busy.finish(&Control::Delete(id.clone()));
        if let Some(panel) = self.view_panel_mut(record_type) {
            panel.record_deleted(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema() -> Vec<FieldSchema> {
        serde_json::from_value(json!([
            {"name": "id", "input_type": "number", "nullable": false, "primary_key": true},
            {"name": "topic", "input_type": "text", "nullable": false},
            {"name": "tag", "input_type": "text", "nullable": true}
        ]))
        .unwrap()
    }

    fn records(n: usize) -> Vec<Record> {
        (1..=n)
            .map(|i| Record::from(json!({"id": i, "topic": format!("Topic {i}"), "tag": null})))
            .collect()
    }

    fn thoughts() -> RecordType {
        RecordType::from("thoughts")
    }

    fn viewing(n: usize) -> ConsoleState {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_view().unwrap();
        assert!(state.view_loaded(&thoughts(), Ok(schema()), Ok(records(n))));
        state
    }

    #[test]
    fn failed_type_list_uses_placeholders() {
        let mut state = ConsoleState::new();
        state.types_loaded(Err("HTTP error! Status: 500".to_string()));

        assert!(state.using_placeholders);
        assert_eq!(state.record_types.len(), 4);
        state.select_type(Some(state.record_types[0].clone()));
        assert!(state.begin_create().is_ok());
    }

    #[test]
    fn actions_need_a_selected_type() {
        let mut state = ConsoleState::new();
        assert_eq!(state.begin_view(), Err(SELECT_TYPE_PROMPT));
        assert_eq!(state.pending, None);
    }

    #[test]
    fn schema_failure_keeps_previous_display_and_selection() {
        let mut state = viewing(3);
        state.begin_create().unwrap();
        assert!(state.pending.is_some());

        state.create_schema_loaded(&thoughts(), Err("boom".to_string()));

        assert!(matches!(state.mode, Mode::View(_)));
        assert_eq!(state.selected, Some(thoughts()));
        assert_eq!(state.pending, None);
        assert_eq!(state.notice, Some(Notice::Error("Error loading form fields: boom".to_string())));
    }

    #[test]
    fn stale_schema_is_ignored_after_type_change() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_create().unwrap();
        state.select_type(Some(RecordType::from("passions")));

        assert!(!state.create_schema_loaded(&thoughts(), Ok(schema())));
        assert_eq!(state.mode, Mode::None);
    }

    #[test]
    fn switching_type_clears_downstream_state() {
        let mut state = viewing(5);
        state.busy.begin(Control::Delete(RecordId::from("1")));
        state.select_type(Some(RecordType::from("passions")));

        assert_eq!(state.mode, Mode::None);
        assert!(!state.busy.is_busy(&Control::Delete(RecordId::from("1"))));
    }

    #[test]
    fn schema_without_editable_columns() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_create().unwrap();
        let only_id = serde_json::from_value(json!([{"name": "id", "input_type": "number", "primary_key": true}])).unwrap();
        state.create_schema_loaded(&thoughts(), Ok(only_id));

        match &state.mode {
            Mode::Create(panel) => assert_eq!(panel.phase, CreatePhase::NoColumns),
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn empty_schema_opens_create_without_inputs() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_create().unwrap();

        assert!(state.create_schema_loaded(&thoughts(), Ok(Vec::new())));

        assert_eq!(state.notice, None);
        match &state.mode {
            Mode::Create(panel) => {
                assert_eq!(panel.phase, CreatePhase::NoColumns);
                assert!(panel.form.fields.is_empty());
            }
            other => panic!("unexpected mode {other:?}"),
        }
    }

    #[test]
    fn empty_schema_aborts_view() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_view().unwrap();

        assert!(state.view_loaded(&thoughts(), Ok(Vec::new()), Ok(records(2))));

        assert_eq!(state.mode, Mode::None);
        assert_eq!(state.pending, None);
        assert_eq!(
            state.notice,
            Some(Notice::Error("Error loading columns: No column information available".to_string()))
        );
    }

    #[test]
    fn failed_update_releases_control_and_keeps_draft() {
        let mut state = viewing(12);
        let id = RecordId::from("11");
        {
            let panel = state.view_panel_mut(&thoughts()).unwrap();
            panel.set_page(PageTarget::Last);
            panel.toggle_row(&id);
            panel.draft_mut(&id).unwrap().set_text("topic", "unsaved".to_string());
        }
        let before = state.view_panel().unwrap().clone();
        assert!(state.busy.begin(Control::Update(id.clone())));

        let refetch = state.update_finished(&thoughts(), &id, &Err("Table thoughts not found".to_string()));

        assert!(!refetch);
        assert!(!state.busy.is_busy(&Control::Update(id.clone())));
        assert_eq!(state.view_panel().unwrap(), &before);
        assert_eq!(
            state.view_panel().unwrap().draft(&id).unwrap().field("topic").unwrap().text(),
            "unsaved"
        );
    }

    #[test]
    fn successful_update_asks_for_refetch_only_while_viewing() {
        let mut state = viewing(3);
        let id = RecordId::from("1");
        state.busy.begin(Control::Update(id.clone()));
        assert!(state.update_finished(&thoughts(), &id, &Ok(())));
        assert!(!state.busy.is_busy(&Control::Update(id.clone())));

        state.select_type(Some(RecordType::from("passions")));
        assert!(!state.update_finished(&thoughts(), &id, &Ok(())));
    }

    #[test]
    fn failed_delete_releases_control_and_keeps_list() {
        let mut state = viewing(11);
        let id = RecordId::from("11");
        state.view_panel_mut(&thoughts()).unwrap().set_page(PageTarget::Last);
        let before = state.view_panel().unwrap().clone();
        assert!(state.busy.begin(Control::Delete(id.clone())));

        state.delete_failed(&id);

        assert!(!state.busy.is_busy(&Control::Delete(id.clone())));
        let panel = state.view_panel().unwrap();
        assert_eq!(panel, &before);
        assert_eq!(panel.list.page(), 2);
        assert!(panel.list.get(&id).is_some());
    }

    #[test]
    fn create_success_and_reset() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_create().unwrap();
        state.create_schema_loaded(&thoughts(), Ok(schema()));
        assert!(state.busy.begin(Control::CreateSubmit));

        state.create_succeeded(&thoughts());
        assert!(!state.busy.is_busy(&Control::CreateSubmit));

        let panel = state.create_panel_mut(&thoughts()).unwrap();
        assert_eq!(panel.phase, CreatePhase::Created);
        panel.form.set_text("topic", "typed".to_string());
        panel.reset();
        assert_eq!(panel.phase, CreatePhase::Editing);
        assert_eq!(panel.form.field("topic").unwrap().text(), "");
        assert_eq!(panel.schema, schema());
    }

    #[test]
    fn create_failure_keeps_form() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_create().unwrap();
        state.create_schema_loaded(&thoughts(), Ok(schema()));
        state.create_panel_mut(&thoughts()).unwrap().form.set_text("topic", "kept".to_string());

        state.create_failed(&thoughts(), "Table thoughts not found".to_string());

        let panel = state.create_panel_mut(&thoughts()).unwrap();
        assert_eq!(panel.phase, CreatePhase::Editing);
        assert_eq!(panel.error.as_deref(), Some("Table thoughts not found"));
        assert_eq!(panel.form.field("topic").unwrap().text(), "kept");
    }

    #[test]
    fn record_failure_enters_view_with_empty_list() {
        let mut state = ConsoleState::new();
        state.select_type(Some(thoughts()));
        state.begin_view().unwrap();
        state.view_loaded(&thoughts(), Ok(schema()), Err("offline".to_string()));

        let panel = state.view_panel().unwrap();
        assert_eq!(panel.load_error.as_deref(), Some("offline"));
        assert!(panel.list.all().is_empty());
    }

    #[test]
    fn debounced_search_applies_only_latest_term() {
        let mut state = viewing(12);
        let panel = state.view_panel_mut(&thoughts()).unwrap();
        panel.set_page(PageTarget::Next);

        let first = panel.search_typed("topic 1".to_string());
        let second = panel.search_typed("topic 12".to_string());
        assert!(!panel.search_settled(first));
        assert_eq!(panel.list.filtered().len(), 12);

        assert!(panel.search_settled(second));
        assert_eq!(panel.list.filtered().len(), 1);
        assert_eq!(panel.list.page(), 1);
    }

    #[test]
    fn toggling_rows_builds_drafts_once() {
        let mut state = viewing(3);
        let panel = state.view_panel_mut(&thoughts()).unwrap();
        let id = RecordId::from("2");

        panel.toggle_row(&id);
        assert!(panel.is_expanded(&id));
        panel.draft_mut(&id).unwrap().set_text("topic", "edited".to_string());

        panel.toggle_row(&id);
        panel.toggle_row(&id);
        assert_eq!(panel.draft(&id).unwrap().field("topic").unwrap().text(), "edited");

        panel.toggle_row(&RecordId::from("99"));
        assert!(!panel.is_expanded(&RecordId::from("99")));
    }

    #[test]
    fn reconcile_rebuilds_updated_draft_from_server_copy() {
        let mut state = viewing(3);
        let panel = state.view_panel_mut(&thoughts()).unwrap();
        let id = RecordId::from("2");
        panel.toggle_row(&id);
        panel.draft_mut(&id).unwrap().set_text("topic", "  padded  ".to_string());

        let mut fresh = records(3);
        fresh[1] = Record::from(json!({"id": 2, "topic": "padded", "tag": null}));
        panel.records_reconciled(&id, fresh);

        assert_eq!(panel.draft(&id).unwrap().field("topic").unwrap().text(), "padded");
        assert!(panel.is_expanded(&id));
    }

    #[test]
    fn delete_of_only_record_on_second_page() {
        let mut state = viewing(11);
        state.view_panel_mut(&thoughts()).unwrap().set_page(PageTarget::Last);
        let id = RecordId::from("11");
        state.busy.begin(Control::Delete(id.clone()));

        state.record_deleted(&thoughts(), &id);

        let panel = state.view_panel().unwrap();
        assert_eq!(panel.list.page(), 1);
        assert_eq!(panel.list.visible_slice().len(), 10);
        assert!(!state.busy.is_busy(&Control::Delete(id)));
    }

    #[test]
    fn refresh_collapses_rows_and_resets_page() {
        let mut state = viewing(25);
        let panel = state.view_panel_mut(&thoughts()).unwrap();
        panel.set_page(PageTarget::Last);
        panel.toggle_row(&RecordId::from("21"));

        panel.records_loaded(Ok(records(25)));
        assert_eq!(panel.list.page(), 1);
        assert!(panel.expanded.is_empty());
        assert!(panel.drafts.is_empty());
    }
}
