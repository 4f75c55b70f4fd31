//! Update function for the admin console.
//!
//! Every HTTP call is spawned here and reports back with a message carrying
//! the record type it was made for; `ConsoleState` discards outcomes that
//! belong to a selection the user has already left.

use gloo_console::{log, warn};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::config::SEARCH_DEBOUNCE_MS;
use common::console::{Control, Mode};
use common::forms::{FieldValue, FormDescriptor};
use common::model::record::RecordId;
use common::model::record_type::RecordType;

use crate::api::admin;
use crate::helpers::{alert, confirm, show_toast};

use super::messages::Msg;
use super::state::AdminConsoleComponent;

pub fn update(
    component: &mut AdminConsoleComponent,
    ctx: &Context<AdminConsoleComponent>,
    msg: Msg,
) -> bool {
    let console = &mut component.console;
    match msg {
        Msg::TypesLoaded(types) => {
            console.types_loaded(types);
            if console.using_placeholders {
                warn!("Showing placeholder record types");
                show_toast("Could not load object types, showing defaults");
            }
            true
        }
        Msg::SelectType(value) => {
            let selected = (!value.is_empty()).then(|| RecordType::new(value));
            console.select_type(selected);
            true
        }
        Msg::OpenCreate => match console.begin_create() {
            Ok(record_type) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let schema = admin::get_schema(&record_type).await.map_err(|e| e.to_string());
                    link.send_message(Msg::CreateSchemaLoaded(record_type, schema));
                });
                true
            }
            Err(prompt) => {
                alert(prompt);
                false
            }
        },
        Msg::OpenView => match console.begin_view() {
            Ok(record_type) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let schema = admin::get_schema(&record_type).await.map_err(|e| e.to_string());
                    let records = admin::list_records(&record_type).await.map_err(|e| e.to_string());
                    link.send_message(Msg::ViewLoaded { record_type, schema, records });
                });
                true
            }
            Err(prompt) => {
                alert(prompt);
                false
            }
        },
        Msg::CreateSchemaLoaded(record_type, schema) => console.create_schema_loaded(&record_type, schema),
        Msg::ViewLoaded { record_type, schema, records } => console.view_loaded(&record_type, schema, records),
        Msg::CreateInput { name, value } => {
            if let Mode::Create(panel) = &mut console.mode {
                set_value(&mut panel.form, &name, value);
            }
            false
        }
        Msg::SubmitCreate => {
            let Mode::Create(panel) = &console.mode else {
                return false;
            };
            let request = match panel.form.submission() {
                Ok(request) => request,
                Err(err) => {
                    alert(&err.to_string());
                    return false;
                }
            };
            if !console.busy.begin(Control::CreateSubmit) {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = admin::create(&request).await.map_err(|e| e.to_string());
                link.send_message(Msg::CreateFinished(request.table_name, result));
            });
            true
        }
        Msg::CreateFinished(record_type, result) => {
            match result {
                Ok(()) => {
                    log!(format!("Created {}", record_type));
                    console.create_succeeded(&record_type);
                }
                Err(err) => console.create_failed(&record_type, err),
            }
            true
        }
        Msg::CreateAnother => {
            if let Mode::Create(panel) = &mut console.mode {
                panel.reset();
            }
            true
        }
        Msg::Refresh => {
            let Some(panel) = console.view_panel() else {
                return false;
            };
            let record_type = panel.record_type.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let records = admin::list_records(&record_type).await.map_err(|e| e.to_string());
                link.send_message(Msg::Refreshed(record_type, records));
            });
            false
        }
        Msg::Refreshed(record_type, records) => match console.view_panel_mut(&record_type) {
            Some(panel) => {
                panel.records_loaded(records);
                true
            }
            None => false,
        },
        Msg::SearchInput(text) => {
            let Mode::View(panel) = &mut console.mode else {
                return false;
            };
            let ticket = panel.search_typed(text);
            let record_type = panel.record_type.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
                link.send_message(Msg::SearchSettled(record_type, ticket));
            });
            false
        }
        Msg::SearchSettled(record_type, ticket) => console
            .view_panel_mut(&record_type)
            .is_some_and(|panel| panel.search_settled(ticket)),
        Msg::Page(target) => {
            if let Mode::View(panel) = &mut console.mode {
                panel.set_page(target);
                return true;
            }
            false
        }
        Msg::ToggleRow(id) => {
            if let Mode::View(panel) = &mut console.mode {
                panel.toggle_row(&id);
                return true;
            }
            false
        }
        Msg::EditInput { id, name, value } => {
            if let Some(draft) = match &mut console.mode {
                Mode::View(panel) => panel.draft_mut(&id),
                _ => None,
            } {
                set_value(draft, &name, value);
            }
            false
        }
        Msg::SubmitUpdate(id) => {
            let Some(draft) = console.view_panel().and_then(|panel| panel.draft(&id)) else {
                return false;
            };
            let request = match draft.submission() {
                Ok(request) => request,
                Err(err) => {
                    alert(&err.to_string());
                    return false;
                }
            };
            if !console.busy.begin(Control::Update(id.clone())) {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = admin::update(&request).await.map_err(|e| e.to_string());
                link.send_message(Msg::UpdateFinished(request.table_name, id, result));
            });
            true
        }
        Msg::UpdateFinished(record_type, id, result) => {
            let refetch = console.update_finished(&record_type, &id, &result);
            match result {
                Ok(()) => alert("Object updated successfully!"),
                Err(err) => alert(&format!("Update failed: {}", err)),
            }
            if refetch {
                refetch_after_update(ctx, record_type, id);
            }
            true
        }
        Msg::Reconciled(record_type, id, records) => {
            let Some(panel) = console.view_panel_mut(&record_type) else {
                return false;
            };
            match records {
                Ok(records) => {
                    panel.records_reconciled(&id, records);
                    true
                }
                Err(err) => {
                    warn!(format!("Refresh after update failed: {}", err));
                    false
                }
            }
        }
        Msg::Delete(id) => {
            let Some(record_type) = console.view_panel().map(|panel| panel.record_type.clone()) else {
                return false;
            };
            if console.busy.is_busy(&Control::Delete(id.clone())) {
                return false;
            }
            if !confirm(&format!("Are you sure you want to delete this {}?", record_type)) {
                return false;
            }
            console.busy.begin(Control::Delete(id.clone()));
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = admin::delete(&record_type, &id).await.map_err(|e| e.to_string());
                link.send_message(Msg::DeleteFinished(record_type, id, result));
            });
            true
        }
        Msg::DeleteFinished(record_type, id, result) => {
            match result {
                Ok(()) => {
                    log!(format!("Deleted {} #{}", record_type, id));
                    console.record_deleted(&record_type, &id);
                    alert("Object deleted successfully!");
                }
                Err(err) => {
                    console.delete_failed(&id);
                    alert(&format!("Delete failed: {}", err));
                }
            }
            true
        }
        Msg::DismissNotice => {
            console.notice = None;
            true
        }
    }
}

fn set_value(form: &mut FormDescriptor, name: &str, value: FieldValue) {
    match value {
        FieldValue::Text(text) => form.set_text(name, text),
        FieldValue::Flag(checked) => form.set_flag(name, checked),
    }
}

/// Pulls the server's copy of the list so the updated row shows what was
/// actually stored.
fn refetch_after_update(ctx: &Context<AdminConsoleComponent>, record_type: RecordType, id: RecordId) {
    let link = ctx.link().clone();
    spawn_local(async move {
        let records = admin::list_records(&record_type).await.map_err(|e| e.to_string());
        link.send_message(Msg::Reconciled(record_type, id, records));
    });
}
