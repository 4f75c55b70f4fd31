//! View rendering for the admin console.
//!
//! Layout: a toolbar (type selector plus "Create New" / "View All"), an
//! optional notice banner, and one panel whose body depends on `Mode`.
//! While a transition is pending the previous body stays up and the panel
//! shows a loading line instead of switching early.

use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use common::console::{Control, CreatePanel, CreatePhase, Mode, Notice, PageTarget, Transition, ViewPanel};
use common::forms::FieldValue;
use common::model::record::{Record, RecordId};

use super::fields::form_fields;
use super::messages::Msg;
use super::state::AdminConsoleComponent;

pub fn view(component: &AdminConsoleComponent, ctx: &Context<AdminConsoleComponent>) -> Html {
    let link = ctx.link();
    let console = &component.console;

    html! {
        <div class="admin-console">
            { build_toolbar(component, link) }
            {
                match &console.notice {
                    Some(notice) => build_notice(notice, link),
                    None => html! {},
                }
            }
            <div class="admin-panel">
                <h2 class="panel-title">{ panel_title(component) }</h2>
                {
                    match &console.pending {
                        Some(transition) => build_loading(transition),
                        None => html! {},
                    }
                }
                {
                    match &console.mode {
                        Mode::None => html! {
                            <div class="form-message">{ "Please select an action using the buttons above" }</div>
                        },
                        Mode::Create(panel) => build_create_panel(component, panel, link),
                        Mode::View(panel) => build_view_panel(component, panel, link),
                    }
                }
            </div>
        </div>
    }
}

fn panel_title(component: &AdminConsoleComponent) -> String {
    match &component.console.mode {
        Mode::None => "Database Object Details".to_string(),
        Mode::Create(panel) => format!("Create New {}", panel.record_type.label()),
        Mode::View(panel) => format!("{} List", panel.record_type.label()),
    }
}

fn build_toolbar(component: &AdminConsoleComponent, link: &Scope<AdminConsoleComponent>) -> Html {
    let console = &component.console;
    let selected = console.selected.as_ref().map(|t| t.as_str().to_string()).unwrap_or_default();
    let onchange = link.callback(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        Msg::SelectType(select.value())
    });

    html! {
        <div class="admin-toolbar">
            <select id="object-type" {onchange}>
                <option value="" selected={selected.is_empty()}>{ "Select object type" }</option>
                { for console.record_types.iter().map(|t| html! {
                    <option value={t.as_str().to_string()} selected={t.as_str() == selected}>
                        { t.label() }
                    </option>
                }) }
            </select>
            <button class="action-btn" onclick={link.callback(|_| Msg::OpenCreate)}>{ "Create New" }</button>
            <button class="action-btn" onclick={link.callback(|_| Msg::OpenView)}>{ "View All" }</button>
        </div>
    }
}

fn build_notice(notice: &Notice, link: &Scope<AdminConsoleComponent>) -> Html {
    let (class, text) = match notice {
        Notice::Error(text) => ("notice notice-error", text),
    };
    html! {
        <div class={class}>
            <span>{ text.clone() }</span>
            <button class="notice-close" onclick={link.callback(|_| Msg::DismissNotice)}>{ "✕" }</button>
        </div>
    }
}

fn build_loading(transition: &Transition) -> Html {
    let text = match transition {
        Transition::Create(_) => "Loading form fields...".to_string(),
        Transition::View(record_type) => format!("Loading {}...", record_type),
    };
    html! {
        <div class="loading">
            <div class="loading-spinner"></div>
            <p>{ text }</p>
        </div>
    }
}

fn build_create_panel(
    component: &AdminConsoleComponent,
    panel: &CreatePanel,
    link: &Scope<AdminConsoleComponent>,
) -> Html {
    let record_type = &panel.record_type;
    match panel.phase {
        CreatePhase::NoColumns => html! {
            <div class="form-message">{ "No columns found for this object type" }</div>
        },
        CreatePhase::Created => html! {
            <div class="form-message success">
                <p><strong>{ "Success!" }</strong>{ " Object created successfully." }</p>
                <p>{ format!("You can create another {} or view all objects.", record_type) }</p>
                <div class="form-actions">
                    <button class="submit-btn" onclick={link.callback(|_| Msg::CreateAnother)}>{ "Create another" }</button>
                    <button class="action-btn" onclick={link.callback(|_| Msg::OpenView)}>{ "View all" }</button>
                </div>
            </div>
        },
        CreatePhase::Editing => {
            let busy = component.console.busy.is_busy(&Control::CreateSubmit);
            let on_input = link.callback(|(name, value): (String, FieldValue)| Msg::CreateInput { name, value });
            let onsubmit = link.callback(|e: SubmitEvent| {
                e.prevent_default();
                Msg::SubmitCreate
            });
            html! {
                <form id="create-form" novalidate={true} {onsubmit}>
                    { form_fields(&panel.form, "new", on_input) }
                    if let Some(err) = &panel.error {
                        <div class="form-message error">
                            <p><strong>{ "Error!" }</strong>{ " Something went wrong while saving." }</p>
                            <p>{ err.clone() }</p>
                            <p>{ "Please try again." }</p>
                        </div>
                    }
                    <div class="form-actions">
                        <button type="submit" class="submit-btn" disabled={busy}>
                            { if busy { "Saving..." } else { "Save" } }
                        </button>
                    </div>
                </form>
            }
        }
    }
}

fn build_view_panel(
    component: &AdminConsoleComponent,
    panel: &ViewPanel,
    link: &Scope<AdminConsoleComponent>,
) -> Html {
    let record_type = &panel.record_type;
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SearchInput(input.value())
    });

    let body = if let Some(err) = &panel.load_error {
        html! {
            <div class="form-message error">
                { "Error loading objects. Please try again." }
                <br /><br />
                <pre>{ err.clone() }</pre>
            </div>
        }
    } else if panel.list.all().is_empty() {
        html! {
            <div class="no-data">
                <p>{ format!("No {} found.", record_type) }</p>
                <button class="submit-btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                    { format!("Create First {}", record_type) }
                </button>
            </div>
        }
    } else if panel.list.filtered().is_empty() {
        html! {
            <div class="no-data">
                <p>{ format!("No {} found matching your search.", record_type) }</p>
            </div>
        }
    } else {
        html! {
            <>
                <div class="object-list">
                    { for panel.list.visible_slice().iter().map(|record| build_accordion(component, panel, record, link)) }
                </div>
                { build_pagination(panel, link) }
            </>
        }
    };

    html! {
        <div class="view-mode">
            <div class="view-controls">
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search..."
                    value={panel.search_input.clone()}
                    {oninput}
                />
                <button class="action-btn" onclick={link.callback(|_| Msg::Refresh)}>{ "Refresh" }</button>
            </div>
            { body }
        </div>
    }
}

fn build_accordion(
    component: &AdminConsoleComponent,
    panel: &ViewPanel,
    record: &Record,
    link: &Scope<AdminConsoleComponent>,
) -> Html {
    let id = record.id();
    let expanded = panel.is_expanded(&id);
    let title = record.display_title(&panel.record_type);

    let toggle = {
        let id = id.clone();
        link.callback(move |_: MouseEvent| Msg::ToggleRow(id.clone()))
    };

    html! {
        <div class="object-accordion" key={id.as_str().to_string()}>
            <div class={classes!("accordion-header", expanded.then_some("active"))} onclick={toggle}>
                <span>{ title }</span>
                <span class="accordion-icon">{ if expanded { "▲" } else { "▼" } }</span>
            </div>
            if expanded {
                { build_edit_form(component, panel, &id, link) }
            }
        </div>
    }
}

fn build_edit_form(
    component: &AdminConsoleComponent,
    panel: &ViewPanel,
    id: &RecordId,
    link: &Scope<AdminConsoleComponent>,
) -> Html {
    let Some(draft) = panel.draft(id) else {
        return html! {};
    };
    let busy = &component.console.busy;
    let updating = busy.is_busy(&Control::Update(id.clone()));
    let deleting = busy.is_busy(&Control::Delete(id.clone()));

    let on_input = {
        let id = id.clone();
        link.callback(move |(name, value): (String, FieldValue)| Msg::EditInput {
            id: id.clone(),
            name,
            value,
        })
    };
    let on_update = {
        let id = id.clone();
        link.callback(move |_: MouseEvent| Msg::SubmitUpdate(id.clone()))
    };
    let on_submit = {
        let id = id.clone();
        link.callback(move |e: SubmitEvent| {
            e.prevent_default();
            Msg::SubmitUpdate(id.clone())
        })
    };
    let on_delete = {
        let id = id.clone();
        link.callback(move |_: MouseEvent| Msg::Delete(id.clone()))
    };

    html! {
        <div class="accordion-content">
            <form class="accordion-form" novalidate={true} onsubmit={on_submit}>
                { form_fields(draft, id.as_str(), on_input) }
            </form>
            <div class="object-actions">
                <button type="button" class="update-btn" disabled={updating} onclick={on_update}>
                    { if updating { "Updating..." } else { "Update" } }
                </button>
                <button type="button" class="delete-btn" disabled={deleting} onclick={on_delete}>
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </div>
        </div>
    }
}

fn build_pagination(panel: &ViewPanel, link: &Scope<AdminConsoleComponent>) -> Html {
    let list = &panel.list;
    let button = |label: &'static str, target: PageTarget| {
        html! {
            <button
                class="page-btn"
                disabled={!list.can_go(target)}
                onclick={link.callback(move |_| Msg::Page(target))}
            >
                { label }
            </button>
        }
    };

    html! {
        <div class="pagination-controls">
            { button("«", PageTarget::First) }
            { button("‹", PageTarget::Prev) }
            <span class="page-info">{ format!("Page {} of {}", list.page(), list.page_count().max(1)) }</span>
            { button("›", PageTarget::Next) }
            { button("»", PageTarget::Last) }
        </div>
    }
}
