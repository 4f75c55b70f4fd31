//! Rendering of synthesized form fields.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use common::forms::{FieldValue, FormDescriptor, FormField};
use common::model::schema::InputKind;

/// Renders every field of `form`. `id_suffix` keeps element ids unique when
/// several edit forms are open at once.
pub fn form_fields(
    form: &FormDescriptor,
    id_suffix: &str,
    on_input: Callback<(String, FieldValue)>,
) -> Html {
    html! {
        { for form.fields.iter().map(|field| form_group(field, id_suffix, on_input.clone())) }
    }
}

fn form_group(field: &FormField, id_suffix: &str, on_input: Callback<(String, FieldValue)>) -> Html {
    let id = format!("{}_{}", field.name, id_suffix);
    let label_class = field.required.then_some("required-field");
    let maxlength = field.max_length.map(|n| n.to_string());
    let name = field.name.clone();

    let input = match field.kind {
        InputKind::Textarea => {
            let oninput = Callback::from(move |e: InputEvent| {
                let textarea: HtmlTextAreaElement = e.target_unchecked_into();
                on_input.emit((name.clone(), FieldValue::Text(textarea.value())));
            });
            html! {
                <textarea
                    id={id.clone()}
                    name={field.name.clone()}
                    rows="3"
                    required={field.required}
                    maxlength={maxlength}
                    value={field.text().to_string()}
                    {oninput}
                />
            }
        }
        InputKind::Checkbox => {
            let onchange = Callback::from(move |e: Event| {
                let checkbox: HtmlInputElement = e.target_unchecked_into();
                on_input.emit((name.clone(), FieldValue::Flag(checkbox.checked())));
            });
            html! {
                <input
                    type="checkbox"
                    id={id.clone()}
                    name={field.name.clone()}
                    checked={field.checked()}
                    {onchange}
                />
            }
        }
        kind => {
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_input.emit((name.clone(), FieldValue::Text(input.value())));
            });
            html! {
                <input
                    type={kind.html_type()}
                    id={id.clone()}
                    name={field.name.clone()}
                    required={field.required}
                    maxlength={maxlength}
                    step={field.step.clone()}
                    value={field.text().to_string()}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-group">
            <label for={id} class={classes!(label_class)}>{ field.label.clone() }</label>
            { input }
            if let Some(hint) = field.max_length_hint() {
                <small class="form-hint">{ hint }</small>
            }
        </div>
    }
}
