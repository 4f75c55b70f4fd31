//! Browser-side helpers shared by the console and the card pages.
//!
//! - **Blocking prompts**: `alert` and `confirm` wrap the window dialogs used
//!   for mutation results and delete confirmation.
//! - **User feedback**: `show_toast` displays a short, non-blocking message.
//! - **Clock**: `now_for_input` produces the default of `datetime-local` inputs.

use common::config::TOAST_MS;
use common::model::tale::format_datetime_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a blocking message box.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Asks a yes/no question. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Displays a temporary notification at the bottom of the screen.
///
/// The toast is a plain `div` appended to `<body>` and removed again after
/// `TOAST_MS`. The message is inserted as text, never as markup.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
        toast.set_text_content(Some(message));
        let html_toast: HtmlElement = toast.unchecked_into();
        let style = html_toast.style();
        style.set_property("position", "fixed").ok();
        style.set_property("bottom", "20px").ok();
        style.set_property("left", "50%").ok();
        style.set_property("transform", "translateX(-50%)").ok();
        style.set_property("background", "rgba(0, 0, 0, 0.8)").ok();
        style.set_property("color", "#fff").ok();
        style.set_property("padding", "10px 20px").ok();
        style.set_property("border-radius", "4px").ok();
        style.set_property("z-index", "10000").ok();

        if body.append_child(&html_toast).is_ok() {
            wasm_bindgen_futures::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
                if let Some(parent) = html_toast.parent_node() {
                    parent.remove_child(&html_toast).ok();
                }
            });
        }
    }
}

/// Current local time as a `datetime-local` value (`YYYY-MM-DDTHH:MM`).
pub fn now_for_input() -> String {
    let now = js_sys::Date::new_0();
    format_datetime_local(
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date(),
        now.get_hours(),
        now.get_minutes(),
    )
}

/// Locks or restores page scrolling behind a modal.
pub fn set_body_scroll_locked(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let value = if locked { "hidden" } else { "" };
        body.style().set_property("overflow", value).ok();
    }
}
