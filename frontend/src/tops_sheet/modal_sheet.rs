use uuid::Uuid;
use yew::prelude::*;

use crate::helpers::set_body_scroll_locked;

/// Full-screen modal overlay with a centred content box.
///
/// The sheet is mounted while `open` and animates in by receiving the `show`
/// class a moment after insertion. Clicking the backdrop, the ✕ button or
/// pressing Escape asks the parent to close it through `on_close`.
pub struct ModalSheet {
    pub id: String,
    node_ref: NodeRef,
    /// Whether the sheet was open at the previous render; focus is taken
    /// only when it opens so inputs inside keep theirs.
    shown: bool,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub open: bool,
    pub on_close: Callback<()>,
    /// Widens the content box, e.g. while a form is shown below the details.
    #[prop_or_default]
    pub expanded: bool,
}

impl Component for ModalSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
            node_ref: NodeRef::default(),
            shown: false,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if !props.open {
            return html! {};
        }

        let on_backdrop = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: MouseEvent| {
                if e.target() == e.current_target() {
                    on_close.emit(());
                }
            })
        };
        let on_close_button = props.on_close.reform(|_: MouseEvent| ());
        let on_keydown = {
            let on_close = props.on_close.clone();
            Callback::from(move |e: KeyboardEvent| {
                if e.key() == "Escape" {
                    on_close.emit(());
                }
            })
        };

        html! {
            <div
                class="modal-sheet"
                id={self.id.clone()}
                ref={self.node_ref.clone()}
                tabindex="-1"
                onclick={on_backdrop}
                onkeydown={on_keydown}
                style="position:fixed;top:0;left:0;width:100vw;height:100vh;background:rgba(0,0,0,0.7);z-index:9999;display:flex;align-items:center;justify-content:center;"
            >
                <div class={classes!("modal-content", props.expanded.then_some("expanded"))}>
                    <span class="modal-close" title="Close" onclick={on_close_button}>{ "✕" }</span>
                    { props.children.clone() }
                </div>
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        let open = ctx.props().open;
        set_body_scroll_locked(open);
        if open && !self.shown {
            if let Some(sheet) = self.node_ref.cast::<web_sys::HtmlElement>() {
                sheet.focus().ok();
            }
            show_sheet(self.node_ref.clone());
        }
        self.shown = open;
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        set_body_scroll_locked(false);
    }
}

/// Adds the `show` class after a short delay so the CSS transition runs.
fn show_sheet(sheet_ref: NodeRef) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(sheet) = sheet_ref.cast::<web_sys::Element>() {
            sheet.class_list().add_1("show").ok();
        }
    });
}
