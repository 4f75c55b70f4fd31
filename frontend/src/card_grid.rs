use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Narrowest a column may get before the grid wraps to fewer columns.
    #[prop_or(260)]
    pub min_column_px: u32,
    pub children: Children,
}

/// Responsive grid the public cards are laid out in.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 20px;
             margin: auto;
             padding: 10px;",
            props.min_column_px
        );

        html! {
            <div id="cards" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
