//! Properties of the `CardBrowserComponent`.

use yew::prelude::*;

use common::model::record_type::RecordType;

#[derive(Properties, PartialEq, Clone)]
pub struct CardBrowserProps {
    /// Section to browse, taken from the first path segment (`/thoughts/`).
    ///
    /// Cards are fetched from `/{record_type}/data` once, on the first render;
    /// tales are posted to `/{record_type}/addTale`.
    pub record_type: RecordType,
}
