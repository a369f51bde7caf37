use crate::shared::list_region::EntityListRegion;
use contracts::domain::EntityKind;
use leptos::prelude::*;

/// Trade entries (buys). The form recalculates gross and net amounts as the
/// quantity, price, fee and tax inputs change.
#[component]
pub fn TradeEntryList() -> impl IntoView {
    view! {
        <EntityListRegion
            config=EntityKind::TradeEntry.config()
            title="Trade entries"
            add_label="Add entry"
        />
    }
}
