use crate::shared::list_region::EntityListRegion;
use contracts::domain::EntityKind;
use leptos::prelude::*;

/// Trade exits (sells). Fees and taxes are subtracted from the net amount
/// here, where entries add them.
#[component]
pub fn TradeExitList() -> impl IntoView {
    view! {
        <EntityListRegion
            config=EntityKind::TradeExit.config()
            title="Trade exits"
            add_label="Add exit"
        />
    }
}
