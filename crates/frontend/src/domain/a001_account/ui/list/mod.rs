use crate::shared::list_region::EntityListRegion;
use contracts::domain::EntityKind;
use leptos::prelude::*;

/// Accounts table with create, edit and delete.
#[component]
pub fn AccountList() -> impl IntoView {
    view! {
        <EntityListRegion
            config=EntityKind::Account.config()
            title="Accounts"
            add_label="Add account"
        />
    }
}
