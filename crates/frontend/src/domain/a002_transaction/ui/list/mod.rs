use crate::shared::list_region::EntityListRegion;
use contracts::domain::EntityKind;
use leptos::prelude::*;

/// Deposits and withdrawals across all accounts.
#[component]
pub fn TransactionList() -> impl IntoView {
    view! {
        <EntityListRegion
            config=EntityKind::Transaction.config()
            title="Transactions"
            add_label="Add transaction"
        />
    }
}
