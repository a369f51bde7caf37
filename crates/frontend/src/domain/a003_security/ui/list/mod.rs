use crate::shared::list_region::EntityListRegion;
use crate::shared::modal_host::ModalService;
use crate::usecases::u501_security_search::view::SecuritySearchPanel;
use contracts::domain::EntityKind;
use leptos::prelude::*;

/// Securities table. New securities come from the two-provider search panel
/// instead of a blank form, so the add button opens that panel.
#[component]
pub fn SecurityList() -> impl IntoView {
    let modal = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    let open_search = Callback::new(move |refresh: Callback<()>| {
        modal.open(move |handle| {
            view! { <SecuritySearchPanel handle=handle on_closed=refresh /> }.into_any()
        });
    });

    view! {
        <EntityListRegion
            config=EntityKind::Security.config()
            title="Securities"
            add_label="Add security"
            on_add=open_search
        />
    }
}
