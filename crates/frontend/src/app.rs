use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::alerts::{AlertHost, AlertService};
use crate::shared::modal_host::{ModalHost, ModalService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Overlay services shared by every list region and dashboard.
    provide_context(ModalService::new());
    provide_context(AlertService::new());

    // Restore the active page from the URL and keep it in sync afterwards.
    ctx.init_router_integration();

    view! {
        <Shell />
        <ModalHost />
        <AlertHost />
    }
}
