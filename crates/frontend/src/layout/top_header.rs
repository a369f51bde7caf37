use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Top bar with the sidebar toggle and the application brand.
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <header class="top-header">
            <div class="top-header__left">
                <button
                    class="top-header__toggle"
                    title="Toggle sidebar"
                    on:click=move |_| ctx.toggle_left()
                >
                    {move || {
                        if ctx.left_open.get() {
                            icon("panel-left-close")
                        } else {
                            icon("panel-left-open")
                        }
                    }}
                </button>
                <span class="top-header__brand">"Portfolio Dashboard"</span>
            </div>
            <div class="top-header__right">
                <span class="top-header__page">
                    {move || ctx.active.get().title()}
                </span>
            </div>
        </header>
    }
}
