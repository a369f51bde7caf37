use crate::layout::global_context::{AppGlobalContext, Page};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Navigation sidebar listing the application pages.
#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <nav class="app-sidebar__content">
            {Page::ALL
                .into_iter()
                .map(|page| {
                    view! {
                        <div
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || ctx.active.get() == page
                            on:click=move |_| ctx.open_page(page)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(page.icon_name())}
                                <span class="app-sidebar__item-title">{page.title()}</span>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}
