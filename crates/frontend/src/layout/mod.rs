pub mod global_context;
pub mod pages;
pub mod sidebar;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use sidebar::Sidebar;
use top_header::TopHeader;

/// Application shell: a fixed top header above a sidebar/content split.
///
/// The content area renders whichever page is active in [`AppGlobalContext`];
/// the sidebar collapses when toggled from the header.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found in context");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Collapsing only hides the sidebar; it stays mounted.
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.left_open.get()
                >
                    <Sidebar />
                </aside>

                <main class="app-main">
                    {move || pages::render_page(ctx.active.get())}
                </main>
            </div>
        </div>
    }
}
