use crate::shared::entity_modal::{api, EntityController};
use crate::shared::icons::icon;
use contracts::domain::EntityConfig;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// One entity table rendered from a server-side HTML fragment.
///
/// The region owns the fetch of its list fragment and re-fetches after every
/// successful write, so a save or delete refreshes just this table instead of
/// the whole page. Row actions are wired through a single click handler on
/// the region root: edit and delete buttons inside the injected markup are
/// recognized by their class and `data-id` attribute.
#[component]
pub fn EntityListRegion(
    config: &'static EntityConfig,
    title: &'static str,
    add_label: &'static str,
    /// Overrides the default add action. The callback receives the region's
    /// refresh handle so the custom flow can still reload the table.
    #[prop(optional)]
    on_add: Option<Callback<Callback<()>>>,
) -> impl IntoView {
    let (html, set_html) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_fragment(config.list_endpoint).await {
                Ok(fragment) => {
                    set_html.set(fragment);
                    set_error.set(None);
                }
                Err(err) => {
                    log::error!("Failed to load {} list: {}", config.entity_name, err);
                    set_error.set(Some(err));
                }
            }
        });
    };

    let refresh = Callback::new(move |_| fetch());
    let controller = EntityController::new(config, refresh);

    let handle_add = move |_| match on_add {
        Some(callback) => callback.run(refresh),
        None => controller.open_create(),
    };

    let handle_row_click = move |ev: ev::MouseEvent| {
        let Some(target) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if let Some(id) = action_row_id(&target, config.delete_button_class) {
            controller.delete(id);
            return;
        }
        if let Some(edit_class) = config.edit_button_class {
            if let Some(id) = action_row_id(&target, edit_class) {
                controller.open_edit(id);
            }
        }
    };

    fetch();

    view! {
        <section class="list-region">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">{title}</h2>
                </div>
                <div class="header__actions">
                    <button class="button button--primary" on:click=handle_add>
                        {icon("plus")}
                        <span>{add_label}</span>
                    </button>
                    <button class="button button--secondary" title="Refresh" on:click=move |_| fetch()>
                        {icon("refresh")}
                    </button>
                </div>
            </div>
            {move || {
                error
                    .get()
                    .map(|err| {
                        view! {
                            <div class="warning-box">
                                <span class="warning-box__icon">"⚠"</span>
                                <span class="warning-box__text">{err}</span>
                            </div>
                        }
                    })
            }}
            <div
                class="list-region__table"
                on:click=handle_row_click
                inner_html=move || html.get()
            ></div>
        </section>
    }
}

/// Row id of the action button at or above the clicked element, if the click
/// landed on an action of the given class.
fn action_row_id(target: &web_sys::Element, button_class: &str) -> Option<i64> {
    let selector = format!(".{}", button_class);
    let button = target.closest(&selector).ok().flatten()?;
    button.get_attribute("data-id")?.parse().ok()
}
