use super::api;
use crate::shared::alerts::AlertService;
use crate::shared::icons::icon;
use crate::shared::modal_host::ModalHandle;
use contracts::usecases::u501_security_search::{normalize_query, SecurityCandidate};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum PanelState {
    /// Nothing searched yet, or the query was too short.
    Idle,
    /// A search completed; the row list holds its results.
    Loaded,
    /// The search request failed.
    Failed,
}

/// Two-provider security search inside the modal slot.
///
/// Enter runs the search; results from both providers land in one numbered
/// table and each row can be stored as a tracked security. However the panel
/// closes (button, Escape, overlay), the securities list behind it refreshes
/// to pick up whatever was added.
#[component]
pub fn SecuritySearchPanel(handle: ModalHandle, on_closed: Callback<()>) -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    let (query, set_query) = signal(String::new());
    let (rows, set_rows) = signal(Vec::<SecurityCandidate>::new());
    let (state, set_state) = signal(PanelState::Idle);

    on_cleanup(move || on_closed.run(()));

    let run_search = move || {
        // Queries under two characters only clear the table.
        let Some(normalized) = normalize_query(&query.get_untracked()) else {
            set_rows.set(Vec::new());
            set_state.set(PanelState::Idle);
            return;
        };
        spawn_local(async move {
            match api::search_securities(&normalized).await {
                Ok(response) => {
                    set_rows.set(response.merge());
                    set_state.set(PanelState::Loaded);
                }
                Err(err) => {
                    log::error!("Security search failed: {}", err);
                    set_rows.set(Vec::new());
                    set_state.set(PanelState::Failed);
                }
            }
        });
    };

    let handle_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            run_search();
        }
    };

    let handle_pick = move |candidate: SecurityCandidate| {
        spawn_local(async move {
            match api::add_security(&candidate.to_request()).await {
                Ok(response) => {
                    if response.is_new() {
                        alerts.info("Added!");
                    } else {
                        alerts.info("Already exists.");
                    }
                }
                Err(err) => {
                    log::error!("Failed to add security {}: {}", candidate.code, err);
                    alerts.error("Error adding security");
                }
            }
        });
    };

    let handle_close = move |_| handle.close();

    view! {
        <div class="search-panel" id="tickerSearchModal">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Search securities"</h2>
                </div>
                <div class="header__actions">
                    <button class="button button--secondary" id="close-search-btn" on:click=handle_close>
                        {icon("close")}
                        <span>"Close"</span>
                    </button>
                </div>
            </div>

            <div class="search-panel__query">
                {icon("search")}
                <input
                    type="text"
                    id="search-ticker"
                    class="search-panel__input"
                    placeholder="Ticker or name, Enter to search"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    on:keydown=handle_keydown
                />
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">{"#"}</th>
                            <th class="table__header-cell">{"Code"}</th>
                            <th class="table__header-cell">{"Exchange"}</th>
                            <th class="table__header-cell">{"Name"}</th>
                            <th class="table__header-cell">{"Type"}</th>
                            <th class="table__header-cell">{"Currency"}</th>
                            <th class="table__header-cell">{"Country"}</th>
                            <th class="table__header-cell">{"Source"}</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || match state.get() {
                            PanelState::Idle => view! { <></> }.into_any(),
                            PanelState::Failed => view! {
                                <tr class="table__row">
                                    <td class="table__cell table__cell--message" colspan="9">
                                        "Error loading data"
                                    </td>
                                </tr>
                            }
                            .into_any(),
                            PanelState::Loaded => {
                                let current = rows.get();
                                if current.is_empty() {
                                    view! {
                                        <tr class="table__row">
                                            <td class="table__cell table__cell--message" colspan="9">
                                                "No results found"
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    current
                                        .into_iter()
                                        .enumerate()
                                        .map(|(index, candidate)| {
                                            let picked = candidate.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{index + 1}</td>
                                                    <td class="table__cell">{candidate.code.clone()}</td>
                                                    <td class="table__cell">{candidate.exchange.clone()}</td>
                                                    <td class="table__cell">{candidate.name.clone()}</td>
                                                    <td class="table__cell">{candidate.kind.clone()}</td>
                                                    <td class="table__cell">{candidate.currency.clone()}</td>
                                                    <td class="table__cell">{candidate.country.clone()}</td>
                                                    <td class="table__cell">{candidate.source.as_str()}</td>
                                                    <td class="table__cell">
                                                        <button
                                                            class="button button--primary button--small"
                                                            on:click=move |_| handle_pick(picked.clone())
                                                        >
                                                            "Add"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
