use crate::dashboards::chart_canvas::{destroy_chart, render_chart};
use crate::dashboards::d401_holdings::{api, chart};
use contracts::dashboards::d401_holdings::HoldingsSeries;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

const CANVAS_ID: &str = "holdingsEquityChart";

/// Equity of each holding over time, one line per security.
#[component]
pub fn HoldingsDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<HoldingsSeries>);
    let (error, set_error) = signal(None::<String>);
    let chart_instance = StoredValue::new_local(None::<JsValue>);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_holdings_series().await {
                Ok(series) => set_data.set(Some(series)),
                Err(err) => {
                    log::error!("Failed to load holdings series: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    Effect::new(move |_| {
        let Some(series) = data.get() else {
            return;
        };
        // The canvas hosts one chart at a time.
        if let Some(previous) = chart_instance.get_value() {
            destroy_chart(&previous);
        }
        match render_chart(CANVAS_ID, &chart::holdings_chart_config(&series)) {
            Ok(instance) => chart_instance.set_value(Some(instance)),
            Err(err) => {
                chart_instance.set_value(None);
                log::error!("Failed to render holdings chart: {:?}", err);
            }
        }
    });

    // Navigating away unmounts the page; the chart stays registered in the
    // library until it is destroyed.
    on_cleanup(move || {
        if let Some(instance) = chart_instance.get_value() {
            destroy_chart(&instance);
        }
    });

    view! {
        <section class="dashboard-card">
            <div class="header">
                <div class="header__content">
                    <h2 class="header__title">"Holdings"</h2>
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
            <canvas id=CANVAS_ID class="dashboard-card__canvas"></canvas>
        </section>
    }
}
