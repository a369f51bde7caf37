use crate::dashboards::chart_canvas::{destroy_chart, render_chart};
use crate::dashboards::d400_portfolio::{api, chart};
use contracts::dashboards::d400_portfolio::PortfolioSeries;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsValue;

const CANVAS_ID: &str = "myChart";

/// Portfolio value over time: principal and equity lines over monthly
/// transaction-flow bars.
#[component]
pub fn PortfolioDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<PortfolioSeries>);
    let (error, set_error) = signal(None::<String>);
    let chart_instance = StoredValue::new_local(None::<JsValue>);

    // Load the series on mount.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_portfolio_series().await {
                Ok(series) => set_data.set(Some(series)),
                Err(err) => {
                    log::error!("Failed to load portfolio series: {}", err);
                    set_error.set(Some(err));
                }
            }
        });
    });

    // Construct the chart once the data and the canvas both exist.
    Effect::new(move |_| {
        let Some(series) = data.get() else {
            return;
        };
        // The canvas hosts one chart at a time.
        if let Some(previous) = chart_instance.get_value() {
            destroy_chart(&previous);
        }
        match render_chart(CANVAS_ID, &chart::portfolio_chart_config(&series)) {
            Ok(instance) => chart_instance.set_value(Some(instance)),
            Err(err) => {
                chart_instance.set_value(None);
                log::error!("Failed to render portfolio chart: {:?}", err);
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
                    <h2 class="header__title">"Portfolio"</h2>
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
