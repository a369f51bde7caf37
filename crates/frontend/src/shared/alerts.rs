use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const AUTO_DISMISS_MS: u32 = 6_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Alert {
    id: u64,
    level: AlertLevel,
    message: String,
}

/// Application-wide alert banners. Components push messages, [`AlertHost`]
/// renders them in a fixed corner and each one dismisses itself after a few
/// seconds.
#[derive(Clone, Copy)]
pub struct AlertService {
    alerts: RwSignal<Vec<Alert>>,
    next_id: RwSignal<u64>,
}

impl AlertService {
    pub fn new() -> Self {
        Self {
            alerts: RwSignal::new(vec![]),
            next_id: RwSignal::new(0),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(AlertLevel::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(AlertLevel::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.alerts.update(|alerts| alerts.retain(|alert| alert.id != id));
    }

    fn push(&self, level: AlertLevel, message: String) {
        let id = self.next_id.get_untracked() + 1;
        self.next_id.set(id);
        self.alerts.update(|alerts| alerts.push(Alert { id, level, message }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            svc.dismiss(id);
        });
    }
}

impl Default for AlertService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AlertHost() -> impl IntoView {
    let svc = use_context::<AlertService>().expect("AlertService not found in context");

    view! {
        <div class="alerts" id="alerts">
            <For
                each=move || svc.alerts.get()
                key=|alert| alert.id
                children=move |alert| {
                    let id = alert.id;
                    let level_class = match alert.level {
                        AlertLevel::Error => "alert alert--error",
                        AlertLevel::Info => "alert alert--info",
                    };
                    view! {
                        <div class=level_class role="alert">
                            <span class="alert__text">{alert.message.clone()}</span>
                            <button class="alert__close" on:click=move |_| svc.dismiss(id)>
                                {icon("close")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
