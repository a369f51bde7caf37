use crate::shared::modal_frame::ModalFrame;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

#[derive(Clone)]
struct ModalEntry {
    seq: u64,
    builder: Arc<dyn Fn(ModalHandle) -> AnyView + Send + Sync>,
}

/// A handle given to modal content so it can close itself from event handlers.
#[derive(Clone, Copy)]
pub struct ModalHandle {
    seq: u64,
    svc: ModalService,
}

impl ModalHandle {
    pub fn close(&self) {
        self.svc.close_deferred(self.seq);
    }
}

/// Centralized single-slot modal service.
///
/// The application shows at most one modal at a time; opening a new one
/// replaces whatever is on screen. Opens that have to fetch content first go
/// through `begin_open` / `present`: each open takes a sequence number and a
/// late response only presents while no newer open has been issued, so two
/// rapid opens cannot swap content under each other.
#[derive(Clone, Copy)]
pub struct ModalService {
    slot: RwSignal<Option<ModalEntry>>,
    last_issued: RwSignal<u64>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
            last_issued: RwSignal::new(0),
        }
    }

    fn defer(&self, f: impl FnOnce(ModalService) + 'static) {
        let svc = *self;
        spawn_local(async move {
            // Run after the originating DOM event finishes dispatching. Tearing
            // the modal down mid-dispatch drops handlers the event delegation
            // layer is about to call.
            TimeoutFuture::new(0).await;
            f(svc);
        });
    }

    pub fn is_open(&self) -> bool {
        self.slot.with(|slot| slot.is_some())
    }

    fn is_open_untracked(&self) -> bool {
        self.slot.with_untracked(|slot| slot.is_some())
    }

    /// Reserve the slot for an open that fetches its content first.
    ///
    /// The returned ticket is honored by [`ModalService::present`] only while
    /// no newer open has been issued.
    pub fn begin_open(&self) -> u64 {
        let seq = self.last_issued.get_untracked() + 1;
        self.last_issued.set(seq);
        seq
    }

    /// Show content for a previously reserved open.
    ///
    /// Returns false when a newer open superseded this ticket; the content is
    /// dropped in that case.
    pub fn present<F>(&self, seq: u64, builder: F) -> bool
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        if self.last_issued.get_untracked() != seq {
            return false;
        }
        self.slot.set(Some(ModalEntry {
            seq,
            builder: Arc::new(builder),
        }));
        true
    }

    /// Open a modal whose content is available immediately.
    ///
    /// The builder gets a [`ModalHandle`] for closing from inside the modal.
    pub fn open<F>(&self, builder: F) -> ModalHandle
    where
        F: Fn(ModalHandle) -> AnyView + Send + Sync + 'static,
    {
        let seq = self.begin_open();
        self.slot.set(Some(ModalEntry {
            seq,
            builder: Arc::new(builder),
        }));
        ModalHandle { seq, svc: *self }
    }

    /// Close the modal with the given ticket, if it is still the one shown.
    pub fn close(&self, seq: u64) {
        self.slot.update(|slot| {
            if slot.as_ref().map(|entry| entry.seq) == Some(seq) {
                *slot = None;
            }
        });
    }

    pub fn close_deferred(&self, seq: u64) {
        self.defer(move |svc| svc.close(seq));
    }

    /// Close whatever modal is currently shown.
    pub fn close_current(&self) {
        self.slot.set(None);
    }

    pub fn close_current_deferred(&self) {
        self.defer(|svc| svc.close_current());
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the modal slot at the application root. Mount once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");

    // Global Escape handler.
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open_untracked() {
                    svc.close_current_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            // The host outlives every modal, so the listener is never removed.
            closure.forget();
        }
    });

    view! {
        <Show when=move || svc.is_open()>
            {move || {
                svc.slot.get().map(|entry| {
                    let handle = ModalHandle { seq: entry.seq, svc };
                    let on_close = Callback::new(move |_| handle.close());
                    view! {
                        <ModalFrame on_close=on_close>
                            {(entry.builder)(handle)}
                        </ModalFrame>
                    }
                })
            }}
        </Show>
    }
}
