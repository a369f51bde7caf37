use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Dimmed overlay with a centered modal surface inside it.
///
/// The frame renders no header or buttons of its own. Server-rendered form
/// fragments bring their own markup, and built-in panels render their own
/// compact header.
#[component]
pub fn ModalFrame(
    /// Invoked for every close path the frame itself detects (overlay click).
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only when both press and release land on the overlay itself.
    // A drag that starts inside the surface (text selection) and ends on
    // the overlay must not count as an overlay click.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close = overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Closing synchronously would tear the overlay down while its own
            // click is still being dispatched through event delegation.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div
            class="modal-overlay"
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div class="modal" on:click=stop_propagation>
                {children()}
            </div>
        </div>
    }
}
