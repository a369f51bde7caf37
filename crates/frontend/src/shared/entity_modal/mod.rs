pub mod api;

use crate::shared::alerts::AlertService;
use crate::shared::modal_host::{ModalHandle, ModalService};
use api::SubmitOutcome;
use contracts::domain::trade_math::{self, TradeSide};
use contracts::domain::EntityConfig;
use contracts::shared::forms::{FormSubmission, ValidationErrorSet};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

/// Per-entity CRUD driver behind a list region.
///
/// One controller serves one entity table: it opens the server-rendered form
/// fragments in the modal slot, submits them as JSON, deletes rows, and
/// triggers the region refresh after every successful write.
#[derive(Clone, Copy)]
pub struct EntityController {
    config: &'static EntityConfig,
    refresh: Callback<()>,
    modal: ModalService,
    alerts: AlertService,
}

impl EntityController {
    pub fn new(config: &'static EntityConfig, refresh: Callback<()>) -> Self {
        let modal = use_context::<ModalService>()
            .expect("ModalService not provided in context (provide it in app root)");
        let alerts = use_context::<AlertService>().expect("AlertService not found in context");
        Self {
            config,
            refresh,
            modal,
            alerts,
        }
    }

    pub fn config(&self) -> &'static EntityConfig {
        self.config
    }

    /// Open the empty create form, for entities that have one.
    pub fn open_create(&self) {
        let Some(endpoint) = self.config.create_endpoint else {
            return;
        };
        self.open_fragment(endpoint.to_string(), false);
    }

    /// Open the prefilled edit form for one row.
    pub fn open_edit(&self, id: i64) {
        // Prefilled trade totals can be stale relative to the stored inputs.
        let recalc_on_open = self.config.trade_side.is_some();
        self.open_fragment(self.config.edit_endpoint(id), recalc_on_open);
    }

    fn open_fragment(&self, url: String, recalc_on_open: bool) {
        let ctl = *self;
        let seq = ctl.modal.begin_open();
        spawn_local(async move {
            match api::fetch_fragment(&url).await {
                Ok(html) => {
                    let presented = ctl.modal.present(seq, move |handle| {
                        view! {
                            <FragmentModalBody
                                config=ctl.config
                                html=html.clone()
                                recalc_on_open=recalc_on_open
                                on_saved=ctl.refresh
                                handle=handle
                            />
                        }
                        .into_any()
                    });
                    if !presented {
                        log::debug!("Dropped stale form fragment from {}", url);
                    }
                }
                Err(err) => {
                    log::error!("Failed to load form fragment from {}: {}", url, err);
                    ctl.alerts.error(ctl.config.load_form_failed_text());
                }
            }
        });
    }

    /// Delete one row after a native confirm prompt.
    pub fn delete(&self, id: i64) {
        let confirmed = web_sys::window()
            .map(|win| {
                win.confirm_with_message(&self.config.confirm_delete_text())
                    .unwrap_or(false)
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let ctl = *self;
        spawn_local(async move {
            match api::delete_entity(ctl.config, id).await {
                Ok(true) => ctl.refresh.run(()),
                Ok(false) => ctl.alerts.error(ctl.config.delete_failed_text()),
                Err(err) => {
                    log::error!("Failed to delete {} {}: {}", ctl.config.entity_name, id, err);
                    ctl.alerts.error("Request failed.");
                }
            }
        });
    }
}

/// Server-rendered form fragment inside the modal slot.
///
/// The fragment markup is injected as-is; submit, input and click events
/// bubble up to this wrapper, which gives injected content live behavior
/// without attaching handlers to the injected nodes themselves.
#[component]
pub fn FragmentModalBody(
    config: &'static EntityConfig,
    html: String,
    recalc_on_open: bool,
    on_saved: Callback<()>,
    handle: ModalHandle,
) -> impl IntoView {
    let alerts = use_context::<AlertService>().expect("AlertService not found in context");

    if recalc_on_open {
        spawn_local(async move {
            // Next tick: the injected inputs do not exist until after render.
            TimeoutFuture::new(0).await;
            if let Some(side) = config.trade_side {
                recalc_trade_amounts(config, side);
            }
        });
    }

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(form) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::HtmlFormElement>().ok())
        else {
            return;
        };
        if form.id() != config.form_element_id {
            return;
        }
        spawn_local(async move {
            submit_entity_form(config, &form, handle, on_saved, alerts).await;
        });
    };

    let handle_input = move |ev| {
        let Some(side) = config.trade_side else {
            return;
        };
        if is_recalc_trigger(config, &event_target_id(&ev)) {
            recalc_trade_amounts(config, side);
        }
    };

    // Fragments carry their own close buttons marked `data-bs-dismiss="modal"`.
    let handle_click = move |ev: leptos::ev::MouseEvent| {
        let Some(element) = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        if element
            .closest("[data-bs-dismiss=\"modal\"]")
            .ok()
            .flatten()
            .is_some()
        {
            handle.close();
        }
    };

    view! {
        <div
            class="modal-fragment"
            on:submit=handle_submit
            on:input=handle_input
            on:click=handle_click
            inner_html=html
        ></div>
    }
}

async fn submit_entity_form(
    config: &'static EntityConfig,
    form: &web_sys::HtmlFormElement,
    handle: ModalHandle,
    on_saved: Callback<()>,
    alerts: AlertService,
) {
    let submission = match collect_form(form) {
        Ok(submission) => submission,
        Err(err) => {
            log::error!("Failed to read {} form: {}", config.entity_name, err);
            alerts.error("Request failed.");
            return;
        }
    };

    // The form's action attribute carries the create or update URL the
    // backend rendered into the fragment.
    let url = form.action();

    match api::send_form(&url, &submission).await {
        Ok(SubmitOutcome::Saved) => {
            handle.close();
            on_saved.run(());
        }
        Ok(SubmitOutcome::Rejected(body)) => match ValidationErrorSet::from_body(&body) {
            Some(errors) => {
                clear_field_errors(form);
                render_field_errors(config, &errors);
            }
            None => alerts.error(config.update_failed_text()),
        },
        Err(err) => {
            log::error!("Failed to submit {} form to {}: {}", config.entity_name, url, err);
            alerts.error("Request failed.");
        }
    }
}

/// Collect every named field of the form, in document order.
fn collect_form(form: &web_sys::HtmlFormElement) -> Result<FormSubmission, String> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|_| "form data unavailable".to_string())?;
    let entries = js_sys::try_iter(&data)
        .map_err(|_| "form data is not iterable".to_string())?
        .ok_or_else(|| "form data is not iterable".to_string())?;

    let mut submission = FormSubmission::new();
    for entry in entries {
        let entry = entry.map_err(|_| "form data iteration failed".to_string())?;
        let pair = js_sys::Array::from(&entry);
        let name = pair.get(0).as_string().unwrap_or_default();
        // These forms carry no file inputs, so values are always strings.
        let value = pair.get(1).as_string().unwrap_or_default();
        submission.push(name, value);
    }
    Ok(submission)
}

/// Drop every error hint rendered by a previous rejected submit.
fn clear_field_errors(form: &web_sys::HtmlFormElement) {
    if let Ok(stale) = form.query_selector_all(".field-error") {
        for index in 0..stale.length() {
            if let Some(node) = stale.get(index) {
                if let Ok(element) = node.dyn_into::<web_sys::Element>() {
                    element.remove();
                }
            }
        }
    }
}

/// Render one hint under each input the server rejected.
///
/// Unknown field names are skipped; there is no input to anchor them to.
fn render_field_errors(config: &EntityConfig, errors: &ValidationErrorSet) {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    for field in errors.fields() {
        let Some(input) = document.get_element_by_id(&config.field_input_id(field)) else {
            continue;
        };
        let Ok(hint) = document.create_element("div") else {
            continue;
        };
        hint.set_class_name("field-error text-danger small mt-1");
        hint.set_text_content(errors.joined_message(field).as_deref());
        let _ = input.insert_adjacent_element("afterend", &hint);
    }
}

/// Whether an input with this element id feeds the trade amount totals.
fn is_recalc_trigger(config: &EntityConfig, element_id: &str) -> bool {
    TradeSide::INPUT_FIELDS
        .iter()
        .any(|field| element_id == config.field_input_id(field))
}

/// Recompute the gross and net totals from the current input values.
///
/// No-ops unless the trade modal and all of its amount inputs are present,
/// so a partially rendered or foreign fragment is never written to.
pub(crate) fn recalc_trade_amounts(config: &EntityConfig, side: TradeSide) {
    let Some(document) = web_sys::window().and_then(|win| win.document()) else {
        return;
    };
    if document.get_element_by_id(config.modal_element_id).is_none() {
        return;
    }

    let mut inputs = [0.0_f64; TradeSide::INPUT_FIELDS.len()];
    for (slot, field) in inputs.iter_mut().zip(TradeSide::INPUT_FIELDS) {
        let Some(value) = input_value(&document, &config.field_input_id(field)) else {
            return;
        };
        *slot = trade_math::parse_amount(&value);
    }
    let Some(gross_input) = input_by_id(&document, &config.field_input_id(TradeSide::GROSS_FIELD))
    else {
        return;
    };
    let Some(net_input) = input_by_id(&document, &config.field_input_id(TradeSide::NET_FIELD))
    else {
        return;
    };

    let [quantity, price, fee, tax] = inputs;
    let amounts = trade_math::recalc(side, quantity, price, fee, tax);
    gross_input.set_value(&amounts.gross_display());
    net_input.set_value(&amounts.net_display());
}

/// Element id of an event's target, or empty when there is none.
fn event_target_id<T: JsCast>(event: &T) -> String {
    event
        .unchecked_ref::<web_sys::Event>()
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map(|element| element.id())
        .unwrap_or_default()
}

fn input_by_id(document: &web_sys::Document, id: &str) -> Option<web_sys::HtmlInputElement> {
    document.get_element_by_id(id)?.dyn_into().ok()
}

fn input_value(document: &web_sys::Document, id: &str) -> Option<String> {
    input_by_id(document, id).map(|input| input.value())
}

#[cfg(test)]
mod tests {
    use super::is_recalc_trigger;
    use contracts::domain::EntityKind;

    #[test]
    fn test_amount_inputs_trigger_recalc() {
        let config = EntityKind::TradeEntry.config();
        assert!(is_recalc_trigger(config, "id_entry_quantity"));
        assert!(is_recalc_trigger(config, "id_entry_price"));
        assert!(is_recalc_trigger(config, "id_entry_fee"));
        assert!(is_recalc_trigger(config, "id_entry_tax"));
    }

    #[test]
    fn test_other_inputs_do_not_trigger_recalc() {
        let config = EntityKind::TradeEntry.config();
        assert!(!is_recalc_trigger(config, "id_entry_date"));
        assert!(!is_recalc_trigger(config, "id_entry_gross_amount"));
        assert!(!is_recalc_trigger(config, "id_exit_quantity"));
        assert!(!is_recalc_trigger(config, ""));
    }
}
