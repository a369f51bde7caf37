use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};

/// Construct a chart on the canvas with the given id.
///
/// The charting library is loaded globally by the host page and treated as a
/// black box: it receives the canvas element and a plain config object.
/// Returns the constructed chart; the caller owns it and is responsible for
/// passing it to [`destroy_chart`] once the canvas leaves the page.
pub fn render_chart(canvas_id: &str, config: &serde_json::Value) -> Result<JsValue, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("Window not available"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("Document not available"))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| JsValue::from_str("Chart canvas not found"))?;

    let chart_value = Reflect::get(&window, &JsValue::from_str("Chart"))?;
    if !chart_value.is_function() {
        return Err(JsValue::from_str("Chart is not loaded"));
    }
    let chart_ctor: Function = chart_value.dyn_into()?;

    let config_value = config
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))?;

    let args = Array::of2(&canvas.into(), &config_value);
    let instance = Reflect::construct(&chart_ctor, &args)?;
    Ok(instance.into())
}

/// Tear down a chart produced by [`render_chart`].
///
/// The library keeps every constructed chart in a static registry until its
/// `destroy` method runs, so a chart that is never destroyed stays alive
/// (together with its detached canvas) for the rest of the session.
pub fn destroy_chart(instance: &JsValue) {
    let Ok(destroy) = Reflect::get(instance, &JsValue::from_str("destroy"))
        .and_then(|method| method.dyn_into::<Function>())
    else {
        return;
    };
    let _ = destroy.call0(instance);
}
