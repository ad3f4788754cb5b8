use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

fn get_document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlSelectElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn set_title(text: &str) {
    if let Some(d) = get_document() {
        d.set_title(text);
    }
}

pub fn value_from_target(target: Option<EventTarget>) -> String {
    target
        .map(|target| get_value_from_input(JsValue::from(target)))
        .unwrap_or_default()
}
