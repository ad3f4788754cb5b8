use dominator::{Dom, html};

use crate::constants::{PROP_ID, SPINNER_TEXT, TAG_DIV, TAG_H3};
use crate::state::SESSION;

fn css_class(label: &str) -> String {
    format!("app-message__{label}")
}

pub fn message_banner() -> Dom {
    html!(TAG_DIV, {
        .attr(PROP_ID, "message")
        .class(css_class("banner"))
        .text_signal(SESSION.signal_ref(|s| s.message.clone()))
    })
}

pub fn spinner() -> Dom {
    html!(TAG_DIV, {
        .attr(PROP_ID, "spinner")
        .class(css_class("spinner"))
        .visible_signal(SESSION.signal_ref(|s| s.spinner_on))
        .child(html!(TAG_H3, { .text(SPINNER_TEXT) }))
    })
}
