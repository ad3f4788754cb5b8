use dominator::{clone, Dom, EventOptions, events, html};
use futures_signals::map_ref;
use futures_signals::signal::Signal;

use shared::types::Credentials;

use crate::constants::{PROP_DISABLED, PROP_ID, PROP_PLACEHOLDER, PROP_TITLE, PROP_TYPE, PROP_VALUE, TAG_BUTTON, TAG_FORM, TAG_H2, TAG_INPUT};
use crate::loader::login;
use crate::types::LoginForm;
use crate::utils::{set_title, value_from_target};

const FIELD_USERNAME: &str = "username";
const FIELD_PASSWORD: &str = "password";

fn css_class(label: &str) -> String {
    format!("app-login__{label}")
}

pub fn login_page() -> Dom {
    set_title("Login");
    let form = LoginForm::default();
    html!(TAG_FORM, {
        .attr(PROP_ID, "loginForm")
        .class(css_class("form"))
        .event_with_options(&EventOptions::preventable(), clone!(form => move |e: events::Submit| {
            e.prevent_default();
            if form.credentials().is_submittable() {
                login(form.credentials());
            }
        }))
        .children([
            html!(TAG_H2, { .text("Login") }),
            html!(TAG_INPUT, {
                .attr(PROP_ID, FIELD_USERNAME)
                .class(css_class("input"))
                .attr(PROP_TITLE, "Username")
                .attr(PROP_PLACEHOLDER, "Enter username")
                .attr("maxlength", "20")
                .prop_signal(PROP_VALUE, form.username.signal_cloned())
                .event(clone!(form => move |e: events::Input| {
                    form.username.set(value_from_target(e.target()));
                }))
            }),
            html!(TAG_INPUT, {
                .attr(PROP_ID, FIELD_PASSWORD)
                .attr(PROP_TYPE, "password")
                .class(css_class("input"))
                .attr(PROP_TITLE, "Password")
                .attr(PROP_PLACEHOLDER, "Enter password")
                .attr("maxlength", "20")
                .prop_signal(PROP_VALUE, form.password.signal_cloned())
                .event(clone!(form => move |e: events::Input| {
                    form.password.set(value_from_target(e.target()));
                }))
            }),
            html!(TAG_BUTTON, {
                .attr(PROP_ID, "submitCredentials")
                .class(css_class("button"))
                .prop_signal(PROP_DISABLED, not_submittable(&form))
                .text("Submit credentials")
            }),
        ])
    })
}

fn not_submittable(form: &LoginForm) -> impl Signal<Item=bool> {
    map_ref! {
        let username = form.username.signal_cloned(),
        let password = form.password.signal_cloned() =>
        !Credentials { username: username.clone(), password: password.clone() }.is_submittable()
    }
}
