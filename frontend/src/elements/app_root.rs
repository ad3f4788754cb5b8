use dominator::{Dom, html};
use futures_signals::signal::SignalExt;

use shared::routes::Route;

use crate::constants::{APP_TITLE, PROP_ID, TAG_DIV, TAG_H1};
use crate::elements::app_articles::articles_page;
use crate::elements::app_header::{app_header, logout_button};
use crate::elements::app_login::login_page;
use crate::elements::app_message::{message_banner, spinner};
use crate::router::route_signal;
use crate::state::SESSION;

fn css_class(label: &str) -> String {
    format!("app-root__{label}")
}

pub fn app_root() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("container"))
        .children([
            spinner(),
            message_banner(),
            logout_button(),
            html!(TAG_DIV, {
                .attr(PROP_ID, "wrapper")
                .class(css_class("wrapper"))
                .style_signal("opacity", SESSION.signal_ref(|s| if s.spinner_on { "0.25" } else { "1" }))
                .children([
                    html!(TAG_H1, { .text(APP_TITLE) }),
                    app_header(),
                ])
                .child_signal(route_signal().map(|route| {
                    match route {
                        Route::Login => Some(login_page()),
                        Route::Articles => Some(articles_page()),
                    }
                }))
            }),
        ])
    })
}
