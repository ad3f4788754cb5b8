use dominator::{Dom, EventOptions, events, html};
use futures_signals::signal::SignalExt;

use shared::routes::Route;

use crate::constants::{PROP_ID, TAG_BUTTON, TAG_DIV};
use crate::loader::logout;
use crate::router::{go_to, route_signal};

fn css_class(label: &str) -> String {
    format!("app-header__{label}")
}

pub fn app_header() -> Dom {
    html!("nav", {
        .class(css_class("container"))
        .children([
            nav_link("loginScreen", "Login", Route::Login),
            nav_link("articlesScreen", "Articles", Route::Articles),
        ])
    })
}

pub fn logout_button() -> Dom {
    html!(TAG_DIV, {
        .class(css_class("logout"))
        .child(button("logout", "Logout from app", logout))
    })
}

fn nav_link(id: &str, label: &str, route: Route) -> Dom {
    html!("a", {
        .attr(PROP_ID, id)
        .attr("href", route.path())
        .class(css_class("link"))
        .class_signal("active", route_signal().map(move |current| current == route))
        .text(label)
        .event_with_options(&EventOptions::preventable(), move |e: events::Click| {
            e.prevent_default();
            go_to(route);
        })
    })
}

fn button(id: &str, label: &str, click: fn()) -> Dom {
    html!(TAG_BUTTON, {
        .attr(PROP_ID, id)
        .class(css_class("button"))
        .class(css_class("text"))
        .text(label)
        .event(move|_: events::Click|click())
    })
}
