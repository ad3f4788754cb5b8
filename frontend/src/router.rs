use dominator::routing;
use futures_signals::signal::{Signal, SignalExt};

use shared::routes::Route;

fn route_from_url(url: &str) -> Route {
    web_sys::Url::new(url)
        .map(|url| Route::from_path(&url.pathname()))
        .unwrap_or_default()
}

pub fn route_signal() -> impl Signal<Item=Route> {
    routing::url().signal_ref(|url| route_from_url(url)).dedupe()
}

pub fn go_to(route: Route) {
    log::debug!("go_to: {}", route.path());
    routing::go_to_url(route.path());
}
