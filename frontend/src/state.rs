use futures_signals::signal::Mutable;
use once_cell::sync::Lazy;

use shared::controller::{SessionHost, TokenStore};
use shared::routes::Route;
use shared::session::Session;

use crate::router::go_to;
use crate::token_store::LocalTokenStore;

pub static SESSION: Lazy<Mutable<Session>> = Lazy::new(|| {
    Mutable::new(Session::with_token(LocalTokenStore.get()))
});

/// Publishes controller transitions to the signals the views listen to.
#[derive(Clone, Copy, Default)]
pub struct DomHost;

impl SessionHost for DomHost {
    fn session(&self) -> Session {
        SESSION.get_cloned()
    }

    fn replace(&self, session: Session) {
        SESSION.set_neq(session);
    }

    fn navigate(&self, route: Route) {
        go_to(route);
    }
}
