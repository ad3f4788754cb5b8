use web_sys::Storage;

use shared::constants::STORAGE_TOKEN_KEY;
use shared::controller::TokenStore;
use shared::types::Token;

#[derive(Clone, Copy, Default)]
pub struct LocalTokenStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .and_then(|s| s)
}

impl TokenStore for LocalTokenStore {
    fn get(&self) -> Option<Token> {
        local_storage()
            .and_then(|storage| storage.get_item(STORAGE_TOKEN_KEY).ok())
            .and_then(|value| value)
            .filter(|value| !value.is_empty())
    }

    fn set(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if let Err(err) = storage.set_item(STORAGE_TOKEN_KEY, token) {
                    log::error!("token store: {:?}", err);
                }
            }
            None => log::error!("token store: local storage unavailable"),
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            if let Err(err) = storage.remove_item(STORAGE_TOKEN_KEY) {
                log::error!("token store: {:?}", err);
            }
        }
    }
}
