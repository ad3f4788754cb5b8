use crate::elements::app_root::app_root;

mod elements;
mod utils;
mod constants;
mod state;
mod types;
mod router;
mod token_store;
mod connect_fetch;
pub mod loader;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("articles client started");
    dominator::append_dom(&dominator::body(), app_root());
}
