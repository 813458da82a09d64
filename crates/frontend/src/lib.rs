pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match shared::config::load_config(None) {
        Ok(config) => log::info!(
            "Admin list core ready, {} resources configured",
            config.resources.len()
        ),
        Err(e) => log::error!("Configuration error: {}", e),
    }
}
