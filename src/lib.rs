#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod config;
pub mod content;
pub mod motion;
pub mod nav;
pub mod overlay;
pub mod progress;
pub mod scroll;
pub mod scroll_lock;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("couldn't install console logger: {e}").into());
    }
    leptos::mount::hydrate_body(App);
}
