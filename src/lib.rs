#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod assets;
pub mod gallery;
pub mod i18n;
pub mod loading;
pub mod parallax;
pub mod projects;
pub mod scroll;
pub mod selection;
pub mod work;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init (hot reload) only fails to replace the logger
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
