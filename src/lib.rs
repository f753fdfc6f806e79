#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod contact;
#[cfg(feature = "ssr")]
pub mod delivery;
pub mod nav;
pub mod portfolio;
pub mod site;
pub mod theme;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("logger should only be set once");
    leptos::mount::hydrate_body(App);
}
