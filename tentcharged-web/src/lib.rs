#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod a11y;
pub mod app;
pub mod components;
pub mod data;
pub mod dom;
pub mod upload;

/// Log level baked in at build time through `TENTCHARGED_LOG`.
#[must_use]
pub fn log_level() -> log::Level {
    option_env!("TENTCHARGED_LOG")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log_level());
    yew::Renderer::<app::App>::new().render();
}
