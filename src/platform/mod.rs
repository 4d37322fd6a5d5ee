// Puertos hacia el navegador, con implementación web solo en wasm32

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod overlay;
pub mod traits;

pub use overlay::with_overlay;
pub use traits::*;
