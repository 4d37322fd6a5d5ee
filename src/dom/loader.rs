// ============================================================================
// LOADER - Overlay #site-loader entre navegaciones
// ============================================================================

use super::element::{get_element_by_id, swap_class};
use crate::platform::Overlay;

const LOADER_ID: &str = "site-loader";
const CLASS_SHOW: &str = "aurelia-show";
const CLASS_HIDE: &str = "aurelia-hide";

#[derive(Clone, Copy, Default)]
pub struct Loader;

impl Loader {
    fn swap(from: &str, to: &str) {
        // Páginas sin loader: no hay nada que hacer
        let Some(loader) = get_element_by_id(LOADER_ID) else {
            return;
        };
        if let Err(e) = swap_class(&loader, from, to) {
            log::warn!("⚠️ [LOADER] No se pudo cambiar {} → {}: {:?}", from, to, e);
        }
    }
}

impl Overlay for Loader {
    fn show(&self) {
        Self::swap(CLASS_HIDE, CLASS_SHOW);
    }

    fn hide(&self) {
        Self::swap(CLASS_SHOW, CLASS_HIDE);
    }
}
