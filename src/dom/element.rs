// ============================================================================
// ELEMENT HELPERS - Acceso mínimo al DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Obtener document
pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Obtener elemento por ID
pub fn get_element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

/// Verificar si tiene clase
pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Reemplaza `from` por `to` solo si `from` está presente
pub fn swap_class(element: &Element, from: &str, to: &str) -> Result<bool, JsValue> {
    if !has_class(element, from) {
        return Ok(false);
    }
    let classes = element.class_list();
    classes.remove_1(from)?;
    classes.add_1(to)?;
    Ok(true)
}
