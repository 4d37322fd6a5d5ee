// ============================================================================
// STORAGE - Puerto clave/valor sobre localStorage
// ============================================================================
// Todos los valores viajan como JSON. Los fallos del medio (modo privado,
// cuota llena, JSON corrupto) se registran y se tragan: `get` devuelve None
// y las escrituras son no-op.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::utils::constants::*;

/// Capacidad get/set/remove/clear que reciben los consumidores
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<Value>;
    fn set(&self, key: &str, value: Value);
    fn remove(&self, key: &str);
    fn clear_all(&self);
}

/// Backend en memoria (tests y hosts sin navegador)
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<Map<String, Value>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries
            .borrow()
            .get(key)
            .filter(|value| !value.is_null())
            .cloned()
    }

    fn set(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }

    fn clear_all(&self) {
        self.entries.borrow_mut().clear();
    }
}

/// Backend de navegador sobre `window.localStorage`
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<Value> {
        use gloo_storage::{LocalStorage, Storage};

        match LocalStorage::get::<Value>(key) {
            Ok(Value::Null) => None,
            Ok(value) => Some(value),
            Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => None,
            Err(e) => {
                log::warn!("⚠️ [STORAGE] No se pudo leer '{}': {}", key, e);
                None
            }
        }
    }

    fn set(&self, key: &str, value: Value) {
        use gloo_storage::{LocalStorage, Storage};

        if let Err(e) = LocalStorage::set(key, &value) {
            log::warn!("⚠️ [STORAGE] No se pudo guardar '{}': {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::delete(key);
    }

    fn clear_all(&self) {
        use gloo_storage::{LocalStorage, Storage};

        LocalStorage::clear();
    }
}

/// Fachada con las claves conocidas de la app
#[derive(Clone)]
pub struct AppStorage {
    store: Rc<dyn KeyValueStore>,
}

impl AppStorage {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.store.get(key)
    }

    pub fn set(&self, key: &str, value: Value) {
        self.store.set(key, value);
    }

    /// None borra la clave (un valor ausente no se persiste)
    pub fn set_opt(&self, key: &str, value: Option<Value>) {
        match value {
            Some(value) => self.store.set(key, value),
            None => self.store.remove(key),
        }
    }

    pub fn remove(&self, key: &str) {
        self.store.remove(key);
    }

    pub fn clear_all(&self) {
        log::info!("🧹 [STORAGE] Limpiando todo el storage");
        self.store.clear_all();
    }

    /// Leer y deserializar; None si falta o no encaja en `T`
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.store.get(key)?;
        serde_json::from_value(value)
            .map_err(|e| log::warn!("⚠️ [STORAGE] Valor inválido en '{}': {}", key, e))
            .ok()
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(json) => self.store.set(key, json),
            Err(e) => log::error!("❌ [STORAGE] Error serializando '{}': {}", key, e),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.load(KEY_TOKEN)
    }

    pub fn current_page(&self) -> Option<String> {
        self.load(KEY_CURRENT_PAGE)
    }

    pub fn previous_page(&self) -> Option<String> {
        self.load(KEY_PREVIOUS_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn memory_storage_round_trips_json() {
        let storage = MemoryStorage::new();
        storage.set("k", json!({ "a": 1 }));
        assert_eq!(storage.get("k"), Some(json!({ "a": 1 })));

        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }

    #[test]
    fn null_reads_as_absent() {
        let storage = MemoryStorage::new();
        storage.set("k", Value::Null);
        assert_eq!(storage.get("k"), None);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn clear_all_empties_shared_handles() {
        let storage = MemoryStorage::new();
        let handle = storage.clone();
        storage.set("a", json!(1));
        storage.set("b", json!(2));

        handle.clear_all();
        assert!(storage.is_empty());
    }

    #[test]
    fn set_opt_none_removes_key() {
        let memory = MemoryStorage::new();
        let storage = AppStorage::new(Rc::new(memory.clone()));
        storage.set(KEY_PREVIOUS_PAGE, json!("home"));

        storage.set_opt(KEY_PREVIOUS_PAGE, None);
        assert!(memory.is_empty());
    }

    #[test]
    fn load_rejects_mismatched_type() {
        let storage = AppStorage::new(Rc::new(MemoryStorage::new()));
        storage.set(KEY_TOKEN, json!(42));
        assert_eq!(storage.token(), None);

        storage.save(KEY_TOKEN, &"abc");
        assert_eq!(storage.token(), Some("abc".to_string()));
    }
}
