// ============================================================================
// SESSION STATE - Flag de autenticación derivado del storage
// ============================================================================
// El flag se calcula una vez (presencia de `app-auth`) y queda cacheado para
// ambos resultados. Solo `invalidate()` fuerza a releer el storage, p.ej.
// tras login/logout. Cambios externos al storage no se detectan.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::utils::constants::KEY_AUTH;
use crate::utils::storage::AppStorage;
use crate::utils::utility::is_present;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    NotSet,
    Authenticated,
    NotAuthenticated,
}

/// Estado de sesión; los clones comparten el mismo cache
#[derive(Clone)]
pub struct AppSession {
    storage: AppStorage,
    status: Rc<Cell<AuthStatus>>,
}

impl AppSession {
    pub fn new(storage: AppStorage) -> Self {
        Self {
            storage,
            status: Rc::new(Cell::new(AuthStatus::NotSet)),
        }
    }

    pub fn status(&self) -> AuthStatus {
        self.status.get()
    }

    pub fn is_authenticated(&self) -> bool {
        if self.status.get() == AuthStatus::NotSet {
            let status = if is_present(self.storage.get(KEY_AUTH).as_ref()) {
                AuthStatus::Authenticated
            } else {
                AuthStatus::NotAuthenticated
            };
            log::debug!("🔐 [SESSION] Estado calculado: {:?}", status);
            self.status.set(status);
        }

        self.status.get() == AuthStatus::Authenticated
    }

    /// Olvida el valor cacheado; la próxima consulta relee el storage
    pub fn invalidate(&self) {
        self.status.set(AuthStatus::NotSet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::storage::MemoryStorage;
    use serde_json::json;

    fn session() -> (AppSession, AppStorage) {
        let storage = AppStorage::new(Rc::new(MemoryStorage::new()));
        (AppSession::new(storage.clone()), storage)
    }

    #[test]
    fn starts_not_set() {
        let (session, _) = session();
        assert_eq!(session.status(), AuthStatus::NotSet);
    }

    #[test]
    fn authenticated_is_cached() {
        let (session, storage) = session();
        storage.set(KEY_AUTH, json!(true));

        assert!(session.is_authenticated());
        storage.remove(KEY_AUTH);
        assert!(session.is_authenticated());
        assert_eq!(session.status(), AuthStatus::Authenticated);
    }

    #[test]
    fn not_authenticated_is_cached_too() {
        let (session, storage) = session();

        assert!(!session.is_authenticated());
        storage.set(KEY_AUTH, json!(true));
        assert!(!session.is_authenticated());
        assert_eq!(session.status(), AuthStatus::NotAuthenticated);
    }

    #[test]
    fn null_auth_value_is_not_present() {
        let (session, storage) = session();
        storage.set(KEY_AUTH, serde_json::Value::Null);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn invalidate_rereads_storage() {
        let (session, storage) = session();
        assert!(!session.is_authenticated());

        storage.set(KEY_AUTH, json!("yes"));
        session.invalidate();
        assert!(session.is_authenticated());
    }

    #[test]
    fn clones_share_cache() {
        let (session, storage) = session();
        let other = session.clone();
        storage.set(KEY_AUTH, json!(1));

        assert!(session.is_authenticated());
        storage.remove(KEY_AUTH);
        assert!(other.is_authenticated());
    }
}
