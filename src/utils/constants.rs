// Claves de localStorage
pub const KEY_AUTH: &str = "app-auth";
pub const KEY_PREVIOUS_PAGE: &str = "app-previous-page";
pub const KEY_CURRENT_PAGE: &str = "app-current-page";
pub const KEY_VERSION: &str = "app-version";
pub const KEY_TOKEN: &str = "token";

// Destinos de redirección ante fallos HTTP
pub const ROUTE_LOGOUT: &str = "/logout";
pub const ROUTE_UNAUTHORIZED: &str = "/unauthorized";
pub const ROUTE_SYSTEM_ERROR: &str = "/system-error";

// Headers
pub const REQUESTED_WITH: &str = "Fetch";
pub const CACHE_EXPIRES: &str = "Sun, 11 Mar 1984 12:00:00 GMT";

// El loader queda visible al menos un frame antes de ocultarse
pub const LOADER_HIDE_DELAY_MS: u32 = 150;

pub const UPDATE_RELEASED_MSG: &str =
    r#"<a href="javascript: location.reload();" >An update was released. Click HERE to refresh.</a>"#;
