// ============================================================================
// ROUTER - Tabla de rutas + navegación con pipeline
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::AppConfig;
use crate::models::{NavigationInstruction, RouteConfig};
use crate::platform::History;
use crate::router::pipeline::Pipeline;

const MAX_REDIRECTS: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
    #[error("Redirect loop while resolving '{0}'")]
    RedirectLoop(String),
    #[error("History update failed: {0}")]
    History(String),
}

/// Push: navegación iniciada por la app. Pop: el navegador ya cambió la URL
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationType {
    Push,
    Pop,
}

/// Separa `"/profile?x=1#top"` en `("profile", Some("x=1"))`
pub fn split_url(url: &str) -> (String, Option<String>) {
    let without_hash = url.split('#').next().unwrap_or_default();
    let (path, query) = match without_hash.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (without_hash, None),
    };
    (path.trim_matches('/').to_string(), query.filter(|q| !q.is_empty()))
}

pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig::redirect("", "home"),
        RouteConfig::page("home", "routes/home/index-view", "My home"),
    ]
}

pub fn not_found_route() -> RouteConfig {
    RouteConfig {
        route: "not-found".to_string(),
        name: "not-found".to_string(),
        module_id: Some("routes/not-found-view".to_string()),
        title: Some("404 - Web page not found".to_string()),
        nav: false,
        redirect: None,
    }
}

pub struct Router {
    routes: Vec<RouteConfig>,
    not_found: RouteConfig,
    pipeline: Pipeline,
    history: Rc<dyn History>,
    config: AppConfig,
    current: RefCell<Option<NavigationInstruction>>,
}

impl Router {
    pub fn new(routes: Vec<RouteConfig>, pipeline: Pipeline, history: Rc<dyn History>, config: AppConfig) -> Self {
        Self {
            routes,
            not_found: not_found_route(),
            pipeline,
            history,
            config,
            current: RefCell::new(None),
        }
    }

    pub fn map_unknown_routes(mut self, route: RouteConfig) -> Self {
        self.not_found = route;
        self
    }

    pub fn routes(&self) -> &[RouteConfig] {
        &self.routes
    }

    pub fn current(&self) -> Option<NavigationInstruction> {
        self.current.borrow().clone()
    }

    /// Resuelve una URL a su ruta, siguiendo redirecciones
    pub fn resolve(&self, url: &str) -> Result<NavigationInstruction, RouterError> {
        let (mut fragment, query_string) = split_url(url);

        for _ in 0..MAX_REDIRECTS {
            let Some(route) = self.routes.iter().find(|r| r.route == fragment) else {
                return Ok(NavigationInstruction {
                    fragment,
                    query_string,
                    config: self.not_found.clone(),
                });
            };

            match &route.redirect {
                Some(target) => fragment = target.trim_matches('/').to_string(),
                None => {
                    return Ok(NavigationInstruction {
                        fragment,
                        query_string,
                        config: route.clone(),
                    })
                }
            }
        }

        Err(RouterError::RedirectLoop(url.to_string()))
    }

    /// Resuelve, actualiza el history, corre el pipeline y pone el título
    pub fn navigate(&self, url: &str, nav_type: NavigationType) -> Result<NavigationInstruction, RouterError> {
        let instruction = self.resolve(url)?;
        let target = format!("/{}", instruction.page_key());

        let (requested, _) = split_url(url);
        match nav_type {
            NavigationType::Push => self.history.push_state(&target),
            // Tras una redirección la URL visible debe ser la final
            NavigationType::Pop if requested != instruction.fragment => self.history.replace_state(&target),
            NavigationType::Pop => Ok(()),
        }
        .map_err(RouterError::History)?;

        log::info!("🧭 [ROUTER] {} → {} ({})", url, target, instruction.config.name);
        self.pipeline.run(&instruction);

        self.history
            .set_title(&self.config.page_title(instruction.config.title.as_deref()));
        *self.current.borrow_mut() = Some(instruction.clone());

        Ok(instruction)
    }

    /// Push salvo que la URL ya sea la actual. Si resuelve a la instrucción
    /// vigente no navega: ni history ni pipeline.
    pub fn push(&self, url: &str) -> Result<NavigationInstruction, RouterError> {
        if let Some(current) = self.current() {
            let instruction = self.resolve(url)?;
            if instruction.page_key() == current.page_key() {
                log::debug!("🧭 [ROUTER] {} ya es la página actual", url);
                return Ok(current);
            }
        }

        let nav_type = if split_url(&self.history.current_url()) == split_url(url) {
            NavigationType::Pop
        } else {
            NavigationType::Push
        };
        self.navigate(url, nav_type)
    }

    /// Navega a la URL que ya muestra el navegador (carga inicial, popstate)
    pub fn load_current(&self) -> Result<NavigationInstruction, RouterError> {
        let url = self.history.current_url();
        self.navigate(&url, NavigationType::Pop)
    }
}
