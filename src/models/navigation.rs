use serde::{Deserialize, Serialize};

/// Entrada de la tabla de rutas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    pub route: String,
    pub name: String,
    pub module_id: Option<String>,
    pub title: Option<String>,
    pub nav: bool,
    /// Si está presente, la ruta redirige a este fragmento
    pub redirect: Option<String>,
}

impl RouteConfig {
    pub fn page(route: &str, module_id: &str, title: &str) -> Self {
        Self {
            route: route.to_string(),
            name: route.to_string(),
            module_id: Some(module_id.to_string()),
            title: Some(title.to_string()),
            nav: true,
            redirect: None,
        }
    }

    pub fn redirect(route: &str, target: &str) -> Self {
        Self {
            route: route.to_string(),
            name: route.to_string(),
            module_id: None,
            title: None,
            nav: false,
            redirect: Some(target.to_string()),
        }
    }
}

/// Navegación en curso: lo que reciben los pasos del pipeline
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationInstruction {
    /// Path sin `/` inicial
    pub fragment: String,
    /// Querystring sin `?`
    pub query_string: Option<String>,
    pub config: RouteConfig,
}

impl NavigationInstruction {
    /// `fragment?query` o solo `fragment`
    pub fn page_key(&self) -> String {
        match self.query_string.as_deref() {
            Some(qs) if !qs.is_empty() => format!("{}?{}", self.fragment, qs),
            _ => self.fragment.clone(),
        }
    }
}
