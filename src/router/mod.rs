// ============================================================================
// ROUTER MODULE - Rutas, pipeline de navegación y sus pasos
// ============================================================================

pub mod core;
pub mod pipeline;
pub mod steps;

pub use self::core::{default_routes, NavigationType, Router, RouterError};
pub use pipeline::{Next, Pipeline, PipelineSlot, PipelineStep, Proceed};
pub use steps::{PagePostRender, PagePreActivate, PagePreRender};
