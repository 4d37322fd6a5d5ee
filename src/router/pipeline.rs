// ============================================================================
// PIPELINE - Pasos que el router ejecuta en cada navegación
// ============================================================================
// Orden fijo: PreActivate → PreRender → PostRender. Cada paso recibe un
// `Next` de un solo uso y debe devolver el `Proceed` que produce
// `next.proceed()`: el tipo garantiza que la continuación se llama
// exactamente una vez y que ningún paso puede abortar la navegación.
// ============================================================================

use std::rc::Rc;

use crate::models::NavigationInstruction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineSlot {
    PreActivate,
    PreRender,
    PostRender,
}

impl PipelineSlot {
    pub const ORDER: [PipelineSlot; 3] = [
        PipelineSlot::PreActivate,
        PipelineSlot::PreRender,
        PipelineSlot::PostRender,
    ];
}

/// Continuación de un paso; se consume al llamarla
#[derive(Debug)]
#[must_use = "un paso debe llamar next.proceed()"]
pub struct Next {
    slot: PipelineSlot,
}

impl Next {
    pub fn proceed(self) -> Proceed {
        Proceed { slot: self.slot }
    }
}

/// Prueba de que el paso llamó a su continuación
#[derive(Debug)]
pub struct Proceed {
    slot: PipelineSlot,
}

pub trait PipelineStep {
    fn name(&self) -> &'static str;

    fn run(&self, instruction: &NavigationInstruction, next: Next) -> Proceed;
}

#[derive(Clone, Default)]
pub struct Pipeline {
    steps: Vec<(PipelineSlot, Rc<dyn PipelineStep>)>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Varios pasos en el mismo slot corren en orden de registro
    pub fn add_step(mut self, slot: PipelineSlot, step: Rc<dyn PipelineStep>) -> Self {
        self.steps.push((slot, step));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Ejecuta todos los pasos; devuelve sus nombres en orden de ejecución
    pub fn run(&self, instruction: &NavigationInstruction) -> Vec<&'static str> {
        let mut trace = Vec::with_capacity(self.steps.len());

        for slot in PipelineSlot::ORDER {
            for (_, step) in self.steps.iter().filter(|(s, _)| *s == slot) {
                log::debug!("🧭 [PIPELINE] {:?} → {} ({})", slot, step.name(), instruction.fragment);
                let proceed = step.run(instruction, Next { slot });
                debug_assert_eq!(proceed.slot, slot);
                trace.push(step.name());
            }
        }

        trace
    }
}
