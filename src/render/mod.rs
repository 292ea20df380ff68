mod elements;
mod scene;

pub use elements::{ArcElement, BubbleElement, LabelElement, OuterLabelElement, SceneElement};
pub use scene::{MotionSpec, MotionState, Scene, SceneGroup};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully composed, deterministic `Scene` so drawing code
/// remains isolated from series and interaction logic.
pub trait SceneRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()>;
}

/// No-op renderer used by tests and headless consumers.
///
/// It still validates scene content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_group_count: usize,
    pub last_element_count: usize,
}

impl SceneRenderer for NullRenderer {
    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.last_group_count = scene.groups.len();
        self.last_element_count = scene.element_count();
        Ok(())
    }
}
