use serde::{Deserialize, Serialize};

use crate::core::TransitionConfig;
use crate::error::{ChartError, ChartResult};
use crate::render::SceneElement;

/// Scale/opacity snapshot for the entrance animation of one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionState {
    pub scale: f64,
    pub opacity: f64,
}

impl MotionState {
    #[must_use]
    pub const fn new(scale: f64, opacity: f64) -> Self {
        Self { scale, opacity }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ChartError::InvalidScene(
                "motion scale must be finite and >= 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidScene(
                "motion opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Entrance animation contract for one group: animate `initial -> animate`
/// under `transition`. Leaves must render the `animate` state immediately
/// when the transition is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionSpec {
    pub initial: MotionState,
    pub animate: MotionState,
    pub transition: TransitionConfig,
}

impl MotionSpec {
    /// Venn entrance: grow from nothing.
    #[must_use]
    pub const fn grow_in(transition: TransitionConfig) -> Self {
        Self {
            initial: MotionState::new(0.0, 0.0),
            animate: MotionState::new(1.0, 1.0),
            transition,
        }
    }

    /// Bubble entrance: pop from half scale.
    #[must_use]
    pub const fn pop_in(transition: TransitionConfig) -> Self {
        Self {
            initial: MotionState::new(0.5, 0.0),
            animate: MotionState::new(1.0, 1.0),
            transition,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.initial.validate()?;
        self.animate.validate()
    }
}

/// One keyed, animated group of composed elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    /// Reconciliation key; `None` when the source node carried no key.
    pub key: Option<String>,
    pub motion: MotionSpec,
    pub elements: Vec<SceneElement>,
}

impl SceneGroup {
    #[must_use]
    pub fn new(key: Option<String>, motion: MotionSpec) -> Self {
        Self {
            key,
            motion,
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_element(mut self, element: SceneElement) -> Self {
        self.elements.push(element);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.motion.validate()?;
        for element in &self.elements {
            element.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene for one series draw pass.
///
/// Group order is draw order; the venn coordinator emits all arc groups
/// before any label group so labels layer above arcs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub groups: Vec<SceneGroup>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_group(mut self, group: SceneGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for group in &self.groups {
            group.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    #[must_use]
    pub fn element_count(&self) -> usize {
        self.groups.iter().map(|group| group.elements.len()).sum()
    }
}
