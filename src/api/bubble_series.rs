use tracing::debug;

use crate::core::{assign_color, resolve_transition};
use crate::render::{MotionSpec, Scene, SceneElement, SceneGroup};

use super::BubbleSeriesConfig;
use super::compose::{compose_bubble, compose_label};

/// Stateless coordinator for one packed-bubble series.
///
/// Walks the pre-computed node array in input order and composes one keyed
/// group per node: a bubble primitive plus its label, both carrying the
/// assigned fill and the series-wide animation contract. Hover and click
/// are delegated entirely to the leaf primitives; no interactive state
/// lives here.
#[derive(Debug, Clone)]
pub struct BubbleSeries {
    config: BubbleSeriesConfig,
}

impl BubbleSeries {
    #[must_use]
    pub fn new(config: BubbleSeriesConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &BubbleSeriesConfig {
        &self.config
    }

    pub fn set_data(&mut self, data: Vec<crate::core::BubbleNode>) {
        self.config.data = data;
    }

    /// Composes the scene for the current data array.
    ///
    /// Total over well-formed input: duplicate keys are a caller contract
    /// violation (downstream keyed reconciliation becomes undefined) but
    /// still produce one group per node without failing.
    #[must_use]
    pub fn build_scene(&self) -> Scene {
        let config = &self.config;
        let transition = resolve_transition(config.animated);

        let mut scene = Scene::new();
        for (index, node) in config.data.iter().enumerate() {
            let fill = assign_color(&config.data, &config.color_scheme, Some(node), index);

            let group = SceneGroup::new(node.data.key.clone(), MotionSpec::pop_in(transition))
                .with_element(SceneElement::Bubble(compose_bubble(
                    &config.bubble,
                    node,
                    format!("{}-bubble", config.id),
                    fill,
                    config.animated,
                )))
                .with_element(SceneElement::Label(compose_label(
                    &config.label,
                    node.data.key.as_deref(),
                    node.data.value,
                    node.placement.center,
                    format!("{}-label", config.id),
                    config.animated,
                )));
            scene = scene.with_group(group);
        }

        debug!(
            series = %config.id,
            groups = scene.groups.len(),
            "built bubble scene"
        );
        scene
    }
}
