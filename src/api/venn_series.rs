use tracing::{debug, trace};

use crate::core::{Keyed, VennRegionNode, assign_color, resolve_transition};
use crate::interaction::HighlightState;
use crate::render::{MotionSpec, Scene, SceneElement, SceneGroup};

use super::VennSeriesConfig;
use super::compose::{ArcContext, compose_arc, compose_label, compose_outer_label};

/// Coordinator for one venn series; exclusively owns its highlight state.
///
/// Pointer events arrive as discrete transitions (`pointer_enter` /
/// `pointer_leave`) and the scene is rebuilt synchronously afterwards, so
/// every arc sees a consistent hovered/active view. Two instances never
/// share state even when their region keys collide.
#[derive(Debug, Clone)]
pub struct VennSeries {
    config: VennSeriesConfig,
    highlight: HighlightState,
}

impl VennSeries {
    #[must_use]
    pub fn new(config: VennSeriesConfig) -> Self {
        Self {
            config,
            highlight: HighlightState::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &VennSeriesConfig {
        &self.config
    }

    #[must_use]
    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }

    /// Replaces the region array. Highlight state is kept as-is: stale
    /// active keys simply stop matching until the next pointer event.
    pub fn set_data(&mut self, data: Vec<VennRegionNode>) {
        self.config.data = data;
    }

    /// Pointer entered the region identified by `key`.
    ///
    /// Activates every region whose key contains `key` as a substring.
    /// Ignored while the series is disabled, keeping the no-highlight
    /// guarantee independent of leaf behavior.
    pub fn pointer_enter(&mut self, key: &str) {
        if self.config.disabled {
            trace!(key, "pointer enter ignored on disabled series");
            return;
        }
        self.highlight.activate(&self.config.data, key);
    }

    /// Pointer left the series; resets to idle from any state.
    pub fn pointer_leave(&mut self) {
        self.highlight.leave();
    }

    /// Composes the scene for the current data array and highlight state.
    ///
    /// Two full passes over the data: every arc group is emitted before any
    /// label group, so labels layer visually above all arcs regardless of
    /// region order. Total over well-formed input; never fails.
    #[must_use]
    pub fn build_scene(&self) -> Scene {
        let config = &self.config;
        let transition = resolve_transition(config.animated);

        let mut scene = Scene::new();
        for (index, node) in config.data.iter().enumerate() {
            let assigned_fill =
                assign_color(&config.data, &config.color_scheme, Some(node), index);
            let active = self.highlight.flag_for(node.key());
            let hovered = self.highlight.is_hovered(node.key());

            let arc = compose_arc(
                &config.arc,
                node,
                ArcContext {
                    dataset: &config.data,
                    index,
                    id: format!("arc-{}-{index}", config.id),
                    assigned_fill,
                    active,
                    hovered,
                    animated: config.animated,
                    disabled: config.disabled,
                },
            );
            scene = scene.with_group(
                SceneGroup::new(node.data.key.clone(), MotionSpec::grow_in(transition))
                    .with_element(SceneElement::Arc(arc)),
            );
        }

        for (index, node) in config.data.iter().enumerate() {
            let mut group =
                SceneGroup::new(node.data.key.clone(), MotionSpec::grow_in(transition))
                    .with_element(SceneElement::Label(compose_label(
                        &config.label,
                        node.data.key.as_deref(),
                        node.data.size,
                        node.label_anchor,
                        format!("label-{}-{index}", config.id),
                        config.animated,
                    )));

            if let (Some(anchor), Some(outer_label)) = (node.set_anchor, &config.outer_label) {
                group = group.with_element(SceneElement::OuterLabel(compose_outer_label(
                    outer_label,
                    node,
                    anchor,
                    format!("outer-label-{}-{index}", config.id),
                    config.animated,
                )));
            }
            scene = scene.with_group(group);
        }

        debug!(
            series = %config.id,
            groups = scene.groups.len(),
            hovered = ?self.highlight.hovered(),
            active_count = self.highlight.active_keys().len(),
            "built venn scene"
        );
        scene
    }
}
