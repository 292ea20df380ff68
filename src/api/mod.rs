mod bubble_series;
mod compose;
mod venn_series;

pub use bubble_series::BubbleSeries;
pub use compose::{
    ACTIVE_STROKE_DARKEN, ArcTemplate, BubbleTemplate, DEFAULT_ARC_STROKE_WIDTH,
    DEFAULT_LABEL_FILL, DEFAULT_LABEL_FONT_SIZE_PX, DEFAULT_OUTER_LABEL_FONT_SIZE_PX,
    LabelTemplate, OuterLabelTemplate, RESTING_STROKE_DARKEN, StrokeResolver, StrokeSpec,
};
pub use venn_series::VennSeries;

use crate::core::{BubbleNode, ColorScheme, VennRegionNode};

/// Immutable per-build configuration of one bubble series.
#[derive(Debug, Clone, Default)]
pub struct BubbleSeriesConfig {
    /// Id set by the parent chart; prefixes composed element ids.
    pub id: String,
    /// Pre-computed nodes from the external packing engine, in draw order.
    pub data: Vec<BubbleNode>,
    pub color_scheme: ColorScheme,
    pub animated: bool,
    pub bubble: BubbleTemplate,
    pub label: LabelTemplate,
}

impl BubbleSeriesConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, data: Vec<BubbleNode>) -> Self {
        Self {
            id: id.into(),
            data,
            color_scheme: ColorScheme::default(),
            animated: true,
            bubble: BubbleTemplate::default(),
            label: LabelTemplate::default(),
        }
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_bubble(mut self, bubble: BubbleTemplate) -> Self {
        self.bubble = bubble;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelTemplate) -> Self {
        self.label = label;
        self
    }
}

/// Immutable per-build configuration of one venn series.
#[derive(Debug, Clone)]
pub struct VennSeriesConfig {
    pub id: String,
    /// Pre-computed regions from the external venn layout engine.
    pub data: Vec<VennRegionNode>,
    pub color_scheme: ColorScheme,
    pub animated: bool,
    /// Disabled series compose inert arcs and ignore pointer activation.
    pub disabled: bool,
    pub arc: ArcTemplate,
    pub label: LabelTemplate,
    /// Outer labels are composed only for single-set regions, and only when
    /// a template is configured here.
    pub outer_label: Option<OuterLabelTemplate>,
}

impl VennSeriesConfig {
    #[must_use]
    pub fn new(id: impl Into<String>, data: Vec<VennRegionNode>) -> Self {
        Self {
            id: id.into(),
            data,
            color_scheme: ColorScheme::default(),
            animated: true,
            disabled: false,
            arc: ArcTemplate::default(),
            label: LabelTemplate::default(),
            outer_label: Some(OuterLabelTemplate::default()),
        }
    }

    #[must_use]
    pub fn with_color_scheme(mut self, scheme: ColorScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    #[must_use]
    pub fn with_animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_arc(mut self, arc: ArcTemplate) -> Self {
        self.arc = arc;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelTemplate) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_outer_label(mut self, outer_label: Option<OuterLabelTemplate>) -> Self {
        self.outer_label = outer_label;
        self
    }
}
