use std::fmt;
use std::sync::Arc;

use crate::core::{BubbleNode, Color, VennRegionNode, format_value};
use crate::interaction::ActiveFlag;
use crate::render::{ArcElement, BubbleElement, LabelElement, OuterLabelElement};

pub const DEFAULT_ARC_STROKE_WIDTH: f64 = 3.0;
pub const DEFAULT_LABEL_FONT_SIZE_PX: f64 = 14.0;
pub const DEFAULT_OUTER_LABEL_FONT_SIZE_PX: f64 = 12.0;
pub const DEFAULT_LABEL_FILL: Color = Color::rgb(1.0, 1.0, 1.0);
/// Stronger darkening for the actively highlighted arc stroke.
pub const ACTIVE_STROKE_DARKEN: f64 = 0.8;
pub const RESTING_STROKE_DARKEN: f64 = 0.5;

/// Caller-supplied stroke resolver, called with
/// `(dataset, index, active, hovered)`. When present it fully replaces the
/// computed darkened-fill default.
pub type StrokeResolver = Arc<dyn Fn(&[VennRegionNode], usize, ActiveFlag, bool) -> Color + Send + Sync>;

/// Caller stroke customization. The resolver form always wins over the
/// static form, which wins over the computed default.
#[derive(Clone)]
pub enum StrokeSpec {
    Static(Color),
    Resolver(StrokeResolver),
}

impl StrokeSpec {
    #[must_use]
    pub fn resolver<F>(resolver: F) -> Self
    where
        F: Fn(&[VennRegionNode], usize, ActiveFlag, bool) -> Color + Send + Sync + 'static,
    {
        Self::Resolver(Arc::new(resolver))
    }
}

impl fmt::Debug for StrokeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(color) => f.debug_tuple("Static").field(color).finish(),
            Self::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

/// Caller customization of the arc primitive.
///
/// Unset props take the coordinator's computed values; set props are
/// preserved and take precedence per the table on each compose function.
#[derive(Debug, Clone, Default)]
pub struct ArcTemplate {
    /// Explicit fill override; wins entirely over the assigned color.
    pub fill: Option<Color>,
    pub stroke: Option<StrokeSpec>,
    pub stroke_width: Option<f64>,
}

/// Caller customization of the bubble primitive.
#[derive(Debug, Clone, Default)]
pub struct BubbleTemplate {
    pub stroke: Option<Color>,
    pub opacity: Option<f64>,
}

/// Caller customization of inner labels (bubble and venn).
#[derive(Debug, Clone, Default)]
pub struct LabelTemplate {
    pub fill: Option<Color>,
    pub font_size_px: Option<f64>,
}

/// Caller customization of the venn outer label.
#[derive(Debug, Clone, Default)]
pub struct OuterLabelTemplate {
    pub fill: Option<Color>,
    pub font_size_px: Option<f64>,
}

/// Coordinator-owned props injected into one composed arc.
pub(crate) struct ArcContext<'a> {
    pub dataset: &'a [VennRegionNode],
    pub index: usize,
    pub id: String,
    pub assigned_fill: Color,
    pub active: ActiveFlag,
    pub hovered: bool,
    pub animated: bool,
    pub disabled: bool,
}

/// Merges caller arc props with coordinator-owned props.
///
/// Precedence: fill = caller override, else assigned color; stroke =
/// caller resolver fn, else caller static, else fill darkened by
/// `ACTIVE_STROKE_DARKEN` when active and `RESTING_STROKE_DARKEN`
/// otherwise. Total over well-formed templates.
pub(crate) fn compose_arc(
    template: &ArcTemplate,
    node: &VennRegionNode,
    ctx: ArcContext<'_>,
) -> ArcElement {
    let fill = template.fill.unwrap_or(ctx.assigned_fill);
    let stroke = match &template.stroke {
        Some(StrokeSpec::Resolver(resolver)) => {
            resolver(ctx.dataset, ctx.index, ctx.active, ctx.hovered)
        }
        Some(StrokeSpec::Static(color)) => *color,
        None => fill.darken(if ctx.active.is_active() {
            ACTIVE_STROKE_DARKEN
        } else {
            RESTING_STROKE_DARKEN
        }),
    };

    ArcElement {
        id: ctx.id,
        key: node.data.key.clone(),
        arc_path: node.arc_path.clone(),
        fill,
        stroke,
        stroke_width: template.stroke_width.unwrap_or(DEFAULT_ARC_STROKE_WIDTH),
        animated: ctx.animated,
        disabled: ctx.disabled,
        active: ctx.active,
        hovered: ctx.hovered,
        hover_key: node.data.key.clone(),
    }
}

pub(crate) fn compose_bubble(
    template: &BubbleTemplate,
    node: &BubbleNode,
    id: String,
    fill: Color,
    animated: bool,
) -> BubbleElement {
    BubbleElement {
        id,
        key: node.data.key.clone(),
        placement: node.placement,
        fill,
        stroke: template.stroke,
        opacity: template.opacity.unwrap_or(1.0),
        animated,
    }
}

pub(crate) fn compose_label(
    template: &LabelTemplate,
    key: Option<&str>,
    value: f64,
    anchor: crate::core::Point,
    id: String,
    animated: bool,
) -> LabelElement {
    LabelElement {
        id,
        key: key.map(str::to_owned),
        text: format_value(key, value),
        anchor,
        fill: template.fill.unwrap_or(DEFAULT_LABEL_FILL),
        font_size_px: template.font_size_px.unwrap_or(DEFAULT_LABEL_FONT_SIZE_PX),
        animated,
    }
}

pub(crate) fn compose_outer_label(
    template: &OuterLabelTemplate,
    node: &VennRegionNode,
    anchor: crate::core::SetAnchor,
    id: String,
    animated: bool,
) -> OuterLabelElement {
    let text = node
        .data
        .sets
        .first()
        .cloned()
        .unwrap_or_else(|| format_value(node.data.key.as_deref(), node.data.size));
    OuterLabelElement {
        id,
        key: node.data.key.clone(),
        text,
        anchor,
        fill: template.fill.unwrap_or(DEFAULT_LABEL_FILL),
        font_size_px: template
            .font_size_px
            .unwrap_or(DEFAULT_OUTER_LABEL_FONT_SIZE_PX),
        animated,
    }
}
