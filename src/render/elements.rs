use serde::{Deserialize, Serialize};

use crate::core::{CirclePlacement, Color, Point, SetAnchor};
use crate::error::{ChartError, ChartResult};
use crate::interaction::ActiveFlag;

/// Composed venn arc descriptor handed to the external arc primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcElement {
    pub id: String,
    pub key: Option<String>,
    /// Opaque outline path from the layout engine, passed through untouched.
    pub arc_path: String,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub animated: bool,
    pub disabled: bool,
    pub active: ActiveFlag,
    pub hovered: bool,
    /// Key a host feeds back into `VennSeries::pointer_enter` when the
    /// pointer enters this arc. `None` when the region has no key, in which
    /// case hovering it never highlights anything.
    pub hover_key: Option<String>,
}

impl ArcElement {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.stroke_width.is_finite() || self.stroke_width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "arc `{}` stroke width must be finite and > 0",
                self.id
            )));
        }
        self.fill.validate()?;
        self.stroke.validate()
    }
}

/// Composed bubble descriptor handed to the external bubble primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleElement {
    pub id: String,
    pub key: Option<String>,
    pub placement: CirclePlacement,
    pub fill: Color,
    pub stroke: Option<Color>,
    pub opacity: f64,
    pub animated: bool,
}

impl BubbleElement {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.placement.center.is_finite()
            || !self.placement.radius.is_finite()
            || self.placement.radius < 0.0
        {
            return Err(ChartError::InvalidData(format!(
                "bubble `{}` placement must be finite with radius >= 0",
                self.id
            )));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(format!(
                "bubble `{}` opacity must be finite and in [0, 1]",
                self.id
            )));
        }
        self.fill.validate()?;
        if let Some(stroke) = self.stroke {
            stroke.validate()?;
        }
        Ok(())
    }
}

/// Composed inner-label descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelElement {
    pub id: String,
    pub key: Option<String>,
    pub text: String,
    pub anchor: Point,
    pub fill: Color,
    pub font_size_px: f64,
    pub animated: bool,
}

impl LabelElement {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "label `{}` anchor must be finite",
                self.id
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "label `{}` font size must be finite and > 0",
                self.id
            )));
        }
        self.fill.validate()
    }
}

/// Composed outer-label descriptor; only single-set venn regions get one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OuterLabelElement {
    pub id: String,
    pub key: Option<String>,
    pub text: String,
    pub anchor: SetAnchor,
    pub fill: Color,
    pub font_size_px: f64,
    pub animated: bool,
}

impl OuterLabelElement {
    pub fn validate(&self) -> ChartResult<()> {
        if !self.anchor.position.is_finite() || !self.anchor.angle.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "outer label `{}` anchor must be finite",
                self.id
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "outer label `{}` font size must be finite and > 0",
                self.id
            )));
        }
        self.fill.validate()
    }
}

/// One composed element inside a scene group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SceneElement {
    Arc(ArcElement),
    Bubble(BubbleElement),
    Label(LabelElement),
    OuterLabel(OuterLabelElement),
}

impl SceneElement {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Arc(arc) => arc.validate(),
            Self::Bubble(bubble) => bubble.validate(),
            Self::Label(label) => label.validate(),
            Self::OuterLabel(label) => label.validate(),
        }
    }
}
