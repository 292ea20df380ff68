use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Anything carrying the logical key used for color lookup and highlight
/// matching.
pub trait Keyed {
    fn key(&self) -> Option<&str>;
}

/// Position in layout space, as produced by the external layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Circle placement computed by the external packing engine.
///
/// The coordinator never recomputes or validates placement; it only passes
/// it through to the composed bubble element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CirclePlacement {
    pub center: Point,
    pub radius: f64,
}

impl CirclePlacement {
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self {
            center: Point::new(x, y),
            radius,
        }
    }
}

/// Logical payload attached to one bubble layout node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDatum {
    /// Unique logical identity. Callers must keep keys unique per series;
    /// a missing key degrades highlight matching, it never errors.
    pub key: Option<String>,
    pub value: f64,
}

impl SeriesDatum {
    #[must_use]
    pub fn new(key: impl Into<String>, value: f64) -> Self {
        Self {
            key: Some(key.into()),
            value,
        }
    }

    #[must_use]
    pub const fn keyless(value: f64) -> Self {
        Self { key: None, value }
    }
}

impl Keyed for SeriesDatum {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// One node from the external circle-packing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleNode {
    pub placement: CirclePlacement,
    pub data: SeriesDatum,
}

impl BubbleNode {
    #[must_use]
    pub fn new(placement: CirclePlacement, data: SeriesDatum) -> Self {
        Self { placement, data }
    }
}

impl Keyed for BubbleNode {
    fn key(&self) -> Option<&str> {
        self.data.key.as_deref()
    }
}

/// Outer-label anchor attached by the venn layout engine to single-set
/// regions only. Its presence is what distinguishes a set region from an
/// intersection region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetAnchor {
    pub position: Point,
    /// Radial placement angle in degrees, from the layout engine.
    pub angle: f64,
}

impl SetAnchor {
    #[must_use]
    pub const fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            position: Point::new(x, y),
            angle,
        }
    }
}

/// Logical payload of one venn region (a set or a set intersection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionDatum {
    pub key: Option<String>,
    pub size: f64,
    /// Member set identifiers, e.g. `["A"]` for a set region or
    /// `["A", "B"]` for their intersection.
    pub sets: SmallVec<[String; 2]>,
}

impl RegionDatum {
    #[must_use]
    pub fn new<I, S>(key: impl Into<String>, size: f64, sets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key: Some(key.into()),
            size,
            sets: sets.into_iter().map(Into::into).collect(),
        }
    }

    /// Highlight-propagation contract: a region participates in a hover when
    /// its key contains the hovered key as a substring. The layout engine
    /// composes intersection keys from member set keys (`"A|B"` contains
    /// `"A"`), so hovering a set activates every region it belongs to.
    /// Keyless regions never match.
    #[must_use]
    pub fn key_matches(&self, hovered: &str) -> bool {
        self.key.as_deref().is_some_and(|key| key.contains(hovered))
    }
}

impl Keyed for RegionDatum {
    fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }
}

/// One region from the external venn layout engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VennRegionNode {
    pub data: RegionDatum,
    /// Opaque region outline path produced by the layout engine.
    pub arc_path: String,
    /// Inner-label anchor.
    pub label_anchor: Point,
    /// Present only on single-set regions.
    pub set_anchor: Option<SetAnchor>,
}

impl VennRegionNode {
    #[must_use]
    pub fn new(data: RegionDatum, arc_path: impl Into<String>, label_anchor: Point) -> Self {
        Self {
            data,
            arc_path: arc_path.into(),
            label_anchor,
            set_anchor: None,
        }
    }

    #[must_use]
    pub fn with_set_anchor(mut self, anchor: SetAnchor) -> Self {
        self.set_anchor = Some(anchor);
        self
    }

    /// A region is a plain set (not an intersection) when the layout engine
    /// attached an outer-label anchor to it.
    #[must_use]
    pub fn is_single_set(&self) -> bool {
        self.set_anchor.is_some()
    }
}

impl Keyed for VennRegionNode {
    fn key(&self) -> Option<&str> {
        self.data.key.as_deref()
    }
}

/// Default display text for a datum: the key when present, otherwise the
/// numeric value with a trimmed integer form.
#[must_use]
pub fn format_value(key: Option<&str>, value: f64) -> String {
    if let Some(key) = key {
        return key.to_owned();
    }
    // Whole numbers beyond i64 range would saturate through the cast.
    if value.fract() == 0.0 && value.is_finite() && value.abs() < 2f64.powi(63) {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
