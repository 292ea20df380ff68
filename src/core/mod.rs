pub mod color;
pub mod transition;
pub mod types;

pub use color::{CYBERTRON, Color, ColorScheme, HORIZON, PASTEL, assign_color};
pub use transition::{TransitionConfig, resolve_transition};
pub use types::{
    BubbleNode, CirclePlacement, Keyed, Point, RegionDatum, SeriesDatum, SetAnchor, VennRegionNode,
    format_value,
};
