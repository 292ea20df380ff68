//! setviz-rs: series coordination engine for set-relationship charts.
//!
//! Turns externally computed layouts (circle packing, venn solving) into
//! composed, colored, interaction-aware scenes with a uniform animation
//! on/off contract. Layout solving and leaf shape rendering stay outside
//! this crate, behind the node data model and the `SceneRenderer` seam.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{BubbleSeries, BubbleSeriesConfig, VennSeries, VennSeriesConfig};
pub use error::{ChartError, ChartResult};
