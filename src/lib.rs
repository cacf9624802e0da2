//! linegraph-rs: 2-D line chart layout, projection and rendering.
//!
//! A chart is rebuilt from scratch on every redraw: bounds and configuration
//! go in, an ordered `RenderFrame` of drawing primitives comes out, and a
//! `Renderer` replays it onto a surface.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartEngine};
pub use error::{ChartError, ChartResult};
