pub mod layout;
pub mod primitives;
pub mod projection;
pub mod series;
pub mod types;

pub use layout::{Padding, PlotLayout, PlotRect};
pub use projection::{PixelPoint, SlotProjector, category_label_indices, project_points};
pub use series::{LineSegment, LineSeries, SeriesStyle};
pub use types::{DataPoint, ValueRange, Viewport};
