pub mod axis;
pub mod plot;
pub mod series;

pub use axis::AxisOptions;
pub use plot::{MAX_SERIES_PER_PLOT, PlotConfig, PlotKind};
pub use series::SeriesConfig;
