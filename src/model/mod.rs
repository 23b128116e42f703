pub mod chart;
pub mod note;

pub use chart::{ChartParser, JsonChartParser, RawNote, process_chart};
pub use note::{ActiveNote, DIVIDER_COLOR, LANE_COLORS, LANE_COUNT, Note};
