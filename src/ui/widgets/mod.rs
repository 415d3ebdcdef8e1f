pub mod curve_table;
pub mod date_selector;
pub mod yield_chart;

pub use curve_table::CurveTable;
pub use date_selector::DateSelector;
pub use yield_chart::YieldChart;
