pub mod dates;

pub use dates::{format_date, previous_working_day, today};
