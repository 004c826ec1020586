mod aggregation;
mod format;

pub use aggregation::thin_series;
pub use format::{format_xp, short_label};
