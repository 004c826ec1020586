mod aggregate;
mod geometry;
mod series;


pub use aggregate::{
    completed_count, completed_names, pass_fail, percent, success_rate, total_xp, ResultFilter,
};
pub use geometry::{pie_angles, PieAngles, PieSlice};
pub use series::{by_event, daily_cumulative, event_labels};
