mod chart;
mod styles;


pub use chart::{
    render_event_chart, render_pass_fail_chart, render_xp_chart, write_charts, write_charts_async,
    ChartData, PlotError, PlotResult, EVENT_CHART_FILE, PASS_FAIL_CHART_FILE, XP_CHART_FILE,
};
pub use styles::{ChartStyle, ChartTheme, Margin};
