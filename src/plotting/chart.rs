use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::styles::{ChartStyle, ChartTheme};
use crate::analysis::pie_angles;
use crate::types::{DailyPoint, EventXp};
use crate::utils::{format_xp, short_label, thin_series};

pub type PlotError = Box<dyn Error + Send + Sync>;
pub type PlotResult<T> = Result<T, PlotError>;

type Area<'a> = DrawingArea<SVGBackend<'a>, Shift>;

/// Upper bound on drawn line vertices
const MAX_LINE_POINTS: usize = 500;
/// Arc vertices per full turn when filling pie slices
const ARC_STEPS_PER_TURN: f64 = 96.0;

pub const XP_CHART_FILE: &str = "xp_progress.svg";
pub const PASS_FAIL_CHART_FILE: &str = "pass_fail.svg";
pub const EVENT_CHART_FILE: &str = "event_xp.svg";

/// Derived series for the three charts
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartData {
    pub daily: Vec<DailyPoint>,
    pub has_xp: bool,
    pub pass: usize,
    pub fail: usize,
    pub events: Vec<EventXp>,
}

fn px(value: f64) -> i32 {
    value.round() as i32
}

/// Draw into an SVG document held in memory
fn render_svg<F>(style: &ChartStyle, draw: F) -> PlotResult<String>
where
    F: FnOnce(&Area) -> PlotResult<()>,
{
    let theme = ChartTheme::default();
    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, (style.width, style.height)).into_drawing_area();
        root.fill(&theme.background_color)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(buffer)
}

fn draw_empty_state(root: &Area, style: &ChartStyle, message: &str) -> PlotResult<()> {
    let theme = ChartTheme::default();
    let font = ("sans-serif", style.font_size + 2.0)
        .into_font()
        .color(&theme.muted_text_color)
        .pos(Pos::new(HPos::Center, VPos::Center));
    root.draw(&Text::new(
        message.to_string(),
        (style.width as i32 / 2, style.height as i32 / 2),
        font,
    ))?;
    Ok(())
}

fn draw_axes(root: &Area, style: &ChartStyle) -> PlotResult<()> {
    let theme = ChartTheme::default();
    let axis = ShapeStyle::from(&theme.axis_color).stroke_width(1);
    let left = style.margin.left;
    let baseline = style.baseline();
    root.draw(&PathElement::new(
        vec![(left, baseline), (left + style.plot_width(), baseline)],
        axis,
    ))?;
    root.draw(&PathElement::new(
        vec![(left, style.margin.top), (left, baseline)],
        axis,
    ))?;
    Ok(())
}

/// Cumulative XP over time as a polyline scaled to the final maximum
pub fn render_xp_chart(points: &[DailyPoint]) -> PlotResult<String> {
    let style = ChartStyle::xp_line();
    if points.is_empty() {
        return render_svg(&style, |root| draw_empty_state(root, &style, "No XP data available"));
    }

    let points = thin_series(points, MAX_LINE_POINTS);
    render_svg(&style, |root| {
        let theme = ChartTheme::default();
        draw_axes(root, &style)?;

        let max_xp = points.iter().map(|p| p.cumulative_xp).max().unwrap_or(0).max(1) as f64;
        let last_index = (points.len() - 1).max(1) as f64;
        let chart_width = style.plot_width() as f64;
        let chart_height = style.plot_height() as f64;
        let x_scale = |i: usize| style.margin.left as f64 + i as f64 / last_index * chart_width;
        let y_scale = |v: i64| style.margin.top as f64 + chart_height - (v.max(0) as f64 / max_xp) * chart_height;

        let path: Vec<(i32, i32)> = points
            .iter()
            .enumerate()
            .map(|(i, p)| (px(x_scale(i)), px(y_scale(p.cumulative_xp))))
            .collect();
        if path.len() == 1 {
            root.draw(&Circle::new(path[0], 3, theme.line_color.filled()))?;
        } else {
            root.draw(&PathElement::new(
                path,
                ShapeStyle::from(&theme.line_color).stroke_width(style.line_width),
            ))?;
        }

        let label_font = ("sans-serif", style.font_size).into_font().color(&theme.text_color);
        root.draw(&Text::new(
            format_xp(max_xp as i64),
            (style.margin.left - 6, style.margin.top),
            label_font.clone().pos(Pos::new(HPos::Right, VPos::Center)),
        ))?;
        let date_y = style.baseline() + 16;
        if let Some(first) = points.first() {
            root.draw(&Text::new(
                first.label(),
                (style.margin.left, date_y),
                label_font.clone().pos(Pos::new(HPos::Left, VPos::Center)),
            ))?;
        }
        if let [_, .., last] = points.as_slice() {
            root.draw(&Text::new(
                last.label(),
                (style.margin.left + style.plot_width(), date_y),
                label_font.pos(Pos::new(HPos::Right, VPos::Center)),
            ))?;
        }
        Ok(())
    })
}

/// Pass/fail pie with a two-entry legend
pub fn render_pass_fail_chart(pass: usize, fail: usize) -> PlotResult<String> {
    let style = ChartStyle::pass_fail_pie();
    let Some(angles) = pie_angles(pass, fail) else {
        return render_svg(&style, |root| draw_empty_state(root, &style, "No result data available"));
    };

    render_svg(&style, |root| {
        let theme = ChartTheme::default();
        let center_x = style.width as f64 / 2.0;
        let center_y = style.height as f64 / 2.0;
        let radius = 80.0;

        let slices = [
            (pass, angles.pass_slice(), theme.pass_color),
            (fail, angles.fail_slice(), theme.fail_color),
        ];
        for (count, slice, color) in slices {
            if count == 0 {
                continue;
            }
            let steps = (slice.span() / std::f64::consts::TAU * ARC_STEPS_PER_TURN).ceil() as usize;
            let outline: Vec<(i32, i32)> = slice
                .arc_points(center_x, center_y, radius, steps.max(2))
                .into_iter()
                .map(|(x, y)| (px(x), px(y)))
                .collect();
            root.draw(&Polygon::new(outline, color.filled()))?;
        }

        let legend = [("Pass", pass, theme.pass_color), ("Fail", fail, theme.fail_color)];
        let font = ("sans-serif", style.font_size).into_font().color(&theme.text_color);
        for (i, (label, count, color)) in legend.into_iter().enumerate() {
            let y = 250 + i as i32 * 25;
            root.draw(&Rectangle::new([(50, y), (65, y + 15)], color.filled()))?;
            root.draw(&Text::new(
                format!("{}: {}", label, count),
                (75, y + 12),
                font.clone().pos(Pos::new(HPos::Left, VPos::Bottom)),
            ))?;
        }
        Ok(())
    })
}

/// One bar per event, labelled with the shortened event path
pub fn render_event_chart(events: &[EventXp], has_xp: bool) -> PlotResult<String> {
    let style = ChartStyle::event_bars();
    if !has_xp {
        return render_svg(&style, |root| draw_empty_state(root, &style, "No XP data available"));
    }
    if events.is_empty() {
        return render_svg(&style, |root| draw_empty_state(root, &style, "No event XP data available"));
    }

    render_svg(&style, |root| {
        let theme = ChartTheme::default();
        draw_axes(root, &style)?;

        let max_xp = events.iter().map(|e| e.xp).max().unwrap_or(0).max(1) as f64;
        let chart_width = style.plot_width() as f64;
        let chart_height = style.plot_height() as f64;
        let bar_spacing = chart_width / events.len() as f64;
        let bar_width = bar_spacing * 0.8;
        let baseline = style.baseline() as f64;
        let font = ("sans-serif", style.font_size)
            .into_font()
            .color(&theme.text_color)
            .transform(FontTransform::Rotate270)
            .pos(Pos::new(HPos::Right, VPos::Center));

        for (i, event) in events.iter().enumerate() {
            let bar_height = (event.xp.max(0) as f64 / max_xp) * chart_height;
            let x = style.margin.left as f64 + i as f64 * bar_spacing + (bar_spacing - bar_width) / 2.0;
            let y = baseline - bar_height;
            root.draw(&Rectangle::new(
                [(px(x), px(y)), (px(x + bar_width), px(baseline))],
                theme.bar_color.filled(),
            ))?;
            root.draw(&Text::new(
                short_label(&event.label),
                (px(x + bar_width / 2.0), px(baseline + 8.0)),
                font.clone(),
            ))?;
        }
        Ok(())
    })
}

/// Render all three charts into `out_dir`, returning the written paths
pub fn write_charts(charts: &ChartData, out_dir: &Path) -> PlotResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let rendered = [
        (XP_CHART_FILE, render_xp_chart(&charts.daily)?),
        (PASS_FAIL_CHART_FILE, render_pass_fail_chart(charts.pass, charts.fail)?),
        (EVENT_CHART_FILE, render_event_chart(&charts.events, charts.has_xp)?),
    ];

    let mut written = Vec::with_capacity(rendered.len());
    for (name, svg) in rendered {
        let path = out_dir.join(name);
        std::fs::write(&path, svg)?;
        debug!(path = %path.display(), "chart written");
        written.push(path);
    }
    Ok(written)
}

/// `write_charts` on the blocking pool
pub async fn write_charts_async(charts: ChartData, out_dir: PathBuf) -> PlotResult<Vec<PathBuf>> {
    tokio::task::spawn_blocking(move || write_charts(&charts, &out_dir)).await?
}
