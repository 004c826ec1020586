use serde::Serialize;
use std::f64::consts::{PI, TAU};

/// Angular spans of the two pie slices, in radians
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PieAngles {
    pub pass: f64,
    pub fail: f64,
}

impl PieAngles {
    /// Pass slice `[0, pass)`
    pub fn pass_slice(&self) -> PieSlice {
        PieSlice::new(0.0, self.pass)
    }

    /// Fail slice `[pass, pass + fail)`
    pub fn fail_slice(&self) -> PieSlice {
        PieSlice::new(self.pass, self.pass + self.fail)
    }
}

/// Split a full turn proportionally between passes and fails.
/// `None` when both counts are zero.
pub fn pie_angles(pass_count: usize, fail_count: usize) -> Option<PieAngles> {
    let total = pass_count + fail_count;
    if total == 0 {
        return None;
    }
    let total = total as f64;
    Some(PieAngles {
        pass: pass_count as f64 / total * TAU,
        fail: fail_count as f64 / total * TAU,
    })
}

/// One arc of the pie
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
}

impl PieSlice {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// SVG arc large-arc flag
    pub fn large_arc(&self) -> bool {
        self.span() > PI
    }

    /// Point on the circle at `angle`
    fn point(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
        (cx + radius * angle.cos(), cy + radius * angle.sin())
    }

    /// SVG path for the wedge: centre, line to the arc start, arc, close
    pub fn svg_path(&self, cx: f64, cy: f64, radius: f64) -> String {
        let (x1, y1) = Self::point(cx, cy, radius, self.start);
        let (x2, y2) = Self::point(cx, cy, radius, self.end);
        format!(
            "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
            cx,
            cy,
            x1,
            y1,
            radius,
            radius,
            u8::from(self.large_arc()),
            x2,
            y2
        )
    }

    /// Closed wedge outline: the centre followed by `steps + 1` points along
    /// the arc
    pub fn arc_points(&self, cx: f64, cy: f64, radius: f64, steps: usize) -> Vec<(f64, f64)> {
        let steps = steps.max(1);
        let mut points = Vec::with_capacity(steps + 2);
        points.push((cx, cy));
        for i in 0..=steps {
            let angle = self.start + self.span() * i as f64 / steps as f64;
            points.push(Self::point(cx, cy, radius, angle));
        }
        points
    }
}
