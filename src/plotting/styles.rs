use plotters::style::RGBColor;

/// Chart colour configuration
pub struct ChartTheme {
    pub background_color: RGBColor,
    pub text_color: RGBColor,
    pub muted_text_color: RGBColor,
    pub axis_color: RGBColor,
    pub line_color: RGBColor,
    pub pass_color: RGBColor,
    pub fail_color: RGBColor,
    pub bar_color: RGBColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBColor(255, 255, 255),
            text_color: RGBColor(0x33, 0x33, 0x33),
            muted_text_color: RGBColor(0x99, 0x99, 0x99),
            axis_color: RGBColor(0x66, 0x66, 0x66),
            line_color: RGBColor(0x66, 0x7e, 0xea),
            pass_color: RGBColor(0x27, 0xae, 0x60),
            fail_color: RGBColor(0xe7, 0x4c, 0x3c),
            bar_color: RGBColor(0x66, 0x7e, 0xea),
        }
    }
}

/// Space reserved around the plot area, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

/// Chart size and layout configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartStyle {
    pub width: u32,
    pub height: u32,
    pub margin: Margin,
    pub line_width: u32,
    pub font_size: f64,
}

impl ChartStyle {
    /// Cumulative XP line chart
    pub fn xp_line() -> Self {
        Self {
            width: 600,
            height: 300,
            margin: Margin {
                top: 20,
                right: 30,
                bottom: 40,
                left: 60,
            },
            line_width: 3,
            font_size: 12.0,
        }
    }

    /// Pass/fail pie chart; the margin is unused
    pub fn pass_fail_pie() -> Self {
        Self {
            width: 400,
            height: 300,
            margin: Margin {
                top: 0,
                right: 0,
                bottom: 0,
                left: 0,
            },
            line_width: 1,
            font_size: 12.0,
        }
    }

    /// Per-event bar chart
    pub fn event_bars() -> Self {
        Self {
            width: 500,
            height: 300,
            margin: Margin {
                top: 20,
                right: 30,
                bottom: 60,
                left: 60,
            },
            line_width: 1,
            font_size: 11.0,
        }
    }

    pub fn plot_width(&self) -> i32 {
        self.width as i32 - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> i32 {
        self.height as i32 - self.margin.top - self.margin.bottom
    }

    /// y coordinate of the x axis
    pub fn baseline(&self) -> i32 {
        self.margin.top + self.plot_height()
    }
}
