use shared::domain::YearlyCount;

pub const CHART_WIDTH: f32 = 800.0;
pub const CHART_HEIGHT: f32 = 220.0;
pub const CHART_PADDING: f32 = 24.0;
/// Bars narrower than this get no year label.
pub const LABEL_MIN_BAR_WIDTH: f32 = 30.0;
pub const BAR_INSET: f32 = 2.0;
pub const BAR_CORNER_RADIUS: f32 = 3.0;
pub const LABEL_FONT_SIZE: f32 = 10.0;
pub const NO_DATA_MESSAGE: &str = "No data yet.";

#[derive(Debug, Clone, PartialEq)]
pub struct BarLabel {
    pub x: f32,
    pub y: f32,
    pub text: String,
}

/// One bar in chart coordinates (origin top-left, `CHART_WIDTH` x `CHART_HEIGHT`).
///
/// `x` and `width` describe the bar's slot; the drawn rectangle is inset by
/// [`BAR_INSET`] on each side, see [`Bar::rect`].
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub year: i32,
    pub count: u64,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub label: Option<BarLabel>,
}

impl Bar {
    /// `(x, y, width, height)` of the filled rectangle.
    pub fn rect(&self) -> (f32, f32, f32, f32) {
        (
            self.x + BAR_INSET,
            self.y,
            (self.width - 2.0 * BAR_INSET).max(0.0),
            self.height,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartLayout {
    Placeholder(&'static str),
    Bars(Vec<Bar>),
}

impl ChartLayout {
    pub fn bars(&self) -> &[Bar] {
        match self {
            ChartLayout::Placeholder(_) => &[],
            ChartLayout::Bars(bars) => bars,
        }
    }
}

/// Lays out one bar per entry, left to right in input order.
///
/// Heights are scaled against the largest count; when every count is zero all
/// bars are flat.
pub fn layout_attempts_chart(data: &[YearlyCount]) -> ChartLayout {
    if data.is_empty() {
        return ChartLayout::Placeholder(NO_DATA_MESSAGE);
    }

    let max_count = data.iter().map(|entry| entry.count).max().unwrap_or(0);
    let plot_height = CHART_HEIGHT - CHART_PADDING * 2.0;
    let bar_width = (CHART_WIDTH - CHART_PADDING * 2.0) / data.len() as f32;

    let bars = data
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let height = if max_count == 0 {
                0.0
            } else {
                (entry.count as f64 / max_count as f64) as f32 * plot_height
            };
            let x = CHART_PADDING + index as f32 * bar_width;
            let label = (bar_width > LABEL_MIN_BAR_WIDTH).then(|| BarLabel {
                x: x + bar_width / 2.0,
                y: CHART_HEIGHT - 6.0,
                text: entry.year.to_string(),
            });
            Bar {
                year: entry.year,
                count: entry.count,
                x,
                y: CHART_HEIGHT - CHART_PADDING - height,
                width: bar_width,
                height,
                label,
            }
        })
        .collect();

    ChartLayout::Bars(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(year: i32, count: u64) -> YearlyCount {
        YearlyCount { year, count }
    }

    #[test]
    fn empty_input_renders_placeholder_without_bars() {
        let layout = layout_attempts_chart(&[]);
        assert_eq!(layout, ChartLayout::Placeholder("No data yet."));
        assert!(layout.bars().is_empty());
    }

    #[test]
    fn bar_heights_scale_against_the_same_max() {
        let layout = layout_attempts_chart(&[year(2019, 5), year(2020, 10)]);
        let bars = layout.bars();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[1].height, 2.0 * bars[0].height);
        assert_eq!(bars[1].height, CHART_HEIGHT - 2.0 * CHART_PADDING);
        assert_eq!(bars[1].y, CHART_PADDING);
        assert_eq!(bars[0].y + bars[0].height, CHART_HEIGHT - CHART_PADDING);
    }

    #[test]
    fn bars_follow_input_order_left_to_right() {
        let layout = layout_attempts_chart(&[year(2021, 3), year(1999, 1), year(2005, 2)]);
        let years: Vec<i32> = layout.bars().iter().map(|bar| bar.year).collect();
        assert_eq!(years, vec![2021, 1999, 2005]);
        let width = (CHART_WIDTH - 2.0 * CHART_PADDING) / 3.0;
        for (index, bar) in layout.bars().iter().enumerate() {
            assert_eq!(bar.width, width);
            assert_eq!(bar.x, CHART_PADDING + index as f32 * width);
        }
        let (x, _, w, _) = layout.bars()[0].rect();
        assert_eq!(x, CHART_PADDING + BAR_INSET);
        assert_eq!(w, width - 2.0 * BAR_INSET);
    }

    #[test]
    fn labels_are_dropped_for_narrow_bars() {
        let wide = layout_attempts_chart(&[year(1957, 2), year(1958, 8)]);
        let label = wide.bars()[0].label.as_ref().expect("label");
        assert_eq!(label.text, "1957");
        assert_eq!(label.y, CHART_HEIGHT - 6.0);
        assert_eq!(label.x, CHART_PADDING + wide.bars()[0].width / 2.0);

        let crowded: Vec<YearlyCount> = (1957..2025).map(|y| year(y, 1)).collect();
        let narrow = layout_attempts_chart(&crowded);
        assert!(narrow.bars()[0].width <= LABEL_MIN_BAR_WIDTH);
        assert!(narrow.bars().iter().all(|bar| bar.label.is_none()));
    }

    #[test]
    fn all_zero_counts_render_flat_bars() {
        let layout = layout_attempts_chart(&[year(1960, 0), year(1961, 0)]);
        assert!(layout.bars().iter().all(|bar| bar.height == 0.0));
        assert!(layout
            .bars()
            .iter()
            .all(|bar| bar.y == CHART_HEIGHT - CHART_PADDING));
    }
}
