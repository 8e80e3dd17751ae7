//! Charts module - Probability distribution bar chart

mod plotter;
mod renderer;

pub use plotter::ChartPlotter;
pub use renderer::{ChartError, StaticChartRenderer};

use crate::engine::ReachabilityTable;

/// Headroom above the tallest bar.
const Y_HEADROOM: f64 = 1.08;

/// Bar chart data shared by the interactive and static renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// `(number, probability)` in ascending number order.
    pub bars: Vec<(u32, f64)>,
    pub ceiling: u32,
    /// Upper bound of the probability axis.
    pub y_max: f64,
}

impl BarSeries {
    pub fn from_table(table: &ReachabilityTable) -> Self {
        let bars: Vec<(u32, f64)> = table
            .counts()
            .map(|(n, count)| (n, table.probability_of(count)))
            .collect();

        let tallest = bars.iter().map(|&(_, p)| p).fold(0.0_f64, f64::max);
        let y_max = if tallest > 0.0 {
            tallest * Y_HEADROOM
        } else {
            1.0
        };

        Self {
            bars,
            ceiling: table.ceiling(),
            y_max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
