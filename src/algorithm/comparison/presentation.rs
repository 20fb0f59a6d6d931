//! Presentation payload
//!
//! Everything a renderer needs to draw a comparison: one plot point per group
//! member, the category axis, a five-number summary per category, the
//! descriptive statistics per group, the plotted salary extent and, for
//! individual comparisons, the salary-range overlay.

use serde::Serialize;

use super::narrative::Narrative;
use crate::algorithm::statistics::{FiveNumberSummary, GroupStatistics};
use crate::config::ComparisonConfig;
use crate::models::{ComparisonGroup, SalaryRangeBand, SalaryRecord};

/// Parallel point sequences; all four always have the same length
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlotData {
    /// Category position of each point
    pub x: Vec<f64>,
    /// Salary of each point
    pub y: Vec<f64>,
    /// Hover label of each point
    pub label: Vec<String>,
    /// Color key of each point
    pub color_group: Vec<u32>,
}

impl PlotData {
    /// Plot one point per member of every group
    ///
    /// Groups sit at 1-based category positions in order. `label` names a
    /// member given its group index and group; `color` picks its color key
    /// from the group index, the group and the member's position inside it.
    pub fn from_groups<L, C>(groups: &[ComparisonGroup], mut label: L, mut color: C) -> Self
    where
        L: FnMut(usize, &ComparisonGroup, &SalaryRecord) -> String,
        C: FnMut(usize, &ComparisonGroup, usize) -> u32,
    {
        let total = groups.iter().map(ComparisonGroup::len).sum();
        let mut plot = Self {
            x: Vec::with_capacity(total),
            y: Vec::with_capacity(total),
            label: Vec::with_capacity(total),
            color_group: Vec::with_capacity(total),
        };

        for (group_index, group) in groups.iter().enumerate() {
            let position = category_position(group_index);
            for (member_index, member) in group.members.iter().enumerate() {
                plot.push(
                    position,
                    member.annual_salary,
                    label(group_index, group, member),
                    color(group_index, group, member_index),
                );
            }
        }
        plot
    }

    /// Append one point
    pub fn push(&mut self, x: f64, y: f64, label: String, color_group: u32) {
        self.x.push(x);
        self.y.push(y);
        self.label.push(label);
        self.color_group.push(color_group);
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Category positions and their labels
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryAxis {
    /// 1-based positions
    pub positions: Vec<f64>,
    /// Label per position
    pub labels: Vec<String>,
}

impl CategoryAxis {
    /// Axis with one category per label, at positions `1..=n`
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let positions = (0..labels.len()).map(category_position).collect();
        Self { positions, labels }
    }

    /// Number of categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the axis has no categories
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Box-plot summary keyed by category position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxSummary {
    /// Category position
    pub position: f64,
    /// Group label
    pub label: String,
    /// Five-number summary of the group's salaries
    pub summary: FiveNumberSummary,
}

/// Legend entry mapping a color key to what it stands for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendEntry {
    /// Color key used in [`PlotData::color_group`]
    pub color_group: u32,
    /// Description, e.g. a job title or institution
    pub label: String,
}

/// Closed salary interval covered by the plot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueExtent {
    /// Lower end
    pub min: f64,
    /// Upper end
    pub max: f64,
}

impl ValueExtent {
    /// Extent of a set of values; `None` when there are no finite values
    #[must_use]
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |extent: Option<Self>, value| {
                Some(extent.map_or(Self { min: value, max: value }, |e| e.include(value)))
            })
    }

    /// Widen to cover `value`
    #[must_use]
    pub fn include(self, value: f64) -> Self {
        Self {
            min: self.min.min(value),
            max: self.max.max(value),
        }
    }

    /// Scale the ends by the given multipliers
    #[must_use]
    pub fn padded(self, lower: f64, upper: f64) -> Self {
        Self {
            min: self.min * lower,
            max: self.max * upper,
        }
    }
}

/// Salary-range band drawn over an individual comparison
///
/// A missing bound is drawn at the institution-wide group's extreme and
/// flagged open, so it renders as an arrow rather than a closed bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeOverlay {
    /// Band as published (or observed)
    pub band: SalaryRangeBand,
    /// Drawn lower end
    pub lower: f64,
    /// Drawn upper end
    pub upper: f64,
    /// Whether the lower end is open
    pub lower_open: bool,
    /// Whether the upper end is open
    pub upper_open: bool,
}

impl RangeOverlay {
    /// Overlay for `band`, substituting `fallback` ends for missing bounds
    #[must_use]
    pub fn new(band: SalaryRangeBand, fallback: &FiveNumberSummary) -> Self {
        Self {
            band,
            lower: band.min().or(fallback.min),
            upper: band.max().or(fallback.max),
            lower_open: band.min().is_open(),
            upper_open: band.max().is_open(),
        }
    }
}

/// Finished presentation of one comparison run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonPayload {
    /// Groups in display order
    pub groups: Vec<ComparisonGroup>,
    /// One point per group member
    pub plot: PlotData,
    /// Category axis
    pub axis: CategoryAxis,
    /// One box summary per group, keyed by category position
    pub boxes: Vec<BoxSummary>,
    /// Count, mean, median and extremes per group
    pub statistics: Vec<GroupStatistics>,
    /// Color legend, empty when colors need no explanation
    pub legend: Vec<LegendEntry>,
    /// Narrative text
    pub narrative: Narrative,
    /// Padded salary extent to plot
    pub extent: ValueExtent,
    /// Salary-range overlay, individual comparisons only
    pub overlay: Option<RangeOverlay>,
}

impl ComparisonPayload {
    /// Assemble a payload from non-empty groups and their plotted points
    ///
    /// Box summaries and statistics are computed here. The extent covers every
    /// plotted salary and any available overlay bound, padded per `config`.
    #[must_use]
    pub fn assemble(
        groups: Vec<ComparisonGroup>,
        plot: PlotData,
        axis: CategoryAxis,
        narrative: Narrative,
        overlay: Option<RangeOverlay>,
        config: &ComparisonConfig,
    ) -> Self {
        let boxes = box_summaries(&groups);
        let statistics = groups.iter().filter_map(ComparisonGroup::statistics).collect();

        let band_bounds = overlay
            .iter()
            .flat_map(|o| [o.band.min().amount(), o.band.max().amount()])
            .flatten();
        let extent = ValueExtent::from_values(plot.y.iter().copied().chain(band_bounds))
            .unwrap_or(ValueExtent { min: 0.0, max: 0.0 })
            .padded(config.axis_lower_padding, config.axis_upper_padding);

        Self {
            groups,
            plot,
            axis,
            boxes,
            statistics,
            legend: Vec::new(),
            narrative,
            extent,
            overlay,
        }
    }

    /// Attach a color legend
    #[must_use]
    pub fn with_legend(mut self, legend: Vec<LegendEntry>) -> Self {
        self.legend = legend;
        self
    }
}

/// Five-number summaries of `groups` at positions `1..=n`
#[must_use]
pub fn box_summaries(groups: &[ComparisonGroup]) -> Vec<BoxSummary> {
    groups
        .iter()
        .enumerate()
        .filter_map(|(index, group)| {
            group.summary().map(|summary| BoxSummary {
                position: category_position(index),
                label: group.label.clone(),
                summary,
            })
        })
        .collect()
}

/// 1-based category position of the group at `index`
#[must_use]
pub fn category_position(index: usize) -> f64 {
    (index + 1) as f64
}
