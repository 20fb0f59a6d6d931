//! Several titles across several facets
//!
//! The general resolver case: every selected title crossed with
//! institution-wide, per-school and per-department scopes, with empty
//! combinations pruned. Colors follow the selection order of titles.

use log::info;

use super::narrative::Narrative;
use super::outcome::{ComparisonOutcome, EmptyReason};
use super::presentation::{CategoryAxis, ComparisonPayload, LegendEntry, PlotData};
use crate::algorithm::grouping::{Selection, resolve};
use crate::config::ComparisonConfig;
use crate::models::InstitutionData;
use crate::utils::format_currency;

/// Message shown when no title is selected
pub const NOTHING_SELECTED: &str = "Please select at least one job title.";

/// Message shown when no group survives pruning
pub const NO_DATA_FOUND: &str = "No data found for the selected job titles and filters.";

/// Compare the selected titles within one institution
///
/// The selection's ordering applies when set; otherwise the configured
/// default ordering is used.
#[must_use]
pub fn compare_job_titles(
    data: &InstitutionData,
    selection: &Selection,
    config: &ComparisonConfig,
) -> ComparisonOutcome {
    if selection.is_empty() {
        return ComparisonOutcome::empty(EmptyReason::NothingSelected, NOTHING_SELECTED);
    }

    let selection = selection.clone().with_default_ordering(config.group_ordering);
    let groups = resolve(&data.salaries, &data.titles, &selection);
    if groups.is_empty() {
        return ComparisonOutcome::empty(EmptyReason::NoMatchingData, NO_DATA_FOUND);
    }

    let title_color = |title: &str| selection.title_rank(title).map_or(0, title_color_key);

    let narrative = Narrative::new().with_heading("Summary Statistics").paragraphs(
        groups
            .iter()
            .filter_map(|group| group.statistics())
            .map(|stats| stats.describe()),
    );
    let plot = PlotData::from_groups(
        &groups,
        |_, _, member| {
            format!("{} - {}", member.full_name(), format_currency(member.annual_salary))
        },
        |_, group, _| title_color(group.job_title.as_str()),
    );
    let axis = CategoryAxis::new(groups.iter().map(|group| group.label.clone()));
    let legend = selection
        .job_titles()
        .iter()
        .enumerate()
        .map(|(rank, title)| LegendEntry {
            color_group: title_color_key(rank),
            label: title.clone(),
        })
        .collect();

    info!(
        "Compared {} job titles in {} groups at {}",
        selection.job_titles().len(),
        groups.len(),
        data.name
    );
    ComparisonOutcome::Ready(
        ComparisonPayload::assemble(groups, plot, axis, narrative, None, config)
            .with_legend(legend),
    )
}

fn title_color_key(rank: usize) -> u32 {
    u32::try_from(rank + 1).unwrap_or(u32::MAX)
}
