//! Same job across institutions
//!
//! Each institution has its own title vocabulary, so titles are resolved
//! through that institution's index and the matching employees are pooled
//! into one group per institution.

use std::collections::BTreeMap;

use log::{info, warn};
use rustc_hash::FxHashMap;

use super::narrative::{INSTITUTION_LEGEND, Narrative};
use super::outcome::{ComparisonOutcome, EmptyReason};
use super::presentation::{CategoryAxis, ComparisonPayload, LegendEntry, PlotData};
use crate::algorithm::grouping::{RecordFilter, collect_group};
use crate::config::ComparisonConfig;
use crate::error::Result;
use crate::models::{ComparisonGroup, Datasets, FacetLevel, InstitutionData};
use crate::utils::join_names;

/// Message shown when no institution has a selected title
pub const NOTHING_SELECTED: &str = "Please select at least one job title from any institution.";

/// Message shown when the selected titles have no employees
pub const NO_SALARY_DATA: &str = "No salary data found for selected job titles.";

/// Titles chosen for one institution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstitutionTitles {
    /// Institution name
    pub institution: String,
    /// Titles in that institution's vocabulary
    pub job_titles: Vec<String>,
}

impl InstitutionTitles {
    /// Create a title choice for an institution
    #[must_use]
    pub fn new<I, S>(institution: impl Into<String>, job_titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            institution: institution.into(),
            job_titles: job_titles.into_iter().map(Into::into).collect(),
        }
    }
}

/// Compare one title across several institutions
///
/// Convenience wrapper over [`compare_across_institutions`] for the common
/// case where every institution uses the same title.
pub fn compare_title_across_institutions(
    datasets: &Datasets,
    institutions: &[&str],
    job_title: &str,
    config: &ComparisonConfig,
) -> Result<ComparisonOutcome> {
    let requests: Vec<InstitutionTitles> = institutions
        .iter()
        .map(|institution| InstitutionTitles::new(*institution, [job_title]))
        .collect();
    compare_across_institutions(datasets, &requests, config)
}

/// Compare chosen titles across institutions, one pooled group each
///
/// Institutions appear in name order; those without matching employees are
/// dropped from the groups and the axis. Requests for the same institution
/// are merged. Each institution keeps the color of its position among all
/// loaded institutions, whichever others are shown.
///
/// # Errors
/// Returns [`crate::SalaryCompareError::UnknownInstitution`] when a request
/// names an institution that was not loaded.
pub fn compare_across_institutions(
    datasets: &Datasets,
    requests: &[InstitutionTitles],
    config: &ComparisonConfig,
) -> Result<ComparisonOutcome> {
    let mut chosen: BTreeMap<&str, (&InstitutionData, Vec<&str>)> = BTreeMap::new();
    for request in requests {
        let data = datasets.get(&request.institution)?;
        let (_, titles) = chosen
            .entry(request.institution.as_str())
            .or_insert_with(|| (data, Vec::new()));
        for title in &request.job_titles {
            if !titles.contains(&title.as_str()) {
                titles.push(title.as_str());
            }
        }
    }
    chosen.retain(|_, (_, titles)| !titles.is_empty());

    if chosen.is_empty() {
        return Ok(ComparisonOutcome::empty(EmptyReason::NothingSelected, NOTHING_SELECTED));
    }

    let palette: FxHashMap<&str, u32> = datasets
        .iter()
        .enumerate()
        .map(|(position, data)| (data.name.as_str(), institution_color(position)))
        .collect();

    let mut sources: Vec<&InstitutionData> = Vec::new();
    let mut colors: Vec<u32> = Vec::new();
    let mut groups: Vec<ComparisonGroup> = Vec::new();
    for (institution, (data, titles)) in &chosen {
        let codes: Vec<String> = titles
            .iter()
            .flat_map(|title| {
                let codes = data.titles.codes_for_title(title);
                if codes.is_empty() {
                    warn!("Job title '{title}' is not known to {institution}, skipping");
                }
                codes
            })
            .collect();

        if let Some(group) = collect_group(
            &data.salaries,
            &RecordFilter::job_codes(codes),
            *institution,
            FacetLevel::Institution((*institution).to_string()),
            join_names(titles),
            None,
        ) {
            sources.push(*data);
            colors.push(palette.get(institution).copied().unwrap_or_default());
            groups.push(group);
        }
    }

    if groups.is_empty() {
        return Ok(ComparisonOutcome::empty(EmptyReason::NoMatchingData, NO_SALARY_DATA));
    }

    let narrative = Narrative::new()
        .with_heading("Comparison Summary")
        .paragraphs(groups.iter().map(|group| {
            format!(
                "{}: {} employee(s) with selected job title(s): {}",
                group.label,
                group.len(),
                group.job_title
            )
        }))
        .paragraph(INSTITUTION_LEGEND);

    let plot = PlotData::from_groups(
        &groups,
        |index, group, member| {
            let title = sources[index].title_of(member).unwrap_or(member.job_code.as_str());
            format!("{}, {title}, {}", member.full_name(), group.label)
        },
        |index, _, _| colors[index],
    );
    let axis = CategoryAxis::new(groups.iter().map(|group| group.label.clone()));
    let legend = groups
        .iter()
        .zip(&colors)
        .map(|(group, color)| LegendEntry {
            color_group: *color,
            label: group.label.clone(),
        })
        .collect();

    info!(
        "Compared {} employees across {} institutions",
        plot.len(),
        groups.len()
    );
    Ok(ComparisonOutcome::Ready(
        ComparisonPayload::assemble(groups, plot, axis, narrative, None, config)
            .with_legend(legend),
    ))
}

fn institution_color(position: usize) -> u32 {
    u32::try_from(position + 1).unwrap_or(u32::MAX)
}
