//! Group resolution
//!
//! Turns a [`Selection`] into the ordered list of comparison groups for one
//! institution. Each selected title is resolved to its job codes once, then
//! crossed with every requested scope. Combinations without members are
//! dropped, so every returned group is non-empty.

use std::cmp::Ordering;

use log::{debug, warn};
use smallvec::SmallVec;

use super::criteria::{FilterCriteria, RecordFilter};
use super::selection::{GroupOrdering, Scope, Selection};
use crate::index::TitleIndex;
use crate::models::{ComparisonGroup, FacetLevel, PersonName, SalaryRecord};

/// Resolve a selection into ordered, non-empty comparison groups
///
/// Titles unknown to `titles` contribute no groups. An empty title selection
/// yields an empty list. Output order is deterministic: groups are generated
/// scope by scope in selection order and then stably sorted by the
/// selection's [`GroupOrdering`], with the selection order of titles as the
/// title key.
#[must_use]
pub fn resolve(
    salaries: &[SalaryRecord],
    titles: &TitleIndex,
    selection: &Selection,
) -> Vec<ComparisonGroup> {
    if selection.is_empty() {
        return Vec::new();
    }

    let title_filters: Vec<(usize, &str, RecordFilter)> = selection
        .job_titles()
        .iter()
        .enumerate()
        .filter_map(|(rank, title)| {
            let codes = titles.codes_for_title(title);
            if codes.is_empty() {
                warn!("Job title '{title}' is not known to this institution, skipping");
                None
            } else {
                Some((rank, title.as_str(), RecordFilter::JobCodes(codes.into_iter().collect())))
            }
        })
        .collect();

    let mut ranked: Vec<(usize, ComparisonGroup)> = Vec::new();
    for scope in selection.scopes() {
        let scope_filter = RecordFilter::for_scope(&scope);
        for (rank, title, code_filter) in &title_filters {
            let filter = RecordFilter::All(vec![code_filter.clone(), scope_filter.clone()]);
            let label = group_label(title, &scope);
            match collect_group(
                salaries,
                &filter,
                label,
                scope.facet_level(),
                *title,
                selection.highlight_person(),
            ) {
                Some(group) => {
                    debug!("Resolved group '{}' with {} members", group.label, group.len());
                    ranked.push((*rank, group));
                }
                None => debug!("Dropping empty group for '{title}' at {scope:?}"),
            }
        }
    }

    let ordering = selection.ordering();
    ranked.sort_by(|(rank_a, a), (rank_b, b)| compare_groups(ordering, *rank_a, a, *rank_b, b));
    ranked.into_iter().map(|(_, group)| group).collect()
}

/// Build one group from the records passing `filter`; `None` when nothing matches
///
/// When `highlight` is given, every member belonging to that person is marked.
#[must_use]
pub fn collect_group(
    salaries: &[SalaryRecord],
    filter: &RecordFilter,
    label: impl Into<String>,
    facet_level: FacetLevel,
    job_title: impl Into<String>,
    highlight: Option<&PersonName>,
) -> Option<ComparisonGroup> {
    let members = filter.select(salaries);
    if members.is_empty() {
        return None;
    }

    let highlighted =
        highlight.map_or_else(SmallVec::new, |person| highlight_positions(&members, person));
    Some(
        ComparisonGroup::new(label, facet_level, job_title, members).with_highlighted(highlighted),
    )
}

/// Positions of a person's records among `members`
#[must_use]
pub fn highlight_positions(members: &[SalaryRecord], person: &PersonName) -> SmallVec<[usize; 1]> {
    let filter = RecordFilter::Person(person.clone());
    members
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.meets_criteria(record))
        .map(|(index, _)| index)
        .collect()
}

/// `"<title>"` for institution-wide groups, `"<title> - <scope>"` otherwise
#[must_use]
pub fn group_label(title: &str, scope: &Scope) -> String {
    match scope {
        Scope::InstitutionWide => title.to_string(),
        _ => format!("{title} - {}", scope.facet_level().name()),
    }
}

fn compare_levels(a: &FacetLevel, b: &FacetLevel) -> Ordering {
    b.is_institution_wide()
        .cmp(&a.is_institution_wide())
        .then_with(|| a.name().cmp(&b.name()))
}

fn compare_groups(
    ordering: GroupOrdering,
    rank_a: usize,
    a: &ComparisonGroup,
    rank_b: usize,
    b: &ComparisonGroup,
) -> Ordering {
    match ordering {
        GroupOrdering::ByTitleThenLevel => rank_a
            .cmp(&rank_b)
            .then_with(|| compare_levels(&a.facet_level, &b.facet_level)),
        GroupOrdering::ByLevelThenTitle => {
            compare_levels(&a.facet_level, &b.facet_level).then_with(|| rank_a.cmp(&rank_b))
        }
    }
}
