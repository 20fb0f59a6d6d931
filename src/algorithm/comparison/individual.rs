//! Individual versus cohort
//!
//! Places one named employee among colleagues with the same job title:
//! institution-wide, within the selected schools/colleges, within their
//! department, and on their own. When the person cannot be found the
//! comparison falls back to every position in the selected schools.

use std::collections::BTreeSet;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use smallvec::smallvec;

use super::narrative::{Narrative, all_positions_legend, individual_legend, range_sentence};
use super::outcome::{ComparisonOutcome, EmptyReason};
use super::presentation::{CategoryAxis, ComparisonPayload, PlotData, RangeOverlay};
use crate::algorithm::grouping::{RecordFilter, Scope, collect_group, group_label};
use crate::algorithm::statistics::summarize_salaries;
use crate::config::{ComparisonConfig, PersonTieBreak};
use crate::models::{
    ComparisonGroup, FacetLevel, InstitutionData, PersonName, SalaryRangeBand, SalaryRecord,
};
use crate::utils::{format_currency, join_names};

/// Category labels of the four cohort groups, in display order
pub const COHORT_CATEGORIES: [&str; 4] =
    ["everyone", "your school/college", "your department", "you"];

/// Category label of the all-positions fallback
pub const FALLBACK_CATEGORY: &str = "everyone";

/// Message shown when the fallback finds no records
pub const NO_DATA_IN_SCHOOLS: &str = "No data available for selected schools/colleges";

/// Color key of the queried person's points
pub const PERSON_COLOR: u32 = 1;

/// Color key of everyone else
pub const OTHERS_COLOR: u32 = 2;

/// A named person and an optional school/college filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonQuery {
    person: PersonName,
    schools: Vec<String>,
}

impl PersonQuery {
    /// Query for a person across all schools
    #[must_use]
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            person: PersonName::new(first_name, last_name),
            schools: Vec::new(),
        }
    }

    /// Restrict the lookup and the school group to these schools/colleges
    #[must_use]
    pub fn with_schools<I, S>(mut self, schools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.schools = schools.into_iter().map(Into::into).collect();
        self
    }

    /// Queried person
    #[must_use]
    pub const fn person(&self) -> &PersonName {
        &self.person
    }

    /// Explicitly selected schools/colleges
    #[must_use]
    pub fn schools(&self) -> &[String] {
        &self.schools
    }
}

/// Compare a person against colleagues with the same title
///
/// The lookup runs within the effective schools: the query's schools, or
/// every school of the institution when none were given. If the institution
/// publishes no school list either, no school filter applies.
#[must_use]
pub fn compare_individual(
    data: &InstitutionData,
    query: &PersonQuery,
    config: &ComparisonConfig,
) -> ComparisonOutcome {
    let schools: Vec<String> = if query.schools().is_empty() {
        data.schools.clone()
    } else {
        query.schools().to_vec()
    };
    let school_filter = if schools.is_empty() {
        RecordFilter::everything()
    } else {
        RecordFilter::for_scope(&Scope::Schools(schools.clone()))
    };
    let in_scope = school_filter.select(&data.salaries);

    match find_person(&in_scope, query.person(), config.person_tie_break) {
        Some(record) => cohort_comparison(data, query.person(), record, &schools, config),
        None => {
            debug!("No record for {} in {}, showing all positions", query.person(), data.name);
            all_positions_comparison(data, in_scope, &schools, config)
        }
    }
}

/// Pick one of the person's records among `records`
///
/// Blank names never match.
#[must_use]
pub fn find_person<'a>(
    records: &'a [SalaryRecord],
    person: &PersonName,
    tie_break: PersonTieBreak,
) -> Option<&'a SalaryRecord> {
    if person.is_incomplete() {
        return None;
    }

    let matches: Vec<&SalaryRecord> = records.iter().filter(|r| r.is_person(person)).collect();
    match (matches.len(), tie_break) {
        (0, _) => None,
        (_, PersonTieBreak::FirstMatch) => matches.first().copied(),
        (n, PersonTieBreak::Seeded(seed)) => {
            let mut rng = StdRng::seed_from_u64(seed);
            matches.get(rng.random_range(0..n)).copied()
        }
    }
}

fn cohort_comparison(
    data: &InstitutionData,
    person: &PersonName,
    record: &SalaryRecord,
    schools: &[String],
    config: &ComparisonConfig,
) -> ComparisonOutcome {
    let title = data.title_of(record).unwrap_or(record.job_code.as_str()).to_string();
    let mut codes = data.titles.codes_for_title(&title);
    if codes.is_empty() {
        codes = BTreeSet::from([record.job_code.clone()]);
    }
    let same_title = RecordFilter::JobCodes(codes.into_iter().collect());

    let school_scope = if schools.is_empty() {
        Scope::school(record.school_college.clone())
    } else {
        Scope::Schools(schools.to_vec())
    };
    let scopes = [
        Scope::InstitutionWide,
        school_scope,
        Scope::department(record.department.clone()),
    ];

    let mut groups: Vec<ComparisonGroup> = scopes
        .iter()
        .filter_map(|scope| {
            collect_group(
                &data.salaries,
                &same_title.clone().and(RecordFilter::for_scope(scope)),
                group_label(&title, scope),
                scope.facet_level(),
                title.as_str(),
                Some(person),
            )
        })
        .collect();
    groups.push(
        ComparisonGroup::new(
            record.full_name(),
            FacetLevel::Individual,
            title.as_str(),
            vec![record.clone()],
        )
        .with_highlighted(smallvec![0]),
    );

    let everyone = groups.first().map(ComparisonGroup::salaries).unwrap_or_default();
    let band = data
        .salary_range(&title)
        .copied()
        .unwrap_or_else(|| SalaryRangeBand::observed(everyone.iter().copied()));
    let overlay = summarize_salaries(&everyone).map(|summary| RangeOverlay::new(band, &summary));

    let narrative = Narrative::new()
        .paragraph(format!(
            "Your title is {title} in {} ({}). Your annual salary is {}. {}",
            record.department,
            record.school_college,
            format_currency(record.annual_salary),
            range_sentence(&band)
        ))
        .paragraphs(individual_legend());

    let plot = PlotData::from_groups(
        &groups,
        |_, _, member| cohort_point_label(member),
        |_, group, index| {
            if group.is_highlighted(index) {
                PERSON_COLOR
            } else {
                OTHERS_COLOR
            }
        },
    );
    let axis = CategoryAxis::new(COHORT_CATEGORIES.iter().take(groups.len()).copied());

    info!(
        "Compared {} ({title}) against {} colleagues at {}",
        person,
        everyone.len(),
        data.name
    );
    ComparisonOutcome::Ready(ComparisonPayload::assemble(
        groups, plot, axis, narrative, overlay, config,
    ))
}

fn all_positions_comparison(
    data: &InstitutionData,
    in_scope: Vec<SalaryRecord>,
    schools: &[String],
    config: &ComparisonConfig,
) -> ComparisonOutcome {
    if in_scope.is_empty() {
        return ComparisonOutcome::empty(EmptyReason::NoDataInScope, NO_DATA_IN_SCHOOLS);
    }

    let facet_level = if schools.is_empty() {
        FacetLevel::InstitutionWide
    } else {
        FacetLevel::School(schools.to_vec())
    };
    let label = config.all_positions_label.as_str();
    let group = ComparisonGroup::new(label, facet_level, label, in_scope);
    let band = SalaryRangeBand::observed(group.salaries());

    let scope_names = if schools.is_empty() {
        data.name.clone()
    } else {
        join_names(schools)
    };
    let narrative = Narrative::new()
        .paragraph(format!(
            "Showing salary comparison for all positions in selected school(s): {scope_names}. {}",
            range_sentence(&band)
        ))
        .paragraphs(all_positions_legend());

    let groups = vec![group];
    let plot = PlotData::from_groups(
        &groups,
        |_, _, member| cohort_point_label(member),
        |_, _, _| OTHERS_COLOR,
    );
    let axis = CategoryAxis::new([FALLBACK_CATEGORY]);

    info!("Compared all {} positions in {} at {}", plot.len(), scope_names, data.name);
    ComparisonOutcome::Ready(ComparisonPayload::assemble(
        groups, plot, axis, narrative, None, config,
    ))
}

fn cohort_point_label(member: &SalaryRecord) -> String {
    format!("{} {}", member.full_name(), format_currency(member.annual_salary))
}
