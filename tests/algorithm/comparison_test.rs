use salary_compare::algorithm::comparison::individual::{COHORT_CATEGORIES, PERSON_COLOR};
use salary_compare::{
    ComparisonConfig, Datasets, EmptyReason, FacetLevel, InstitutionData, InstitutionTitles,
    PersonQuery, PersonTieBreak, RangeBound, SalaryRangeBand, Selection, TitleIndex,
    compare_across_institutions, compare_individual, compare_job_titles, suggest_titles,
};

use crate::utils::{analyst_institution, cohort, init_logging, record};

#[test]
fn test_individual_versus_cohort() {
    init_logging();
    let data = analyst_institution();
    let query = PersonQuery::new("Jane", "Doe");
    let outcome = compare_individual(&data, &query, &ComparisonConfig::default());
    let payload = outcome.payload().expect("Jane Doe should be found");

    let sizes: Vec<usize> = payload.groups.iter().map(|g| g.len()).collect();
    assert_eq!(sizes, vec![4, 4, 4, 1]);
    for group in &payload.groups[..3] {
        assert_eq!(group.highlighted.as_slice(), &[0]);
    }
    assert_eq!(payload.groups[3].facet_level, FacetLevel::Individual);
    assert_eq!(payload.axis.labels, COHORT_CATEGORIES);
    assert_eq!(payload.axis.positions, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(payload.boxes.len(), 4);

    let person_points = payload
        .plot
        .color_group
        .iter()
        .filter(|c| **c == PERSON_COLOR)
        .count();
    assert_eq!(person_points, 4);
    assert!(payload.narrative.paragraphs[0].starts_with(
        "Your title is Analyst in Economics (Arts and Sciences). Your annual salary is $60,000."
    ));
}

#[test]
fn test_open_band_is_stated_and_drawn_open() {
    let data = analyst_institution().with_salary_ranges([(
        "Analyst".to_string(),
        SalaryRangeBand::new(RangeBound::NotAvailable, RangeBound::Amount(80000.0)),
    )]);
    let query = PersonQuery::new("JANE", "DOE");
    let outcome = compare_individual(&data, &query, &ComparisonConfig::default());
    let payload = outcome.payload().unwrap();

    assert!(payload.narrative.paragraphs[0].contains(
        "There is no minimum salary at your institution; \
         the approximate maximum salary at your institution is $80,000."
    ));

    let overlay = payload.overlay.unwrap();
    assert!(overlay.lower_open);
    assert_eq!(overlay.lower, 50000.0);
    assert!(!overlay.upper_open);
    assert_eq!(overlay.upper, 80000.0);

    assert!((payload.extent.min - 47500.0).abs() < 1e-6);
    assert!((payload.extent.max - 84000.0).abs() < 1e-6);
}

#[test]
fn test_missing_band_states_no_information() {
    let data = analyst_institution().with_salary_ranges([(
        "Analyst".to_string(),
        SalaryRangeBand::unavailable(),
    )]);
    let query = PersonQuery::new("JANE", "DOE");
    let outcome = compare_individual(&data, &query, &ComparisonConfig::default());
    let payload = outcome.payload().unwrap();
    assert!(payload.narrative.paragraphs[0].ends_with("No salary range information available."));
    let overlay = payload.overlay.unwrap();
    assert!(overlay.lower_open && overlay.upper_open);
}

#[test]
fn test_unknown_person_falls_back_to_all_positions() {
    let mut salaries = cohort("AN", 500, "Finance", "Business", "A1", 50000.0);
    salaries.extend(cohort("CL", 300, "Registry", "Medicine", "C1", 30000.0));
    let titles = TitleIndex::new([("A1", "Analyst"), ("C1", "Clerk")]);
    let data = InstitutionData::new("Big U", salaries, titles);

    let query = PersonQuery::new("Nobody", "Here");
    let outcome = compare_individual(&data, &query, &ComparisonConfig::default());
    let payload = outcome.payload().unwrap();
    assert_eq!(payload.groups.len(), 1);
    assert_eq!(payload.groups[0].len(), 800);
    assert_eq!(payload.groups[0].label, "All Positions");
    assert_eq!(payload.axis.labels, vec!["everyone"]);
    assert!(payload.overlay.is_none());
    assert_eq!(payload.plot.len(), 800);
}

#[test]
fn test_custom_fallback_label_and_tie_break() {
    let config = ComparisonConfig::builder()
        .all_positions_label("Everyone")
        .person_tie_break(PersonTieBreak::Seeded(3))
        .build();
    let data = analyst_institution();

    let fallback = compare_individual(&data, &PersonQuery::new("", "DOE"), &config);
    assert_eq!(fallback.payload().unwrap().groups[0].label, "Everyone");

    let seeded = compare_individual(&data, &PersonQuery::new("Jane", "Doe"), &config);
    assert_eq!(seeded.payload().unwrap().groups.len(), 4);
}

#[test]
fn test_cross_institution_drops_institutions_without_matches() {
    let datasets: Datasets = [
        InstitutionData::new(
            "Alpha",
            vec![record("ANN", "ONE", "D", "S", "N1", 70000.0)],
            TitleIndex::new([("N1", "Nurse")]),
        ),
        InstitutionData::new(
            "Beta",
            vec![record("BOB", "TWO", "D", "S", "X9", 40000.0)],
            TitleIndex::new([("X9", "Clerk")]),
        ),
        InstitutionData::new(
            "Gamma",
            vec![
                record("CAT", "THREE", "D", "S", "RN", 75000.0),
                record("DAN", "FOUR", "D", "S", "LPN", 52000.0),
            ],
            TitleIndex::new([("RN", "Registered Nurse"), ("LPN", "Practical Nurse")]),
        ),
    ]
    .into_iter()
    .collect();

    let requests = vec![
        InstitutionTitles::new("Gamma", ["Registered Nurse", "Practical Nurse"]),
        InstitutionTitles::new("Beta", ["Nurse"]),
        InstitutionTitles::new("Alpha", ["Nurse"]),
    ];
    let outcome =
        compare_across_institutions(&datasets, &requests, &ComparisonConfig::default()).unwrap();
    let payload = outcome.payload().unwrap();

    assert_eq!(payload.axis.labels, vec!["Alpha", "Gamma"]);
    assert_eq!(payload.plot.color_group, vec![1, 3, 3]);
    assert_eq!(payload.groups[1].job_title, "Registered Nurse, Practical Nurse");
    assert_eq!(payload.plot.label[2], "DAN FOUR, Practical Nurse, Gamma");
}

#[test]
fn test_multi_title_colors_and_summary() {
    let mut data = analyst_institution();
    data.salaries.push(record("ZED", "ZULU", "History", "Humanities", "C1", 42000.0));

    let selection =
        Selection::multi_facet(["Clerk", "Analyst"], ["Arts and Sciences"], ["History"]);
    let outcome = compare_job_titles(&data, &selection, &ComparisonConfig::default());
    let payload = outcome.payload().unwrap();

    assert_eq!(
        payload.axis.labels,
        vec![
            "Clerk",
            "Analyst",
            "Clerk - Arts and Sciences",
            "Analyst - Arts and Sciences",
            "Clerk - History",
        ]
    );
    assert_eq!(payload.statistics.len(), 5);
    assert_eq!(payload.plot.color_group[..2], [1, 1]);
    assert_eq!(payload.legend.len(), 2);
    assert_eq!(payload.narrative.heading.as_deref(), Some("Summary Statistics"));
}

#[test]
fn test_empty_selection_is_reported() {
    let outcome = compare_job_titles(
        &analyst_institution(),
        &Selection::default(),
        &ComparisonConfig::default(),
    );
    let state = outcome.empty_state().unwrap();
    assert_eq!(state.reason, EmptyReason::NothingSelected);
    assert_eq!(state.message, "Please select at least one job title.");
}

#[test]
fn test_title_suggestions() {
    let data = analyst_institution();
    let config = ComparisonConfig::builder().suggestion_limit(1).build();
    assert_eq!(suggest_titles(&data, "er", &ComparisonConfig::default()), vec!["Clerk"]);
    assert_eq!(suggest_titles(&data, "a", &config), Vec::<&str>::new());
    let short_queries = ComparisonConfig::builder().min_query_len(1).build();
    assert_eq!(suggest_titles(&data, "  L", &short_queries), vec!["Analyst", "Clerk"]);
    assert_eq!(suggest_titles(&data, "yst", &config), vec!["Analyst"]);
}
