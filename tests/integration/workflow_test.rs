use salary_compare::{
    ComparisonConfig, ComparisonOutcome, EmptyReason, PersonQuery, Selection, compare_individual,
    compare_job_titles, compare_title_across_institutions, from_json_strs,
};

use crate::utils::init_logging;

const SALARIES: &str = r#"{
    "A": [
        {"FirstName": "JANE", "LastName": "DOE", "Department": "Economics",
         "SchoolCollege": "Arts", "JobCode": "10", "AnnualSalary": 60000},
        {"FirstName": "JOHN", "LastName": "ROE", "Department": "Economics",
         "SchoolCollege": "Arts", "JobCode": "10", "AnnualSalary": 50000},
        {"FirstName": "MARY", "LastName": "MAJOR", "Department": "Economics",
         "SchoolCollege": "Arts", "JobCode": "10", "AnnualSalary": 55000},
        {"FirstName": "RICH", "LastName": "MINOR", "Department": "Economics",
         "SchoolCollege": "Arts", "JobCode": "10", "AnnualSalary": 65000}
    ],
    "B": [
        {"FirstName": "AMY", "LastName": "WU", "Department": "Finance",
         "SchoolCollege": "Business", "JobCode": 7, "AnnualSalary": 70000}
    ]
}"#;

const TITLES: &str = r#"{"A": {"10": "Analyst"}, "B": {"7": "Analyst"}}"#;
const RANGES: &str = r#"{"A": {"Analyst": {"min": 45000, "max": "NA"}}}"#;
const SCHOOLS: &str = r#"{"A": ["Arts"], "B": ["Business"]}"#;

#[test]
fn test_end_to_end_comparisons() -> salary_compare::Result<()> {
    init_logging();
    let datasets = from_json_strs(SALARIES, TITLES, Some(RANGES), Some(SCHOOLS), None)?;
    let config = ComparisonConfig::default();

    let query = PersonQuery::new("jane", "doe");
    let individual = compare_individual(datasets.get("A")?, &query, &config);
    let payload = individual.payload().unwrap();
    assert_eq!(payload.groups.iter().map(|g| g.len()).collect::<Vec<_>>(), vec![4, 4, 4, 1]);
    let overlay = payload.overlay.unwrap();
    assert_eq!(overlay.lower, 45000.0);
    assert!(overlay.upper_open);
    assert_eq!(overlay.upper, 65000.0);

    let across = compare_title_across_institutions(&datasets, &["A", "B"], "Analyst", &config)?;
    let payload = across.payload().unwrap();
    assert_eq!(payload.axis.labels, vec!["A", "B"]);
    assert_eq!(payload.plot.len(), 5);

    let titles = compare_job_titles(datasets.get("B")?, &Selection::new(["Analyst"]), &config);
    assert_eq!(titles.payload().unwrap().groups.len(), 1);

    Ok(())
}

#[test]
fn test_payload_serializes_for_renderer() -> salary_compare::Result<()> {
    let datasets = from_json_strs(SALARIES, TITLES, Some(RANGES), None, None)?;
    let outcome = compare_individual(
        datasets.get("A")?,
        &PersonQuery::new("JANE", "DOE"),
        &ComparisonConfig::default(),
    );

    let json = serde_json::to_value(&outcome).unwrap();
    let ready = &json["Ready"];
    assert_eq!(ready["overlay"]["band"]["max"], "NA");
    assert_eq!(ready["plot"]["x"].as_array().unwrap().len(), 13);
    assert_eq!(ready["axis"]["labels"][3], "you");
    Ok(())
}

#[test]
fn test_runs_do_not_share_state() -> salary_compare::Result<()> {
    let datasets = from_json_strs(SALARIES, TITLES, None, None, None)?;
    let data = datasets.get("A")?;
    let config = ComparisonConfig::default();

    let first = compare_job_titles(data, &Selection::new(["Analyst"]), &config);
    let cleared_selection = Selection::new(["Analyst"]).without_title("Analyst");
    let cleared = compare_job_titles(data, &cleared_selection, &config);
    let again = compare_job_titles(data, &Selection::new(["Analyst"]), &config);

    assert!(matches!(
        cleared,
        ComparisonOutcome::Empty(ref state) if state.reason == EmptyReason::NothingSelected
    ));
    assert_eq!(first, again);
    Ok(())
}
