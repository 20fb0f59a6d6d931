use std::fs;
use std::path::Path;

use salary_compare::{RangeBound, SalaryCompareError, load_from_dir, load_from_dir_async};

use tempfile::TempDir;

use crate::utils::{init_logging, record};

const SALARIES: &str = r#"{
    "North College": [
        {"FirstName": "JANE", "LastName": "DOE", "Department": "Economics",
         "SchoolCollege": "Arts", "JobCode": 1001, "AnnualSalary": 60000},
        {"FirstName": "JOHN", "LastName": "ROE", "Department": "Economics",
         "SchoolCollege": "Arts", "JobCode": "1001", "AnnualSalary": 52000.5}
    ],
    "South College": [
        {"FirstName": "AMY", "LastName": "WU", "Department": "Surgery",
         "SchoolCollege": "Medicine", "JobCode": "N1", "AnnualSalary": 91000}
    ]
}"#;

const TITLES: &str = r#"{
    "North College": {"1001": "Analyst"},
    "South College": {"N1": "Nurse"}
}"#;

const SALARY_RANGES: &str = r#"{
    "North College": {"Analyst": {"min": 90000, "max": 50000}},
    "South College": {"Nurse": {"min": "NA", "max": 120000}}
}"#;

fn write_datasets(dir: &Path, with_optional: bool) {
    fs::write(dir.join("salaries.json"), SALARIES).unwrap();
    fs::write(dir.join("titles.json"), TITLES).unwrap();
    if with_optional {
        fs::write(dir.join("salary_ranges.json"), SALARY_RANGES).unwrap();
        fs::write(dir.join("schools.json"), r#"{"North College": ["Arts"]}"#).unwrap();
        fs::write(dir.join("divisions.json"), r#"{"North College": ["Economics"]}"#).unwrap();
    }
}

#[test]
fn test_load_from_dir() -> salary_compare::Result<()> {
    init_logging();
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), true);

    let datasets = load_from_dir(dir.path())?;
    assert_eq!(datasets.names(), vec!["North College", "South College"]);
    assert_eq!(datasets.record_count(), 3);

    let north = datasets.get("North College")?;
    assert_eq!(north.salaries[0].job_code, "1001");
    assert_eq!(north.schools, vec!["Arts"]);

    // Inverted band is swapped on ingestion
    let band = north.salary_range("Analyst").unwrap();
    assert_eq!(band.min(), RangeBound::Amount(50000.0));
    assert_eq!(band.max(), RangeBound::Amount(90000.0));

    let south = datasets.get("South College")?;
    let nurse = south.salary_range("Nurse").unwrap();
    assert!(nurse.min().is_open());
    assert!(south.schools.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_load_from_dir_async_without_optional_files() -> salary_compare::Result<()> {
    init_logging();
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), false);

    let datasets = load_from_dir_async(dir.path()).await?;
    assert_eq!(datasets.len(), 2);
    let north = datasets.get("North College")?;
    assert!(north.salary_ranges.is_empty());
    assert!(north.divisions.is_empty());
    assert_eq!(north.titles.codes_for_title("Analyst").len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_missing_required_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("salaries.json"), SALARIES).unwrap();

    let result = load_from_dir_async(dir.path()).await;
    assert!(matches!(result, Err(SalaryCompareError::Io { .. })));
    assert!(matches!(load_from_dir(dir.path()), Err(SalaryCompareError::Io { .. })));

}

#[test]
fn test_unknown_institution_lookup() {
    let dir = TempDir::new().unwrap();
    write_datasets(dir.path(), false);

    let datasets = load_from_dir(dir.path()).unwrap();
    let err = datasets.get("East College").unwrap_err();
    assert_eq!(err.to_string(), "Unknown institution: East College");

}

#[test]
fn test_rows_without_salary_do_not_fail_the_load() -> salary_compare::Result<()> {
    init_logging();
    let dir = TempDir::new().unwrap();
    let salaries = r#"{
        "North College": [
            {"FirstName": "JANE", "LastName": "DOE", "Department": "Economics",
             "SchoolCollege": "Arts", "JobCode": 1001, "AnnualSalary": null},
            {"FirstName": "JOHN", "LastName": "ROE", "Department": "Economics",
             "SchoolCollege": "Arts", "JobCode": 1001, "AnnualSalary": 52000}
        ]
    }"#;
    fs::write(dir.path().join("salaries.json"), salaries).unwrap();
    fs::write(dir.path().join("titles.json"), r#"{"North College": {"1001": "Analyst"}}"#).unwrap();
    fs::write(
        dir.path().join("salary_ranges.json"),
        r#"{"North College": {"Analyst": {"min": false, "max": 70000}}}"#,
    )
    .unwrap();

    let datasets = load_from_dir(dir.path())?;
    let north = datasets.get("North College")?;
    assert_eq!(
        north.salaries,
        vec![record("JOHN", "ROE", "Economics", "Arts", "1001", 52000.0)]
    );
    let band = north.salary_range("Analyst").unwrap();
    assert!(band.min().is_open());
    assert_eq!(band.max(), RangeBound::Amount(70000.0));
    Ok(())
}
