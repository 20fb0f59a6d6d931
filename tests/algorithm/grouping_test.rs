use salary_compare::algorithm::grouping::{FilterCriteria, RecordFilter};
use salary_compare::{FacetLevel, GroupOrdering, PersonName, Scope, Selection, TitleIndex, resolve};

use crate::utils::{cohort, init_logging, record};

fn engineering_fixture() -> (Vec<salary_compare::SalaryRecord>, TitleIndex) {
    let mut salaries = cohort("A", 3, "Civil", "Engineering", "100", 70000.0);
    salaries.extend(cohort("B", 2, "Contracts", "Law", "200", 50000.0));
    salaries.extend(cohort("C", 2, "Civil", "Engineering", "300", 80000.0));
    let titles = TitleIndex::new([("100", "A"), ("200", "B"), ("300", "C")]);
    (salaries, titles)
}

#[test]
fn test_engineering_scenario_drops_empty_combination() {
    init_logging();
    let (salaries, titles) = engineering_fixture();
    let selection = Selection::new(["A", "B"]).with_scopes(vec![
        Scope::InstitutionWide,
        Scope::school("Engineering"),
    ]);

    let groups = resolve(&salaries, &titles, &selection);
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "A - Engineering"]);
    assert!(groups.iter().all(|g| !g.is_empty()));
    assert_eq!(groups[2].facet_level, FacetLevel::School(vec!["Engineering".to_string()]));
}

#[test]
fn test_resolution_is_stable() {
    let (salaries, titles) = engineering_fixture();
    let selection = Selection::multi_facet(["C", "B", "A"], ["Law", "Engineering"], ["Civil"])
        .with_ordering(GroupOrdering::ByTitleThenLevel);

    let first = resolve(&salaries, &titles, &selection);
    let second = resolve(&salaries, &titles, &selection);
    assert_eq!(first, second);

    let titles_in_order: Vec<&str> = first.iter().map(|g| g.job_title.as_str()).collect();
    assert_eq!(titles_in_order, vec!["C", "C", "C", "B", "B", "A", "A", "A"]);
}

#[test]
fn test_unknown_and_missing_titles() {
    init_logging();
    let (salaries, titles) = engineering_fixture();
    assert!(resolve(&salaries, &titles, &Selection::default()).is_empty());
    assert!(resolve(&salaries, &titles, &Selection::new(["Dean"])).is_empty());

    let groups = resolve(&salaries, &titles, &Selection::new(["Dean", "B"]));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 2);
}

#[test]
fn test_pooled_school_scope() {
    let (salaries, titles) = engineering_fixture();
    let selection = Selection::new(["A", "B"])
        .with_scope(Scope::Schools(vec!["Law".to_string(), "Engineering".to_string()]));

    let groups = resolve(&salaries, &titles, &selection);
    let sizes: Vec<(String, usize)> = groups.iter().map(|g| (g.label.clone(), g.len())).collect();
    assert_eq!(
        sizes,
        vec![
            ("A - Law, Engineering".to_string(), 3),
            ("B - Law, Engineering".to_string(), 2),
        ]
    );
}

#[test]
fn test_highlighting_marks_all_namesakes() {
    let mut salaries = vec![
        record("SAM", "LEE", "Civil", "Engineering", "100", 1.0),
        record("AMY", "WU", "Civil", "Engineering", "100", 2.0),
        record("sam", "lee", "Torts", "Law", "100", 3.0),
    ];
    salaries.push(record("SAM", "LEE", "Civil", "Engineering", "200", 4.0));
    let titles = TitleIndex::new([("100", "A"), ("200", "B")]);
    let person = PersonName::new("Sam", "Lee");

    let groups = resolve(&salaries, &titles, &Selection::new(["A"]).with_highlight(person.clone()));
    assert_eq!(groups[0].highlighted.as_slice(), &[0, 2]);
    assert_eq!(groups[0].highlight_index(), Some(0));

    let filter = RecordFilter::Person(person);
    assert_eq!(salaries.iter().filter(|r| filter.meets_criteria(r)).count(), 3);
}
