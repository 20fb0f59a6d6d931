//! Salary dataset loading
//!
//! Five JSON documents make up the data, each keyed by institution name:
//! `salaries.json` and `titles.json` are required, `salary_ranges.json`,
//! `schools.json` and `divisions.json` are optional. Every institution is
//! fully materialized before it is handed out.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::error::{Result, SalaryCompareError};
use crate::index::TitleIndex;
use crate::models::{
    Datasets, InstitutionData, PublishedSalaryRecord, SalaryRangeBand, SalaryRecord,
};
use crate::utils::{log_operation_complete, log_operation_start, log_warning};

/// Salary records per institution
pub const SALARIES_FILE: &str = "salaries.json";
/// Job code to title maps per institution
pub const TITLES_FILE: &str = "titles.json";
/// Published salary-range bands per institution
pub const SALARY_RANGES_FILE: &str = "salary_ranges.json";
/// School/college lists per institution
pub const SCHOOLS_FILE: &str = "schools.json";
/// Department lists per institution
pub const DIVISIONS_FILE: &str = "divisions.json";

/// Raw text of one dataset document and where it came from
#[derive(Debug, Clone)]
struct Document {
    origin: PathBuf,
    text: String,
}

impl Document {
    fn in_memory(kind: &str, text: &str) -> Self {
        Self {
            origin: PathBuf::from(format!("<memory:{kind}>")),
            text: text.to_string(),
        }
    }

    fn parse<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_str(&self.text).map_err(|e| SalaryCompareError::json(&self.origin, e))
    }
}

/// The five documents before decoding
#[derive(Debug, Clone)]
struct Documents {
    salaries: Document,
    titles: Document,
    salary_ranges: Option<Document>,
    schools: Option<Document>,
    divisions: Option<Document>,
}

type PerInstitution<T> = BTreeMap<String, T>;

impl Documents {
    fn into_datasets(self) -> Result<Datasets> {
        let published: PerInstitution<Vec<PublishedSalaryRecord>> = self.salaries.parse()?;
        let mut titles: PerInstitution<TitleIndex> = self.titles.parse()?;
        let mut salary_ranges: PerInstitution<BTreeMap<String, SalaryRangeBand>> =
            parse_optional(self.salary_ranges.as_ref())?;
        let mut schools: PerInstitution<Vec<String>> = parse_optional(self.schools.as_ref())?;
        let mut divisions: PerInstitution<Vec<String>> = parse_optional(self.divisions.as_ref())?;

        for institution in titles.keys().filter(|name| !published.contains_key(*name)) {
            warn!("Titles for '{institution}' have no salary records, skipping");
        }

        let mut datasets = Datasets::new();
        for (name, rows) in published {
            let records = with_salaries(&name, rows);
            let index = titles
                .remove(&name)
                .ok_or_else(|| SalaryCompareError::MissingDataset {
                    kind: "titles",
                    institution: name.clone(),
                })?;

            let unmapped = records
                .iter()
                .filter(|r| index.title_for_code(&r.job_code).is_none())
                .count();
            if unmapped > 0 {
                warn!("{unmapped} salary records at '{name}' have a job code without a title");
            }

            let data = InstitutionData::new(name.clone(), records, index)
                .with_salary_ranges(salary_ranges.remove(&name).unwrap_or_default())
                .with_schools(schools.remove(&name).unwrap_or_default())
                .with_divisions(divisions.remove(&name).unwrap_or_default());
            debug!(
                "Loaded {} records, {} titles, {} salary ranges for '{}'",
                data.salaries.len(),
                data.titles.distinct_titles_sorted().len(),
                data.salary_ranges.len(),
                data.name
            );
            datasets.insert(data);
        }
        Ok(datasets)
    }
}

/// Keep rows with a published salary
fn with_salaries(institution: &str, rows: Vec<PublishedSalaryRecord>) -> Vec<SalaryRecord> {
    let published = rows.len();
    let records: Vec<SalaryRecord> = rows
        .into_iter()
        .filter_map(PublishedSalaryRecord::into_record)
        .collect();
    let skipped = published - records.len();
    if skipped > 0 {
        warn!("Skipped {skipped} salary records at '{institution}' without an annual salary");
    }
    records
}

fn parse_optional<T: DeserializeOwned + Default>(document: Option<&Document>) -> Result<T> {
    document.map_or_else(|| Ok(T::default()), Document::parse)
}

/// Build datasets from in-memory JSON documents
///
/// # Errors
/// Returns an error if a document is not valid JSON of the expected shape, or
/// if an institution with salaries has no title map.
pub fn from_json_strs(
    salaries: &str,
    titles: &str,
    salary_ranges: Option<&str>,
    schools: Option<&str>,
    divisions: Option<&str>,
) -> Result<Datasets> {
    Documents {
        salaries: Document::in_memory("salaries", salaries),
        titles: Document::in_memory("titles", titles),
        salary_ranges: salary_ranges.map(|text| Document::in_memory("salary_ranges", text)),
        schools: schools.map(|text| Document::in_memory("schools", text)),
        divisions: divisions.map(|text| Document::in_memory("divisions", text)),
    }
    .into_datasets()
}

/// Load every dataset from a directory
///
/// # Errors
/// Returns an error if a required file cannot be read, any file fails to
/// decode, or an institution with salaries has no title map.
pub fn load_from_dir(dir: &Path) -> Result<Datasets> {
    let start = Instant::now();
    log_operation_start("Loading salary datasets from", dir);

    let documents = Documents {
        salaries: read_required(dir.join(SALARIES_FILE))?,
        titles: read_required(dir.join(TITLES_FILE))?,
        salary_ranges: read_optional(dir.join(SALARY_RANGES_FILE))?,
        schools: read_optional(dir.join(SCHOOLS_FILE))?,
        divisions: read_optional(dir.join(DIVISIONS_FILE))?,
    };
    let datasets = documents.into_datasets()?;

    log_operation_complete(
        "loaded",
        dir,
        datasets.len(),
        datasets.record_count(),
        Some(start.elapsed()),
    );
    Ok(datasets)
}

/// Load every dataset from a directory asynchronously
///
/// The five files are read concurrently; decoding runs on the blocking pool.
///
/// # Errors
/// Same conditions as [`load_from_dir`], plus a task error if decoding
/// could not complete.
pub async fn load_from_dir_async(dir: &Path) -> Result<Datasets> {
    let start = Instant::now();
    log_operation_start("Loading salary datasets asynchronously from", dir);

    let (salaries, titles, salary_ranges, schools, divisions) = futures::try_join!(
        read_required_async(dir.join(SALARIES_FILE)),
        read_required_async(dir.join(TITLES_FILE)),
        read_optional_async(dir.join(SALARY_RANGES_FILE)),
        read_optional_async(dir.join(SCHOOLS_FILE)),
        read_optional_async(dir.join(DIVISIONS_FILE)),
    )?;
    let documents = Documents {
        salaries,
        titles,
        salary_ranges,
        schools,
        divisions,
    };

    let datasets = tokio::task::spawn_blocking(move || documents.into_datasets())
        .await
        .map_err(|e| SalaryCompareError::Task(e.to_string()))??;

    log_operation_complete(
        "loaded",
        dir,
        datasets.len(),
        datasets.record_count(),
        Some(start.elapsed()),
    );
    Ok(datasets)
}

fn read_required(path: PathBuf) -> Result<Document> {
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(Document { origin: path, text }),
        Err(e) => Err(SalaryCompareError::io(path, e)),
    }
}

fn read_optional(path: PathBuf) -> Result<Option<Document>> {
    let exists = match path.try_exists() {
        Ok(exists) => exists,
        Err(e) => return Err(SalaryCompareError::io(path, e)),
    };
    if exists {
        read_required(path).map(Some)
    } else {
        log_warning("Optional dataset not found, using empty data", Some(path.as_path()));
        Ok(None)
    }
}

async fn read_required_async(path: PathBuf) -> Result<Document> {
    match tokio::fs::read_to_string(&path).await {
        Ok(text) => Ok(Document { origin: path, text }),
        Err(e) => Err(SalaryCompareError::io(path, e)),
    }
}

async fn read_optional_async(path: PathBuf) -> Result<Option<Document>> {
    let exists = match tokio::fs::try_exists(&path).await {
        Ok(exists) => exists,
        Err(e) => return Err(SalaryCompareError::io(path, e)),
    };
    if exists {
        read_required_async(path).await.map(Some)
    } else {
        log_warning("Optional dataset not found, using empty data", Some(path.as_path()));
        Ok(None)
    }
}
