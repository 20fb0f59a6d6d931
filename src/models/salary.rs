//! Salary record model
//!
//! One row of an institution's salary dataset. Records have no stable
//! employee id, so people are looked up by name.

use serde::{Deserialize, Deserializer, Serialize};

/// One employee's salary row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRecord {
    /// Given name as published
    #[serde(rename = "FirstName")]
    pub first_name: String,
    /// Family name as published
    #[serde(rename = "LastName")]
    pub last_name: String,
    /// Department (division) name
    #[serde(rename = "Department")]
    pub department: String,
    /// School or college name
    #[serde(rename = "SchoolCollege")]
    pub school_college: String,
    /// Institution-specific job code
    #[serde(rename = "JobCode", deserialize_with = "deserialize_job_code")]
    pub job_code: String,
    /// Annual salary in dollars
    #[serde(rename = "AnnualSalary")]
    pub annual_salary: f64,
}

impl SalaryRecord {
    /// Create a new salary record
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        school_college: impl Into<String>,
        job_code: impl Into<String>,
        annual_salary: f64,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            department: department.into(),
            school_college: school_college.into(),
            job_code: job_code.into(),
            annual_salary,
        }
    }

    /// Full name as `First Last`
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Whether this record belongs to the given person
    #[must_use]
    pub fn is_person(&self, person: &PersonName) -> bool {
        person.matches(&self.first_name, &self.last_name)
    }
}

/// A salary row as published, where the salary may be null or absent
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PublishedSalaryRecord {
    #[serde(rename = "FirstName")]
    first_name: String,
    #[serde(rename = "LastName")]
    last_name: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "SchoolCollege")]
    school_college: String,
    #[serde(rename = "JobCode", deserialize_with = "deserialize_job_code")]
    job_code: String,
    #[serde(rename = "AnnualSalary", default)]
    annual_salary: Option<f64>,
}

impl PublishedSalaryRecord {
    /// The record, or `None` when no finite salary was published
    pub(crate) fn into_record(self) -> Option<SalaryRecord> {
        let annual_salary = self.annual_salary.filter(|salary| salary.is_finite())?;
        Some(SalaryRecord {
            first_name: self.first_name,
            last_name: self.last_name,
            department: self.department,
            school_college: self.school_college,
            job_code: self.job_code,
            annual_salary,
        })
    }
}

/// A queried (first name, last name) pair
///
/// Names are compared trimmed and case-insensitively; the published
/// datasets store names upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonName {
    first_name: String,
    last_name: String,
}

impl PersonName {
    /// Create a normalized person name
    #[must_use]
    pub fn new(first_name: &str, last_name: &str) -> Self {
        Self {
            first_name: normalize_name(first_name),
            last_name: normalize_name(last_name),
        }
    }

    /// Normalized first name
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Normalized last name
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Whether either part of the name is blank
    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        self.first_name.is_empty() || self.last_name.is_empty()
    }

    /// Compare against raw stored names
    #[must_use]
    pub fn matches(&self, first_name: &str, last_name: &str) -> bool {
        normalize_name(first_name) == self.first_name && normalize_name(last_name) == self.last_name
    }
}

impl std::fmt::Display for PersonName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

fn normalize_name(name: &str) -> String {
    name.trim().to_uppercase()
}

/// Job codes show up both as JSON strings and as bare numbers
fn deserialize_job_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawCode {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawCode::deserialize(deserializer)? {
        RawCode::Text(code) => code,
        RawCode::Integer(code) => code.to_string(),
        RawCode::Float(code) => code.to_string(),
    })
}
