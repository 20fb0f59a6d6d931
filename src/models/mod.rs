//! Domain models for salary comparison
//!
//! Salary records, published range bands, comparison groups and the
//! per-institution dataset bundle.

pub mod group;
pub mod institution;
pub mod salary;
pub mod salary_range;

pub use group::{ComparisonGroup, FacetLevel};
pub use institution::{Datasets, InstitutionData};
pub use salary::{PersonName, SalaryRecord};
pub(crate) use salary::PublishedSalaryRecord;
pub use salary_range::{RangeBound, SalaryRangeBand};
