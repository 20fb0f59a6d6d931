//! Selection values
//!
//! A selection captures everything the user picked for one comparison run.
//! It is an immutable value: editing returns a new selection, and switching
//! institution starts again from `Selection::default()` because job titles and
//! codes are not comparable across institutions.

use itertools::Itertools;
use serde::Serialize;

use crate::models::{FacetLevel, PersonName};

/// Secondary ordering of resolved groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum GroupOrdering {
    /// Title (in selection order) first, then level
    ByTitleThenLevel,
    /// Level first (institution-wide, then alphabetical), then title
    #[default]
    ByLevelThenTitle,
}

/// Facet at which groups are computed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// The whole institution
    InstitutionWide,
    /// Employees whose school/college is in the set; one pooled group
    Schools(Vec<String>),
    /// Employees whose department is in the set; one pooled group
    Departments(Vec<String>),
}

impl Scope {
    /// Single school scope
    #[must_use]
    pub fn school(name: impl Into<String>) -> Self {
        Self::Schools(vec![name.into()])
    }

    /// Single department scope
    #[must_use]
    pub fn department(name: impl Into<String>) -> Self {
        Self::Departments(vec![name.into()])
    }

    /// Facet level of groups produced under this scope
    #[must_use]
    pub fn facet_level(&self) -> FacetLevel {
        match self {
            Self::InstitutionWide => FacetLevel::InstitutionWide,
            Self::Schools(names) => FacetLevel::School(names.clone()),
            Self::Departments(names) => FacetLevel::Department(names.clone()),
        }
    }
}

/// Everything chosen for one comparison run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    job_titles: Vec<String>,
    scopes: Vec<Scope>,
    ordering: Option<GroupOrdering>,
    highlight_person: Option<PersonName>,
}

impl Selection {
    /// Create a selection of titles; duplicates keep their first position
    #[must_use]
    pub fn new<I, S>(job_titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            job_titles: job_titles.into_iter().map(Into::<String>::into).unique().collect(),
            ..Self::default()
        }
    }

    /// Titles crossed with institution-wide, per-school and per-department scopes
    #[must_use]
    pub fn multi_facet<T, S, D>(job_titles: T, schools: S, departments: D) -> Self
    where
        T: IntoIterator,
        T::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        let scopes = std::iter::once(Scope::InstitutionWide)
            .chain(
                schools
                    .into_iter()
                    .map(Into::<String>::into)
                    .unique()
                    .map(|school: String| Scope::Schools(vec![school])),
            )
            .chain(
                departments
                    .into_iter()
                    .map(Into::<String>::into)
                    .unique()
                    .map(|dept: String| Scope::Departments(vec![dept])),
            )
            .collect();

        Self::new(job_titles).with_scopes(scopes)
    }

    /// Add a title at the end unless it is already selected
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !self.job_titles.contains(&title) {
            self.job_titles.push(title);
        }
        self
    }

    /// Remove a title; later titles move up one rank
    #[must_use]
    pub fn without_title(mut self, title: &str) -> Self {
        self.job_titles.retain(|t| t != title);
        self
    }

    /// Append a scope
    #[must_use]
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scopes.push(scope);
        self
    }

    /// Replace the scope list
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<Scope>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Set the group ordering
    #[must_use]
    pub const fn with_ordering(mut self, ordering: GroupOrdering) -> Self {
        self.ordering = Some(ordering);
        self
    }

    /// Use `ordering` unless one was set explicitly
    #[must_use]
    pub fn with_default_ordering(mut self, ordering: GroupOrdering) -> Self {
        self.ordering.get_or_insert(ordering);
        self
    }

    /// Mark a person's records in every produced group
    #[must_use]
    pub fn with_highlight(mut self, person: PersonName) -> Self {
        self.highlight_person = Some(person);
        self
    }

    /// Selected titles in selection order
    #[must_use]
    pub fn job_titles(&self) -> &[String] {
        &self.job_titles
    }

    /// Requested scopes; institution-wide when none were requested
    #[must_use]
    pub fn scopes(&self) -> Vec<Scope> {
        if self.scopes.is_empty() {
            vec![Scope::InstitutionWide]
        } else {
            self.scopes.clone()
        }
    }

    /// Group ordering; level then title unless set
    #[must_use]
    pub fn ordering(&self) -> GroupOrdering {
        self.ordering.unwrap_or_default()
    }

    /// Person to highlight, if any
    #[must_use]
    pub const fn highlight_person(&self) -> Option<&PersonName> {
        self.highlight_person.as_ref()
    }

    /// Position of a title in selection order
    #[must_use]
    pub fn title_rank(&self, title: &str) -> Option<usize> {
        self.job_titles.iter().position(|t| t == title)
    }

    /// Whether no titles are selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.job_titles.is_empty()
    }
}
