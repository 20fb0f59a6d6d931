//! Per-institution title index

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Job code to title mapping with its reverse index
///
/// Built once per institution. Distinct titles are kept sorted so suggestion
/// lists are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct TitleIndex {
    code_to_title: BTreeMap<String, String>,
    title_to_codes: FxHashMap<String, BTreeSet<String>>,
    distinct_titles: Vec<String>,
}

impl TitleIndex {
    /// Build an index from `(job code, title)` pairs
    #[must_use]
    pub fn new<I, C, T>(mapping: I) -> Self
    where
        I: IntoIterator<Item = (C, T)>,
        C: Into<String>,
        T: Into<String>,
    {
        let code_to_title: BTreeMap<String, String> = mapping
            .into_iter()
            .map(|(code, title)| (code.into(), title.into()))
            .collect();

        let mut title_to_codes: FxHashMap<String, BTreeSet<String>> = FxHashMap::default();
        for (code, title) in &code_to_title {
            title_to_codes
                .entry(title.clone())
                .or_default()
                .insert(code.clone());
        }

        let mut distinct_titles: Vec<String> = title_to_codes.keys().cloned().collect();
        distinct_titles.sort_unstable();

        Self {
            code_to_title,
            title_to_codes,
            distinct_titles,
        }
    }

    /// Distinct titles in lexicographic order
    #[must_use]
    pub fn distinct_titles_sorted(&self) -> &[String] {
        &self.distinct_titles
    }

    /// Case-insensitive substring search over distinct titles
    ///
    /// Returns nothing for queries shorter than `min_len` characters after
    /// trimming. The match list is unbounded; see [`Self::search_limited`].
    #[must_use]
    pub fn search(&self, query: &str, min_len: usize) -> Vec<&str> {
        let needle = query.trim().to_lowercase();
        if needle.chars().count() < min_len {
            return Vec::new();
        }

        self.distinct_titles
            .iter()
            .filter(|title| title.to_lowercase().contains(&needle))
            .map(String::as_str)
            .collect()
    }

    /// Search truncated to at most `limit` suggestions
    #[must_use]
    pub fn search_limited(&self, query: &str, min_len: usize, limit: usize) -> Vec<&str> {
        let mut matches = self.search(query, min_len);
        matches.truncate(limit);
        matches
    }

    /// Exact reverse lookup; empty for unknown titles
    #[must_use]
    pub fn codes_for_title(&self, title: &str) -> BTreeSet<String> {
        self.title_to_codes.get(title).cloned().unwrap_or_default()
    }

    /// Forward lookup of a job code
    #[must_use]
    pub fn title_for_code(&self, code: &str) -> Option<&str> {
        self.code_to_title.get(code).map(String::as_str)
    }

    /// Number of job codes
    #[must_use]
    pub fn len(&self) -> usize {
        self.code_to_title.len()
    }

    /// Whether the mapping is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code_to_title.is_empty()
    }
}

impl From<BTreeMap<String, String>> for TitleIndex {
    fn from(mapping: BTreeMap<String, String>) -> Self {
        Self::new(mapping)
    }
}

impl From<TitleIndex> for BTreeMap<String, String> {
    fn from(index: TitleIndex) -> Self {
        index.code_to_title
    }
}
