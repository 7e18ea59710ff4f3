//! Declarative selection profiles.
//!
//! A profile revises the inclusion and exclusion sets in effect for a directory scan. It is a plain
//! record with two required fields, `test_dirs` and `exclude_tests`. Each one is either a list,
//! which replaces the current set, or a table of `add` / `remove` lists, which edits it:
//!
//! ```toml
//! # keep the default directories, add one, and exclude two more tests
//! test_dirs = { add = ["thread"] }
//! exclude_tests = { add = ["thread/stress_heap.py", "thread/stress_recurse.py"] }
//! ```
//!
//! ```toml
//! # replace both sets
//! test_dirs = ["basics", "thread"]
//! exclude_tests = ["basics/bytes_compare3.py"]
//! ```
//!
//! Files ending in `.json` are read as JSON; anything else is read as TOML.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::criteria::SelectionCriteria;
use crate::errors::{GenError, GenResult};

/// Inclusion/exclusion revision loaded from a profile file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Profile {
    /// Directories to scan
    pub test_dirs: SetOverride,
    /// Test paths to skip
    pub exclude_tests: SetOverride,
}

/// How a profile revises one set.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged, expecting = "a list of strings, or a table with `add` and `remove` lists")]
pub enum SetOverride {
    /// Replace the set with exactly these values.
    Replace(Vec<String>),
    /// Edit the current set.
    Edit(SetEdit),
}

/// Removals and additions applied to the current set, removals first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SetEdit {
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

impl SetOverride {
    /// Replace the set wholesale.
    pub fn replace<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        SetOverride::Replace(values.into_iter().map(Into::into).collect())
    }

    /// Keep the current set, adding the given values.
    pub fn add<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        SetOverride::Edit(SetEdit {
            add: values.into_iter().map(Into::into).collect(),
            remove: Vec::new(),
        })
    }

    /// Keep the current set unchanged.
    pub fn keep() -> Self {
        SetOverride::Edit(SetEdit::default())
    }

    /// Apply the revision to `current`.
    pub fn apply(self, mut current: BTreeSet<String>) -> BTreeSet<String> {
        match self {
            SetOverride::Replace(values) => values.into_iter().collect(),
            SetOverride::Edit(edit) => {
                for value in &edit.remove {
                    current.remove(value);
                }
                current.extend(edit.add);
                current
            }
        }
    }
}

/// Profile file syntax, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFormat {
    Toml,
    Json,
}

impl ProfileFormat {
    /// Pick the format for a profile path.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ProfileFormat::Json,
            _ => ProfileFormat::Toml,
        }
    }
}

impl Profile {
    /// Load and validate a profile file.
    ///
    /// ## Errors
    /// - [`GenError::ProfileRead`] if the file cannot be read as UTF-8 text.
    /// - [`GenError::ProfileInvalid`] if a field is missing, has the wrong shape, or is unknown.
    pub fn load(path: &Path) -> GenResult<Self> {
        let source = fs::read_to_string(path).map_err(|source| GenError::ProfileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let profile = Self::parse(&source, ProfileFormat::for_path(path)).map_err(|message| {
            GenError::ProfileInvalid {
                path: path.to_path_buf(),
                message,
            }
        })?;
        tracing::debug!(path = %path.display(), "loaded profile");
        Ok(profile)
    }

    /// Parse profile text in the given format.
    pub fn parse(source: &str, format: ProfileFormat) -> Result<Self, String> {
        match format {
            ProfileFormat::Toml => toml::from_str(source).map_err(|e| e.to_string()),
            ProfileFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        }
    }

    /// Revise `current` criteria: each set is replaced or edited as the profile says.
    pub fn apply(self, current: SelectionCriteria) -> SelectionCriteria {
        SelectionCriteria {
            test_dirs: self.test_dirs.apply(current.test_dirs),
            exclude_tests: self.exclude_tests.apply(current.exclude_tests),
        }
    }
}
