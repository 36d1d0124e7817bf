//! Profile records, enumeration and interactive selection policy.

use std::io::BufRead;

use serde_yaml::Value;

use crate::errors::ProfileError;

use super::{ConfigDocument, INCLUDE_KEY};

/// Credential record projected from one entry of the merged document.
///
/// `target` and `username` are required; the remaining fields default to the
/// empty string, which the login action treats as "not set".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub target: String,
    pub username: String,
    pub password: String,
    pub org: String,
    pub space: String,
}

impl ConfigDocument {
    /// All top-level profile names except the reserved `include` key,
    /// sorted ascending regardless of the mapping's native ordering.
    pub fn profile_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .mapping()
            .keys()
            .filter_map(Value::as_str)
            .filter(|key| *key != INCLUDE_KEY)
            .map(str::to_string)
            .collect();
        names.sort();
        names
    }

    /// Project the named entry into a [`Profile`].
    pub fn resolve(&self, name: &str) -> Result<Profile, ProfileError> {
        let entry = self
            .mapping()
            .get(name)
            .ok_or_else(|| ProfileError::NotFound {
                name: name.to_string(),
            })?;

        Ok(Profile {
            target: required_field(entry, name, "target")?,
            username: required_field(entry, name, "username")?,
            password: optional_field(entry, "password"),
            org: optional_field(entry, "org"),
            space: optional_field(entry, "space"),
        })
    }
}

fn required_field(entry: &Value, name: &str, field: &'static str) -> Result<String, ProfileError> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ProfileError::MissingField {
            name: name.to_string(),
            field,
        })
}

fn optional_field(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Read one menu selection from the user.
///
/// Anything that does not parse as a non-negative integer, including
/// end-of-input, is `None` — a normal outcome, not an error.
pub fn read_selection(mut input: impl BufRead) -> Option<usize> {
    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    line.trim().parse().ok()
}

/// Apply the selection policy to a sorted name list.
///
/// A missing selection falls back to the first profile; an index past the
/// end of the list is rejected.
pub fn select_name(names: &[String], selection: Option<usize>) -> Result<&str, ProfileError> {
    let index = selection.unwrap_or(0);
    names
        .get(index)
        .map(String::as_str)
        .ok_or(ProfileError::InvalidSelection {
            index,
            count: names.len(),
        })
}
