//! Report data model.
//!
//! Mirrors the YAML documents written by the analyzer (`output.yaml` and
//! `dependencies.yaml`) and the JSON shape the report viewer reads. Every
//! input field is optional on the way in; empty collections and unset
//! scalars are skipped on the way out.
//!
//! Auxiliary payloads whose content is free-form (`extras`, `variables`) are
//! held as [`serde_yaml::Value`] or [`Mapping`] so that any YAML loads,
//! including non-scalar keys. They are cleared by
//! [`enrich::scrub`](crate::enrich::scrub) before the bundle is serialized.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;

/// One analyzed application as emitted in the bundle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// Zero-padded position in the input list (`"0000"`, `"0001"`, …).
    pub id: String,
    pub name: String,
    /// Source location the application was analyzed from, when known from
    /// provider settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub rulesets: Vec<RuleSet>,
    #[serde(rename = "depItems")]
    pub dep_items: Vec<DependencyItem>,
    /// Source text keyed by the exact incident location string.
    ///
    /// `None` when inlining is disabled, in which case the field is omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<BTreeMap<String, String>>,
}

impl Application {
    /// Creates an empty application for position `index`.
    pub fn new(index: usize, name: &str) -> Self {
        Application {
            id: format_id(index),
            name: name.to_string(),
            ..Application::default()
        }
    }

    /// Iterates over every violation and insight across all rule sets.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.rulesets
            .iter()
            .flat_map(|rs| rs.violations.values().chain(rs.insights.values()))
    }

    /// Violations across all rule sets; insights are not counted.
    pub fn violation_count(&self) -> usize {
        self.rulesets.iter().map(|rs| rs.violations.len()).sum()
    }

    /// Incidents of violations only, matching [`violation_count`](Self::violation_count).
    pub fn incident_count(&self) -> usize {
        self.rulesets
            .iter()
            .flat_map(|rs| rs.violations.values())
            .map(|v| v.incidents.len())
            .sum()
    }

    pub fn dependency_count(&self) -> usize {
        self.dep_items.iter().map(|d| d.dependencies.len()).sum()
    }

    pub fn file_count(&self) -> usize {
        self.files.as_ref().map_or(0, BTreeMap::len)
    }
}

/// Formats a zero-based position as a 4-digit identifier.
///
/// ```
/// use analysis_bundler::report::format_id;
///
/// assert_eq!(format_id(0), "0000");
/// assert_eq!(format_id(12), "0012");
/// ```
pub fn format_id(index: usize) -> String {
    format!("{index:04}")
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleSet {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub violations: BTreeMap<String, Violation>,
    /// Informational matches; same shape as violations, no effort attached.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub insights: BTreeMap<String, Violation>,
    /// Rule id to error message for rules that failed to evaluate.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmatched: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Violation {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// `mandatory`, `optional` or `potential`; kept verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    pub incidents: Vec<Incident>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<serde_yaml::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Incident {
    /// Location reference, usually a `file://` URI.
    pub uri: String,
    pub message: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub code_snip: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u64>,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub variables: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub url: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
}

/// Dependencies discovered in one build file by one provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyItem {
    #[serde(rename = "fileURI")]
    pub file_uri: String,
    pub provider: String,
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dependency {
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub classifier: String,
    pub indirect: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub resolved_identifier: String,
    #[serde(skip_serializing_if = "Mapping::is_empty")]
    pub extras: Mapping,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(
        rename = "fileURIPrefix",
        alias = "prefix",
        skip_serializing_if = "String::is_empty"
    )]
    pub file_uri_prefix: String,
}
