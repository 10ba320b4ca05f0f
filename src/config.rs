//! Configuration loading and per-application alignment.
//!
//! Settings come from two places:
//!
//! - an optional TOML file (`analysis-bundler.toml` in the current working
//!   directory, or the path given with `--config`), loaded by [`Config::load`];
//! - the comma-separated command-line lists, captured in [`ListArgs`].
//!
//! [`BundleConfig::resolve`] merges both into the immutable configuration
//! that every pipeline stage receives. The positional lists are resolved
//! once into explicit [`AppEntry`] records so that later stages never deal
//! with index alignment.
//!
//! # Configuration file
//!
//! ```toml
//! [output]
//! path = "report/output.js"
//! inline_files = false
//!
//! [[application]]
//! name = "inventory"
//! analysis = "out/inventory/output.yaml"
//! deps = "out/inventory/dependencies.yaml"
//! ```

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{BundleError, Result};

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "analysis-bundler.toml";

/// Bundle path used when neither the command line nor the file sets one.
pub const DEFAULT_OUTPUT_PATH: &str = "output.js";

/// Contents of the optional TOML configuration file.
///
/// All fields carry defaults so the file can be omitted entirely.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    /// Explicit application entries, used when no analysis list is passed on
    /// the command line.
    #[serde(rename = "application")]
    pub applications: Vec<AppEntry>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination of the bundle. Overridden by `--output-path`.
    pub path: Option<PathBuf>,
    /// Embed the text of every referenced source file into the bundle.
    pub inline_files: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: None,
            inline_files: true,
        }
    }
}

/// Inputs for a single application.
#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct AppEntry {
    /// Display name. Ignored when `provider_settings` is set.
    #[serde(default)]
    pub name: String,
    /// Analyzer output (`output.yaml`).
    pub analysis: PathBuf,
    /// Dependency output (`dependencies.yaml`), if any.
    #[serde(default)]
    pub deps: Option<PathBuf>,
    /// Provider settings file the name is derived from.
    #[serde(default)]
    pub provider_settings: Option<PathBuf>,
}

/// Raw comma-separated lists as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct ListArgs {
    pub analysis: Option<String>,
    pub deps: Option<String>,
    pub names: Option<String>,
    pub provider_settings: Option<String>,
}

impl ListArgs {
    /// Flags of the non-blank lists, in command-line spelling.
    ///
    /// ```
    /// use analysis_bundler::config::ListArgs;
    ///
    /// let lists = ListArgs {
    ///     deps: Some("deps.yaml".into()),
    ///     names: Some(" ".into()),
    ///     ..ListArgs::default()
    /// };
    /// assert_eq!(lists.given_flags(), vec!["--deps-output-list"]);
    /// ```
    pub fn given_flags(&self) -> Vec<&'static str> {
        [
            ("--analysis-output-list", &self.analysis),
            ("--deps-output-list", &self.deps),
            ("--application-name-list", &self.names),
            ("--provider-settings-list", &self.provider_settings),
        ]
        .into_iter()
        .filter(|(_, value)| is_set(value))
        .map(|(flag, _)| flag)
        .collect()
    }
}

/// Command-line values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub lists: ListArgs,
    pub output_path: Option<PathBuf>,
    pub no_inline_files: bool,
}

/// Fully resolved, immutable settings for one bundling run.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    /// One entry per application, in output order.
    pub applications: Vec<AppEntry>,
    pub output_path: PathBuf,
    pub inline_files: bool,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// Resolution order:
    /// 1. If `path` is `Some`, load from that file (error if missing).
    /// 2. Otherwise try [`DEFAULT_CONFIG_FILE`] in the current directory.
    /// 3. If that does not exist either, return [`Config::default()`].
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Config`] when the explicit path does not exist,
    /// the file cannot be read, or the TOML fails to parse.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let config_path = match path {
            Some(p) if p.exists() => Some(p.to_path_buf()),
            Some(p) => {
                return Err(BundleError::config(format!(
                    "Config file not found: {}",
                    p.display()
                )))
            }
            None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.exists()),
        };

        let Some(path) = config_path else {
            return Ok(Config::default());
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            BundleError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            BundleError::config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }
}

impl BundleConfig {
    /// Merges the file configuration with command-line overrides.
    ///
    /// When the command line carries an analysis list, applications are built
    /// from the lists by [`resolve_entries`] and any `[[application]]` entries
    /// in the file are ignored. Otherwise the file entries are used as-is and
    /// any name, dependency or provider settings list is ignored. Both cases
    /// are logged as warnings.
    ///
    /// # Errors
    ///
    /// Returns [`BundleError::Config`] when no application is configured or
    /// the lists cannot be aligned.
    pub fn resolve(file: Config, overrides: Overrides) -> Result<BundleConfig> {
        let applications = if is_set(&overrides.lists.analysis) {
            if !file.applications.is_empty() {
                warn!("command-line lists given, ignoring [[application]] entries from config file");
            }
            resolve_entries(&overrides.lists)?
        } else if !file.applications.is_empty() {
            let ignored = overrides.lists.given_flags();
            if !ignored.is_empty() {
                warn!(
                    "no --analysis-output-list given, ignoring {} in favour of [[application]] entries from config file",
                    ignored.join(", ")
                );
            }
            validate_entries(file.applications)?
        } else {
            return Err(BundleError::config("--analysis-output-list is required"));
        };

        let output_path = overrides
            .output_path
            .or(file.output.path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));

        Ok(BundleConfig {
            applications,
            output_path,
            inline_files: file.output.inline_files && !overrides.no_inline_files,
        })
    }
}

/// Builds one [`AppEntry`] per analysis path from the positional lists.
///
/// The `n`th name, dependency path and provider settings path belong to the
/// `n`th analysis path. Name and dependency lists may be shorter than the
/// analysis list; trailing applications then get an empty name or no
/// dependency report. Longer lists cannot be matched and are rejected.
///
/// # Errors
///
/// Returns [`BundleError::Config`] when the analysis list is empty, when
/// neither names nor provider settings are given (or both are), when a name
/// or dependency list is longer than the analysis list, or when the provider
/// settings list length differs from the analysis list length.
///
/// # Examples
///
/// ```
/// use analysis_bundler::config::{resolve_entries, ListArgs};
///
/// let lists = ListArgs {
///     analysis: Some("a.yaml,b.yaml".into()),
///     names: Some("AppA, AppB".into()),
///     ..ListArgs::default()
/// };
/// let entries = resolve_entries(&lists).unwrap();
/// assert_eq!(entries[1].name, "AppB");
/// ```
pub fn resolve_entries(lists: &ListArgs) -> Result<Vec<AppEntry>> {
    let analysis = split_list(lists.analysis.as_deref());
    if analysis.is_empty() {
        return Err(BundleError::config("--analysis-output-list is required"));
    }
    if analysis.iter().any(String::is_empty) {
        return Err(BundleError::config(
            "--analysis-output-list contains an empty entry",
        ));
    }

    let names = split_list(lists.names.as_deref());
    let settings = split_list(lists.provider_settings.as_deref());
    let deps = split_list(lists.deps.as_deref());

    match (names.is_empty(), settings.is_empty()) {
        (true, true) => {
            return Err(BundleError::config(
                "--application-name-list is required (or --provider-settings-list)",
            ))
        }
        (false, false) => {
            return Err(BundleError::config(
                "--application-name-list and --provider-settings-list are mutually exclusive",
            ))
        }
        _ => {}
    }

    if !settings.is_empty() && settings.len() != analysis.len() {
        return Err(BundleError::config(format!(
            "exactly as many provider settings as analysis outputs must be given ({} vs {})",
            settings.len(),
            analysis.len()
        )));
    }
    check_not_longer("--application-name-list", names.len(), analysis.len())?;
    check_not_longer("--deps-output-list", deps.len(), analysis.len())?;

    if deps.is_empty() {
        info!("dependency output path not provided, only parsing analysis output");
    } else if deps.len() < analysis.len() {
        warn!(
            "{} dependency outputs for {} applications; the rest get no dependencies",
            deps.len(),
            analysis.len()
        );
    }
    if !names.is_empty() && names.len() < analysis.len() {
        warn!(
            "{} names for {} applications; the rest are left unnamed",
            names.len(),
            analysis.len()
        );
    }

    let entries = analysis
        .into_iter()
        .enumerate()
        .map(|(idx, path)| AppEntry {
            name: names.get(idx).cloned().unwrap_or_default(),
            analysis: PathBuf::from(path),
            deps: deps
                .get(idx)
                .filter(|d| !d.is_empty())
                .map(PathBuf::from),
            provider_settings: settings.get(idx).map(PathBuf::from),
        })
        .collect();

    Ok(entries)
}

/// Splits a comma-separated flag value, trimming whitespace around entries.
///
/// An absent or blank value yields an empty list.
///
/// ```
/// use analysis_bundler::config::split_list;
///
/// assert_eq!(split_list(Some(" a , b")), vec!["a", "b"]);
/// assert!(split_list(Some("  ")).is_empty());
/// assert!(split_list(None).is_empty());
/// ```
pub fn split_list(value: Option<&str>) -> Vec<String> {
    match value.map(str::trim) {
        None | Some("") => vec![],
        Some(v) => v.split(',').map(|s| s.trim().to_string()).collect(),
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn check_not_longer(flag: &str, len: usize, analysis_len: usize) -> Result<()> {
    if len > analysis_len {
        return Err(BundleError::config(format!(
            "{flag} has {len} entries but only {analysis_len} analysis outputs were given"
        )));
    }
    Ok(())
}

fn validate_entries(entries: Vec<AppEntry>) -> Result<Vec<AppEntry>> {
    if let Some(idx) = entries
        .iter()
        .position(|e| e.analysis.as_os_str().is_empty())
    {
        return Err(BundleError::config(format!(
            "[[application]] entry {idx} has no analysis path"
        )));
    }
    Ok(entries)
}
