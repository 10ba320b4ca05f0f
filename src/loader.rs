//! Reading analyzer output from disk.
//!
//! Loading is fail-fast: the first unreadable or malformed file aborts the
//! whole run. There is no per-application isolation because a partial
//! bundle would silently misrepresent the analysis.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::config::AppEntry;
use crate::error::{BundleError, Result};
use crate::provider;
use crate::report::Application;

/// Loads every configured application, in order.
///
/// The `n`th entry becomes the application with id `format_id(n)`.
///
/// # Errors
///
/// Propagates the first error from [`load_application`].
pub fn load_applications(entries: &[AppEntry]) -> Result<Vec<Application>> {
    entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| load_application(idx, entry))
        .collect()
}

/// Loads the analysis and dependency reports for one application.
///
/// The name comes from the entry, or from its provider settings file when
/// one is set; in that case the source location is recorded as well. A
/// missing or empty dependency path leaves `dep_items` empty.
///
/// # Errors
///
/// Returns [`BundleError::Read`] when a file cannot be read and
/// [`BundleError::Yaml`] when its content does not parse.
pub fn load_application(index: usize, entry: &AppEntry) -> Result<Application> {
    let (name, location) = match &entry.provider_settings {
        Some(settings) => {
            let location = provider::source_location(settings)?;
            let name = location
                .as_deref()
                .map(provider::name_from_location)
                .unwrap_or_default();
            (name, location)
        }
        None => (entry.name.clone(), None),
    };

    let mut app = Application::new(index, &name);
    app.location = location;
    info!(id = %app.id, name = %app.name, "loading {}", entry.analysis.display());
    app.rulesets = read_yaml_list(&entry.analysis)?;

    match entry.deps.as_deref() {
        Some(deps) if !deps.as_os_str().is_empty() => {
            debug!(id = %app.id, "loading dependencies from {}", deps.display());
            app.dep_items = read_yaml_list(deps)?;
        }
        _ => debug!(id = %app.id, "no dependency output"),
    }

    Ok(app)
}

/// Reads a YAML file holding a top-level list.
///
/// A file with no document (empty or whitespace only) or a null document
/// (`~`, `null`) is an empty list.
pub(crate) fn read_yaml_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|source| BundleError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(vec![]);
    }
    let list: Option<Vec<T>> =
        serde_yaml::from_str(&content).map_err(|source| BundleError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(list.unwrap_or_default())
}
