//! Application names and source locations derived from provider settings.
//!
//! A provider settings file is the YAML list handed to the analyzer, one
//! block per language provider. Only the `initConfig[].location` values are
//! read here; everything else in the file is ignored.
//!
//! ```yaml
//! - name: java
//!   binaryPath: /jdtls/bin/jdtls
//!   initConfig:
//!     - location: /opt/input/source/inventory
//!       analysisMode: full
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::loader::read_yaml_list;

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct ProviderConfig {
    name: String,
    init_config: Vec<InitConfig>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct InitConfig {
    location: String,
}

/// Reads a provider settings file and returns the application's source
/// location.
///
/// When the providers point at several locations, the last distinct one in
/// file order wins. Returns `None` when no provider carries a location.
///
/// # Errors
///
/// Returns [`BundleError::Read`](crate::error::BundleError::Read) if the file
/// cannot be read and [`BundleError::Yaml`](crate::error::BundleError::Yaml)
/// if it is not a list of provider blocks.
pub fn source_location(settings_path: &Path) -> Result<Option<String>> {
    let configs: Vec<ProviderConfig> = read_yaml_list(settings_path)?;

    let mut locations: Vec<&str> = Vec::new();
    for config in &configs {
        for init in &config.init_config {
            if init.location.is_empty() || locations.contains(&init.location.as_str()) {
                continue;
            }
            debug!(provider = %config.name, location = %init.location, "source location");
            locations.push(&init.location);
        }
    }

    Ok(locations.last().map(|location| location.to_string()))
}

/// Reads a provider settings file and returns the application name: the
/// last path component of its [`source_location`], or an empty string.
///
/// # Errors
///
/// Same as [`source_location`].
pub fn application_name(settings_path: &Path) -> Result<String> {
    Ok(source_location(settings_path)?
        .map(|location| name_from_location(&location))
        .unwrap_or_default())
}

/// Final path component of a source location, ignoring trailing slashes.
///
/// ```
/// use analysis_bundler::provider::name_from_location;
///
/// assert_eq!(name_from_location("/opt/input/source/inventory/"), "inventory");
/// ```
pub fn name_from_location(location: &str) -> String {
    Path::new(location.trim_end_matches('/'))
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| location.to_string())
}
