//! Bundle rendering and writing.
//!
//! | Item | Module | Use case |
//! |------|--------|----------|
//! | [`render_bundle`] / [`write_bundle`] | this module | The `output.js` script the viewer loads |
//! | [`summary::format`] | [`summary`] | Terminal recap after a run |
//!
//! The bundle is a single statement assigning the JSON-encoded application
//! list to [`GLOBAL_VARIABLE`]:
//!
//! ```text
//! window["apps"] = [{"id":"0000","name":"inventory","rulesets":[...],"depItems":[...]}]
//! ```

pub mod summary;

use std::path::Path;

use crate::error::{BundleError, Result};
use crate::report::Application;

/// Global the report viewer reads the applications from.
pub const GLOBAL_VARIABLE: &str = "apps";

/// Renders the full script text for `apps`.
///
/// # Errors
///
/// Returns [`BundleError::Json`] if an application cannot be serialized.
/// Scrubbed applications always serialize.
///
/// # Examples
///
/// ```
/// use analysis_bundler::output::render_bundle;
/// use analysis_bundler::report::Application;
///
/// let script = render_bundle(&[Application::new(0, "demo")]).unwrap();
/// assert!(script.starts_with(r#"window["apps"] = [{"id":"0000","name":"demo""#));
/// ```
pub fn render_bundle(apps: &[Application]) -> Result<String> {
    let payload = serde_json::to_string(apps)?;
    Ok(format!("window[\"{GLOBAL_VARIABLE}\"] = {payload}\n"))
}

/// Renders `apps` and writes the script to `path`, replacing any existing
/// file.
///
/// The payload is rendered before the file is created, so a serialization
/// failure leaves nothing on disk.
///
/// # Errors
///
/// Returns [`BundleError::Json`] on serialization failure and
/// [`BundleError::Write`] if the file cannot be written.
pub fn write_bundle(path: &Path, apps: &[Application]) -> Result<()> {
    let script = render_bundle(apps)?;
    std::fs::write(path, script).map_err(|source| BundleError::Write {
        path: path.to_path_buf(),
        source,
    })
}
