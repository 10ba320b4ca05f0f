//! Run orchestration.
//!
//! [`run`] is the main entry-point: it loads every configured application,
//! enriches each one, and writes the bundle. Applications are processed one
//! after another on the calling thread.

use tracing::info;

use crate::config::BundleConfig;
use crate::enrich;
use crate::error::Result;
use crate::loader;
use crate::output;
use crate::report::Application;

/// Builds the bundle described by `config` and writes it to
/// [`BundleConfig::output_path`].
///
/// # Pipeline
///
/// 1. [`loader::load_applications`] reads every analysis and dependency
///    report. Any failure aborts before the output is touched.
/// 2. [`enrich::enrich`] scrubs each application and, when
///    [`BundleConfig::inline_files`] is set, inlines referenced sources.
/// 3. [`output::write_bundle`] serializes and writes the script.
///
/// Returns the applications as written, for reporting.
///
/// # Examples
///
/// ```rust,no_run
/// use analysis_bundler::config::{BundleConfig, Config, ListArgs, Overrides};
/// use analysis_bundler::pipeline;
///
/// let overrides = Overrides {
///     lists: ListArgs {
///         analysis: Some("output.yaml".into()),
///         names: Some("inventory".into()),
///         ..ListArgs::default()
///     },
///     ..Overrides::default()
/// };
/// let config = BundleConfig::resolve(Config::default(), overrides)?;
/// let apps = pipeline::run(&config)?;
/// assert_eq!(apps.len(), 1);
/// # Ok::<(), analysis_bundler::error::BundleError>(())
/// ```
pub fn run(config: &BundleConfig) -> Result<Vec<Application>> {
    let mut apps = loader::load_applications(&config.applications)?;

    for app in &mut apps {
        enrich::enrich(app, config.inline_files);
    }

    output::write_bundle(&config.output_path, &apps)?;
    info!(
        applications = apps.len(),
        "bundle written to {}",
        config.output_path.display()
    );

    Ok(apps)
}
