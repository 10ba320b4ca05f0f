//! Scrubbing and source inlining.
//!
//! Two passes run over every loaded [`Application`]:
//!
//! 1. [`scrub`] clears the free-form payloads the analyzer attaches to
//!    violations, incidents and dependencies. Their content is arbitrary YAML
//!    (non-string keys, tags) that has no stable JSON form, and the viewer
//!    does not read them.
//! 2. [`inline_files`] reads the file behind every incident location and
//!    stores its text in [`Application::files`].
//!
//! Inlining is best-effort: a location that is not a `file:` URI, or whose
//! file cannot be read, is logged and skipped. Neither pass can fail.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};
use url::Url;

use crate::report::Application;

/// Scrubs `app` and, when `inline` is set, attaches referenced file contents.
///
/// With `inline` unset, [`Application::files`] stays `None` and is omitted
/// from the bundle.
pub fn enrich(app: &mut Application, inline: bool) {
    scrub(app);
    if inline {
        inline_files(app);
    }
}

/// Clears `extras` on violations and dependencies and `variables` on
/// incidents.
///
/// ```
/// use analysis_bundler::enrich::scrub;
/// use analysis_bundler::report::{Application, RuleSet, Violation};
///
/// let mut violation = Violation::default();
/// violation.extras = Some(serde_yaml::Value::String("opaque".into()));
/// let mut ruleset = RuleSet::default();
/// ruleset.violations.insert("rule-001".into(), violation);
///
/// let mut app = Application::new(0, "demo");
/// app.rulesets.push(ruleset);
/// scrub(&mut app);
///
/// assert!(app.rulesets[0].violations["rule-001"].extras.is_none());
/// ```
pub fn scrub(app: &mut Application) {
    for ruleset in &mut app.rulesets {
        for violation in ruleset
            .violations
            .values_mut()
            .chain(ruleset.insights.values_mut())
        {
            violation.extras = None;
            for incident in &mut violation.incidents {
                incident.variables.clear();
            }
        }
    }

    for item in &mut app.dep_items {
        for dep in &mut item.dependencies {
            dep.extras.clear();
        }
    }
}

/// Reads every distinct incident location and stores its text under the
/// exact location string.
///
/// Replaces any previous [`Application::files`] content. The map is present
/// (possibly empty) after this call.
pub fn inline_files(app: &mut Application) {
    let locations: BTreeSet<&str> = app
        .violations()
        .flat_map(|v| v.incidents.iter())
        .map(|i| i.uri.as_str())
        .filter(|uri| !uri.is_empty())
        .collect();

    let mut files = BTreeMap::new();
    for location in locations {
        if let Some(content) = read_location(location) {
            files.insert(location.to_string(), content);
        }
    }

    debug!(id = %app.id, inlined = files.len(), "inlined source files");
    app.files = Some(files);
}

/// Resolves a `file:` location to a local path and reads it.
fn read_location(location: &str) -> Option<String> {
    let url = match Url::parse(location) {
        Ok(url) => url,
        Err(e) => {
            debug!(location, "not a URI, skipping: {e}");
            return None;
        }
    };

    let Ok(path) = url.to_file_path() else {
        debug!(location, "not a local file URI, skipping");
        return None;
    };

    match std::fs::read(&path) {
        Ok(bytes) => Some(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => {
            warn!("unable to read {}: {e}", path.display());
            None
        }
    }
}
