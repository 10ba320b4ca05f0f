//! Colored terminal recap of a bundling run.

use std::path::Path;

use colored::Colorize;

use crate::report::Application;

/// Renders one line per application followed by totals and the bundle path.
pub fn format(apps: &[Application], output_path: &Path) -> String {
    let mut out = String::new();
    let separator = "─".repeat(72);

    out.push('\n');
    out.push_str(&format!(
        "{}\n",
        format!("  Bundled {} application(s)", apps.len())
            .bold()
            .underline()
    ));
    out.push_str(&format!("{}\n", separator.dimmed()));
    out.push_str(&format!(
        "{}\n",
        format!(
            "  {:<4}  {:<22} {:>8} {:>10} {:>9} {:>6} {:>6}",
            "id", "name", "rulesets", "violations", "incidents", "deps", "files"
        )
        .dimmed()
    ));

    let mut totals = (0usize, 0usize, 0usize, 0usize);
    for app in apps {
        let (violations, incidents, deps, files) = (
            app.violation_count(),
            app.incident_count(),
            app.dependency_count(),
            app.file_count(),
        );
        totals.0 += violations;
        totals.1 += incidents;
        totals.2 += deps;
        totals.3 += files;

        let name = if app.name.is_empty() {
            format!("{:<22}", "(unnamed)").dimmed().to_string()
        } else {
            format!("{:<22}", app.name).bold().to_string()
        };
        out.push_str(&format!(
            "  {id:<4}  {name} {rs:>8} {violations:>10} {incidents:>9} {deps:>6} {files:>6}\n",
            id = app.id,
            rs = app.rulesets.len(),
        ));
    }

    out.push_str(&format!("{}\n", separator.dimmed()));
    out.push_str(&format!(
        "  Total: {}  {}  {}  {}\n",
        format!("{} violations", totals.0).yellow().bold(),
        format!("{} incidents", totals.1).yellow(),
        format!("{} dependencies", totals.2).blue(),
        format!("{} files inlined", totals.3).green(),
    ));
    out.push_str(&format!(
        "  Output written to {}\n",
        output_path.display().to_string().bold()
    ));

    out
}
