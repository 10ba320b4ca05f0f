use std::path::PathBuf;

use analysis_bundler::config::AppEntry;
use analysis_bundler::enrich::enrich;
use analysis_bundler::loader::load_application;
use analysis_bundler::output::{self, render_bundle, write_bundle};
use analysis_bundler::report::Application;

const PREFIX: &str = "window[\"apps\"] = ";

fn inventory(inline: bool) -> Application {
    let mut app = load_application(
        0,
        &AppEntry {
            name: "inventory".to_string(),
            analysis: PathBuf::from("tests/fixtures/inventory/output.yaml"),
            deps: Some(PathBuf::from("tests/fixtures/inventory/dependencies.yaml")),
            provider_settings: None,
        },
    )
    .unwrap();
    enrich(&mut app, inline);
    app
}

fn payload(script: &str) -> serde_json::Value {
    let json = script
        .strip_prefix(PREFIX)
        .expect("bundle should start with the global assignment")
        .strip_suffix('\n')
        .expect("bundle should end with a newline");
    serde_json::from_str(json).expect("payload should be valid JSON")
}

#[test]
fn bundle_is_a_single_global_assignment() {
    let script = render_bundle(&[inventory(true)]).unwrap();
    assert!(script.starts_with(PREFIX));
    assert_eq!(script.lines().count(), 1);
    assert!(payload(&script).is_array());
}

#[test]
fn bundle_uses_viewer_field_names() {
    let parsed = payload(&render_bundle(&[inventory(true)]).unwrap());
    let app = &parsed[0];
    assert_eq!(app["id"], "0000");
    assert_eq!(app["name"], "inventory");
    assert!(app["rulesets"].is_array());
    assert!(app["depItems"].is_array());
    assert!(app["files"].is_object());

    let dep = &app["depItems"][0];
    assert_eq!(dep["fileURI"], "file:///opt/input/source/pom.xml");
    assert_eq!(dep["dependencies"][0]["resolvedIdentifier"].as_str().unwrap().len(), 40);
    assert_eq!(
        dep["dependencies"][0]["fileURIPrefix"],
        "file:///root/.m2/repository/io/quarkus/quarkus-core"
    );

    let incident = &app["rulesets"][0]["violations"]["jakarta-package-00000"]["incidents"][0];
    assert_eq!(incident["lineNumber"], 2);
    assert!(incident["codeSnip"].is_string());
}

#[test]
fn scrubbed_fields_are_absent() {
    let parsed = payload(&render_bundle(&[inventory(false)]).unwrap());
    let ruleset = &parsed[0]["rulesets"][0];

    for group in ["violations", "insights"] {
        for (_, violation) in ruleset[group].as_object().unwrap() {
            assert!(violation.get("extras").is_none());
            for incident in violation["incidents"].as_array().unwrap() {
                assert!(incident.get("variables").is_none());
            }
        }
    }
    assert!(parsed[0]["depItems"][0]["dependencies"][0]
        .get("extras")
        .is_none());
}

#[test]
fn files_omitted_when_inlining_disabled() {
    let parsed = payload(&render_bundle(&[inventory(false)]).unwrap());
    assert!(parsed[0].get("files").is_none());
}

#[test]
fn missing_deps_serialize_as_empty_list() {
    let parsed = payload(&render_bundle(&[Application::new(0, "bare")]).unwrap());
    assert_eq!(parsed[0]["depItems"], serde_json::json!([]));
    assert_eq!(parsed[0]["rulesets"], serde_json::json!([]));
}

#[test]
fn round_trip_reproduces_structure_minus_scrubbed_fields() {
    let app = inventory(false);
    let script = render_bundle(std::slice::from_ref(&app)).unwrap();
    let json = script.strip_prefix(PREFIX).unwrap();

    let parsed: Vec<Application> = serde_json::from_str(json).unwrap();
    assert_eq!(parsed, vec![app]);
}

#[test]
fn unscrubbed_complex_keys_fail_to_serialize() {
    let app = load_application(
        0,
        &AppEntry {
            name: "raw".to_string(),
            analysis: PathBuf::from("tests/fixtures/inventory/output.yaml"),
            ..AppEntry::default()
        },
    )
    .unwrap();
    let err = render_bundle(&[app]).unwrap_err();
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn write_bundle_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.js");
    std::fs::write(&path, "stale content that is much longer than the new bundle ".repeat(100))
        .unwrap();

    write_bundle(&path, &[Application::new(0, "fresh")]).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("stale"));
    assert_eq!(payload(&content)[0]["name"], "fresh");
}

#[test]
fn write_bundle_into_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("output.js");
    let err = write_bundle(&path, &[]).unwrap_err();
    assert!(err.to_string().contains("failed to write"));
}

#[test]
fn summary_lists_every_application() {
    let apps = vec![inventory(true), Application::new(1, "")];
    let summary = output::summary::format(&apps, std::path::Path::new("out.js"));
    assert!(summary.contains("Bundled 2 application(s)"));
    assert!(summary.contains("inventory"));
    assert!(summary.contains("(unnamed)"));
    assert!(summary.contains("out.js"));
}

#[test]
fn counts_leave_insights_out() {
    // One violation and one insight, one incident each.
    let app = inventory(false);
    assert_eq!(app.violation_count(), 1);
    assert_eq!(app.incident_count(), 1);
    assert_eq!(app.dependency_count(), 1);
}

#[test]
fn location_emitted_only_when_known() {
    let mut app = Application::new(0, "inventory");
    let parsed = payload(&render_bundle(std::slice::from_ref(&app)).unwrap());
    assert!(parsed[0].get("location").is_none());

    app.location = Some("/opt/input/source/inventory".to_string());
    let parsed = payload(&render_bundle(&[app]).unwrap());
    assert_eq!(parsed[0]["location"], "/opt/input/source/inventory");
}
