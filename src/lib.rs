//! # analysis-bundler
//!
//! Packs static-analysis results into a script the static report viewer can
//! load straight from disk.
//!
//! The analyzer writes one YAML report of rule violations per application
//! (`output.yaml`) and optionally one YAML list of resolved dependencies
//! (`dependencies.yaml`). `analysis-bundler` reads any number of those
//! pairs, clears the payloads that cannot be represented in JSON, optionally
//! embeds the source files the incidents point at, and writes a single
//! `output.js`:
//!
//! ```text
//! window["apps"] = [{"id":"0000","name":"inventory","rulesets":[...],"depItems":[...],"files":{...}}]
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use analysis_bundler::config::{BundleConfig, Config, ListArgs, Overrides};
//! use analysis_bundler::pipeline;
//!
//! let overrides = Overrides {
//!     lists: ListArgs {
//!         analysis: Some("inventory/output.yaml,orders/output.yaml".into()),
//!         deps: Some("inventory/dependencies.yaml".into()),
//!         names: Some("inventory,orders".into()),
//!         ..ListArgs::default()
//!     },
//!     ..Overrides::default()
//! };
//! let config = BundleConfig::resolve(Config::load(None)?, overrides)?;
//! pipeline::run(&config)?;
//! # Ok::<(), analysis_bundler::error::BundleError>(())
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a linear pipeline:
//!
//! 1. **[`config`]** — load the TOML file and align the command-line lists
//!    into one [`config::AppEntry`] per application.
//! 2. **[`loader`]** — read and parse the YAML reports ([`provider`] derives
//!    names from provider settings when asked to).
//! 3. **[`enrich`]** — scrub free-form payloads and inline source files.
//! 4. **[`output`]** — render and write the bundle, and the terminal summary.
//!
//! [`pipeline::run`] chains the stages; [`report`] holds the data model and
//! [`error`] the error taxonomy.

pub mod config;
pub mod enrich;
pub mod error;
pub mod loader;
pub mod output;
pub mod pipeline;
pub mod provider;
pub mod report;
