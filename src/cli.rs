use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "analysis-bundler",
    version,
    about = "Bundle analyzer reports into a script for the static report viewer"
)]
pub struct Cli {
    /// Comma separated list of analysis output files, one per application
    #[arg(long)]
    pub analysis_output_list: Option<String>,

    /// Comma separated list of dependency output files, aligned with the analysis list
    #[arg(long)]
    pub deps_output_list: Option<String>,

    /// Comma separated list of application names, aligned with the analysis list
    #[arg(long, conflicts_with = "provider_settings_list")]
    pub application_name_list: Option<String>,

    /// Comma separated list of provider settings files to derive application names from
    #[arg(long)]
    pub provider_settings_list: Option<String>,

    /// Path of the generated bundle [default: output.js]
    #[arg(long)]
    pub output_path: Option<PathBuf>,

    /// Do not embed referenced source files into the bundle
    #[arg(long)]
    pub no_inline_files: bool,

    /// Custom config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log debug diagnostics
    #[arg(long, short)]
    pub verbose: bool,

    /// Do not print the summary table
    #[arg(long, short)]
    pub quiet: bool,
}
