mod cli;

use analysis_bundler::config::{BundleConfig, Config, ListArgs, Overrides};
use analysis_bundler::{output, pipeline};
use clap::Parser;
use cli::Cli;
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::WARN
    } else {
        Level::INFO
    };
    // RUST_LOG takes precedence over -v/-q.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let file_config = Config::load(cli.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    });

    let overrides = Overrides {
        lists: ListArgs {
            analysis: cli.analysis_output_list,
            deps: cli.deps_output_list,
            names: cli.application_name_list,
            provider_settings: cli.provider_settings_list,
        },
        output_path: cli.output_path,
        no_inline_files: cli.no_inline_files,
    };

    let config = BundleConfig::resolve(file_config, overrides).unwrap_or_else(|e| {
        eprintln!("Error: failed to validate flags: {e}");
        std::process::exit(e.exit_code());
    });

    match pipeline::run(&config) {
        Ok(apps) => {
            if !cli.quiet {
                eprint!("{}", output::summary::format(&apps, &config.output_path));
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
