mod cli;
mod config_cmd;
mod inspect;
mod serve;

use std::process::ExitCode;

use quire_common::QuireError;
use quire_config::WorkspaceConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, ConfigAction};

const DEFAULT_LOG_DIRECTIVE: &str = "quire=info";

fn init_logging(directive: Option<&str>) {
    let directive = directive.unwrap_or(DEFAULT_LOG_DIRECTIVE);
    let directive = directive.parse::<Directive>().or_else(|e| {
        eprintln!("ignoring log level '{directive}': {e}");
        DEFAULT_LOG_DIRECTIVE.parse::<Directive>()
    });
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = directive {
        filter = filter.add_directive(directive);
    }
    // stdout belongs to `serve`.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn load_config(path: Option<&std::path::Path>) -> WorkspaceConfig {
    let loaded = match path {
        Some(path) => {
            tracing::info!("Using config override: {}", path.display());
            quire_config::toml_loader::load_from_path(path)
        }
        None => quire_config::load_config(),
    };
    loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WorkspaceConfig::default()
    })
}

async fn run(args: cli::Args) -> Result<(), QuireError> {
    let config = load_config(args.config.as_deref());
    let mut stdout = std::io::stdout().lock();
    match args.command {
        Command::Inspect { project } => {
            inspect::inspect(&project, config.layout.default_preset, &mut stdout)
        }
        Command::Reset { project } => inspect::reset(&project, &mut stdout),
        Command::Config {
            action: ConfigAction::Write { path },
        } => {
            let target = path.or(args.config);
            config_cmd::write(&config, target.as_deref(), &mut stdout)
        }
        Command::Serve => {
            drop(stdout);
            serve::run(&config).await?;
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    init_logging(args.log_level.as_deref());
    tracing::info!("Quire v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("quire: {e}");
            ExitCode::FAILURE
        }
    }
}
