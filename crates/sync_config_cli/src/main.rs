use std::path::PathBuf;

use clap::{Parser, Subcommand};
use sync_config_cli::commands::document_cmd;
use sync_config_cli::commands::transform_cmd::{self, TransformCommands};
use sync_config_cli::config::{AppConfig, DEFAULT_SETTINGS_FILENAME, LOG_FILTER_ENV};
use sync_config_cli::errors::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// sync-config CLI: validate and inspect issue sync field-mapping documents
#[derive(Parser)]
#[command(name = "sync-config")]
#[command(about = "Validate and inspect issue sync field-mapping documents", long_about = None)]
struct Cli {
    /// Path to the CLI settings file
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a mapping document and report whether it is valid
    Validate {
        /// Mapping document; defaults to the one in the settings file
        file: Option<PathBuf>,
    },

    /// List project keys with their mapping counts
    Projects {
        /// Mapping document; defaults to the one in the settings file
        file: Option<PathBuf>,
    },

    /// Print the configuration of one project as JSON
    Show {
        /// Mapping document; defaults to the one in the settings file
        file: Option<PathBuf>,

        /// Project key to show
        #[arg(short, long)]
        project: String,
    },

    /// Run a field value transformation
    #[command(subcommand)]
    Transform(TransformCommands),

    /// Write a settings file with default values
    Init {
        /// Where to write the settings file
        #[arg(short, long, default_value = DEFAULT_SETTINGS_FILENAME)]
        path: PathBuf,

        /// Mapping document to record in the settings
        #[arg(short, long)]
        document: Option<PathBuf>,
    },
}

fn init_logging(settings: &AppConfig) {
    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(cli: &Cli, settings: &AppConfig) -> Result<String, Error> {
    match &cli.command {
        Commands::Validate { file } => {
            document_cmd::validate(&settings.resolve_document(file.as_deref())?)
        }
        Commands::Projects { file } => {
            document_cmd::projects(&settings.resolve_document(file.as_deref())?)
        }
        Commands::Show { file, project } => {
            document_cmd::show(&settings.resolve_document(file.as_deref())?, project)
        }
        Commands::Transform(cmd) => Ok(transform_cmd::execute(cmd)),
        Commands::Init { path, document } => {
            let config = AppConfig {
                document: document.clone(),
                ..AppConfig::default()
            };
            config.save(path)?;
            info!(path = ?path, "Settings file created");
            Ok(format!("Settings written to {}", path.display()))
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let settings = AppConfig::load_or_default(cli.settings.as_deref());
    init_logging(settings.as_ref().unwrap_or(&AppConfig::default()));

    let settings = match settings {
        Ok(settings) => settings,
        Err(e) => {
            error!("Error: {e}");
            std::process::exit(2);
        }
    };

    match run(&cli, &settings) {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            error!("Error: {e}");
            std::process::exit(1);
        }
    }
}
