use anyhow::{Context as _, Result};
use artify_config::AppConfig as _;
use artify_database::{DatabaseConfig, EnvironmentName};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

fn main() -> Result<()> {
    // Variables already set in the process take precedence over the file.
    let dotenv = match dotenvy::dotenv() {
        Ok(path) => Some(path),
        Err(err) if err.not_found() => None,
        Err(err) => return Err(err).context("error loading .env file"),
    };

    artify_logging::init().context("error initializing logging")?;
    if let Some(path) = dotenv {
        debug!(path = %path.display(), "loaded environment file");
    }

    if let Err(err) = CommandLine::parse().handle_args() {
        eprintln!("error running artify_db: {:?}", err);
        std::process::exit(1);
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    version,
    rename_all = "kebab-case",
)]
struct CommandLine {
    /// Active deployment environment
    #[arg(
        long = "env",
        env = "ARTIFY_ENV",
        default_value_t = EnvironmentName::Development,
        global = true
    )]
    environment: EnvironmentName,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
enum Command {
    /// Print the resolved connection settings as JSON
    Show {
        /// Print the settings of every environment, not just the active one
        #[arg(long)]
        all: bool,

        /// Print passwords instead of masking them
        #[arg(long)]
        show_secrets: bool,
    },

    /// Check that the active environment has every setting it needs
    Check,
}

impl CommandLine {
    fn handle_args(self) -> Result<()> {
        let config = DatabaseConfig::from_environment()?;
        info!(environment = %self.environment, "loaded database configuration");

        let output = self.command.run(&config, self.environment)?;
        println!("{output}");
        Ok(())
    }
}

impl Command {
    fn run(&self, config: &DatabaseConfig, environment: EnvironmentName) -> Result<String> {
        match *self {
            Self::Show { all, show_secrets } => {
                let value = match (all, show_secrets) {
                    (true, true) => serde_json::to_value(config)?,
                    (true, false) => serde_json::to_value(config.redacted())?,
                    (false, true) => serde_json::to_value(config.get(environment))?,
                    (false, false) => serde_json::to_value(config.get(environment).redacted())?,
                };
                Ok(serde_json::to_string_pretty(&value)?)
            }
            Self::Check => {
                config
                    .get(environment)
                    .validate()
                    .with_context(|| format!("{environment} database configuration is not usable"))?;
                Ok(format!("{environment} database configuration is complete"))
            }
        }
    }
}
