//! CLI Adapter.

mod history;
mod session;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::app::{AppContext, api, config};
use crate::domain::{AppConfig, AppError};

#[derive(Parser)]
#[command(name = "promptology")]
#[command(version)]
#[command(about = "Generate and refine LLM prompts through a local proxy", long_about = None)]
struct Cli {
    /// Path to a config file (defaults to <storage dir>/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the proxy server in front of the prompt backend
    #[clap(visible_alias = "s")]
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Prompt backend origin
        #[arg(short, long)]
        backend_url: Option<Url>,
        /// Allow cross-origin requests from any origin
        #[arg(long)]
        cors: bool,
    },
    /// Generate a prompt from a task description
    #[clap(visible_alias = "g")]
    Generate {
        /// What the prompt should do
        query: String,
    },
    /// Refine a generated prompt with feedback
    #[clap(visible_alias = "r")]
    Refine {
        /// Original task description
        #[arg(short, long)]
        query: String,
        /// Prompt to refine
        #[arg(short, long)]
        current: String,
        /// What to change
        #[arg(short, long)]
        feedback: String,
    },
    /// Inspect and manage prompt history
    #[clap(visible_alias = "h")]
    History {
        #[command(subcommand)]
        command: Option<history::HistoryCommands>,
    },
    /// Show or toggle the theme preference
    #[clap(visible_alias = "t")]
    Theme {
        #[command(subcommand)]
        command: Option<ThemeCommands>,
    },
    /// Check the backend through the proxy
    Health,
    /// Interactive prompt session
    #[clap(visible_alias = "i")]
    Session,
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(matches!(cli.command, Commands::Serve { .. }));

    if let Err(e) = dispatch(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(serving: bool) {
    let default_level = if serving { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn dispatch(cli: Cli) -> Result<(), AppError> {
    let mut app_config = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { host, port, backend_url, cors } => {
            apply_serve_overrides(&mut app_config, host, port, backend_url, cors)?;
            api::serve(&AppContext::new(app_config)?)
        }
        Commands::Generate { query } => {
            let prompt = api::generate(&AppContext::new(app_config)?, &query)?;
            println!("{}", prompt);
            Ok(())
        }
        Commands::Refine { query, current, feedback } => {
            let prompt = api::refine(&AppContext::new(app_config)?, &query, &current, &feedback)?;
            println!("{}", prompt);
            Ok(())
        }
        Commands::History { command } => {
            history::run_history(&AppContext::new(app_config)?, command.unwrap_or_default())
        }
        Commands::Theme { command } => run_theme(&AppContext::new(app_config)?, command),
        Commands::Health => {
            let payload = api::health(&AppContext::new(app_config)?)?;
            let rendered = serde_json::to_string_pretty(&payload)
                .map_err(|e| AppError::config_error(format!("Failed to render payload: {}", e)))?;
            println!("{}", rendered);
            Ok(())
        }
        Commands::Session => session::run_session(&AppContext::new(app_config)?),
    }
}

fn apply_serve_overrides(
    config: &mut AppConfig,
    host: Option<String>,
    port: Option<u16>,
    backend_url: Option<Url>,
    cors: bool,
) -> Result<(), AppError> {
    if let Some(host) = host {
        config.proxy.host = host;
    }
    if let Some(port) = port {
        config.proxy.port = port;
    }
    if let Some(url) = backend_url {
        config.proxy.backend_url = url;
    }
    if cors {
        config.proxy.cors = true;
    }
    config.validate()
}

fn run_theme(ctx: &AppContext, command: Option<ThemeCommands>) -> Result<(), AppError> {
    let theme = match command.unwrap_or(ThemeCommands::Show) {
        ThemeCommands::Show => api::theme(ctx)?,
        ThemeCommands::Toggle => api::toggle_theme(ctx)?,
    };
    println!("{}", theme);
    Ok(())
}
