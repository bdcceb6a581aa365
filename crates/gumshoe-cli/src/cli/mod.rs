//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use gumshoe_core::config;

mod commands;

#[derive(Parser)]
#[command(name = "gumshoe")]
#[command(version)]
#[command(about = "Relay a prompt to the Groq chat-completion API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Send a prompt and print the cleaned response
    Ask {
        /// The prompt; multiple arguments are joined with spaces
        #[arg(value_name = "PROMPT", trailing_var_arg = true)]
        prompt: Vec<String>,

        /// Override the model from config
        #[arg(short, long)]
        model: Option<String>,

        /// Override max output tokens from config
        #[arg(long, value_name = "N")]
        max_tokens: Option<u32>,

        /// Print the raw response, reasoning span included
        #[arg(long)]
        show_reasoning: bool,
    },

    /// Send a prompt and relay response fragments as they arrive
    Stream {
        /// The prompt; defaults to "Hello" when omitted
        #[arg(value_name = "PROMPT", trailing_var_arg = true)]
        prompt: Vec<String>,

        /// Override the model from config
        #[arg(short, long)]
        model: Option<String>,

        /// Override max output tokens from config
        #[arg(long, value_name = "N")]
        max_tokens: Option<u32>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_tracing();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

/// Logs go to stderr; stdout carries nothing but the response text.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ask {
            prompt,
            model,
            max_tokens,
            show_reasoning,
        } => {
            let config = load_config(model.as_deref(), max_tokens)?;
            commands::ask::run(&prompt, &config, show_reasoning).await
        }
        Commands::Stream {
            prompt,
            model,
            max_tokens,
        } => {
            let config = load_config(model.as_deref(), max_tokens)?;
            commands::stream::run(&prompt, &config).await
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

fn load_config(
    model_override: Option<&str>,
    max_tokens_override: Option<u32>,
) -> Result<config::Config> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(model) = model_override {
        config.model = model.to_string();
    }
    if let Some(max_tokens) = max_tokens_override {
        config.max_tokens = max_tokens;
        config.stream_max_tokens = max_tokens;
    }
    Ok(config)
}
