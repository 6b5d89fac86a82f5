//! `multiplayer` CLI - Build video embed codes from URLs

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use multiplayer::Config;

#[derive(Parser)]
#[command(name = "multiplayer")]
#[command(about = "Build normalized HTML embed codes for videos")]
#[command(version)]
struct Cli {
    /// Provider configuration file (default: ~/.config/multiplayer/providers.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an embed code for a video URL or embed snippet
    Embed {
        /// URL or HTML code to convert
        source: String,

        /// Player option as name=value (e.g. autoPlay=true, quality=hd720)
        #[arg(short = 's', long = "set")]
        set: Vec<String>,

        /// Player options as a JSON object, applied before --set
        #[arg(long)]
        options: Option<String>,

        /// Wrapper template; the first %s receives the player URL
        #[arg(short, long)]
        wrapper: Option<String>,

        /// Values for the wrapper's remaining %s slots, in order
        #[arg(short, long)]
        layout: Vec<String>,

        /// Print only the player URL
        #[arg(long)]
        url_only: bool,
    },

    /// Show which provider and video id a source resolves to
    Identify {
        /// URL or HTML code to inspect
        source: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List registered providers in matching order
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries embed output
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if cli.verbose { "debug" } else { "warn" }));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let multiplayer = Config::load(cli.config.as_deref())?.into_multiplayer();

    match cli.command {
        Commands::Embed {
            source,
            set,
            options,
            wrapper,
            layout,
            url_only,
        } => {
            let args = cmd::embed::EmbedArgs {
                source: &source,
                set: &set,
                options_json: options.as_deref(),
                wrapper: wrapper.as_deref(),
                layout: &layout,
                url_only,
            };
            cmd::embed::cmd_embed(&multiplayer, &args)?;
        }
        Commands::Identify { source, json } => {
            if !cmd::identify::cmd_identify(&multiplayer, &source, json)? {
                std::process::exit(1);
            }
        }
        Commands::Providers => {
            cmd::providers::cmd_providers(&multiplayer);
        }
    }

    Ok(())
}
