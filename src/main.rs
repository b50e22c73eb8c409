//! `linkclip` CLI - Copy a page link with its metadata to the clipboard

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use linkclip::Config;

#[derive(Parser)]
#[command(name = "linkclip")]
#[command(about = "Copy a page link, title and metadata to the clipboard")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: ~/.config/linkclip/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy a page's link and metadata
    Copy {
        /// URL of the page
        url: String,

        /// Page title (default: the document's <title>, else the URL)
        #[arg(short, long)]
        title: Option<String>,

        /// Output format: plain, markdown (md), html
        #[arg(short, long)]
        format: Option<String>,

        /// Read the page from a local HTML file instead of fetching it
        #[arg(long, conflicts_with = "bridge")]
        html: Option<PathBuf>,

        /// Run extraction through the configured bridge process
        #[arg(long)]
        bridge: bool,

        /// Skip the oEmbed lookup for YouTube videos
        #[arg(long)]
        offline: bool,

        /// Print the text to stdout instead of writing the clipboard
        #[arg(short, long)]
        print: bool,

        /// Show the copied text on stderr
        #[arg(long)]
        preview: bool,
    },

    /// List registered site handlers in match order
    Handlers,

    /// Show which handler a URL resolves to
    Resolve {
        /// URL to resolve
        url: String,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stderr keeps stdout clean for --print
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Copy {
            url,
            title,
            format,
            html,
            bridge,
            offline,
            print,
            preview,
        } => {
            let options = cmd::copy::CopyOptions {
                title,
                format,
                html,
                bridge,
                offline,
                print,
                preview,
            };
            let copied = cmd::copy::cmd_copy(&url, options, &config).await?;
            if !copied {
                std::process::exit(1);
            }
        }
        Commands::Handlers => {
            cmd::handlers::cmd_handlers(&config)?;
        }
        Commands::Resolve { url } => {
            cmd::handlers::cmd_resolve(&url, &config)?;
        }
    }

    Ok(())
}
