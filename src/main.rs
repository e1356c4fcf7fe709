use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use spotart::{cli, config, warning};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightGreen.on_default())
        .placeholder(AnsiColor::BrightBlue.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    /// Log every resolver attempt to stderr
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show title, artist and artwork URL for a Spotify link
    Extract(ExtractOptions),

    /// Download the artwork image
    Download(DownloadOptions),

    /// Print only the artwork image URL
    Url(UrlOptions),

    /// Open the artwork in the default browser
    Open(UrlOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtractOptions {
    /// Spotify album, track or playlist URL (open.spotify.com or spotify.link)
    url: String,

    /// Print the result as JSON
    #[clap(long)]
    json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DownloadOptions {
    /// Spotify album, track or playlist URL (open.spotify.com or spotify.link)
    url: String,

    /// Target file or directory (defaults to "<artist> - <title>.jpg")
    #[clap(short, long)]
    output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct UrlOptions {
    /// Spotify album, track or playlist URL (open.spotify.com or spotify.link)
    url: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "spotart=debug" } else { "spotart=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment, using defaults. Err: {}", e);
    }

    match cli.command {
        Command::Extract(opt) => cli::show(opt.url, opt.json).await,
        Command::Download(opt) => cli::download(opt.url, opt.output).await,
        Command::Url(opt) => cli::print_url(opt.url).await,
        Command::Open(opt) => cli::open(opt.url).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
