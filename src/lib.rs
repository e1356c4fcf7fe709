//! Spotify Cover Artwork Extractor Library
//!
//! This library resolves Spotify album, track and playlist links to their
//! cover artwork. It validates and normalizes the link, identifies the
//! referenced resource and walks a fixed chain of artwork sources until one
//! of them yields an image, which is then upgraded to the largest known
//! resolution.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Typed failures of the extraction pipeline
//! - `spotify` - Link handling, artwork resolvers and the fallback chain
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotart::{config, spotify};
//!
//! #[tokio::main]
//! async fn main() -> spotart::Res<()> {
//!     config::load_env().await?;
//!     let artwork = spotify::extract("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy").await?;
//!     println!("{}", artwork.image_url);
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI plumbing (file output, configuration loading) where the
/// concrete error type does not matter to the caller. The extraction
/// pipeline itself returns the typed errors from [`errors`].
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Resolving short link...");
/// info!("Artwork saved to {}", path.display());
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Downloaded artwork for {}", title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The message goes to stderr so commands whose stdout is meant for piping
/// (see `spotart url`) stay clean. The process terminates with exit code 1,
/// so this must only be used for failures the user has to act on.
///
/// # Example
///
/// ```
/// error!("{}", err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the user should notice, e.g. a download
/// that only succeeded through the relay.
///
/// # Example
///
/// ```
/// warning!("Could not open browser, artwork is at {}", url);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
