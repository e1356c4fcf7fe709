//! # CLI Module
//!
//! This module provides the command-line interface layer for spotart. It is
//! the presentation side of the extraction pipeline: every command takes the
//! URL the user typed or pasted, runs it through [`crate::spotify::Extractor`]
//! and renders the outcome.
//!
//! ## Commands
//!
//! - [`show`] - Displays title, artist and image URL as a table or JSON
//! - [`download`] - Saves the artwork image to disk
//! - [`print_url`] - Prints only the image URL, for piping into a clipboard tool
//! - [`open`] - Opens the artwork in the default browser
//!
//! ## Error Handling
//!
//! Extraction failures are rendered through the `error!` macro using the
//! error's display text, which is written for the user. The internal per-source
//! failures behind an exhausted chain are only visible with `--verbose`.
//!
//! ## Usage Patterns
//!
//! ```bash
//! spotart extract https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy
//! spotart extract https://spotify.link/Xh5iOW9nWXb --json
//! spotart download https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh -o covers/
//! spotart url https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M | wl-copy
//! spotart open https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy
//! ```

mod download;
mod open;
mod show;
mod url;

pub use download::download;
pub use open::open;
pub use show::show;
pub use url::print_url;
