//! Configuration management for the Spotify artwork extractor.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a working default, so a fresh
//! install runs without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf};

use crate::spotify::http::Relay;

pub const DEFAULT_OEMBED_URL: &str = "https://open.spotify.com/oembed";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_EMBED_URL: &str = "https://open.spotify.com/embed";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory if it doesn't exist and loads `spotart/.env` from
/// the platform-specific local data directory:
/// - Linux: `~/.local/share/spotart/.env`
/// - macOS: `~/Library/Application Support/spotart/.env`
/// - Windows: `%LOCALAPPDATA%/spotart/.env`
///
/// A missing file is not an error. Variables already present in the
/// process environment are never overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file
/// exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotart/.env");
    path
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().trim_end_matches('/').to_string(),
        _ => default.to_string(),
    }
}

/// Returns the oEmbed endpoint used by the metadata resolver.
///
/// Reads `SPOTART_OEMBED_URL`, defaulting to `https://open.spotify.com/oembed`.
pub fn oembed_url() -> String {
    var_or("SPOTART_OEMBED_URL", DEFAULT_OEMBED_URL)
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTART_API_URL`, defaulting to `https://api.spotify.com/v1`.
pub fn api_url() -> String {
    var_or("SPOTART_API_URL", DEFAULT_API_URL)
}

/// Returns the base URL of the embeddable player pages.
///
/// Reads `SPOTART_EMBED_URL`, defaulting to `https://open.spotify.com/embed`.
pub fn embed_url() -> String {
    var_or("SPOTART_EMBED_URL", DEFAULT_EMBED_URL)
}

/// Returns the relay that requests to third-party hosts are routed through.
///
/// Reads `SPOTART_RELAY_URL`, a prefix the percent-encoded target URL is
/// appended to (e.g. `https://api.allorigins.win/raw?url=`). Unset or empty
/// means requests go out directly.
pub fn relay() -> Relay {
    match env::var("SPOTART_RELAY_URL") {
        Ok(prefix) if !prefix.trim().is_empty() => Relay::Prefix(prefix.trim().to_string()),
        _ => Relay::Direct,
    }
}

/// All endpoints the extraction pipeline talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub oembed_url: String,
    pub api_url: String,
    pub embed_url: String,
    pub relay: Relay,
}

impl Endpoints {
    pub fn from_env() -> Self {
        Endpoints {
            oembed_url: oembed_url(),
            api_url: api_url(),
            embed_url: embed_url(),
            relay: relay(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints {
            oembed_url: DEFAULT_OEMBED_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            embed_url: DEFAULT_EMBED_URL.to_string(),
            relay: Relay::Direct,
        }
    }
}
