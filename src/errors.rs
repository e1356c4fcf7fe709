//! Failure kinds of the extraction pipeline.
//!
//! Three layers of errors exist:
//!
//! - [`FetchError`] - transport level, produced by an [`HttpFetch`](crate::spotify::http::HttpFetch)
//! - [`ResolverError`] - a single artwork source failed; always recovered by
//!   the fallback chain
//! - [`ExtractError`] - what the caller sees; the `Display` output of every
//!   variant is a distinct message meant to be shown to the user as-is

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => FetchError::Status(status.as_u16()),
            None => FetchError::Network(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolverError {
    #[error("no thumbnail found in oEmbed response")]
    NoThumbnail,
    #[error("no image found in Web API response")]
    NoImage,
    #[error("no og:image found in embed markup")]
    NoImageInMarkup,
    #[error("malformed response: {0}")]
    Parse(String),
    #[error(transparent)]
    Transport(#[from] FetchError),
}

impl From<serde_json::Error> for ResolverError {
    fn from(err: serde_json::Error) -> Self {
        ResolverError::Parse(err.to_string())
    }
}

/// One failed attempt of the fallback chain, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverFailure {
    pub resolver: &'static str,
    pub error: ResolverError,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("Please enter a Spotify URL.")]
    EmptyInput,
    #[error(
        "Unable to resolve spotify.link URL. Please try copying the link directly from the Spotify app or web player."
    )]
    UnresolvableShortLink,
    #[error(
        "Please enter a valid Spotify URL (album, track, or playlist). Both open.spotify.com and spotify.link URLs are supported."
    )]
    InvalidUrlFormat,
    #[error(
        "Unable to extract album artwork. Please try a different URL or check if the content is publicly available."
    )]
    AllMethodsExhausted(Vec<ResolverFailure>),
}
