//! Artwork from Spotify's oEmbed endpoint.
//!
//! The oEmbed document only carries a thumbnail and a display title, so the
//! artist has to be recovered from the title's shape.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::ResolverError,
    spotify::{
        http::HttpFetch,
        resolver::{ArtworkResolver, UNKNOWN_ARTIST, UNKNOWN_TITLE},
    },
    types::{ArtworkResult, OEmbedResponse, SpotifyReference},
};

/// Title shapes the artist can be read from, tried in order.
static ARTIST_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("artist - title", Regex::new(r"^(.+?)\s*-\s*.+$").unwrap()),
        ("title by artist", Regex::new(r"(?i)^.+?\s+by\s+(.+)$").unwrap()),
        ("artist · title", Regex::new(r"^(.+?)\s*·\s*.+$").unwrap()),
    ]
});

/// Reads the artist out of an oEmbed title.
///
/// `"X - Y"`, `"Y by X"` and `"X · Y"` all yield `X`; the first matching
/// shape wins. Returns `None` if no shape matches.
pub fn artist_from_title(title: &str) -> Option<String> {
    ARTIST_PATTERNS.iter().find_map(|(_, pattern)| {
        pattern
            .captures(title)
            .map(|captures| captures[1].trim().to_string())
            .filter(|artist| !artist.is_empty())
    })
}

pub struct OEmbedResolver {
    fetcher: Arc<dyn HttpFetch>,
    oembed_url: String,
}

impl OEmbedResolver {
    pub fn new(fetcher: Arc<dyn HttpFetch>, oembed_url: impl Into<String>) -> Self {
        OEmbedResolver {
            fetcher,
            oembed_url: oembed_url.into(),
        }
    }
}

#[async_trait]
impl ArtworkResolver for OEmbedResolver {
    fn name(&self) -> &'static str {
        "oembed"
    }

    async fn resolve(
        &self,
        url: &str,
        _reference: &SpotifyReference,
    ) -> Result<ArtworkResult, ResolverError> {
        let request_url = format!("{}?url={}", self.oembed_url, urlencoding::encode(url));
        let response = self.fetcher.get(&request_url).await?.ensure_success()?;
        let data: OEmbedResponse = serde_json::from_str(&response.body)?;

        let image_url = data
            .thumbnail_url
            .filter(|thumbnail| !thumbnail.is_empty())
            .ok_or(ResolverError::NoThumbnail)?;

        let title = data.title.filter(|title| !title.is_empty());
        let artist = title
            .as_deref()
            .and_then(artist_from_title)
            .unwrap_or_else(|| UNKNOWN_ARTIST.to_string());

        Ok(ArtworkResult {
            image_url,
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artist,
        })
    }
}
