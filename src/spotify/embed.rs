//! Artwork scraped from the embeddable player page's Open Graph tags.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::{
    errors::ResolverError,
    spotify::{
        http::HttpFetch,
        resolver::{ArtworkResolver, UNKNOWN_ARTIST, UNKNOWN_TITLE},
    },
    types::{ArtworkResult, SpotifyReference},
};

static OG_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:image"]"#).unwrap());

static OG_TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[property="og:title"]"#).unwrap());

fn meta_content(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .filter_map(|element| element.value().attr("content"))
        .map(str::trim)
        .find(|content| !content.is_empty())
        .map(str::to_string)
}

/// Pulls `(og:image, og:title)` out of an HTML page.
pub fn open_graph_tags(html: &str) -> (Option<String>, Option<String>) {
    let document = Html::parse_document(html);
    (
        meta_content(&document, &OG_IMAGE),
        meta_content(&document, &OG_TITLE),
    )
}

pub struct EmbedResolver {
    fetcher: Arc<dyn HttpFetch>,
    embed_url: String,
}

impl EmbedResolver {
    pub fn new(fetcher: Arc<dyn HttpFetch>, embed_url: impl Into<String>) -> Self {
        EmbedResolver {
            fetcher,
            embed_url: embed_url.into(),
        }
    }
}

#[async_trait]
impl ArtworkResolver for EmbedResolver {
    fn name(&self) -> &'static str {
        "embed"
    }

    async fn resolve(
        &self,
        _url: &str,
        reference: &SpotifyReference,
    ) -> Result<ArtworkResult, ResolverError> {
        let embed_url = format!("{}/{}/{}", self.embed_url, reference.kind, reference.id);
        let response = self.fetcher.get(&embed_url).await?.ensure_success()?;

        let (image, title) = open_graph_tags(&response.body);
        let image_url = image.ok_or(ResolverError::NoImageInMarkup)?;

        Ok(ArtworkResult {
            image_url,
            title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            artist: UNKNOWN_ARTIST.to_string(),
        })
    }
}
