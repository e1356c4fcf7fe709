use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    config::Endpoints,
    errors::{ExtractError, ResolverFailure},
    spotify::{
        embed::EmbedResolver,
        http::{HttpFetch, Relay, ReqwestFetcher},
        image, link,
        oembed::OEmbedResolver,
        reference,
        resolver::ArtworkResolver,
        webapi::WebApiResolver,
    },
    types::{ArtworkResult, SpotifyReference},
};

/// Outcome of one extraction: the artwork, or the reason there is none.
pub type ExtractionOutcome = Result<ArtworkResult, ExtractError>;

/// Progress of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionState {
    NotStarted,
    TryingResolver(usize),
    Succeeded(ArtworkResult),
    Failed,
}

/// Runs the whole pipeline: link normalization, parsing and the resolver chain.
pub struct Extractor {
    fetcher: Arc<dyn HttpFetch>,
    relay: Relay,
    resolvers: Vec<Box<dyn ArtworkResolver>>,
}

impl Extractor {
    /// Builds the standard chain (oEmbed, Web API, embed page) on top of `fetcher`.
    pub fn new(fetcher: Arc<dyn HttpFetch>, endpoints: Endpoints) -> Self {
        let resolvers: Vec<Box<dyn ArtworkResolver>> = vec![
            Box::new(OEmbedResolver::new(
                Arc::clone(&fetcher),
                endpoints.oembed_url,
            )),
            Box::new(WebApiResolver::new(
                Arc::clone(&fetcher),
                endpoints.api_url,
                endpoints.relay.clone(),
            )),
            Box::new(EmbedResolver::new(
                Arc::clone(&fetcher),
                endpoints.embed_url,
            )),
        ];

        Self::with_resolvers(fetcher, endpoints.relay, resolvers)
    }

    /// Builds an extractor with a custom resolver chain, tried in the given order.
    pub fn with_resolvers(
        fetcher: Arc<dyn HttpFetch>,
        relay: Relay,
        resolvers: Vec<Box<dyn ArtworkResolver>>,
    ) -> Self {
        Extractor {
            fetcher,
            relay,
            resolvers,
        }
    }

    /// Extractor backed by reqwest and configured from the environment.
    pub fn from_env() -> Self {
        Self::new(Arc::new(ReqwestFetcher::new()), Endpoints::from_env())
    }

    pub fn fetcher(&self) -> &dyn HttpFetch {
        self.fetcher.as_ref()
    }

    pub fn relay(&self) -> &Relay {
        &self.relay
    }

    /// Turns free-form user input into artwork.
    ///
    /// Blank input fails with [`ExtractError::EmptyInput`] before any request
    /// is made. Short links are resolved first; anything that is not then a
    /// direct album, track or playlist URL fails with
    /// [`ExtractError::InvalidUrlFormat`].
    pub async fn extract(&self, raw: &str) -> ExtractionOutcome {
        let input = raw.trim();
        if input.is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        let mut url = link::strip_locale(input);
        if link::is_short_link(&url) {
            debug!(short_link = %url, "resolving short link");
            url = link::strip_locale(
                &link::resolve_short_link(self.fetcher.as_ref(), &self.relay, &url).await?,
            );
        }

        if !link::is_direct_resource_url(&url) {
            return Err(ExtractError::InvalidUrlFormat);
        }

        let reference = reference::parse(&url)?;
        self.run(&url, &reference).await
    }

    /// Walks the resolver chain for an already parsed reference.
    ///
    /// The first resolver to succeed wins and later ones are never called.
    /// Its image URL is passed through [`image::upgrade`].
    pub async fn run(&self, url: &str, reference: &SpotifyReference) -> ExtractionOutcome {
        let mut failures: Vec<ResolverFailure> = Vec::new();
        let mut state = ExtractionState::NotStarted;

        loop {
            state = match state {
                ExtractionState::NotStarted => ExtractionState::TryingResolver(0),
                ExtractionState::TryingResolver(index) => match self.resolvers.get(index) {
                    None => ExtractionState::Failed,
                    Some(resolver) => match resolver.resolve(url, reference).await {
                        Ok(mut artwork) => {
                            artwork.image_url = image::upgrade(&artwork.image_url);
                            info!(
                                resolver = resolver.name(),
                                kind = %reference.kind,
                                id = %reference.id,
                                "artwork resolved"
                            );
                            ExtractionState::Succeeded(artwork)
                        }
                        Err(error) => {
                            info!(resolver = resolver.name(), %error, "resolver failed, trying next");
                            failures.push(ResolverFailure {
                                resolver: resolver.name(),
                                error,
                            });
                            ExtractionState::TryingResolver(index + 1)
                        }
                    },
                },
                ExtractionState::Succeeded(artwork) => return Ok(artwork),
                ExtractionState::Failed => {
                    return Err(ExtractError::AllMethodsExhausted(failures));
                }
            };
        }
    }
}
