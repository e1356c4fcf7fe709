//! # Spotify Integration Module
//!
//! This module turns a Spotify link into cover artwork. It covers everything
//! between the user's input string and a finished [`ArtworkResult`](crate::types::ArtworkResult): link
//! validation, short link resolution, resource identification, the artwork
//! sources themselves and the resolution upgrade of the final image URL.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI)
//!          ↓
//! Extractor (extract)
//!     ├── Link normalization (link)
//!     ├── Resource identification (reference)
//!     ├── Resolver chain, first success wins
//!     │     ├── oEmbed metadata (oembed)
//!     │     ├── Web API documents (webapi)
//!     │     └── Embed page Open Graph tags (embed)
//!     └── Resolution upgrade (image)
//!          ↓
//! HTTP Layer (http, reqwest)
//! ```
//!
//! ## Core Modules
//!
//! ### Link Handling
//!
//! [`link`] - Classifies input as a direct `open.spotify.com` resource URL or
//! a `spotify.link` short link and resolves the latter by following
//! redirects, falling back to searching the landing page.
//!
//! [`reference`] - Extracts the resource kind (album, track, playlist) and
//! its id from a direct URL.
//!
//! ### Artwork Sources
//!
//! All sources implement [`resolver::ArtworkResolver`] and are tried in a
//! fixed order:
//!
//! 1. [`oembed`] - Spotify's oEmbed endpoint; thumbnail plus a display title
//!    the artist is derived from
//! 2. [`webapi`] - the Web API album/track/playlist document; the largest
//!    image is picked from its image array
//! 3. [`embed`] - the embeddable player page; `og:image` and `og:title`
//!
//! A failing source is logged and the next one is tried. Only when all of
//! them fail does the caller see an error.
//!
//! ### Images
//!
//! [`image`] - Rewrites `i.scdn.co` size codes to the 640x640 rendition,
//! selects the best entry of an image array and downloads the final image.
//!
//! ## Relay
//!
//! Requests that a browser could only make through a CORS relay (Web API,
//! short links, image download fallback) can be routed through a
//! configurable prefix, see [`http::Relay`] and `SPOTART_RELAY_URL`. By
//! default requests go out directly.
//!
//! ## Usage Patterns
//!
//! ```rust
//! let artwork = spotify::extract("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh").await?;
//! println!("{} by {}: {}", artwork.title, artwork.artist, artwork.image_url);
//! ```
//!
//! With a custom HTTP layer, e.g. in tests:
//!
//! ```rust
//! let extractor = Extractor::new(Arc::new(my_fetcher), Endpoints::default());
//! let artwork = extractor.extract(input).await?;
//! ```

pub mod embed;
pub mod extract;
pub mod http;
pub mod image;
pub mod link;
pub mod oembed;
pub mod reference;
pub mod resolver;
pub mod webapi;

pub use extract::{ExtractionOutcome, ExtractionState, Extractor};

/// Extracts artwork for `input` using the environment's configuration.
pub async fn extract(input: &str) -> ExtractionOutcome {
    Extractor::from_env().extract(input).await
}
