use async_trait::async_trait;

use crate::{
    errors::ResolverError,
    types::{ArtworkResult, SpotifyReference},
};

pub const UNKNOWN_TITLE: &str = "Unknown Title";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// A single source of artwork metadata.
///
/// Implementations either produce a complete [`ArtworkResult`] or fail; the
/// fallback chain treats any failure as "try the next one".
#[async_trait]
pub trait ArtworkResolver: Send + Sync {
    /// Short name used in logs and in the aggregate failure.
    fn name(&self) -> &'static str;

    /// Resolves artwork for the resource behind `url`, which `reference` was parsed from.
    async fn resolve(
        &self,
        url: &str,
        reference: &SpotifyReference,
    ) -> Result<ArtworkResult, ResolverError>;
}
