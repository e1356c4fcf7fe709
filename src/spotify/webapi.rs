//! Artwork from the Spotify Web API resource documents.

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    errors::ResolverError,
    spotify::{
        http::{HttpFetch, Relay},
        image::select_best_image,
        resolver::{ArtworkResolver, UNKNOWN_ARTIST, UNKNOWN_TITLE},
    },
    types::{
        ArtworkResult, GetAlbumResponse, GetPlaylistResponse, GetTrackResponse, ImageObject,
        ResourceKind, SimpleArtist, SpotifyReference,
    },
};

pub struct WebApiResolver {
    fetcher: Arc<dyn HttpFetch>,
    api_url: String,
    relay: Relay,
}

impl WebApiResolver {
    pub fn new(fetcher: Arc<dyn HttpFetch>, api_url: impl Into<String>, relay: Relay) -> Self {
        WebApiResolver {
            fetcher,
            api_url: api_url.into(),
            relay,
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        reference: &SpotifyReference,
    ) -> Result<T, ResolverError> {
        let api_url = format!(
            "{uri}/{collection}/{id}",
            uri = self.api_url,
            collection = reference.kind.api_collection(),
            id = reference.id
        );

        let response = self
            .fetcher
            .get(&self.relay.wrap(&api_url))
            .await?
            .ensure_success()?;

        Ok(serde_json::from_str(&response.body)?)
    }
}

fn first_artist(artists: &[SimpleArtist]) -> String {
    artists
        .first()
        .map(|artist| artist.name.clone())
        .unwrap_or_else(|| UNKNOWN_ARTIST.to_string())
}

fn build_result(
    images: &[ImageObject],
    title: Option<String>,
    artist: String,
) -> Result<ArtworkResult, ResolverError> {
    let image = select_best_image(images).ok_or(ResolverError::NoImage)?;
    if image.url.is_empty() {
        return Err(ResolverError::NoImage);
    }

    Ok(ArtworkResult {
        image_url: image.url.clone(),
        title: title.unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
        artist,
    })
}

#[async_trait]
impl ArtworkResolver for WebApiResolver {
    fn name(&self) -> &'static str {
        "web-api"
    }

    async fn resolve(
        &self,
        _url: &str,
        reference: &SpotifyReference,
    ) -> Result<ArtworkResult, ResolverError> {
        match reference.kind {
            ResourceKind::Album => {
                let album: GetAlbumResponse = self.fetch(reference).await?;
                build_result(&album.images, album.name, first_artist(&album.artists))
            }
            ResourceKind::Track => {
                let track: GetTrackResponse = self.fetch(reference).await?;
                let artist = first_artist(&track.artists);
                match track.album {
                    Some(album) => build_result(&album.images, album.name, artist),
                    None => Err(ResolverError::NoImage),
                }
            }
            ResourceKind::Playlist => {
                let playlist: GetPlaylistResponse = self.fetch(reference).await?;
                let owner = playlist
                    .owner
                    .and_then(|owner| owner.display_name)
                    .unwrap_or_else(|| "Unknown".to_string());
                build_result(
                    &playlist.images,
                    playlist.name,
                    format!("Playlist by {}", owner),
                )
            }
        }
    }
}
