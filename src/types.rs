use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Album,
    Track,
    Playlist,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Album,
        ResourceKind::Track,
        ResourceKind::Playlist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Album => "album",
            ResourceKind::Track => "track",
            ResourceKind::Playlist => "playlist",
        }
    }

    /// Collection name used by the Web API (`/albums/{id}` etc.).
    pub fn api_collection(&self) -> &'static str {
        match self {
            ResourceKind::Album => "albums",
            ResourceKind::Track => "tracks",
            ResourceKind::Playlist => "playlists",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown resource kind '{}'", s))
    }
}

/// The (kind, id) pair identifying a Spotify album, track or playlist.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SpotifyReference {
    pub kind: ResourceKind,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkResult {
    pub image_url: String,
    pub title: String,
    pub artist: String,
}

#[derive(Tabled)]
pub struct ArtworkTableRow {
    pub title: String,
    pub artist: String,
    pub image: String,
}

impl From<&ArtworkResult> for ArtworkTableRow {
    fn from(artwork: &ArtworkResult) -> Self {
        ArtworkTableRow {
            title: artwork.title.clone(),
            artist: artwork.artist.clone(),
            image: artwork.image_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OEmbedResponse {
    pub thumbnail_url: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageObject {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetAlbumResponse {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetTrackResponse {
    pub album: Option<GetAlbumResponse>,
    #[serde(default)]
    pub artists: Vec<SimpleArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetPlaylistResponse {
    pub name: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
    pub owner: Option<PlaylistOwner>,
}
