#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use spotart::{
    errors::{FetchError, ResolverError},
    spotify::{
        http::{HttpFetch, HttpResponse},
        resolver::ArtworkResolver,
    },
    types::{ArtworkResult, SpotifyReference},
};

pub const ALBUM_URL: &str = "https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy";
pub const TRACK_URL: &str = "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh";
pub const PLAYLIST_URL: &str = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M";
pub const SHORT_LINK: &str = "https://spotify.link/Xh5iOW9nWXb";

// In-memory HttpFetch; unknown URLs fail with a network error.
#[derive(Default)]
pub struct FakeFetcher {
    pub gets: HashMap<String, HttpResponse>,
    pub heads: HashMap<String, String>,
    pub bytes: HashMap<String, Vec<u8>>,
    pub calls: AtomicUsize,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_get(mut self, url: &str, status: u16, body: &str) -> Self {
        self.gets.insert(
            url.to_string(),
            HttpResponse {
                status,
                final_url: url.to_string(),
                body: body.to_string(),
            },
        );
        self
    }

    pub fn with_head(mut self, url: &str, final_url: &str) -> Self {
        self.heads.insert(url.to_string(), final_url.to_string());
        self
    }

    pub fn with_bytes(mut self, url: &str, bytes: &[u8]) -> Self {
        self.bytes.insert(url.to_string(), bytes.to_vec());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HttpFetch for FakeFetcher {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gets
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Network(format!("no route to {}", url)))
    }

    async fn head(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.heads
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Network(format!("no route to {}", url)))
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bytes.get(url).cloned().ok_or(FetchError::Status(404))
    }
}

// Resolver with a canned outcome that counts its invocations.
pub struct StubResolver {
    pub name: &'static str,
    pub outcome: Result<ArtworkResult, ResolverError>,
    pub calls: Arc<AtomicUsize>,
}

impl StubResolver {
    pub fn ok(name: &'static str, artwork: ArtworkResult) -> (Box<dyn ArtworkResolver>, Arc<AtomicUsize>) {
        Self::boxed(name, Ok(artwork))
    }

    pub fn failing(name: &'static str, error: ResolverError) -> (Box<dyn ArtworkResolver>, Arc<AtomicUsize>) {
        Self::boxed(name, Err(error))
    }

    fn boxed(
        name: &'static str,
        outcome: Result<ArtworkResult, ResolverError>,
    ) -> (Box<dyn ArtworkResolver>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let resolver = StubResolver {
            name,
            outcome,
            calls: Arc::clone(&calls),
        };
        (Box::new(resolver), calls)
    }
}

#[async_trait]
impl ArtworkResolver for StubResolver {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn resolve(
        &self,
        _url: &str,
        _reference: &SpotifyReference,
    ) -> Result<ArtworkResult, ResolverError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}

pub fn artwork(image_url: &str, title: &str, artist: &str) -> ArtworkResult {
    ArtworkResult {
        image_url: image_url.to_string(),
        title: title.to_string(),
        artist: artist.to_string(),
    }
}

pub fn calls(counter: &Arc<AtomicUsize>) -> usize {
    counter.load(Ordering::SeqCst)
}
