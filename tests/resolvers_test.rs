mod common;

use std::sync::Arc;

use common::{ALBUM_URL, PLAYLIST_URL, TRACK_URL};
use serde_json::json;
use spotart::{
    config::Endpoints,
    errors::{ExtractError, FetchError, ResolverError},
    spotify::{
        Extractor,
        embed::{EmbedResolver, open_graph_tags},
        http::{HttpFetch, Relay, ReqwestFetcher},
        oembed::{OEmbedResolver, artist_from_title},
        reference::parse,
        resolver::ArtworkResolver,
        webapi::WebApiResolver,
    },
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn fetcher() -> Arc<dyn HttpFetch> {
    Arc::new(ReqwestFetcher::new())
}

#[test]
fn test_artist_from_title_patterns() {
    assert_eq!(artist_from_title("Foo - Bar"), Some("Foo".to_string()));
    assert_eq!(artist_from_title("Bar by Foo"), Some("Foo".to_string()));
    assert_eq!(artist_from_title("Bar BY Foo"), Some("Foo".to_string()));
    assert_eq!(artist_from_title("Foo · Bar"), Some("Foo".to_string()));
    assert_eq!(artist_from_title("Just A Title"), None);
    assert_eq!(artist_from_title(""), None);
}

#[test]
fn test_artist_from_title_first_pattern_wins() {
    // Both "X - Y" and "Y by X" match; the dash shape is checked first
    assert_eq!(
        artist_from_title("Stand by Me - Remastered"),
        Some("Stand by Me".to_string())
    );
    // Both "Y by X" and "X · Y" match; "by" is checked before the middle dot
    assert_eq!(
        artist_from_title("Songs · Vol 1 by Someone"),
        Some("Someone".to_string())
    );
}

#[test]
fn test_open_graph_tags() {
    let html = r#"<!doctype html><html><head>
        <meta property="og:title" content="Random Access Memories">
        <meta property="og:image" content="https://i.scdn.co/image/ab67616d00001e02abc?w=300&amp;h=300">
        </head><body></body></html>"#;

    let (image, title) = open_graph_tags(html);

    assert_eq!(
        image.as_deref(),
        Some("https://i.scdn.co/image/ab67616d00001e02abc?w=300&h=300")
    );
    assert_eq!(title.as_deref(), Some("Random Access Memories"));
    assert_eq!(open_graph_tags("<html></html>"), (None, None));
}

#[tokio::test]
async fn test_oembed_resolver() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", ALBUM_URL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "thumbnail_url": "https://i.scdn.co/image/ab67616d00001e02abc",
            "title": "Random Access Memories by Daft Punk",
            "type": "rich"
        })))
        .mount(&server)
        .await;

    let resolver = OEmbedResolver::new(fetcher(), format!("{}/oembed", server.uri()));
    let result = resolver
        .resolve(ALBUM_URL, &parse(ALBUM_URL).unwrap())
        .await
        .unwrap();

    // Resolvers hand back what they found; upgrading is the chain's job
    assert_eq!(result.image_url, "https://i.scdn.co/image/ab67616d00001e02abc");
    assert_eq!(result.title, "Random Access Memories by Daft Punk");
    assert_eq!(result.artist, "Daft Punk");
}

#[tokio::test]
async fn test_oembed_resolver_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", ALBUM_URL))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": "No Art" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .and(query_param("url", TRACK_URL))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let resolver = OEmbedResolver::new(fetcher(), format!("{}/oembed", server.uri()));

    assert_eq!(
        resolver.resolve(ALBUM_URL, &parse(ALBUM_URL).unwrap()).await,
        Err(ResolverError::NoThumbnail)
    );
    assert_eq!(
        resolver.resolve(TRACK_URL, &parse(TRACK_URL).unwrap()).await,
        Err(ResolverError::Transport(FetchError::Status(404)))
    );
}

#[tokio::test]
async fn test_webapi_resolver_album_through_relay() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/raw"))
        .and(query_param("url", "https://api.spotify.com/v1/albums/4aawyAB9vmqN3uQ7FjRGTy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Random Access Memories",
            "artists": [{ "name": "Daft Punk" }, { "name": "Pharrell Williams" }],
            "images": [
                { "url": "https://i.scdn.co/image/ab67616d00004851abc", "width": 64, "height": 64 },
                { "url": "https://i.scdn.co/image/ab67616d0000b273abc", "width": 640, "height": 640 },
                { "url": "https://i.scdn.co/image/ab67616d00001e02abc", "width": 300, "height": 300 }
            ]
        })))
        .mount(&server)
        .await;

    let relay = Relay::Prefix(format!("{}/raw?url=", server.uri()));
    let resolver = WebApiResolver::new(fetcher(), "https://api.spotify.com/v1", relay);
    let result = resolver
        .resolve(ALBUM_URL, &parse(ALBUM_URL).unwrap())
        .await
        .unwrap();

    assert_eq!(result.image_url, "https://i.scdn.co/image/ab67616d0000b273abc");
    assert_eq!(result.title, "Random Access Memories");
    assert_eq!(result.artist, "Daft Punk");
}

#[tokio::test]
async fn test_webapi_resolver_track_uses_album_art() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/tracks/4iV5W9uYEdYUVa79Axb7Rh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Get Lucky",
            "artists": [{ "name": "Daft Punk" }],
            "album": {
                "name": "Random Access Memories",
                "images": [
                    { "url": "https://i.scdn.co/image/small", "width": 100, "height": 50 },
                    { "url": "https://i.scdn.co/image/square", "width": 80, "height": 80 }
                ]
            }
        })))
        .mount(&server)
        .await;

    let resolver = WebApiResolver::new(fetcher(), format!("{}/v1", server.uri()), Relay::Direct);
    let result = resolver
        .resolve(TRACK_URL, &parse(TRACK_URL).unwrap())
        .await
        .unwrap();

    assert_eq!(result.image_url, "https://i.scdn.co/image/square");
    assert_eq!(result.title, "Random Access Memories");
    assert_eq!(result.artist, "Daft Punk");
}

#[tokio::test]
async fn test_webapi_resolver_playlist() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/37i9dQZF1DXcBWIGoYBM5M"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Today's Top Hits",
            "owner": { "display_name": "Spotify" },
            "images": [{ "url": "https://i.scdn.co/image/mosaic", "width": null, "height": null }]
        })))
        .mount(&server)
        .await;

    let resolver = WebApiResolver::new(fetcher(), format!("{}/v1", server.uri()), Relay::Direct);
    let result = resolver
        .resolve(PLAYLIST_URL, &parse(PLAYLIST_URL).unwrap())
        .await
        .unwrap();

    assert_eq!(result.image_url, "https://i.scdn.co/image/mosaic");
    assert_eq!(result.title, "Today's Top Hits");
    assert_eq!(result.artist, "Playlist by Spotify");
}

#[tokio::test]
async fn test_webapi_resolver_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/4aawyAB9vmqN3uQ7FjRGTy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Empty",
            "artists": [],
            "images": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/tracks/4iV5W9uYEdYUVa79Axb7Rh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": { "status": 401, "message": "No token provided" }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/playlists/37i9dQZF1DXcBWIGoYBM5M"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let resolver = WebApiResolver::new(fetcher(), format!("{}/v1", server.uri()), Relay::Direct);

    assert_eq!(
        resolver.resolve(ALBUM_URL, &parse(ALBUM_URL).unwrap()).await,
        Err(ResolverError::NoImage)
    );
    assert_eq!(
        resolver.resolve(TRACK_URL, &parse(TRACK_URL).unwrap()).await,
        Err(ResolverError::Transport(FetchError::Status(401)))
    );
    assert!(matches!(
        resolver.resolve(PLAYLIST_URL, &parse(PLAYLIST_URL).unwrap()).await,
        Err(ResolverError::Parse(_))
    ));
}

#[tokio::test]
async fn test_embed_resolver() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/embed/album/4aawyAB9vmqN3uQ7FjRGTy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><meta property="og:image" content="https://i.scdn.co/image/ab67616d00001e02abc"><meta property="og:title" content="Random Access Memories"></head></html>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/embed/track/4iV5W9uYEdYUVa79Axb7Rh"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><head></head></html>"))
        .mount(&server)
        .await;

    let resolver = EmbedResolver::new(fetcher(), format!("{}/embed", server.uri()));

    let result = resolver
        .resolve(ALBUM_URL, &parse(ALBUM_URL).unwrap())
        .await
        .unwrap();
    assert_eq!(result.image_url, "https://i.scdn.co/image/ab67616d00001e02abc");
    assert_eq!(result.title, "Random Access Memories");
    assert_eq!(result.artist, "Unknown Artist");

    assert_eq!(
        resolver.resolve(TRACK_URL, &parse(TRACK_URL).unwrap()).await,
        Err(ResolverError::NoImageInMarkup)
    );
}

#[tokio::test]
async fn test_full_chain_falls_through_to_embed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/oembed"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/albums/4aawyAB9vmqN3uQ7FjRGTy"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/embed/album/4aawyAB9vmqN3uQ7FjRGTy"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<meta property="og:image" content="https://i.scdn.co/image/ab67616d00001e02abc"><meta property="og:title" content="Homework">"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let endpoints = Endpoints {
        oembed_url: format!("{}/oembed", server.uri()),
        api_url: format!("{}/v1", server.uri()),
        embed_url: format!("{}/embed", server.uri()),
        relay: Relay::Direct,
    };
    let extractor = Extractor::new(fetcher(), endpoints);

    let result = extractor.extract(ALBUM_URL).await.unwrap();

    assert_eq!(result.image_url, "https://i.scdn.co/image/ab67616d0000b273abc");
    assert_eq!(result.title, "Homework");
    assert_eq!(result.artist, "Unknown Artist");
}

#[tokio::test]
async fn test_full_chain_exhausted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let endpoints = Endpoints {
        oembed_url: format!("{}/oembed", server.uri()),
        api_url: format!("{}/v1", server.uri()),
        embed_url: format!("{}/embed", server.uri()),
        relay: Relay::Direct,
    };
    let extractor = Extractor::new(fetcher(), endpoints);

    match extractor.extract(ALBUM_URL).await {
        Err(ExtractError::AllMethodsExhausted(failures)) => {
            let names: Vec<&str> = failures.iter().map(|f| f.resolver).collect();
            assert_eq!(names, vec!["oembed", "web-api", "embed"]);
            assert!(
                failures
                    .iter()
                    .all(|f| f.error == ResolverError::Transport(FetchError::Status(503)))
            );
        }
        other => panic!("expected exhausted chain, got {:?}", other),
    }
}
