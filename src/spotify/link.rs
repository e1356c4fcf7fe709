use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::ExtractError,
    spotify::http::{HttpFetch, Relay},
};

static DIRECT_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(open\.spotify\.com|spotify\.com)/(album|track|playlist)/[a-zA-Z0-9]+(\?.*)?$")
        .unwrap()
});

static SHORT_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://spotify\.link/[a-zA-Z0-9]+(\?.*)?$").unwrap());

static OPEN_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https://open\.spotify\.com/[^"'\s<>]+"#).unwrap());

static LOCALE_SEGMENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https://(?:open\.)?spotify\.com)/intl-[a-zA-Z]{2}(?:-[a-zA-Z]{2})?/").unwrap()
});

/// Returns true for `https://(open.)spotify.com/{album|track|playlist}/{id}` URLs,
/// optionally followed by a query string.
pub fn is_direct_resource_url(url: &str) -> bool {
    DIRECT_URL_RE.is_match(url)
}

/// Returns true for `https://spotify.link/{code}` share links.
pub fn is_short_link(url: &str) -> bool {
    SHORT_LINK_RE.is_match(url)
}

/// Drops the `/intl-xx` locale segment localized share links carry, e.g.
/// `https://open.spotify.com/intl-de/album/...` becomes
/// `https://open.spotify.com/album/...`. Other URLs are returned unchanged.
pub fn strip_locale(url: &str) -> String {
    LOCALE_SEGMENT_RE.replace(url, "$1/").into_owned()
}

fn find_open_url(haystack: &str) -> Option<String> {
    OPEN_URL_RE.find(haystack).map(|m| m.as_str().to_string())
}

/// Resolves a `spotify.link` short link to the `open.spotify.com` URL it points to.
///
/// First follows redirects with a HEAD request and looks for an
/// `open.spotify.com` URL in where it ended up. Share links usually land on
/// an intermediate page instead, so the page body is fetched next and
/// searched for the first `open.spotify.com` URL.
///
/// Every failure, transport errors included, maps to
/// [`ExtractError::UnresolvableShortLink`].
pub async fn resolve_short_link(
    fetcher: &dyn HttpFetch,
    relay: &Relay,
    url: &str,
) -> Result<String, ExtractError> {
    let target = relay.wrap(url);

    match fetcher.head(&target).await {
        Ok(final_url) => {
            let decoded = urlencoding::decode(&final_url)
                .map(|s| s.into_owned())
                .unwrap_or_else(|_| final_url.clone());
            if let Some(resolved) = find_open_url(&final_url).or_else(|| find_open_url(&decoded)) {
                debug!(short_link = url, resolved = %resolved, "short link resolved via redirect");
                return Ok(resolved);
            }
        }
        Err(e) => debug!(short_link = url, error = %e, "HEAD on short link failed"),
    }

    let response = fetcher.get(&target).await.map_err(|e| {
        debug!(short_link = url, error = %e, "GET on short link failed");
        ExtractError::UnresolvableShortLink
    })?;

    match find_open_url(&response.final_url).or_else(|| find_open_url(&response.body)) {
        Some(resolved) => {
            debug!(short_link = url, resolved = %resolved, "short link resolved via page body");
            Ok(resolved)
        }
        None => Err(ExtractError::UnresolvableShortLink),
    }
}
