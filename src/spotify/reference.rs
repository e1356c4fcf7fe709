use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    errors::ExtractError,
    types::{ResourceKind, SpotifyReference},
};

static REFERENCE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https://(open\.)?spotify\.com/(album|track|playlist)/([a-zA-Z0-9]+)").unwrap()
});

/// Extracts the resource kind and id from a direct Spotify URL.
///
/// Call only on URLs that passed [`is_direct_resource_url`](super::link::is_direct_resource_url).
///
/// # Example
///
/// ```
/// let reference = parse("https://open.spotify.com/album/4aawyAB9vmqN3uQ7FjRGTy?si=x")?;
/// assert_eq!(reference.kind, ResourceKind::Album);
/// assert_eq!(reference.id, "4aawyAB9vmqN3uQ7FjRGTy");
/// ```
pub fn parse(url: &str) -> Result<SpotifyReference, ExtractError> {
    let captures = REFERENCE_RE
        .captures(url)
        .ok_or(ExtractError::InvalidUrlFormat)?;

    let kind = captures[2]
        .parse::<ResourceKind>()
        .map_err(|_| ExtractError::InvalidUrlFormat)?;

    Ok(SpotifyReference {
        kind,
        id: captures[3].to_string(),
    })
}
