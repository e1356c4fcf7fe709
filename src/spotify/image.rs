use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::FetchError,
    spotify::http::{HttpFetch, Relay},
    types::{ArtworkResult, ImageObject},
};

/// Size code of the 640x640 cover rendition on `i.scdn.co`.
pub const HIGH_RES_CODE: &str = "ab67616d0000b273";

/// Size codes of smaller renditions: 300x300, 64x64 and 160x160.
pub const LOW_RES_CODES: [&str; 3] = ["ab67616d00001e02", "ab67616d00004851", "ab67616d000048f1"];

static SIZE_PARAM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[?&][wh]=\d+").unwrap());

const UNSAFE_FILENAME_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Rewrites a Spotify image URL to its highest known resolution.
///
/// Replaces every low resolution size code with [`HIGH_RES_CODE`] and drops
/// `w=`/`h=` size query parameters. URLs containing neither come back
/// unchanged, and `upgrade(upgrade(x)) == upgrade(x)` for any input.
///
/// # Example
///
/// ```
/// assert_eq!(
///     upgrade("https://i.scdn.co/image/ab67616d00001e02abc"),
///     "https://i.scdn.co/image/ab67616d0000b273abc"
/// );
/// ```
pub fn upgrade(image_url: &str) -> String {
    let mut upgraded = image_url.to_string();

    // Parameters go first: removing one can splice a new parameter or a
    // size code together, the code rewrite below cannot.
    let had_query = upgraded.contains('?');
    let mut stripped = false;
    while SIZE_PARAM_RE.is_match(&upgraded) {
        upgraded = SIZE_PARAM_RE.replace_all(&upgraded, "").into_owned();
        stripped = true;
    }

    if stripped && had_query && !upgraded.contains('?') {
        upgraded = upgraded.replacen('&', "?", 1);
    }

    for code in LOW_RES_CODES {
        if upgraded.contains(code) {
            upgraded = upgraded.replace(code, HIGH_RES_CODE);
        }
    }

    upgraded
}

/// Picks the image to use from a Web API image array.
///
/// An exact 640x640 entry wins immediately. Otherwise the entry with the
/// largest area wins, where entries without dimensions only count if the
/// first entry has none either. Returns `None` for an empty array.
pub fn select_best_image(images: &[ImageObject]) -> Option<&ImageObject> {
    let mut best = images.first()?;

    for image in images {
        if let (Some(640), Some(640)) = (image.width, image.height) {
            return Some(image);
        }

        if let (Some(width), Some(height)) = (image.width, image.height) {
            let replaces = match (best.width, best.height) {
                (Some(bw), Some(bh)) => u64::from(width) * u64::from(height) > u64::from(bw) * u64::from(bh),
                _ => true,
            };
            if replaces {
                best = image;
            }
        }
    }

    Some(best)
}

/// Downloads the artwork image, retrying through the relay if a direct
/// request fails and a relay is configured.
pub async fn download_image(
    fetcher: &dyn HttpFetch,
    relay: &Relay,
    image_url: &str,
) -> Result<Vec<u8>, FetchError> {
    match fetcher.get_bytes(image_url).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if !relay.is_direct() => {
            debug!(url = image_url, error = %e, "direct download failed, retrying through relay");
            fetcher.get_bytes(&relay.wrap(image_url)).await
        }
        Err(e) => Err(e),
    }
}

fn clean_filename_part(part: &str) -> String {
    part.chars()
        .filter(|c| !UNSAFE_FILENAME_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_string()
}

/// File name the artwork is saved under: `"{artist} - {title}.jpg"`.
pub fn artwork_file_name(artwork: &ArtworkResult) -> String {
    format!(
        "{} - {}.jpg",
        clean_filename_part(&artwork.artist),
        clean_filename_part(&artwork.title)
    )
}
