use crate::{error, spotify::Extractor, utils};

/// Prints nothing but the image URL so the output can be piped.
pub async fn print_url(url: String) {
    let extractor = Extractor::from_env();
    match utils::extract_with_spinner(&extractor, &url).await {
        Ok(artwork) => println!("{}", artwork.image_url),
        Err(e) => error!("{}", e),
    }
}
