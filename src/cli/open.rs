use crate::{error, info, spotify::Extractor, utils, warning};

pub async fn open(url: String) {
    let extractor = Extractor::from_env();
    let artwork = match utils::extract_with_spinner(&extractor, &url).await {
        Ok(artwork) => artwork,
        Err(e) => error!("{}", e),
    };

    info!("Opening artwork for {} by {}", artwork.title, artwork.artist);
    if webbrowser::open(&artwork.image_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            artwork.image_url
        )
    }
}
