use std::path::{Path, PathBuf};

use crate::{
    Res, error, info,
    spotify::{Extractor, image},
    success,
    types::ArtworkResult,
    utils,
};

pub async fn download(url: String, output: Option<PathBuf>) {
    let extractor = Extractor::from_env();
    let artwork = match utils::extract_with_spinner(&extractor, &url).await {
        Ok(artwork) => artwork,
        Err(e) => error!("{}", e),
    };

    let path = utils::resolve_output_path(output, &artwork);
    info!("Downloading artwork for {} by {}", artwork.title, artwork.artist);

    match save_artwork(&extractor, &artwork, &path).await {
        Ok(size) => success!("Saved {} ({} KiB)", path.display(), size / 1024),
        Err(e) => error!(
            "Failed to download artwork: {}\nOpen the image manually instead: {}",
            e,
            artwork.image_url
        ),
    }
}

async fn save_artwork(extractor: &Extractor, artwork: &ArtworkResult, path: &Path) -> Res<usize> {
    let pb = utils::spinner("Fetching image...");
    let bytes = image::download_image(extractor.fetcher(), extractor.relay(), &artwork.image_url).await;
    pb.finish_and_clear();
    let bytes = bytes?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        async_fs::create_dir_all(parent).await?;
    }
    async_fs::write(path, &bytes).await?;

    Ok(bytes.len())
}
