use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    spotify::{Extractor, image},
    types::ArtworkResult,
};

pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}

/// Runs an extraction behind a spinner and returns the caller-held result.
pub async fn extract_with_spinner(
    extractor: &Extractor,
    url: &str,
) -> Result<ArtworkResult, crate::errors::ExtractError> {
    let pb = spinner("Extracting album artwork...");
    let outcome = extractor.extract(url).await;
    pb.finish_and_clear();
    outcome
}

/// Where a download ends up.
///
/// No output means the artwork's own file name in the current directory;
/// an existing directory gets the artwork's file name inside it; anything
/// else is taken as the file path.
pub fn resolve_output_path(output: Option<PathBuf>, artwork: &ArtworkResult) -> PathBuf {
    let file_name = image::artwork_file_name(artwork);
    match output {
        None => PathBuf::from(file_name),
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path,
    }
}
