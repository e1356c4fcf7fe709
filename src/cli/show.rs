use tabled::{Table, settings::Style};

use crate::{error, spotify::Extractor, success, types::ArtworkTableRow, utils};

pub async fn show(url: String, json: bool) {
    let extractor = Extractor::from_env();
    let artwork = match utils::extract_with_spinner(&extractor, &url).await {
        Ok(artwork) => artwork,
        Err(e) => error!("{}", e),
    };

    if json {
        match serde_json::to_string_pretty(&artwork) {
            Ok(out) => println!("{}", out),
            Err(e) => error!("Failed to serialize artwork: {}", e),
        }
        return;
    }

    success!("Found artwork for {}", artwork.title);
    let mut table = Table::new(vec![ArtworkTableRow::from(&artwork)]);
    table.with(Style::rounded());
    println!("{}", table);
}
