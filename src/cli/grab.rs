use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::Config, error, importer, info, management::Library, spotify::SpotifyClient, success,
    utils,
};

pub async fn grab(query: String) {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => error!("{}", e),
    };

    let library = Library::new(config.library_root.clone(), config.layout);
    let client = SpotifyClient::new(config);

    info!(
        "Grabbing \"{}\" into {} ({} layout)",
        query,
        library.root().display(),
        library.layout()
    );

    let pb = ProgressBar::new_spinner();
    pb.set_message("Searching Spotify...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let album = match importer::lookup(&client, &query).await {
        Ok(album) => album,
        Err(e) => {
            pb.finish_and_clear();
            error!("{}", e);
        }
    };
    pb.finish_and_clear();

    let report = match importer::add_album(&library, &album).await {
        Ok(report) => report,
        Err(e) => error!("{}", e),
    };

    let table = Table::new(utils::report_table_rows(&report));
    println!("{}", table);
    success!(
        "Grabbed \"{}\" with {} tracks",
        album.name,
        album.tracks.items.len()
    );
}
