//! Spotify Album Grabber Library
//!
//! This library looks up albums on the Spotify Web API and stores their
//! metadata as a tree of JSON files: one file per album, one per track and
//! one per artist listing every album imported for that artist.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every fallible operation
//! - `importer` - Search, fetch and persist orchestration
//! - `management` - Library layout and JSON metadata persistence
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotgrab::{config::Config, importer, management::Library, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), spotgrab::error::GrabError> {
//!     let config = Config::from_env()?;
//!     let library = Library::new(config.library_root.clone(), config.layout);
//!     let client = SpotifyClient::new(config);
//!     importer::grab(&client, &library, "Radiohead - OK Computer").await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod importer;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Searching for {}", query);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Used once per file written during an import and for the final summary.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing, so only use
/// it for fatal errors at the CLI boundary. Library code returns
/// [`error::GrabError`] instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
