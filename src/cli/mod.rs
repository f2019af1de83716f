//! # CLI Module
//!
//! User-facing command handlers for spotgrab. Each handler owns the whole
//! interaction for one subcommand: it loads configuration, drives the
//! importer, shows progress and turns failures into a red message plus a
//! non-zero exit code.
//!
//! ## Commands
//!
//! - [`grab`] - Looks up an album by free-text query and writes its album,
//!   track and artist metadata into the local JSON library
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (User Interface)
//!     ↓
//! Importer (search → fetch → persist)
//!     ↓                     ↓
//! Spotify Client        Management Layer (library layout, JSON files)
//! ```
//!
//! ## Usage
//!
//! ```bash
//! spotgrab grab "Radiohead - OK Computer"
//! SPOTGRAB_LIBRARY_LAYOUT=music spotgrab grab "Sigur Rós - Ágætis byrjun"
//! ```

mod grab;

pub use grab::grab;
