mod artist;
mod library;
mod metadata;

pub use artist::ArtistMetadataManager;
pub use artist::merge_album;
pub use library::Layout;
pub use library::Library;
pub use metadata::read_metadata;
pub use metadata::write_metadata;
