use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

const METADATA_STEM: &str = "metadata";
const ARTIST_FILE: &str = "metadata.json";

/// Directory convention of the on-disk library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// `artists/<artist>/<album>.json`, tracks under `artists/<artist>/<album>/`.
    #[default]
    Artists,
    /// `music/artists/<artist>/<album>/metadata.json`, tracks alongside it.
    Music,
}

impl Layout {
    fn base(&self) -> &'static Path {
        match self {
            Layout::Artists => Path::new("artists"),
            Layout::Music => Path::new("music/artists"),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Layout::Artists => "artists",
            Layout::Music => "music",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "artists" => Ok(Layout::Artists),
            "music" => Ok(Layout::Music),
            other => Err(format!(
                "invalid layout '{}'. Allowed: artists, music",
                other
            )),
        }
    }
}

/// Root directory plus layout; maps slugs to file paths.
#[derive(Debug, Clone)]
pub struct Library {
    root: PathBuf,
    layout: Layout,
}

impl Library {
    pub fn new(root: impl Into<PathBuf>, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn artist_dir(&self, artist: &str) -> PathBuf {
        self.root.join(self.layout.base()).join(artist)
    }

    pub fn album_dir(&self, artist: &str, album: &str) -> PathBuf {
        self.artist_dir(artist).join(album)
    }

    pub fn album_path(&self, artist: &str, album: &str) -> PathBuf {
        match self.layout {
            Layout::Artists => self.artist_dir(artist).join(format!("{}.json", album)),
            Layout::Music => self.album_dir(artist, album).join(ARTIST_FILE),
        }
    }

    pub fn track_path(&self, artist: &str, album: &str, track: &str) -> PathBuf {
        self.album_dir(artist, album).join(format!("{}.json", track))
    }

    pub fn artist_path(&self, artist: &str) -> PathBuf {
        self.artist_dir(artist).join(ARTIST_FILE)
    }

    /// An album slugged `metadata` lands on the artist file in the `artists` layout.
    pub fn album_collides(&self, album: &str) -> bool {
        self.layout == Layout::Artists && album == METADATA_STEM
    }

    /// A track slugged `metadata` lands on the album file in the `music` layout.
    pub fn track_collides(&self, track: &str) -> bool {
        self.layout == Layout::Music && track == METADATA_STEM
    }
}
