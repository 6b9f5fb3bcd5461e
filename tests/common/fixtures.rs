//! Manifest fixtures

use std::path::{Path, PathBuf};

/// A small library: two artists, one album folder, one loose track
pub const LIBRARY_MANIFEST: &str = r#"{
  "Intro": "https://music.youtube.com/watch?v=intro",
  "Artist A": {
    "First Single": "https://music.youtube.com/watch?v=a1",
    "Album One": {
      "Track 1": "https://music.youtube.com/watch?v=a2",
      "Track 2": "https://music.youtube.com/watch?v=a3"
    }
  },
  "Artist B": {
    "Live. Vol. 2": "https://music.youtube.com/watch?v=b1"
  }
}"#;

/// Relative paths of every file `LIBRARY_MANIFEST` produces
pub const LIBRARY_FILES: &[&str] = &[
    "Artist A/Album One/Track 1.mp3",
    "Artist A/Album One/Track 2.mp3",
    "Artist A/First Single.mp3",
    "Artist B/Live. Vol. 2.mp3",
    "Intro.mp3",
];

/// Valid entries mixed with every kind of bad one
pub const MIXED_MANIFEST: &str = r#"{
  "good": "https://music.youtube.com/watch?v=good",
  "bad/name": "https://music.youtube.com/watch?v=slash",
  "oops": 42,
  "nothing": null,
  "nested": {
    "good2": "https://music.youtube.com/watch?v=good2",
    "what?": "https://music.youtube.com/watch?v=question",
    "list": ["https://music.youtube.com/watch?v=x"]
  },
  "NUL": {
    "hidden": "https://music.youtube.com/watch?v=hidden"
  }
}"#;

/// Write `contents` as `songs.json` inside `dir` and return its path
pub fn write_manifest(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("songs.json");
    std::fs::write(&path, contents).unwrap();
    path
}
