//! Assertions over a download tree on disk

use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

/// Every `.mp3` below `base`, as `/`-separated paths relative to `base`
pub fn mp3_files(base: &Path) -> BTreeSet<String> {
    WalkDir::new(base)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "mp3"))
        .map(|entry| {
            entry
                .path()
                .strip_prefix(base)
                .unwrap()
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect::<Vec<_>>()
                .join("/")
        })
        .collect()
}

/// Every directory below `base` (excluding `base` itself), relative to it
pub fn directories(base: &Path) -> BTreeSet<String> {
    WalkDir::new(base)
        .min_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_dir())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(base)
                .unwrap()
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

/// Assert the set of MP3 files below `base` is exactly `expected`
pub fn assert_mp3_files(base: &Path, expected: &[&str]) {
    let expected: BTreeSet<String> = expected.iter().map(|s| s.to_string()).collect();
    let actual = mp3_files(base);
    assert_eq!(
        actual, expected,
        "unexpected MP3 set below {}",
        base.display()
    );
}
