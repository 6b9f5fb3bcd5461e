//! Filename validation for manifest keys
//!
//! Every manifest key becomes a single path segment: either a directory
//! (subtree keys) or the base name of an MP3 (leaf keys). Names are checked
//! against one rule set that is the union of the Windows, macOS and Linux
//! restrictions, so a manifest that validates on one machine produces the
//! same tree everywhere.

/// Longest accepted name, in UTF-8 bytes
const MAX_FILENAME_BYTES: usize = 255;

/// Characters that cannot appear in a path segment on at least one platform
const INVALID_CHARS: &[char] = &['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Windows device names; reserved regardless of extension or case
const RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "CLOCK$", "CONIN$", "CONOUT$", "COM0", "COM1", "COM2", "COM3",
    "COM4", "COM5", "COM6", "COM7", "COM8", "COM9", "COM¹", "COM²", "COM³", "LPT0", "LPT1",
    "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9", "LPT¹", "LPT²", "LPT³",
];

/// Check whether `name` is usable as a single file or directory name
///
/// Rejects:
/// - empty names and names longer than 255 bytes
/// - control characters and `/ \ : * ? " < > |`
/// - `.` and `..`
/// - Windows device names (`CON`, `nul.txt`, `COM1.mp3`, ...)
/// - names ending in a space or a dot
/// - leading or trailing whitespace
///
/// # Examples
///
/// ```
/// use ytmfetch::validation::is_valid_filename;
///
/// assert!(is_valid_filename("Bohemian Rhapsody"));
/// assert!(is_valid_filename("AC-DC - Back in Black (Remastered)"));
/// assert!(!is_valid_filename("AC/DC"));
/// assert!(!is_valid_filename("CON"));
/// assert!(!is_valid_filename("trailing."));
/// ```
#[must_use]
pub fn is_valid_filename(name: &str) -> bool {
    if name.is_empty() || name.len() > MAX_FILENAME_BYTES {
        return false;
    }

    if name
        .chars()
        .any(|c| c.is_ascii_control() || INVALID_CHARS.contains(&c))
    {
        return false;
    }

    if name == "." || name == ".." {
        return false;
    }

    if name.ends_with(' ') || name.ends_with('.') {
        return false;
    }

    if name.trim() != name {
        return false;
    }

    !is_reserved_name(name)
}

/// Windows resolves `CON.mp3` and `con .txt` to the console device, so the
/// check is on the part before the first dot with trailing spaces removed.
fn is_reserved_name(name: &str) -> bool {
    let stem = name.split('.').next().unwrap_or(name).trim_end_matches(' ');
    let upper = stem.to_uppercase();
    RESERVED_NAMES.contains(&upper.as_str())
}
