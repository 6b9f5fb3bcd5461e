//! Songs manifest model and loader
//!
//! A manifest is a JSON object whose keys are names and whose values are
//! either a source URL (a leaf) or another object (a nested directory):
//!
//! ```json
//! {
//!   "Queen": {
//!     "A Night at the Opera": {
//!       "Bohemian Rhapsody": "https://music.youtube.com/watch?v=fJ9rUzIMcZQ"
//!     }
//!   },
//!   "Loose Track": "https://music.youtube.com/watch?v=dQw4w9WgXcQ"
//! }
//! ```
//!
//! The JSON is converted into [`ManifestNode`] once, at load time. Values of
//! any other JSON type are kept as [`ManifestNode::Invalid`] rather than
//! rejected, so the walker can report them entry by entry while still
//! processing their siblings.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// JSON type of a manifest value that is neither a URL nor a nested object
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueKind {
    /// `null`
    Null,
    /// `true` / `false`
    Bool,
    /// any JSON number
    Number,
    /// any JSON array
    Array,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::Array => "array",
        };
        f.write_str(name)
    }
}

/// One node of the manifest tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ManifestNode {
    /// Source URL of a single song
    Locator(String),
    /// Nested directory of further entries
    SubTree(BTreeMap<String, ManifestNode>),
    /// A value of an unsupported JSON type
    Invalid(ValueKind),
}

impl From<Value> for ManifestNode {
    fn from(value: Value) -> Self {
        match value {
            Value::String(url) => ManifestNode::Locator(url),
            Value::Object(map) => ManifestNode::SubTree(
                map.into_iter()
                    .map(|(key, child)| (key, ManifestNode::from(child)))
                    .collect(),
            ),
            Value::Null => ManifestNode::Invalid(ValueKind::Null),
            Value::Bool(_) => ManifestNode::Invalid(ValueKind::Bool),
            Value::Number(_) => ManifestNode::Invalid(ValueKind::Number),
            Value::Array(_) => ManifestNode::Invalid(ValueKind::Array),
        }
    }
}

/// Root of a songs manifest; always a mapping
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    entries: BTreeMap<String, ManifestNode>,
}

impl Manifest {
    /// Build a manifest from already-parsed JSON
    ///
    /// Fails if the root is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match ManifestNode::from(value) {
            ManifestNode::SubTree(entries) => Ok(Self { entries }),
            ManifestNode::Locator(_) => Err(root_error("string")),
            ManifestNode::Invalid(kind) => Err(root_error(&kind.to_string())),
        }
    }

    /// Parse a manifest from JSON text
    ///
    /// Nesting depth is not limited; folders may be nested as deeply as
    /// the manifest describes.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let value = Value::deserialize(&mut deserializer)?;
        deserializer.end()?;
        Self::from_value(value)
    }

    /// Read and parse a manifest file
    ///
    /// A missing file yields [`Error::ManifestNotFound`]; unreadable JSON or a
    /// non-object root yields [`Error::InvalidManifest`] carrying the path.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = match tokio::fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::ManifestNotFound {
                    path: path.to_path_buf(),
                });
            }
            Err(e) => return Err(Error::Io(e)),
        };

        Self::from_json_str(&text).map_err(|e| match e {
            Error::Serialization(json_err) => Error::InvalidManifest {
                path: path.to_path_buf(),
                reason: json_err.to_string(),
            },
            Error::InvalidManifest { reason, .. } => Error::InvalidManifest {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })
    }

    /// Top-level entries, in iteration order
    pub fn entries(&self) -> &BTreeMap<String, ManifestNode> {
        &self.entries
    }

    /// Number of top-level entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest has no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count the leaves (URL entries) anywhere in the tree, valid names or not
    pub fn leaf_count(&self) -> usize {
        fn count(entries: &BTreeMap<String, ManifestNode>) -> usize {
            entries
                .values()
                .map(|node| match node {
                    ManifestNode::Locator(_) => 1,
                    ManifestNode::SubTree(children) => count(children),
                    ManifestNode::Invalid(_) => 0,
                })
                .sum()
        }
        count(&self.entries)
    }
}

fn root_error(found: &str) -> Error {
    Error::InvalidManifest {
        path: PathBuf::new(),
        reason: format!("root must be an object mapping names to URLs or folders, found {found}"),
    }
}
