use std::fmt::Display;
use std::ops::Deref;
use std::sync::Arc;

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// The identity string decoded from a tile's scannable code.
///
/// Cheap to clone; tiles, maps and diagnostics all share the same backing
/// string.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TileId(Arc<str>);

impl TileId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl Default for TileId {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl AsRef<str> for TileId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TileId {
    fn from(value: &str) -> Self {
        TileId(Arc::from(value))
    }
}

impl From<String> for TileId {
    fn from(value: String) -> Self {
        TileId(Arc::from(value))
    }
}

impl Deref for TileId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Serialize for TileId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TileId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from)
    }
}
