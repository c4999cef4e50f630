use std::fs;
use std::path::Path;

use anyhow::Context;
use hexboard_defs::coord::TileCoord;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// The fixed, ordered six-entry table of axial neighbor offsets.
///
/// Constructed once at startup and passed explicitly into adjacency
/// building; the enumeration order here decides the order of every
/// neighbor list downstream, so it must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[TileCoord; 6]", into = "[TileCoord; 6]")]
pub struct NeighborOffsets([TileCoord; 6]);

impl NeighborOffsets {
    /// The standard axial neighbor ring.
    pub const STANDARD: Self = Self([
        TileCoord::new(1, 0),
        TileCoord::new(1, -1),
        TileCoord::new(0, -1),
        TileCoord::new(-1, 0),
        TileCoord::new(-1, 1),
        TileCoord::new(0, 1),
    ]);

    /// Validates and wraps an offset table: six distinct non-zero entries,
    /// closed under negation.
    pub fn new(entries: [TileCoord; 6]) -> Result<Self, BoardError> {
        for (i, entry) in entries.iter().enumerate() {
            if *entry == TileCoord::ZERO {
                return Err(BoardError::BadOffsetTable);
            }
            if entries[..i].contains(entry) {
                return Err(BoardError::BadOffsetTable);
            }
            if !entries.contains(&-*entry) {
                return Err(BoardError::BadOffsetTable);
            }
        }

        Ok(Self(entries))
    }

    /// Loads an offset table from a RON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read offset table at {}", path.display()))?;

        ron::from_str(&text)
            .with_context(|| format!("could not parse offset table at {}", path.display()))
    }

    pub fn iter(&self) -> impl Iterator<Item = TileCoord> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[TileCoord; 6] {
        &self.0
    }
}

impl Default for NeighborOffsets {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl TryFrom<[TileCoord; 6]> for NeighborOffsets {
    type Error = BoardError;

    fn try_from(entries: [TileCoord; 6]) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<NeighborOffsets> for [TileCoord; 6] {
    fn from(value: NeighborOffsets) -> Self {
        value.0
    }
}
