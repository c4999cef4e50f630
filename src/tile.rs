use hexboard_defs::hashbrown::{HashMap, HashSet};
use hexboard_defs::id::TileId;
use hexboard_defs::math::{Float, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// Attribute key selecting the tile variant at construction.
pub const TILE_TYPE: &str = "tile_type";
pub const TILE_TYPE_ANCHOR: &str = "anchor";
pub const TILE_TYPE_OBJECT: &str = "object";

/// Attribute keys written by the scan layer.
pub const ICON: &str = "icon";
pub const ROTATION: &str = "rotation";
pub const OG_CORNERS: &str = "og_corners";

/// A single attribute value. Attributes hold the icon, the tile-type tag,
/// the detected rotation, the original corner points and any user-defined
/// metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Data {
    Bool(bool),
    Int(i64),
    Float(Float),
    Str(String),
    Point(Vec2),
    VecPoint(Vec<Vec2>),
    VecStr(Vec<String>),
}

impl Data {
    pub fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(v) = self {
            return Some(*v);
        }
        None
    }

    pub fn as_int(&self) -> Option<i64> {
        if let Self::Int(v) = self {
            return Some(*v);
        }
        None
    }

    pub fn as_float(&self) -> Option<Float> {
        if let Self::Float(v) = self {
            return Some(*v);
        }
        None
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Self::Str(v) = self {
            return Some(v);
        }
        None
    }

    pub fn as_point(&self) -> Option<Vec2> {
        if let Self::Point(v) = self {
            return Some(*v);
        }
        None
    }

    pub fn as_vec_point(&self) -> Option<&[Vec2]> {
        if let Self::VecPoint(v) = self {
            return Some(v);
        }
        None
    }

    pub fn as_vec_str(&self) -> Option<&[String]> {
        if let Self::VecStr(v) = self {
            return Some(v);
        }
        None
    }
}

/// The open attribute mapping carried by every tile.
///
/// Presentation layers may edit this freely after the board is built;
/// identity, centroid and variant stay fixed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataMap(HashMap<String, Data>);

impl DataMap {
    pub fn get(&self, key: &str) -> Option<&Data> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Data> {
        self.0.get_mut(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: Data) {
        self.0.insert(key.into(), value);
    }

    pub fn remove(&mut self, key: &str) -> Option<Data> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Shorthand for reading a string-valued attribute.
    pub fn str_value(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Data::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Data)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Data)> for DataMap {
    fn from_iter<T: IntoIterator<Item = (String, Data)>>(iter: T) -> Self {
        Self(HashMap::from_iter(iter))
    }
}

/// A zone-defining tile that can claim adjacent object tiles into its zone.
#[derive(Debug, Clone)]
pub struct AnchorTile {
    pub qr_id: TileId,
    pub centroid: Vec2,
    pub data: DataMap,
    /// Ids of the object tiles claimed into this anchor's zone.
    pub children: HashSet<TileId>,
}

impl AnchorTile {
    /// Claims an object into this anchor's zone, keeping both sides of the
    /// relation consistent.
    pub fn add_child(&mut self, tile: &mut ObjectTile) {
        self.children.insert(tile.qr_id.clone());
        tile.assigned_to = Some(self.qr_id.clone());
    }
}

/// A tile assignable to at most one anchor's zone.
#[derive(Debug, Clone)]
pub struct ObjectTile {
    pub qr_id: TileId,
    pub centroid: Vec2,
    pub data: DataMap,
    /// The owning anchor's id, unset until zone assignment claims it.
    pub assigned_to: Option<TileId>,
}

/// A tile on the board, dispatched on the `tile_type` attribute tag at
/// construction.
#[derive(Debug, Clone)]
pub enum Tile {
    Anchor(AnchorTile),
    Object(ObjectTile),
}

impl Tile {
    /// Builds the tile variant selected by the `tile_type` attribute.
    ///
    /// An untagged tile is an object; a tag other than `anchor` or
    /// `object` is rejected rather than silently defaulted.
    pub fn new(qr_id: TileId, centroid: Vec2, data: DataMap) -> Result<Self, BoardError> {
        match data.str_value(TILE_TYPE) {
            Some(tag) if tag == TILE_TYPE_ANCHOR => Ok(Self::Anchor(AnchorTile {
                qr_id,
                centroid,
                data,
                children: HashSet::default(),
            })),
            Some(tag) if tag == TILE_TYPE_OBJECT => Ok(Self::Object(ObjectTile {
                qr_id,
                centroid,
                data,
                assigned_to: None,
            })),
            Some(other) => Err(BoardError::UnknownTileType(other.to_string())),
            None => Ok(Self::Object(ObjectTile {
                qr_id,
                centroid,
                data,
                assigned_to: None,
            })),
        }
    }

    pub fn qr_id(&self) -> &TileId {
        match self {
            Self::Anchor(v) => &v.qr_id,
            Self::Object(v) => &v.qr_id,
        }
    }

    pub fn centroid(&self) -> Vec2 {
        match self {
            Self::Anchor(v) => v.centroid,
            Self::Object(v) => v.centroid,
        }
    }

    pub fn data(&self) -> &DataMap {
        match self {
            Self::Anchor(v) => &v.data,
            Self::Object(v) => &v.data,
        }
    }

    pub fn data_mut(&mut self) -> &mut DataMap {
        match self {
            Self::Anchor(v) => &mut v.data,
            Self::Object(v) => &mut v.data,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Self::Anchor(_))
    }
}

/// A borrowed view of a tile in a board snapshot.
#[derive(Debug, Clone, Copy)]
pub enum TileRef<'a> {
    Anchor(&'a AnchorTile),
    Object(&'a ObjectTile),
}

impl<'a> TileRef<'a> {
    pub fn qr_id(&self) -> &'a TileId {
        match self {
            Self::Anchor(v) => &v.qr_id,
            Self::Object(v) => &v.qr_id,
        }
    }

    pub fn centroid(&self) -> Vec2 {
        match self {
            Self::Anchor(v) => v.centroid,
            Self::Object(v) => v.centroid,
        }
    }

    pub fn data(&self) -> &'a DataMap {
        match self {
            Self::Anchor(v) => &v.data,
            Self::Object(v) => &v.data,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, Self::Anchor(_))
    }
}
