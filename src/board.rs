use hexboard_defs::coord::TileCoord;
use hexboard_defs::hashbrown::HashMap;
use hexboard_defs::id::TileId;
use hexboard_defs::log;
use hexboard_defs::math::Float;
use serde::Serialize;

use crate::error::BoardError;
use crate::offsets::NeighborOffsets;
use crate::scan::Scan;
use crate::tile::{AnchorTile, DataMap, ObjectTile, Tile, TileRef};
use crate::zone;

pub type AxialMap = HashMap<TileId, TileCoord>;

/// Per-tile neighbor lists, in offset-table enumeration order.
pub type AdjacencyMap = HashMap<TileId, Vec<TileId>>;

/// Two tiles rounded to the same axial cell. The later one stays in the
/// reverse lookup; the earlier one is reported here instead of being lost
/// silently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxialCollision {
    pub coord: TileCoord,
    pub kept: TileId,
    pub lost: TileId,
}

/// A board snapshot: tiles, their axial coordinates, adjacency and zone
/// assignment, all rebuilt together from a fresh scan.
///
/// Topology is immutable once built; only the per-tile attribute maps are
/// meant for ongoing external mutation.
#[derive(Debug, Clone)]
pub struct Board {
    /// Tile ids in scan order. Keeps every iteration over the snapshot
    /// deterministic.
    order: Vec<TileId>,
    anchors: HashMap<TileId, AnchorTile>,
    objects: HashMap<TileId, ObjectTile>,
    axial: AxialMap,
    adjacency: Option<AdjacencyMap>,
    collisions: Vec<AxialCollision>,
    hex_width: Float,
    zones_assigned: bool,
}

impl Board {
    /// Creates a board from a scan, computing each tile's axial cell from
    /// its centroid. Adjacency and zones are built in later stages.
    pub fn new(scan: Scan) -> Result<Self, BoardError> {
        if !(scan.hex_width > 0.0) {
            return Err(BoardError::EmptyScan);
        }

        let mut order = Vec::with_capacity(scan.tiles.len());
        let mut anchors = HashMap::new();
        let mut objects = HashMap::new();
        let mut axial = AxialMap::default();

        for tile in scan.tiles {
            let id = tile.qr_id().clone();
            let coord = TileCoord::from_pixel(tile.centroid(), scan.hex_width);

            axial.insert(id.clone(), coord);
            order.push(id.clone());

            match tile {
                Tile::Anchor(anchor) => {
                    anchors.insert(id, anchor);
                }
                Tile::Object(object) => {
                    objects.insert(id, object);
                }
            }
        }

        log::info!(
            "board snapshot: {} anchors, {} objects, hex width {:.2}px",
            anchors.len(),
            objects.len(),
            scan.hex_width
        );

        Ok(Self {
            order,
            anchors,
            objects,
            axial,
            adjacency: None,
            collisions: Vec::new(),
            hex_width: scan.hex_width,
            zones_assigned: false,
        })
    }

    /// Runs all build stages: axial projection, adjacency, zone
    /// assignment.
    pub fn from_scan(scan: Scan, offsets: &NeighborOffsets) -> Result<Self, BoardError> {
        let mut board = Self::new(scan)?;
        board.build_adjacency(offsets);
        board.assign_zones()?;

        Ok(board)
    }

    /// Builds the neighbor-id map for every tile.
    ///
    /// A reverse lookup from axial cell to tile id is built first; when two
    /// tiles occupy the same cell the last writer wins, and the conflict is
    /// logged and recorded in [`Self::collisions`].
    pub fn build_adjacency(&mut self, offsets: &NeighborOffsets) {
        let mut axial_to_id: HashMap<TileCoord, TileId> = HashMap::new();
        self.collisions.clear();

        for id in &self.order {
            let coord = self.axial[id];

            if let Some(lost) = axial_to_id.insert(coord, id.clone()) {
                log::warn!("tiles {lost} and {id} both round to cell {coord}; keeping {id}");
                self.collisions.push(AxialCollision {
                    coord,
                    kept: id.clone(),
                    lost,
                });
            }
        }

        let mut adjacency = AdjacencyMap::default();

        for id in &self.order {
            let coord = self.axial[id];

            let neighbors = offsets
                .iter()
                .filter_map(|offset| axial_to_id.get(&(coord + offset)).cloned())
                .collect();

            adjacency.insert(id.clone(), neighbors);
        }

        self.adjacency = Some(adjacency);
    }

    /// Runs the single-pass ownership claim over direct neighbors. Fails
    /// if adjacency has not been built.
    pub fn assign_zones(&mut self) -> Result<(), BoardError> {
        let adjacency = self.adjacency.as_ref().ok_or(BoardError::AdjacencyNotBuilt)?;

        zone::assign(&mut self.anchors, &mut self.objects, adjacency);
        self.zones_assigned = true;

        Ok(())
    }

    /// Looks up a tile by id.
    pub fn tile(&self, id: &TileId) -> Option<TileRef<'_>> {
        if let Some(anchor) = self.anchors.get(id) {
            return Some(TileRef::Anchor(anchor));
        }

        self.objects.get(id).map(TileRef::Object)
    }

    /// The neighbor ids of a tile, in offset-table order. Unknown ids have
    /// no neighbors.
    ///
    /// Calling this before [`Self::build_adjacency`] is a usage error and
    /// fails explicitly.
    pub fn neighbors(&self, id: &TileId) -> Result<&[TileId], BoardError> {
        let adjacency = self.adjacency.as_ref().ok_or(BoardError::AdjacencyNotBuilt)?;

        Ok(adjacency.get(id).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// The anchors a tile belongs to: the tile itself if it is an anchor,
    /// otherwise the anchor named by its assignment.
    ///
    /// Shaped as a list to leave room for a multi-assignment model; the
    /// current contract yields at most one entry for an object.
    pub fn anchors_of(&self, id: &TileId) -> Vec<&AnchorTile> {
        if let Some(anchor) = self.anchors.get(id) {
            return vec![anchor];
        }

        if let Some(object) = self.objects.get(id) {
            if let Some(anchor) = object
                .assigned_to
                .as_ref()
                .and_then(|anchor_id| self.anchors.get(anchor_id))
            {
                return vec![anchor];
            }
        }

        Vec::new()
    }

    /// Object tiles adjacent to an anchor's children but outside its zone:
    /// candidates for manual assignment in an editor.
    pub fn unassigned_neighbors_of_children(
        &self,
        anchor_id: &TileId,
    ) -> Result<Vec<TileId>, BoardError> {
        let adjacency = self.adjacency.as_ref().ok_or(BoardError::AdjacencyNotBuilt)?;

        let Some(anchor) = self.anchors.get(anchor_id) else {
            return Ok(Vec::new());
        };

        let mut children: Vec<&TileId> = anchor.children.iter().collect();
        children.sort();

        let mut candidates: Vec<TileId> = Vec::new();

        for child in children {
            let Some(neighbors) = adjacency.get(child) else {
                continue;
            };

            for neighbor in neighbors {
                if anchor.children.contains(neighbor) {
                    continue;
                }
                if self.objects.contains_key(neighbor) && !candidates.contains(neighbor) {
                    candidates.push(neighbor.clone());
                }
            }
        }

        Ok(candidates)
    }

    /// Iterates every tile in scan order.
    pub fn tiles(&self) -> impl Iterator<Item = TileRef<'_>> {
        self.order.iter().filter_map(|id| self.tile(id))
    }

    /// Mutable access to a tile's attribute map, the only part of a
    /// snapshot designed for external edits.
    pub fn data_mut(&mut self, id: &TileId) -> Option<&mut DataMap> {
        if let Some(anchor) = self.anchors.get_mut(id) {
            return Some(&mut anchor.data);
        }

        self.objects.get_mut(id).map(|object| &mut object.data)
    }

    pub fn order(&self) -> &[TileId] {
        &self.order
    }

    pub fn anchors(&self) -> &HashMap<TileId, AnchorTile> {
        &self.anchors
    }

    pub fn objects(&self) -> &HashMap<TileId, ObjectTile> {
        &self.objects
    }

    pub fn axial(&self, id: &TileId) -> Option<TileCoord> {
        self.axial.get(id).copied()
    }

    pub fn axial_map(&self) -> &AxialMap {
        &self.axial
    }

    pub fn adjacency_map(&self) -> Option<&AdjacencyMap> {
        self.adjacency.as_ref()
    }

    pub fn collisions(&self) -> &[AxialCollision] {
        &self.collisions
    }

    pub fn hex_width(&self) -> Float {
        self.hex_width
    }

    pub fn zones_assigned(&self) -> bool {
        self.zones_assigned
    }
}
