use hexboard_defs::hashbrown::HashMap;
use hexboard_defs::id::TileId;
use hexboard_defs::log;
use serde::Serialize;

use crate::board::{AdjacencyMap, Board};
use crate::error::BoardError;
use crate::tile::{AnchorTile, ObjectTile};

/// Single-pass ownership claim: each anchor annexes its adjacent,
/// unclaimed object tiles.
///
/// Anchors are visited in ascending id order; that order is the tie-break
/// when two anchors are adjacent to the same unclaimed object. First claim
/// wins, later claims are silently skipped, and objects further than one
/// hop from every anchor stay unassigned.
pub(crate) fn assign(
    anchors: &mut HashMap<TileId, AnchorTile>,
    objects: &mut HashMap<TileId, ObjectTile>,
    adjacency: &AdjacencyMap,
) {
    let mut anchor_ids: Vec<TileId> = anchors.keys().cloned().collect();
    anchor_ids.sort();

    for anchor_id in anchor_ids {
        let Some(neighbors) = adjacency.get(&anchor_id) else {
            continue;
        };
        let Some(anchor) = anchors.get_mut(&anchor_id) else {
            continue;
        };

        for neighbor_id in neighbors {
            if let Some(object) = objects.get_mut(neighbor_id) {
                if object.assigned_to.is_none() {
                    anchor.add_child(object);
                    log::debug!("anchor {anchor_id} claimed {neighbor_id}");
                }
            }
        }
    }
}

/// How a tile-to-object adjacency edge relates to the zone assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RelationKind {
    /// Both endpoints resolve to a zone and the zones differ.
    CrossZone,
    /// Exactly one endpoint resolves to a zone.
    UnassignedNeighbor,
}

/// One diagnostic record from the cross-zone analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneRelation {
    pub tile_id: TileId,
    pub neighbor_id: TileId,
    pub tile_zone: Option<TileId>,
    pub neighbor_zone: Option<TileId>,
    pub kind: RelationKind,
}

/// Classifies every directed tile-to-object adjacency edge against the
/// zone assignment. Performs no mutation.
///
/// Zones are resolved through the children-derived reverse map, so an
/// anchor itself never resolves to a zone; the edge from an anchor to one
/// of its own children therefore reports as [`RelationKind::UnassignedNeighbor`].
/// Edges where both sides resolve to the same zone, or neither side
/// resolves, produce no record.
pub fn analyze_cross_zone(board: &Board) -> Result<Vec<ZoneRelation>, BoardError> {
    let adjacency = board
        .adjacency_map()
        .ok_or(BoardError::AdjacencyNotBuilt)?;

    if !board.zones_assigned() {
        return Err(BoardError::ZonesNotAssigned);
    }

    // Reverse mapping from object id to owning anchor id.
    let mut tile_to_zone: HashMap<&TileId, &TileId> = HashMap::new();
    for (anchor_id, anchor) in board.anchors() {
        for child_id in &anchor.children {
            tile_to_zone.insert(child_id, anchor_id);
        }
    }

    let mut relations = Vec::new();

    for tile_id in board.order() {
        let Some(neighbors) = adjacency.get(tile_id) else {
            continue;
        };
        let tile_zone = tile_to_zone.get(tile_id).copied();

        for neighbor_id in neighbors {
            if !board.objects().contains_key(neighbor_id) {
                continue;
            }

            let neighbor_zone = tile_to_zone.get(neighbor_id).copied();

            let kind = match (tile_zone, neighbor_zone) {
                (Some(a), Some(b)) if a != b => RelationKind::CrossZone,
                (Some(_), None) | (None, Some(_)) => RelationKind::UnassignedNeighbor,
                _ => continue,
            };

            relations.push(ZoneRelation {
                tile_id: tile_id.clone(),
                neighbor_id: neighbor_id.clone(),
                tile_zone: tile_zone.cloned(),
                neighbor_zone: neighbor_zone.cloned(),
                kind,
            });
        }
    }

    Ok(relations)
}
