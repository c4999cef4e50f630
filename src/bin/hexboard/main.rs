use std::{env, fs};

use anyhow::{Context, Result};
use env_logger::Env;
use serde::Deserialize;

use hexboard::board::Board;
use hexboard::offsets::NeighborOffsets;
use hexboard::scan::{CodeDetection, Scan};
use hexboard::tile::DataMap;
use hexboard::zone;
use hexboard_defs::coord::TileCoord;
use hexboard_defs::hashbrown::HashMap;
use hexboard_defs::id::TileId;
use hexboard_defs::math::Float;

/// A detector dump: raw detections plus the pre-merged attribute maps,
/// with optional overrides for calibration and the offset table.
#[derive(Debug, Deserialize)]
struct ScanDump {
    detections: Vec<CodeDetection>,
    #[serde(default)]
    attributes: HashMap<TileId, DataMap>,
    #[serde(default)]
    hex_width: Option<Float>,
    #[serde(default)]
    offsets: Option<NeighborOffsets>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = env::args()
        .nth(1)
        .context("usage: hexboard <scan-dump.ron>")?;

    let text =
        fs::read_to_string(&path).with_context(|| format!("could not read scan dump {path}"))?;
    let dump: ScanDump =
        ron::from_str(&text).with_context(|| format!("could not parse scan dump {path}"))?;

    let mut scan = Scan::from_detections(dump.detections, &dump.attributes)?;
    if let Some(hex_width) = dump.hex_width {
        scan = scan.with_hex_width(hex_width);
    }

    let offsets = dump.offsets.unwrap_or_default();
    let board = Board::from_scan(scan, &offsets)?;

    println!("hexboard {}: {} tiles", hexboard::VERSION, board.order().len());
    println!();

    for tile in board.tiles() {
        let id = tile.qr_id();
        let coord = board.axial(id).unwrap_or(TileCoord::ZERO);
        let neighbors = board.neighbors(id)?;

        println!(
            "{} {} at {}: {} neighbor(s) {:?}",
            if tile.is_anchor() { "anchor" } else { "object" },
            id,
            coord,
            neighbors.len(),
            neighbors.iter().map(TileId::as_str).collect::<Vec<_>>()
        );
    }

    for collision in board.collisions() {
        println!(
            "collision at {}: kept {}, lost {}",
            collision.coord, collision.kept, collision.lost
        );
    }

    println!();
    let mut anchor_ids: Vec<&TileId> = board.anchors().keys().collect();
    anchor_ids.sort();

    for anchor_id in anchor_ids {
        let anchor = &board.anchors()[anchor_id];
        let mut children: Vec<&str> = anchor.children.iter().map(TileId::as_str).collect();
        children.sort_unstable();

        println!("zone {}: {:?}", anchor_id, children);
    }

    println!();
    for relation in zone::analyze_cross_zone(&board)? {
        println!(
            "{:?}: {} -> {} ({:?} vs {:?})",
            relation.kind,
            relation.tile_id,
            relation.neighbor_id,
            relation.tile_zone.as_ref().map(|id| id.as_str()),
            relation.neighbor_zone.as_ref().map(|id| id.as_str()),
        );
    }

    Ok(())
}
