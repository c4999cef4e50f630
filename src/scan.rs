use hexboard_defs::geometry::{self, CodeGeometry};
use hexboard_defs::hashbrown::{HashMap, HashSet};
use hexboard_defs::id::TileId;
use hexboard_defs::log;
use hexboard_defs::math::{Float, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::tile::{Data, DataMap, Tile, OG_CORNERS, ROTATION};

/// Center-to-center hex spacing as a multiple of the mean code side
/// length. Change this if the code-to-tile size ratio of the physical
/// tiles changes.
pub const HEX_WIDTH_RATIO: Float = 2.66;

/// Quads with an area below this are treated as degenerate and dropped.
const MIN_QUAD_AREA: Float = 1e-9;

/// One raw record from the identity-code detector: the decoded id string
/// and the four corners of the code region, in arbitrary cyclic order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeDetection {
    pub id: TileId,
    pub corners: [Vec2; 4],
}

impl CodeDetection {
    /// Whether the corner geometry is usable. Degenerate or collinear
    /// quads are filtered here, before any tile is built from them.
    pub fn is_well_formed(&self) -> bool {
        geometry::quad_area(self.corners).abs() >= MIN_QUAD_AREA
    }
}

/// The tiles and calibration produced from one pass over a photograph.
///
/// A scan is the unit of rebuild: every snapshot is constructed from a
/// fresh scan, never updated incrementally.
#[derive(Debug, Clone)]
pub struct Scan {
    pub tiles: Vec<Tile>,
    /// Calibrated center-to-center hex spacing, in pixels.
    pub hex_width: Float,
}

impl Scan {
    /// Builds tiles from detector records, merging the pre-merged
    /// per-id attribute maps and calibrating the hex width from the mean
    /// code size.
    ///
    /// Malformed detections and duplicate ids are dropped with a warning.
    /// An empty scan is an error: a zero hex width would degenerate the
    /// axial transform instead of producing a meaningful board.
    pub fn from_detections(
        detections: Vec<CodeDetection>,
        attributes: &HashMap<TileId, DataMap>,
    ) -> Result<Self, BoardError> {
        let mut tiles = Vec::new();
        let mut sizes = Vec::new();
        let mut seen = HashSet::new();

        for detection in detections {
            if !detection.is_well_formed() {
                log::warn!("dropping malformed detection {}", detection.id);
                continue;
            }
            if !seen.insert(detection.id.clone()) {
                log::warn!("dropping duplicate detection {}", detection.id);
                continue;
            }

            let geom = geometry::normalize_quad(detection.corners);

            let mut data = attributes.get(&detection.id).cloned().unwrap_or_default();
            data.set(ROTATION, Data::Float(geom.snapped_rotation));
            data.set(OG_CORNERS, Data::VecPoint(detection.corners.to_vec()));

            let tile = Tile::new(detection.id, geom.hex_center, data)?;

            sizes.push(geom.size);
            tiles.push(tile);
        }

        if tiles.is_empty() {
            return Err(BoardError::EmptyScan);
        }

        let mean_size = sizes.iter().sum::<Float>() / sizes.len() as Float;

        log::info!(
            "scan produced {} tiles, mean code size {:.2}px",
            tiles.len(),
            mean_size
        );

        Ok(Self {
            tiles,
            hex_width: mean_size * HEX_WIDTH_RATIO,
        })
    }

    /// Overrides the calibrated hex width with an explicitly supplied one.
    #[must_use]
    pub fn with_hex_width(mut self, hex_width: Float) -> Self {
        self.hex_width = hex_width;
        self
    }
}

/// Normalizes one detection without building a tile. Exposed for callers
/// that only need geometry, e.g. calibration previews.
pub fn normalize_detection(detection: &CodeDetection) -> Result<CodeGeometry, BoardError> {
    if !detection.is_well_formed() {
        return Err(BoardError::MalformedDetection(detection.id.clone()));
    }

    Ok(geometry::normalize_quad(detection.corners))
}
