use hexboard_defs::id::TileId;
use thiserror::Error;

/// Errors raised while turning a scan into a board snapshot, or by
/// querying a snapshot before the relevant build stage has run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A scan with no usable detections cannot calibrate the hex width;
    /// proceeding would collapse every centroid toward the origin.
    #[error("scan produced no usable detections, cannot calibrate hex width")]
    EmptyScan,

    #[error("adjacency map has not been built yet")]
    AdjacencyNotBuilt,

    #[error("zones have not been assigned yet")]
    ZonesNotAssigned,

    #[error("unrecognized tile type tag `{0}`")]
    UnknownTileType(String),

    #[error("offset table must be six distinct non-zero entries closed under negation")]
    BadOffsetTable,

    #[error("detection `{0}` has malformed corner geometry")]
    MalformedDetection(TileId),
}
