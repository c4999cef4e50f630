use crate::math::{wrap_degrees, Float, Vec2};

/// Scannable codes are mounted off-center within their physical hex cell;
/// the cell's centroid sits this many code-side-lengths away from the
/// code's own centroid, toward the far edge of the cell.
pub const HEX_CENTER_OFFSET_RATIO: Float = 0.66;

/// Tiles are physically constrained to six discrete orientations.
pub const SNAP_DEGREES: Float = 60.0;

/// The canonical geometry of one detected code region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeGeometry {
    /// The centroid of the hex cell the code is mounted on, in pixel space.
    pub hex_center: Vec2,
    /// Raw rotation in degrees, normalized to `[0, 360)`.
    pub rotation: Float,
    /// Rotation snapped to the nearest multiple of 60 degrees. Only
    /// meaningful for rendering orientation.
    pub snapped_rotation: Float,
    /// Mean side length of the code region, used for grid calibration.
    pub size: Float,
}

/// Sorts four corner points by angle around their centroid, yielding a
/// canonical cyclic order regardless of the order the detector reported
/// them in.
#[must_use]
pub fn canonical_order(corners: [Vec2; 4]) -> [Vec2; 4] {
    let centroid = quad_centroid(corners);

    let mut sorted = corners;
    sorted.sort_by(|a, b| {
        let a = (a.y - centroid.y).atan2(a.x - centroid.x);
        let b = (b.y - centroid.y).atan2(b.x - centroid.x);
        a.total_cmp(&b)
    });

    sorted
}

#[inline]
#[must_use]
pub fn quad_centroid(corners: [Vec2; 4]) -> Vec2 {
    (corners[0] + corners[1] + corners[2] + corners[3]) / 4.0
}

/// Mean length of the four consecutive edges in canonical order. Averaging
/// evens out perspective distortion.
#[must_use]
pub fn quad_side_length(corners: [Vec2; 4]) -> Float {
    mean_edge_length(canonical_order(corners))
}

fn mean_edge_length(sorted: [Vec2; 4]) -> Float {
    (0..4)
        .map(|i| sorted[i].distance(sorted[(i + 1) % 4]))
        .sum::<Float>()
        / 4.0
}

/// Signed shoelace area of the quad in canonical order. Collinear or
/// duplicated corners yield an area near zero.
#[must_use]
pub fn quad_area(corners: [Vec2; 4]) -> Float {
    let sorted = canonical_order(corners);

    (0..4)
        .map(|i| {
            let a = sorted[i];
            let b = sorted[(i + 1) % 4];
            a.x * b.y - b.x * a.y
        })
        .sum::<Float>()
        / 2.0
}

/// Converts a detected code region into canonical size, rotation and hex
/// cell centroid.
///
/// The caller must have filtered malformed detections already; this never
/// sees degenerate quads.
#[must_use]
pub fn normalize_quad(corners: [Vec2; 4]) -> CodeGeometry {
    let centroid = quad_centroid(corners);
    let sorted = canonical_order(corners);

    let size = mean_edge_length(sorted);

    let edge = sorted[1] - sorted[0];
    let angle_rad = edge.y.atan2(edge.x);

    let rotation = wrap_degrees(angle_rad.to_degrees());
    let snapped_rotation = wrap_degrees((rotation / SNAP_DEGREES).round() * SNAP_DEGREES);

    // The cell center offset is rotated by the raw angle, not the snapped
    // one; snapping is for display only.
    let offset = Vec2::new(0.0, -size * HEX_CENTER_OFFSET_RATIO);
    let hex_center = centroid + Vec2::from_angle(angle_rad).rotate(offset);

    CodeGeometry {
        hex_center,
        rotation,
        snapped_rotation,
        size,
    }
}
