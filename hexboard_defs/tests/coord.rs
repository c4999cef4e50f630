use hexboard_defs::coord::{FractHex, TileCoord};
use hexboard_defs::math::{Float, Vec2};

const OFFSETS: [TileCoord; 6] = [
    TileCoord::new(1, 0),
    TileCoord::new(1, -1),
    TileCoord::new(0, -1),
    TileCoord::new(-1, 0),
    TileCoord::new(-1, 1),
    TileCoord::new(0, 1),
];

#[test]
fn test_round_is_idempotent_on_integers() {
    for q in -20..=20 {
        for r in -20..=20 {
            let coord = TileCoord::new(q, r);
            let fract = FractHex::new(q as Float, r as Float);

            assert_eq!(TileCoord::round(fract), coord);
        }
    }
}

#[test]
fn test_points_near_a_center_round_to_that_cell() {
    let hex_width = 60.0;

    for q in -3..=3 {
        for r in -3..=3 {
            let coord = TileCoord::new(q, r);
            let center = coord.to_pixel(hex_width);

            // Anywhere comfortably inside the cell's inradius resolves to
            // the cell.
            for (dx, dy) in [(0.25, 0.0), (-0.2, 0.15), (0.1, -0.28), (0.0, 0.3)] {
                let pos = center + Vec2::new(dx, dy) * (hex_width * 0.5);

                assert_eq!(TileCoord::from_pixel(pos, hex_width), coord);
            }
        }
    }
}

#[test]
fn test_round_picks_nearest_cell() {
    let coord = TileCoord::round(FractHex::new(1.9, -0.05));
    assert_eq!(coord, TileCoord::new(2, 0));

    let coord = TileCoord::round(FractHex::new(0.05, 2.1));
    assert_eq!(coord, TileCoord::new(0, 2));
}

#[test]
fn test_pixel_round_trip() {
    let hex_width = 133.0;

    for q in -8..=8 {
        for r in -8..=8 {
            let coord = TileCoord::new(q, r);
            let pixel = coord.to_pixel(hex_width);

            assert_eq!(TileCoord::from_pixel(pixel, hex_width), coord);
        }
    }
}

#[test]
fn test_pixel_round_trip_with_jitter() {
    // Centroids never land exactly on cell centers in a real photograph;
    // a modest wobble must still resolve to the same cell.
    let hex_width = 100.0;

    for q in -5..=5 {
        for r in -5..=5 {
            let coord = TileCoord::new(q, r);
            let pixel = coord.to_pixel(hex_width) + Vec2::new(7.5, -6.0);

            assert_eq!(TileCoord::from_pixel(pixel, hex_width), coord);
        }
    }
}

#[test]
fn test_offset_neighbors_in_pixel_space() {
    // A tile placed one offset away in axial space projects to a pixel
    // position that resolves exactly one offset away, for every table
    // entry.
    let hex_width = 87.0;
    let origin = TileCoord::new(3, -2);

    for offset in OFFSETS {
        let neighbor = origin + offset;
        let pixel = neighbor.to_pixel(hex_width);

        assert_eq!(TileCoord::from_pixel(pixel, hex_width), origin + offset);
        assert_eq!(TileCoord::from_pixel(pixel, hex_width) - origin, offset);
    }
}

#[test]
fn test_tile_coord_serde() {
    let c = TileCoord::new(123, 456);

    let serialized = ron::to_string(&c).unwrap();

    let deserialized: TileCoord = ron::from_str(&serialized).unwrap();

    assert_eq!(c, deserialized);
}
