//! Run with: `cargo test --test geometry_properties`

use hexlib::geometry::{Area, Coordinate, Direction, Error, Grid, Path, Point};
use proptest::prelude::*;

proptest! {
    #[test]
    fn offset_coordinates_round_trip(col in -50i32..50, row in -50i32..50) {
        let coordinate = Coordinate::from_offset(col, row);
        prop_assert_eq!(coordinate.to_offset(), (col, row));
    }

    #[test]
    fn hex_lookup_round_trips(
        width in 1i32..12,
        height in 1i32..12,
        col in 0i32..12,
        row in 0i32..12,
    ) {
        let grid = Grid::new(width, height).unwrap();
        let (col, row) = (col % width, row % height);
        let hex = grid.hex(col, row).unwrap();
        prop_assert_eq!((hex.col(), hex.row()), (col, row));
        prop_assert_eq!(grid.hex_at(hex.coordinate()).unwrap(), hex);
        prop_assert_eq!(grid.hex_at_point(hex.centre()).unwrap(), hex);
    }

    #[test]
    fn far_lookups_fail_without_panicking(
        col in any::<i32>(),
        row in any::<i32>(),
        x in any::<f64>(),
        y in any::<f64>(),
    ) {
        let grid = Grid::new(5, 5).unwrap();
        let in_bounds = (0..5).contains(&col) && (0..5).contains(&row);
        prop_assert_eq!(grid.hex(col, row).is_ok(), in_bounds);

        let coordinate = Coordinate::new(col, row);
        prop_assert_eq!(grid.hex_at(coordinate).is_ok(), grid.contains(coordinate));

        if let Ok(hex) = grid.hex_at_point(Point::new(x, y)) {
            prop_assert!(grid.contains(hex.coordinate()));
        }
    }

    #[test]
    fn single_step_is_adjacent(
        width in 1i32..12,
        height in 1i32..12,
        col in 0i32..12,
        row in 0i32..12,
        direction in 0usize..6,
    ) {
        let grid = Grid::new(width, height).unwrap();
        let hex = grid.hex(col % width, row % height).unwrap();
        let direction = Direction::from_index(direction);
        match hex.go(direction) {
            Ok(next) => {
                prop_assert_eq!(hex.distance(&next), 1);
                prop_assert_eq!(hex.direction_to(&next), Some(direction));
                prop_assert_eq!(next.go(direction.opposite()).unwrap(), hex);
            }
            Err(err) => prop_assert!(
                matches!(err, Error::OutOfBounds { .. }),
                "unexpected error {:?}",
                err
            ),
        }
    }

    #[test]
    fn shortest_path_length_matches_distance(
        width in 1i32..10,
        height in 1i32..10,
        a in (0i32..10, 0i32..10),
        b in (0i32..10, 0i32..10),
    ) {
        let grid = Grid::new(width, height).unwrap();
        let start = grid.hex(a.0 % width, a.1 % height).unwrap();
        let end = grid.hex(b.0 % width, b.1 % height).unwrap();

        let path = Path::shortest(start, end).unwrap();
        prop_assert_eq!(path.len() as u32 - 1, start.distance(&end));
        prop_assert_eq!(path.start(), start);
        prop_assert_eq!(path.end(), end);
        for pair in path.hexes().windows(2) {
            prop_assert!(pair[0].is_adjacent(&pair[1]));
        }
        // the step string reproduces the same path
        prop_assert_eq!(Path::from_steps(start, &path.steps()).unwrap(), path);
    }

    #[test]
    fn within_radius_is_exact(
        width in 1i32..12,
        height in 1i32..12,
        center in (0i32..12, 0i32..12),
        radius in 0i32..5,
    ) {
        let grid = Grid::new(width, height).unwrap();
        let center = grid.hex(center.0 % width, center.1 % height).unwrap();
        let area = Area::within_radius(center, radius).unwrap();

        for hex in area.hexes() {
            prop_assert!(center.distance(&hex) <= radius as u32);
        }
        for hex in grid.hexes() {
            prop_assert_eq!(area.contains(&hex), center.distance(&hex) <= radius as u32);
        }
    }

    #[test]
    fn from_hexes_requires_connection(
        cells in proptest::collection::btree_set((0i32..6, 0i32..6), 1..12),
    ) {
        let grid = Grid::new(6, 6).unwrap();
        let hexes: Vec<_> = cells
            .iter()
            .map(|&(col, row)| grid.hex(col, row).unwrap())
            .collect();

        match Area::from_hexes(hexes.iter().copied()) {
            Ok(area) => {
                prop_assert_eq!(area.len(), hexes.len());
                prop_assert!(hexes.iter().all(|hex| area.contains(hex)));
                prop_assert_eq!(Area::components(hexes.iter().copied()).len(), 1);
            }
            Err(err) => {
                prop_assert!(
                    matches!(err, Error::Disconnected),
                    "unexpected error {:?}",
                    err
                );
                prop_assert!(Area::components(hexes.iter().copied()).len() > 1);
            }
        }
    }

    #[test]
    fn closed_boundary_of_connected_area(
        width in 1i32..8,
        height in 1i32..8,
        center in (0i32..8, 0i32..8),
        radius in 0i32..3,
    ) {
        let grid = Grid::new(width, height).unwrap();
        let center = grid.hex(center.0 % width, center.1 % height).unwrap();
        let area = Area::within_radius(center, radius).unwrap();
        let boundary = area.boundary();

        prop_assert!(boundary.is_closed());
        for edge in boundary.edges() {
            prop_assert!(area.contains(&edge.hex));
            prop_assert!(edge.complement().map_or(true, |outer| !area.contains(&outer.hex)));
        }
    }
}
