//! Unit tests for xing-map.

use xing_core::{Cell, Terminal};

use crate::{MAP_COLS, MAP_ROWS, PathTable, ZoneMap};

// ── PathTable ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path_table {
    use super::*;

    #[test]
    fn standard_table_validates() {
        PathTable::standard().validate(MAP_ROWS, MAP_COLS).unwrap();
    }

    #[test]
    fn identity_routes_are_immediately_sentinel() {
        let paths = PathTable::standard();
        for t in Terminal::ALL {
            assert_eq!(paths.len(t, t), 0);
            assert!(paths.step(t, t, 0).is_off_grid());
        }
    }

    #[test]
    fn step_past_end_is_sentinel() {
        let paths = PathTable::standard();
        let n = paths.len(Terminal::A, Terminal::B);
        assert!(n > 0);
        assert!(!paths.step(Terminal::A, Terminal::B, n - 1).is_off_grid());
        assert!(paths.step(Terminal::A, Terminal::B, n).is_off_grid());
        assert!(paths.step(Terminal::A, Terminal::B, n + 100).is_off_grid());
    }

    #[test]
    fn routes_start_at_the_origin_road() {
        let paths = PathTable::standard();
        // All routes out of a given terminal share the same first cell.
        for origin in Terminal::ALL {
            let firsts: Vec<Cell> = Terminal::ALL
                .into_iter()
                .filter(|&d| d != origin)
                .map(|d| paths.step(origin, d, 0))
                .collect();
            assert!(firsts.windows(2).all(|w| w[0] == w[1]), "origin {origin}");
        }
    }

    #[test]
    fn road_surface_is_bounded() {
        let cells = PathTable::standard().cells();
        assert!(!cells.is_empty());
        for cell in cells {
            assert!((cell.row as usize) < MAP_ROWS);
            assert!((cell.col as usize) < MAP_COLS);
        }
    }
}

// ── ZoneMap ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod zone_map {
    use super::*;

    #[test]
    fn standard_zone_sets_are_disjoint() {
        let zones = ZoneMap::standard();
        assert_eq!(zones.interior_len(), 8);
        for cell in PathTable::standard().cells() {
            let classes = [
                zones.is_entrance(cell),
                zones.is_exit(cell),
                zones.in_interior(cell),
            ];
            assert!(
                classes.iter().filter(|&&c| c).count() <= 1,
                "cell {cell} has multiple zone classes"
            );
        }
    }

    #[test]
    fn every_route_crosses_one_entrance_and_one_exit() {
        let paths = PathTable::standard();
        let zones = ZoneMap::standard();
        for origin in Terminal::ALL {
            for destination in Terminal::ALL {
                if origin == destination {
                    continue;
                }
                let route = paths.route(origin, destination);
                let entrances = route.iter().filter(|&&c| zones.is_entrance(c)).count();
                let exits = route.iter().filter(|&&c| zones.is_exit(c)).count();
                assert_eq!(entrances, 1, "route {origin}→{destination}");
                assert_eq!(exits, 1, "route {origin}→{destination}");

                // The entrance comes before any interior cell, and every
                // interior cell comes before the exit.
                let entrance_at = route.iter().position(|&c| zones.is_entrance(c)).unwrap();
                let exit_at = route.iter().position(|&c| zones.is_exit(c)).unwrap();
                for (i, &cell) in route.iter().enumerate() {
                    if zones.in_interior(cell) {
                        assert!(entrance_at < i && i < exit_at, "route {origin}→{destination}");
                    }
                }
            }
        }
    }

    #[test]
    fn off_grid_belongs_to_no_zone() {
        let zones = ZoneMap::standard();
        assert!(!zones.is_entrance(Cell::OFF_GRID));
        assert!(!zones.is_exit(Cell::OFF_GRID));
        assert!(!zones.in_interior(Cell::OFF_GRID));
    }
}
