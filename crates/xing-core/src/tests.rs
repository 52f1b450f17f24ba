//! Unit tests for xing-core.

use std::time::Duration;

use crate::{Cell, CoreError, FleetConfig, Terminal, VehicleId, VehicleState};

// ── Cell ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cell {
    use super::*;

    #[test]
    fn off_grid_sentinel() {
        assert!(Cell::OFF_GRID.is_off_grid());
        assert!(Cell::new(-1, 3).is_off_grid());
        assert!(!Cell::new(0, 0).is_off_grid());
        assert_eq!(Cell::default(), Cell::OFF_GRID);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(Cell::new(2, 2).manhattan(Cell::new(2, 3)), 1);
        assert_eq!(Cell::new(0, 0).manhattan(Cell::new(4, 6)), 10);
        assert_eq!(Cell::new(5, 5).manhattan(Cell::new(5, 5)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(Cell::new(4, 1).to_string(), "(4,1)");
        assert_eq!(Cell::OFF_GRID.to_string(), "(off-grid)");
    }
}

// ── Terminal ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod terminal {
    use super::*;

    #[test]
    fn index_matches_label_order() {
        for (i, t) in Terminal::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn from_char_round_trip() {
        for t in Terminal::ALL {
            assert_eq!(Terminal::from_char(t.as_char()).unwrap(), t);
            assert_eq!(
                Terminal::from_char(t.as_char().to_ascii_lowercase()).unwrap(),
                t
            );
        }
    }

    #[test]
    fn from_char_rejects_unknown() {
        assert!(matches!(
            Terminal::from_char('x'),
            Err(CoreError::UnknownTerminal('X'))
        ));
    }
}

// ── VehicleId / VehicleState ──────────────────────────────────────────────────

#[test]
fn vehicle_id_default_is_invalid() {
    assert_eq!(VehicleId::default(), VehicleId::INVALID);
    assert_eq!(VehicleId(7).index(), 7);
}

#[test]
fn only_finished_is_terminal() {
    assert!(VehicleState::Finished.is_terminal());
    assert!(!VehicleState::Ready.is_terminal());
    assert!(!VehicleState::Running.is_terminal());
    assert!(!VehicleState::Moved.is_terminal());
}

// ── FleetConfig ───────────────────────────────────────────────────────────────

#[test]
fn default_config_is_valid() {
    let cfg = FleetConfig::default();
    assert_eq!(cfg.gate_capacity, 7);
    cfg.validate().unwrap();
}

#[test]
fn zero_capacity_rejected() {
    let cfg = FleetConfig {
        gate_capacity:  0,
        frame_interval: Duration::from_millis(1),
    };
    assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
}
