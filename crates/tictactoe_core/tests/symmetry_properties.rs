//! Algebraic properties of the symmetry engine over many sampled boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use tictactoe_core::{Board, Catalog, Cell, Orientation, Position, Selector, Toggle};

fn sample_boards(count: usize) -> Vec<Board> {
    let mut rng = StdRng::seed_from_u64(0x7177);
    (0..count)
        .map(|_| {
            let mut board = Board::default();
            for position in Position::ALL {
                board.set(position, Cell::from_bits(rng.random_range(0..4)));
            }
            board
        })
        .collect()
}

#[test]
fn test_rotation_group_law() {
    for board in sample_boards(40) {
        for a in -9..=9 {
            for b in -9..=9 {
                let mut stepped = board;
                stepped.rotate(a);
                stepped.rotate(b);

                let mut direct = board;
                direct.rotate((a + b).rem_euclid(8));
                assert_eq!(stepped, direct, "{board} a={a} b={b}");
            }
        }
        let mut identity = board;
        identity.rotate(0);
        assert_eq!(identity, board);
    }
}

#[test]
fn test_reflection_is_an_involution() {
    let axes = [
        Orientation::Horizontal,
        Orientation::Upward,
        Orientation::Vertical,
        Orientation::Downward,
    ];
    for board in sample_boards(60) {
        for axis in axes {
            let mut twice = board;
            twice.reflect(axis);
            twice.reflect(axis);
            assert_eq!(twice, board, "{board} axis={axis}");
        }
    }
}

#[test]
fn test_case_round_trip() {
    for board in sample_boards(60) {
        let rebuilt = Board::from_case(board.case());
        for position in Position::ALL {
            assert_eq!(rebuilt.get(position), board.get(position));
        }
    }
}

#[test]
fn test_sanitizer_is_idempotent() {
    for board in sample_boards(60) {
        let once = board.sanitized();
        assert_eq!(once.sanitized(), once);
        assert!(once.locate(Cell::Preferred).is_empty());
    }
}

#[test]
fn test_full_orbit_visits_every_toggle_combination() {
    for board in sample_boards(20) {
        let orbit = board.orbit(Selector::ALL);
        let states: HashSet<u8> = orbit.iter().map(Board::symmetry_state).collect();
        assert_eq!(states.len(), 16);

        for mut member in orbit {
            for toggle in Toggle::ALL {
                assert_eq!(
                    member.toggle(toggle),
                    member.symmetry_state() & toggle.bit() != 0
                );
            }
            member.clear_symmetry();
            assert_eq!(member, board);
        }
    }
}

#[test]
fn test_catalog_orbits_clear_to_canonical() {
    let catalog = Catalog::standard();
    let tuples = catalog
        .zero_survive()
        .iter()
        .chain(catalog.single_survive())
        .chain(catalog.double_survive());
    let patterns = tuples
        .flat_map(|t| [t.won(), t.lost(), t.mask()])
        .chain(catalog.openings())
        .chain([catalog.full_mask()]);

    for pattern in patterns {
        assert_eq!(pattern.orbit().len(), pattern.selector().orbit_len());
        assert_eq!(pattern.orbit()[0], *pattern.canonical());
        for member in pattern.orbit() {
            let mut cleared = *member;
            cleared.clear_symmetry();
            assert_eq!(cleared, *pattern.canonical(), "{pattern}");
        }
    }
}
