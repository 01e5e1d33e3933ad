//! End-to-end game scenarios driven through the controller's event API.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tictactoe_core::{
    Board, BoardInvariants, Cell, Controller, InvariantSet, Key, Mode, Outcome, Placement,
    Position, SPIRAL, Turn,
};

fn started(mode: Mode, seed: u64) -> Controller {
    let mut controller = Controller::with_board(Board::new(mode), StdRng::seed_from_u64(seed));
    controller.start();
    controller
}

fn click_all(controller: &mut Controller, numbers: &[usize]) {
    for &number in numbers {
        controller.on_cell_activated(number).unwrap();
    }
}

#[test]
fn test_attacker_move_is_answered() {
    let mut controller = started(Mode::Attacker, 1);
    controller.on_cell_activated(1).unwrap();

    let board = controller.board();
    assert_eq!(board.get(Position::TopLeft), Cell::O);
    assert_eq!(board.locate(Cell::X).len(), 1);
    assert_eq!(board.round(), 2);
    assert_eq!(board.turn(), Turn::User);
    assert_eq!(board.outcome(), Outcome::Undecided);
}

#[test]
fn test_debug_form_completes_user_line() {
    let mut controller = started(Mode::DebugAttacker, 2);
    click_all(&mut controller, &[1, 4, 2, 7, 3]);

    let board = controller.board();
    assert_eq!(board.outcome(), Outcome::Won);
    assert_eq!(board.turn(), Turn::Terminated);
    assert_eq!(board.round(), 9);
    assert_eq!(controller.view().title(), "< Debug > TicTacToe Attacker [ Win ]");
}

#[test]
fn test_full_board_without_line_ties() {
    let mut controller = started(Mode::DebugAttacker, 3);
    click_all(&mut controller, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);

    let board = controller.board();
    assert_eq!(board.outcome(), Outcome::Tied);
    assert_eq!(board.round(), 9);
    assert_eq!(board.turn(), Turn::Terminated);
    assert!(board.locate(Cell::Empty).is_empty());
}

#[test]
fn test_decided_game_ignores_clicks() {
    let mut controller = started(Mode::DebugAttacker, 4);
    click_all(&mut controller, &[1, 4, 2, 7, 3]);
    controller.take_placements();

    let before = *controller.board();
    controller.on_cell_activated(9).unwrap();
    assert_eq!(*controller.board(), before);
    assert!(controller.take_placements().is_empty());
}

#[test]
fn test_bonus_scene_plays_spiral_to_a_win() {
    let mut controller = started(Mode::Attacker, 5);
    controller.on_key(Key::W);

    assert_eq!(controller.mode(), Mode::DebugAttacker);
    assert_eq!(controller.latched(), Some(Mode::Attacker));
    assert_eq!(controller.board().outcome(), Outcome::Won);

    let placements = controller.take_placements();
    let expected: Vec<Placement> = SPIRAL
        .iter()
        .zip([Cell::O, Cell::X].into_iter().cycle())
        .map(|(&position, cell)| Placement::new(position, cell))
        .collect();
    assert_eq!(placements, expected);
    assert_eq!(controller.view().title(), "< Bonus > TicTacToe Attacker [ Win ]");

    controller.on_cell_activated(5).unwrap();
    assert!(controller.take_placements().is_empty());
}

#[test]
fn test_clumsy_scene_plays_spiral_to_a_loss() {
    let mut controller = started(Mode::Defender, 6);
    controller.on_key(Key::L);

    assert_eq!(controller.mode(), Mode::DebugDefender);
    assert_eq!(controller.latched(), Some(Mode::Defender));
    assert_eq!(controller.board().outcome(), Outcome::Lost);
    assert_eq!(controller.board().get(Position::TopLeft), Cell::X);
    assert_eq!(controller.view().title(), "< Clumsy > TicTacToe Defender [ Lost ]");
}

#[test]
fn test_escape_restores_latched_mode() {
    let mut controller = started(Mode::Attacker, 7);
    controller.on_key(Key::W);
    controller.on_key(Key::W);
    assert_eq!(controller.latched(), Some(Mode::Attacker));

    controller.on_key(Key::Escape);
    assert_eq!(controller.mode(), Mode::Attacker);
    assert_eq!(controller.latched(), None);
    assert_eq!(*controller.board(), Board::new(Mode::Attacker));
    assert!(!*controller.view().reset_enabled());
}

#[test]
fn test_escape_to_defender_lets_responder_open() {
    let mut controller = started(Mode::Defender, 8);
    controller.on_key(Key::L);
    controller.on_key(Key::Escape);

    let board = controller.board();
    assert_eq!(board.mode(), Mode::Defender);
    assert_eq!(board.locate(Cell::X).len(), 1);
    assert_eq!(board.round(), 1);
    assert_eq!(board.turn(), Turn::User);
}

#[test]
fn test_defender_game_opens_with_response() {
    let controller = started(Mode::Defender, 9);
    let view = controller.view();
    assert!(*view.reset_enabled());
    assert_eq!(view.symbols().iter().filter(|s| **s == "X").count(), 1);
    assert_eq!(view.title(), "TicTacToe Defender");
}

#[test]
fn test_debug_key_round_trip() {
    let mut controller = started(Mode::Attacker, 10);
    controller.on_key(Key::D);
    assert_eq!(controller.mode(), Mode::DebugAttacker);
    assert_eq!(controller.view().title(), "< Debug > TicTacToe Attacker");

    controller.on_key(Key::D);
    assert_eq!(controller.mode(), Mode::DebugAttacker);

    controller.on_key(Key::Escape);
    assert_eq!(controller.mode(), Mode::Attacker);
}

#[test]
fn test_switch_button_flips_side() {
    let mut controller = started(Mode::Attacker, 11);
    controller.on_switch_requested();
    assert_eq!(controller.mode(), Mode::Defender);
    controller.on_switch_requested();
    assert_eq!(controller.mode(), Mode::Attacker);
}

#[test]
fn test_switch_button_swaps_demo_scenes() {
    let mut controller = started(Mode::Attacker, 12);
    controller.on_key(Key::W);
    controller.on_switch_requested();

    assert_eq!(controller.mode(), Mode::DebugDefender);
    assert_eq!(controller.latched(), Some(Mode::Attacker));
    assert_eq!(controller.board().outcome(), Outcome::Lost);

    controller.on_switch_requested();
    assert_eq!(controller.mode(), Mode::DebugAttacker);
    assert_eq!(controller.board().outcome(), Outcome::Won);

    controller.on_reset_requested();
    assert_eq!(controller.mode(), Mode::Attacker);
    assert_eq!(controller.latched(), None);
}

#[test]
fn test_reset_button_restarts_same_mode() {
    let mut controller = started(Mode::Attacker, 13);
    controller.on_cell_activated(5).unwrap();
    assert!(*controller.view().reset_enabled());

    controller.on_reset_requested();
    assert_eq!(*controller.board(), Board::new(Mode::Attacker));
    assert!(controller.take_placements().is_empty());
}

#[test]
fn test_random_games_terminate_consistently() {
    for mode in [Mode::Attacker, Mode::Defender] {
        for seed in 0..40 {
            let mut controller = started(mode, seed);
            let mut picker = StdRng::seed_from_u64(seed + 1000);

            for _ in 0..5 {
                let empty = controller.board().locate(Cell::Empty);
                let Some(position) = empty.choose(&mut picker) else {
                    break;
                };
                controller.on_cell_activated(position.number()).unwrap();
                assert!(BoardInvariants::check_all(controller.board()).is_ok());
                if controller.board().outcome().is_decided() {
                    break;
                }
            }

            let board = controller.board();
            assert!(board.outcome().is_decided(), "{mode} seed {seed}: {board}");
            assert_eq!(board.turn(), Turn::Terminated);
            assert_eq!(board.round(), 9);
        }
    }
}
