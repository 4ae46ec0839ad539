//! Scripted end-to-end games through the console session.

use std::io::Cursor;
use strictly_grid::{DiagonalRule, GameState, Outcome, Player, PlayerId};
use strictly_grid_console::ConsoleSession;

fn players() -> [Player; 2] {
    [
        Player::new("Ada", "X").expect("valid player"),
        Player::new("Bob", "O").expect("valid player"),
    ]
}

fn run(script: &str, game: &mut GameState) -> (anyhow::Result<Outcome>, String) {
    let mut session = ConsoleSession::new(Cursor::new(script.to_string()), Vec::new());
    let result = session.play(game);
    let out = String::from_utf8(session.into_output()).expect("utf-8 output");
    (result, out)
}

#[test]
fn test_top_row_win() {
    let mut game = GameState::initialize(3, players()).expect("odd size");
    let (result, out) = run("1 1\n2 2\n1 2\n3 3\n1 3\n", &mut game);

    assert_eq!(result.expect("game finished"), Outcome::Win(PlayerId::First));
    assert!(out.contains("Ada enter position in format: x y: "));
    assert!(out.contains("Bob enter position in format: x y: "));
    let final_board = "\
+---+---+---+
| X | X | X |
+---+---+---+
|   | O |   |
+---+---+---+
|   |   | O |
+---+---+---+
Game finished
Winner Ada who represents X
";
    assert!(out.ends_with(final_board));
}

#[test]
fn test_errors_reprompt_same_player() {
    let mut game = GameState::initialize(3, players()).expect("odd size");
    let script = "\
hello
0 1
4 1
2 2
2 2
1 1
";
    let (result, out) = run(script, &mut game);

    // Input runs out before the game ends.
    assert!(result.is_err());
    assert!(out.contains("invalid number of inputs given: expected 2, got 1"));
    assert!(out.contains("positions start at 1"));
    assert!(out.contains("Square (3, 0) is outside the 3x3 board"));
    assert!(out.contains("Square (1, 1) is already taken"));
    assert_eq!(game.occupant(1, 1), Some(PlayerId::First));
    assert_eq!(game.occupant(0, 0), Some(PlayerId::Second));
    assert_eq!(game.history().len(), 2);
    // Four tries for Ada's first move, one more when the input ends.
    assert_eq!(out.matches("Ada enter position").count(), 5);
    assert_eq!(out.matches("Bob enter position").count(), 2);
}

#[test]
fn test_draw_announced() {
    let mut game = GameState::initialize(3, players()).expect("odd size");
    let script = "1 1\n1 2\n1 3\n2 2\n2 1\n2 3\n3 2\n3 1\n3 3\n";
    let (result, out) = run(script, &mut game);

    assert_eq!(result.expect("game finished"), Outcome::Draw);
    assert!(out.ends_with("Game finished\nDraw, no squares left\n"));
}

#[test]
fn test_legacy_rule_plays_past_anti_diagonal() {
    let mut game =
        GameState::initialize_with_rule(3, players(), DiagonalRule::MainOnly).expect("odd size");
    // Ada completes the anti-diagonal on her third move, which does not
    // count, and wins later through the middle row.
    let script = "1 3\n1 1\n2 2\n1 2\n3 1\n3 2\n2 1\n3 3\n2 3\n";
    let (result, out) = run(script, &mut game);

    assert_eq!(result.expect("game finished"), Outcome::Win(PlayerId::First));
    assert_eq!(game.history().len(), 9);
    assert_eq!(out.matches("Game finished").count(), 1);
    assert!(out.contains("Winner Ada who represents X"));
}

#[test]
fn test_finished_game_only_renders() {
    let mut game = GameState::initialize(1, players()).expect("odd size");
    game.apply_move(0, 0).expect("legal move");

    let (result, out) = run("", &mut game);
    assert_eq!(result.expect("already finished"), Outcome::Win(PlayerId::First));
    assert_eq!(out, "+---+\n| X |\n+---+\nGame finished\nWinner Ada who represents X\n");
}
