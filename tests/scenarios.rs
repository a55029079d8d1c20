use serde::Deserialize;

use chess_referee::board::{Board, BoardBuilder, Color, MoveRejection, PieceKind, Square};

#[derive(Deserialize)]
struct Suite {
    scenarios: Vec<Scenario>,
    notation: Vec<NotationCase>,
}

#[derive(Deserialize)]
struct Scenario {
    name: String,
    start: String,
    #[serde(default)]
    turn: Option<String>,
    #[serde(default)]
    pieces: Vec<Placement>,
    #[serde(default)]
    moves: Vec<MoveCase>,
    #[serde(default)]
    checks: Vec<CheckCase>,
    #[serde(default)]
    after: Option<Expected>,
}

#[derive(Deserialize)]
struct Placement {
    square: String,
    color: String,
    kind: String,
    #[serde(default)]
    has_moved: bool,
}

#[derive(Deserialize)]
struct MoveCase {
    from: String,
    to: String,
    expect: String,
}

#[derive(Deserialize)]
struct CheckCase {
    color: String,
    in_check: bool,
}

#[derive(Deserialize)]
struct Captured {
    color: String,
    kind: String,
}

#[derive(Deserialize)]
struct Expected {
    turn: String,
    #[serde(default)]
    occupied: Vec<Placement>,
    #[serde(default)]
    empty: Vec<String>,
    history_len: usize,
    #[serde(default)]
    last_captured: Option<Captured>,
}

#[derive(Deserialize)]
struct NotationCase {
    name: String,
    square: Option<(usize, usize)>,
}

fn square(name: &str) -> Square {
    Square::from_algebraic(name).unwrap_or_else(|| panic!("bad square {name} in scenarios.json"))
}

fn color(name: &str) -> Color {
    match name {
        "white" => Color::White,
        "black" => Color::Black,
        other => panic!("bad color {other} in scenarios.json"),
    }
}

fn kind(name: &str) -> PieceKind {
    let letter = match name {
        "knight" => 'n',
        other => other.chars().next().unwrap_or('?'),
    };
    PieceKind::from_char(letter).unwrap_or_else(|| panic!("bad kind {name} in scenarios.json"))
}

fn rejection_name(result: &Result<(), MoveRejection>) -> &'static str {
    match result {
        Ok(()) => "ok",
        Err(MoveRejection::NoPieceAtSource { .. }) => "NoPieceAtSource",
        Err(MoveRejection::WrongTurn { .. }) => "WrongTurn",
        Err(MoveRejection::IllegalMove { .. }) => "IllegalMove",
        Err(MoveRejection::ExposesOwnKing { .. }) => "ExposesOwnKing",
        Err(MoveRejection::OutOfRange { .. }) => "OutOfRange",
    }
}

fn setup(scenario: &Scenario) -> Board {
    let mut builder = match scenario.start.as_str() {
        "initial" => BoardBuilder::starting_position(),
        "empty" => BoardBuilder::new(),
        other => panic!("unknown start {other}"),
    };
    for p in &scenario.pieces {
        builder = if p.has_moved {
            builder.moved_piece(square(&p.square), color(&p.color), kind(&p.kind))
        } else {
            builder.piece(square(&p.square), color(&p.color), kind(&p.kind))
        };
    }
    if let Some(turn) = &scenario.turn {
        builder = builder.side_to_move(color(turn));
    }
    builder.build()
}

fn load() -> Suite {
    let data = include_str!("data/scenarios.json");
    serde_json::from_str(data).expect("invalid scenarios.json")
}

#[test]
fn scenario_suite() {
    for scenario in load().scenarios {
        let mut board = setup(&scenario);

        for check in &scenario.checks {
            assert_eq!(
                board.is_in_check(color(&check.color)),
                check.in_check,
                "{}: check status of {}",
                scenario.name,
                check.color
            );
        }

        for mv in &scenario.moves {
            let before = board.clone();
            let result = board.attempt_move(square(&mv.from), square(&mv.to));
            assert_eq!(
                rejection_name(&result),
                mv.expect,
                "{}: {}-{}",
                scenario.name,
                mv.from,
                mv.to
            );
            if result.is_err() {
                assert_eq!(board, before, "{}: rejected move changed the board", scenario.name);
            }
        }

        let Some(after) = &scenario.after else {
            continue;
        };
        assert_eq!(board.current_turn(), color(&after.turn), "{}", scenario.name);
        assert_eq!(board.history().len(), after.history_len, "{}", scenario.name);
        for p in &after.occupied {
            let piece = board
                .piece_at(square(&p.square))
                .unwrap()
                .unwrap_or_else(|| panic!("{}: {} is empty", scenario.name, p.square));
            assert_eq!(piece.color, color(&p.color), "{}", scenario.name);
            assert_eq!(piece.kind, kind(&p.kind), "{}", scenario.name);
            assert_eq!(piece.has_moved, p.has_moved, "{}", scenario.name);
        }
        for name in &after.empty {
            assert_eq!(board.piece_at(square(name)), Ok(None), "{}", scenario.name);
        }
        if let Some(expected) = &after.last_captured {
            let captured = board
                .last_move()
                .and_then(|record| record.captured)
                .unwrap_or_else(|| panic!("{}: nothing captured", scenario.name));
            assert_eq!(captured.color, color(&expected.color), "{}", scenario.name);
            assert_eq!(captured.kind, kind(&expected.kind), "{}", scenario.name);
        }
    }
}

#[test]
fn notation_suite() {
    for case in load().notation {
        let parsed = Square::from_algebraic(&case.name);
        let expected = case.square.map(|(row, col)| Square(row, col));
        assert_eq!(parsed, expected, "parsing {:?}", case.name);
    }
}

#[test]
fn scenarios_are_independent() {
    let suite = load();
    let first = setup(&suite.scenarios[0]);
    let again = setup(&suite.scenarios[0]);
    assert_eq!(first, again);
    assert_eq!(first, Board::new());
}
