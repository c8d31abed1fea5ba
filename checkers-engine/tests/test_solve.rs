use checkers_core::{read_board, Color};
use checkers_engine::solve;

#[test]
fn red_with_overwhelming_material_wins_quickly() {
    // Black's only piece sits directly in front of a red king with an open
    // landing square behind it: the mandatory-capture rule forces red to
    // take it, ending the game in a single ply.
    let board = read_board(
        "\
........
........
........
...b....
..R.....
........
........
........
",
    )
    .unwrap();

    let line = solve(board, 12, 10);
    assert!(line.len() > 1, "search should find at least one move");

    let last = *line.last().unwrap();
    assert!(!last.has_any(Color::Black), "black should end up with no pieces on the board");
}

#[test]
fn single_piece_with_no_moves_is_an_immediate_loss() {
    // Red man in the corner: its only diagonal is occupied by a black man,
    // and the jump over it is blocked by a second black man on the landing
    // square, so red has no legal move at all.
    let board = read_board(
        "\
........
........
........
........
........
..b.....
.b......
r.......
",
    )
    .unwrap();

    let line = solve(board, 5, 5);
    assert_eq!(line.len(), 1);
    assert_eq!(line[0].hash(), board.hash());
}

#[test]
fn solve_never_returns_a_line_longer_than_the_depth_budget() {
    let board = read_board(
        "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
",
    )
    .unwrap();

    let line = solve(board, 4, 10);
    assert!(line.len() <= 5, "a 4-ply search can return at most 5 boards (root + 4 plies)");
}

#[test]
fn solve_terminates_promptly_under_a_tight_time_budget() {
    let board = read_board(
        "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
",
    )
    .unwrap();

    let started = std::time::Instant::now();
    let _line = solve(board, 100, 1);
    assert!(started.elapsed() < std::time::Duration::from_secs(5));
}
