use checkers_core::{read_board, read_many, render_many, CheckersError};

const STARTING_POSITION: &str = "\
.b.b.b.b
b.b.b.b.
.b.b.b.b
........
........
r.r.r.r.
.r.r.r.r
r.r.r.r.
";

#[test]
fn reads_starting_position() {
    let board = read_board(STARTING_POSITION).unwrap();
    assert_eq!(format!("{}", board), STARTING_POSITION);
}

#[test]
fn rejects_bad_character() {
    let bad = STARTING_POSITION.replace('b', "x");
    match read_board(&bad) {
        Err(CheckersError::BadFormat('x')) => {}
        other => panic!("expected BadFormat('x'), got {:?}", other.map(|b| b.to_string())),
    }
}

#[test]
fn rejects_man_already_on_its_own_king_row() {
    let bad = "\
.r......
........
........
........
........
........
........
........
";
    assert!(matches!(read_board(bad), Err(CheckersError::InvalidPosition)));
}

#[test]
fn rejects_short_row() {
    let bad = ".b.b.b.\n".to_string() + &STARTING_POSITION.lines().skip(1).collect::<Vec<_>>().join("\n");
    assert!(matches!(read_board(&bad), Err(CheckersError::RowWidthMismatch { .. })));
}

#[test]
fn render_many_round_trips_through_read_many() {
    let a = read_board(STARTING_POSITION).unwrap();
    let b = read_board(STARTING_POSITION).unwrap();
    let buf = render_many(&[a, b]);
    assert!(buf.contains("---\n"));

    let parsed = read_many(&buf).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].hash(), a.hash());
    assert_eq!(parsed[1].hash(), b.hash());
}
