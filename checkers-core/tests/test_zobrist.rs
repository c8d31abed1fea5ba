use checkers_core::{read_board, Board, Color, Rank};

#[test]
fn identical_positions_hash_identically() {
    let a = read_board(
        "\
........
........
........
........
........
........
.r......
........
",
    )
    .unwrap();
    let b = a;
    assert_eq!(a.hash(), b.hash());
}

#[test]
fn man_and_king_on_the_same_square_hash_differently() {
    // Regression coverage for the collision class the source implementation
    // had to special-case: two positions that agree on every square's
    // occupant color but differ in rank must never collide.
    let mut man = Board::empty();
    man.set_piece(Board::square_of(2, 3), Color::Red, Rank::Man);

    let mut king = Board::empty();
    king.set_piece(Board::square_of(2, 3), Color::Red, Rank::King);

    assert_ne!(man.hash(), king.hash());
}

#[test]
fn moving_a_piece_changes_the_hash() {
    let mut board = Board::empty();
    board.set_piece(Board::square_of(2, 3), Color::Red, Rank::Man);
    let before = board.hash();
    board.move_piece(Board::square_of(2, 3), Board::square_of(3, 4));
    assert_ne!(before, board.hash());
}

#[test]
fn empty_board_hashes_to_zero() {
    assert_eq!(Board::empty().hash(), 0);
}
