use rustc_hash::FxHashSet;

use super::checkers_board::Board;
use crate::color::Color;
use crate::rank::Rank;

const MAN_DIRECTIONS_RED: [(i32, i32); 2] = [(-1, -1), (1, -1)];
const MAN_DIRECTIONS_BLACK: [(i32, i32); 2] = [(-1, 1), (1, 1)];
const KING_DIRECTIONS: [(i32, i32); 4] = [(-1, 1), (1, 1), (-1, -1), (1, -1)];

fn directions(color: Color, rank: Rank) -> &'static [(i32, i32)] {
    match (color, rank) {
        (_, Rank::King) => &KING_DIRECTIONS,
        (Color::Red, Rank::Man) => &MAN_DIRECTIONS_RED,
        (Color::Black, Rank::Man) => &MAN_DIRECTIONS_BLACK,
    }
}

/// Returns every legal successor board reachable from `board` by `color`
/// moving once. Checkers' mandatory-capture rule applies: if any jump is
/// available anywhere on the board, only jump sequences are returned.
/// Successors are deduplicated by resulting hash, mirroring the source
/// generator's `seen_hashes` set.
pub fn successors(board: &Board, color: Color) -> Vec<Board> {
    let mut jump_successors = Vec::new();
    let mut seen = FxHashSet::default();

    for square in board.pieces_of(color).squares() {
        let (_, rank) = board.piece_at(square).expect("square came from color bitboard");
        collect_jumps(board, square, color, rank, &mut jump_successors, &mut seen);
    }

    if !jump_successors.is_empty() {
        return jump_successors;
    }

    let mut move_successors = Vec::new();
    seen.clear();
    for square in board.pieces_of(color).squares() {
        let (_, rank) = board.piece_at(square).expect("square came from color bitboard");
        collect_simple_moves(board, square, color, rank, &mut move_successors, &mut seen);
    }
    move_successors
}

fn collect_simple_moves(
    board: &Board,
    square: u8,
    color: Color,
    rank: Rank,
    out: &mut Vec<Board>,
    seen: &mut FxHashSet<u64>,
) {
    let (x, y) = Board::coords_of(square);
    for &(dx, dy) in directions(color, rank) {
        let (nx, ny) = (x as i32 + dx, y as i32 + dy);
        if !Board::in_bounds(nx, ny) {
            continue;
        }
        let to = Board::square_of(nx as u8, ny as u8);
        if board.piece_at(to).is_some() {
            continue;
        }
        let mut next = *board;
        next.move_piece(square, to);
        if seen.insert(next.hash()) {
            out.push(next);
        }
    }
}

/// Recursively follows every maximal jump sequence starting from `square`,
/// mirroring the source generator's depth-first `_follow_jump`: at each
/// step, every available further jump is explored, and a sequence that can
/// no longer continue is recorded as a leaf. A mid-sequence promotion (a
/// man reaching the back rank) immediately grants king-style jump
/// directions for the rest of the sequence.
fn collect_jumps(
    board: &Board,
    square: u8,
    color: Color,
    rank: Rank,
    out: &mut Vec<Board>,
    seen: &mut FxHashSet<u64>,
) {
    let (x, y) = Board::coords_of(square);

    for &(dx, dy) in directions(color, rank) {
        let (mx, my) = (x as i32 + dx, y as i32 + dy);
        let (lx, ly) = (x as i32 + 2 * dx, y as i32 + 2 * dy);
        if !Board::in_bounds(mx, my) || !Board::in_bounds(lx, ly) {
            continue;
        }
        let mid = Board::square_of(mx as u8, my as u8);
        let landing = Board::square_of(lx as u8, ly as u8);

        let Some((mid_color, _)) = board.piece_at(mid) else {
            continue;
        };
        if mid_color == color || board.piece_at(landing).is_some() {
            continue;
        }

        let mut next = *board;
        next.clear_square(mid);
        let promoted = next.move_piece(square, landing);
        let next_rank = if promoted { Rank::King } else { rank };

        // Leaf-ness is decided by whether another jump is geometrically
        // available from the landing square, never by whether the
        // recursive call happened to push anything: two different capture
        // orders can converge on the same final board (most easily with a
        // king's four-direction capture ring), and deduplicating that
        // transposition against `seen` must not be mistaken for "this
        // sequence had nowhere further to go".
        if has_further_jump(&next, landing, color, next_rank) {
            collect_jumps(&next, landing, color, next_rank, out, seen);
        } else if seen.insert(next.hash()) {
            out.push(next);
        }
    }
}

/// Whether `square`'s occupant (given its color and current rank) has at
/// least one legal jump available on `board`. Used to decide whether a
/// jump sequence must continue, independent of the `seen` dedup set.
fn has_further_jump(board: &Board, square: u8, color: Color, rank: Rank) -> bool {
    let (x, y) = Board::coords_of(square);
    for &(dx, dy) in directions(color, rank) {
        let (mx, my) = (x as i32 + dx, y as i32 + dy);
        let (lx, ly) = (x as i32 + 2 * dx, y as i32 + 2 * dy);
        if !Board::in_bounds(mx, my) || !Board::in_bounds(lx, ly) {
            continue;
        }
        let mid = Board::square_of(mx as u8, my as u8);
        let landing = Board::square_of(lx as u8, ly as u8);

        let Some((mid_color, _)) = board.piece_at(mid) else {
            continue;
        };
        if mid_color != color && board.piece_at(landing).is_none() {
            return true;
        }
    }
    false
}
