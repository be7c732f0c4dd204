//! Movement geometry: per-piece direction tables and leaper attack masks.
//!
//! Sliding pieces are walked ray-by-ray at call time against the mailbox
//! board rather than looked up in a precomputed occupancy table — knight
//! and king attacks are fixed-pattern leapers and are safe to precompute.

use once_cell::sync::Lazy;

use crate::types::{Bitset, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0), (-1, 0), (0, 1), (0, -1),
    (1, 1), (1, -1), (-1, 1), (-1, -1),
];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1), (-2, 1), (-1, -2), (-1, 2),
    (1, -2), (1, 2), (2, -1), (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1), (-1, 0), (-1, 1), (0, -1),
    (0, 1), (1, -1), (1, 0), (1, 1),
];

static KNIGHT_ATTACKS: Lazy<[Bitset; 64]> = Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));
static KING_ATTACKS: Lazy<[Bitset; 64]> = Lazy::new(|| leaper_table(&KING_OFFSETS));

fn leaper_table(offsets: &[(i8, i8)]) -> [Bitset; 64] {
    let mut table = [Bitset::EMPTY; 64];
    for i in 0..64 {
        let from = Square::from_index(i);
        let mut set = Bitset::EMPTY;
        for &(dr, df) in offsets {
            if let Some(to) = from.offset(dr, df) {
                set.insert(to);
            }
        }
        table[i] = set;
    }
    table
}

#[inline]
pub fn knight_attacks(from: Square) -> Bitset {
    KNIGHT_ATTACKS[from.index()]
}

#[inline]
pub fn king_attacks(from: Square) -> Bitset {
    KING_ATTACKS[from.index()]
}

/// Forward direction (rank delta) for a pawn of the given color.
#[inline]
pub fn pawn_forward(color: crate::types::Color) -> i8 {
    match color {
        crate::types::Color::White => 1,
        crate::types::Color::Black => -1,
    }
}

#[inline]
pub fn pawn_start_rank(color: crate::types::Color) -> u8 {
    match color {
        crate::types::Color::White => 1,
        crate::types::Color::Black => 6,
    }
}

#[inline]
pub fn pawn_promotion_rank(color: crate::types::Color) -> u8 {
    match color {
        crate::types::Color::White => 7,
        crate::types::Color::Black => 0,
    }
}
