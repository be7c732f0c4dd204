//! Opening book: a Zobrist-hash-keyed map to a list of candidate moves,
//! persisted as JSON. Loading failures degrade gracefully — a search with
//! no book simply never probes one.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::BookError;
use crate::types::{Move, PieceKind, Square};

/// Book probing is only attempted within the opening, matching the
/// source's guard against using book moves deep into a game that has
/// transposed into a book position by coincidence.
pub const BOOK_FULLMOVE_LIMIT: u32 = 15;

#[derive(Debug, Serialize, Deserialize)]
struct BookMoveDto {
    from: String,
    to: String,
    promotion: Option<char>,
}

impl BookMoveDto {
    fn from_move(mv: Move) -> BookMoveDto {
        BookMoveDto {
            from: mv.from.to_string(),
            to: mv.to.to_string(),
            promotion: mv.promotion.map(PieceKind::promotion_char),
        }
    }

    fn to_move(&self) -> Option<Move> {
        let from = parse_square(&self.from)?;
        let to = parse_square(&self.to)?;
        let promotion = self.promotion.and_then(PieceKind::from_promotion_char);
        Some(Move { from, to, promotion })
    }
}

fn parse_square(s: &str) -> Option<Square> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return None;
    }
    Some(Square::new(rank - b'1', file - b'a'))
}

pub struct OpeningBook {
    by_hash: HashMap<u64, Vec<Move>>,
}

impl OpeningBook {
    pub fn empty() -> OpeningBook {
        OpeningBook { by_hash: HashMap::new() }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<OpeningBook, BookError> {
        let text = fs::read_to_string(path)?;
        let raw: HashMap<String, Vec<BookMoveDto>> = serde_json::from_str(&text)?;
        let mut by_hash = HashMap::with_capacity(raw.len());
        for (key, moves) in raw {
            let Ok(hash) = key.parse::<u64>() else { continue };
            let parsed: Vec<Move> = moves.iter().filter_map(BookMoveDto::to_move).collect();
            if !parsed.is_empty() {
                by_hash.insert(hash, parsed);
            }
        }
        Ok(OpeningBook { by_hash })
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), BookError> {
        let raw: HashMap<String, Vec<BookMoveDto>> = self
            .by_hash
            .iter()
            .map(|(hash, moves)| {
                (hash.to_string(), moves.iter().map(|&m| BookMoveDto::from_move(m)).collect())
            })
            .collect();
        fs::write(path, serde_json::to_string_pretty(&raw)?)?;
        Ok(())
    }

    /// Returns a uniformly random move from the book for `zobrist`, if any
    /// is known and `full_moves` is still within the opening.
    pub fn probe(&self, zobrist: u64, full_moves: u32) -> Option<Move> {
        if full_moves > BOOK_FULLMOVE_LIMIT {
            return None;
        }
        let candidates = self.by_hash.get(&zobrist)?;
        candidates.choose(&mut rand::thread_rng()).copied()
    }
}

impl Default for OpeningBook {
    fn default() -> Self {
        OpeningBook::empty()
    }
}
