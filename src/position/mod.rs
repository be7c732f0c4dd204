//! The board/game state and all operations on it: construction from FEN,
//! move generation, legality filtering, and make/unmake.

mod attack_map;
mod fen;
mod make_unmake;
mod movegen;
pub mod state;

pub use state::{AttackMap, GameOverCause, GameResult, Position, RepetitionAdjustment, Score, UndoRecord};
