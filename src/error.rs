//! Error types for the crate's fallible boundaries: FEN parsing, move
//! notation, opening-book loading, and Zobrist mask loading.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    WrongFieldCount { found: usize },
    BadPlacement(String),
    BadSideToMove(String),
    BadCastling(String),
    BadEnPassant(String),
    BadHalfmoveClock(String),
    BadFullmoveNumber(String),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "expected 6 space-separated FEN fields, found {found}")
            }
            FenError::BadPlacement(s) => write!(f, "malformed piece placement field: {s}"),
            FenError::BadSideToMove(s) => write!(f, "malformed side-to-move field: {s}"),
            FenError::BadCastling(s) => write!(f, "malformed castling field: {s}"),
            FenError::BadEnPassant(s) => write!(f, "malformed en-passant field: {s}"),
            FenError::BadHalfmoveClock(s) => write!(f, "malformed halfmove clock: {s}"),
            FenError::BadFullmoveNumber(s) => write!(f, "malformed fullmove number: {s}"),
        }
    }
}

impl std::error::Error for FenError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    TooShort(String),
    BadSquare(String),
    BadPromotion(char),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::TooShort(s) => write!(f, "move notation too short: {s}"),
            NotationError::BadSquare(s) => write!(f, "not a valid square: {s}"),
            NotationError::BadPromotion(c) => write!(f, "not a valid promotion letter: {c}"),
        }
    }
}

impl std::error::Error for NotationError {}

#[derive(Debug)]
pub enum BookError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::Io(e) => write!(f, "opening book I/O error: {e}"),
            BookError::Json(e) => write!(f, "opening book JSON error: {e}"),
        }
    }
}

impl std::error::Error for BookError {}

impl From<std::io::Error> for BookError {
    fn from(e: std::io::Error) -> Self {
        BookError::Io(e)
    }
}

impl From<serde_json::Error> for BookError {
    fn from(e: serde_json::Error) -> Self {
        BookError::Json(e)
    }
}

#[derive(Debug)]
pub enum MaskError {
    Io(std::io::Error),
    Json(serde_json::Error),
    BadPieceCode(u8),
}

impl fmt::Display for MaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaskError::Io(e) => write!(f, "zobrist mask I/O error: {e}"),
            MaskError::Json(e) => write!(f, "zobrist mask JSON error: {e}"),
            MaskError::BadPieceCode(c) => write!(f, "unknown piece code in mask file: {c}"),
        }
    }
}

impl std::error::Error for MaskError {}

impl From<std::io::Error> for MaskError {
    fn from(e: std::io::Error) -> Self {
        MaskError::Io(e)
    }
}

impl From<serde_json::Error> for MaskError {
    fn from(e: serde_json::Error) -> Self {
        MaskError::Json(e)
    }
}
