//! UCI long-algebraic move notation (`e2e4`, `e7e8q`). Purely lexical —
//! not SAN, and not validated against any position's legal moves.

use crate::error::NotationError;
use crate::types::{Move, PieceKind, Square};

pub fn parse_uci_move(s: &str) -> Result<Move, NotationError> {
    if s.len() < 4 {
        return Err(NotationError::TooShort(s.to_string()));
    }
    let bytes = s.as_bytes();
    let from = parse_square(&s[0..2]).ok_or_else(|| NotationError::BadSquare(s[0..2].to_string()))?;
    let to = parse_square(&s[2..4]).ok_or_else(|| NotationError::BadSquare(s[2..4].to_string()))?;
    let promotion = if bytes.len() > 4 {
        let c = bytes[4] as char;
        Some(PieceKind::from_promotion_char(c).ok_or(NotationError::BadPromotion(c))?)
    } else {
        None
    };
    Ok(Move { from, to, promotion })
}

pub fn format_uci_move(mv: Move) -> String {
    mv.to_string()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_plain_move() {
        let mv = parse_uci_move("e2e4").unwrap();
        assert_eq!(format_uci_move(mv), "e2e4");
    }

    #[test]
    fn round_trips_promotion() {
        let mv = parse_uci_move("e7e8q").unwrap();
        assert_eq!(mv.promotion, Some(PieceKind::Queen));
        assert_eq!(format_uci_move(mv), "e7e8q");
    }

    #[test]
    fn rejects_short_input() {
        assert!(parse_uci_move("e2").is_err());
    }

    #[test]
    fn rejects_bad_square() {
        assert!(parse_uci_move("i2e4").is_err());
    }
}
