//! FEN parsing and serialization.

use crate::error::FenError;
use crate::position::state::Position;
use crate::types::{CastleRights, CastleSide, Color, Piece, PieceKind, Square};
use crate::zobrist::ZobristMask;

fn piece_from_fen_char(c: char) -> Option<Piece> {
    let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
    let kind = match c.to_ascii_lowercase() {
        'k' => PieceKind::King,
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        _ => return None,
    };
    Some(Piece::new(color, kind))
}

impl Position {
    pub fn load_fen(fen: &str) -> Result<Position, FenError> {
        Position::load_fen_with_mask(fen, ZobristMask::fallback())
    }

    pub fn load_fen_with_mask(fen: &str, mask: ZobristMask) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }
        let mut pos = Position::empty(mask);

        let mut rank = 7i32;
        let mut file = 0u8;
        for row in fields[0].split('/') {
            file = 0;
            for c in row.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as u8;
                } else if let Some(piece) = piece_from_fen_char(c) {
                    if rank < 0 || file >= 8 {
                        return Err(FenError::BadPlacement(fields[0].to_string()));
                    }
                    pos.set_piece(Square::new(rank as u8, file), piece);
                    file += 1;
                } else {
                    return Err(FenError::BadPlacement(fields[0].to_string()));
                }
            }
            if file != 8 {
                return Err(FenError::BadPlacement(fields[0].to_string()));
            }
            rank -= 1;
        }
        if rank != -1 {
            return Err(FenError::BadPlacement(fields[0].to_string()));
        }

        pos.side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(FenError::BadSideToMove(fields[1].to_string())),
        };

        let mut rights = CastleRights::none();
        if fields[2] != "-" {
            for c in fields[2].chars() {
                match c {
                    'K' => rights.set(Color::White, CastleSide::King, true),
                    'Q' => rights.set(Color::White, CastleSide::Queen, true),
                    'k' => rights.set(Color::Black, CastleSide::King, true),
                    'q' => rights.set(Color::Black, CastleSide::Queen, true),
                    _ => return Err(FenError::BadCastling(fields[2].to_string())),
                }
            }
        }
        pos.castling_rights = rights;

        pos.en_passant_target = if fields[3] == "-" {
            None
        } else {
            Some(parse_square(fields[3]).map_err(|_| FenError::BadEnPassant(fields[3].to_string()))?)
        };

        pos.half_moves = fields[4]
            .parse()
            .map_err(|_| FenError::BadHalfmoveClock(fields[4].to_string()))?;
        pos.full_moves = fields[5]
            .parse()
            .map_err(|_| FenError::BadFullmoveNumber(fields[5].to_string()))?;

        pos.zobrist = pos.recompute_zobrist();
        pos.rebuild_attack_maps();
        let king_sq = pos.kings[pos.side_to_move.index()];
        pos.in_check = pos.attack_map[pos.opponent().index()].direct.contains(king_sq);
        Ok(pos)
    }

    pub fn fen(&self) -> String {
        let mut placement = String::new();
        for rank in (0..8).rev() {
            let mut empties = 0u8;
            for file in 0..8 {
                match self.piece_at(Square::new(rank, file)) {
                    None => empties += 1,
                    Some(piece) => {
                        if empties > 0 {
                            placement.push_str(&empties.to_string());
                            empties = 0;
                        }
                        placement.push(piece.kind.fen_char(piece.color));
                    }
                }
            }
            if empties > 0 {
                placement.push_str(&empties.to_string());
            }
            if rank > 0 {
                placement.push('/');
            }
        }
        let stm = if self.side_to_move == Color::White { "w" } else { "b" };
        let ep = self
            .en_passant_target
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "{} {} {} {} {} {}",
            placement,
            stm,
            self.castling_rights.as_fen_str(),
            ep,
            self.half_moves,
            self.full_moves
        )
    }
}

fn parse_square(s: &str) -> Result<Square, ()> {
    let bytes = s.as_bytes();
    if bytes.len() != 2 {
        return Err(());
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(());
    }
    Ok(Square::new(rank - b'1', file - b'a'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startpos_round_trips() {
        let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
        let pos = Position::load_fen(fen).unwrap();
        assert_eq!(pos.fen(), fen);
    }

    #[test]
    fn arbitrary_midgame_fen_round_trips() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let pos = Position::load_fen(fen).unwrap();
        assert_eq!(pos.fen(), fen);
    }

    #[test]
    fn rejects_malformed_field_count() {
        assert!(matches!(
            Position::load_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -"),
            Err(FenError::WrongFieldCount { found: 5 })
        ));
    }

    #[test]
    fn rejects_malformed_placement() {
        assert!(Position::load_fen("xxxxxxxx/8/8/8/8/8/8/8 w - - 0 1").is_err());
    }
}
