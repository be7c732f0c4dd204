//! Pseudo-legal move generation and legal filtering, including the
//! pin-candidate shortcut that avoids make/unmake for most moves.

use crate::geometry::{self, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::types::Bitset;
use crate::position::state::Position;
use crate::types::{CastleSide, Color, Move, MoveList, PieceKind, Square};

const PROMOTION_KINDS: [PieceKind; 4] =
    [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

impl Position {
    /// All legal moves for the side to move. If `only_captures`, only
    /// capturing moves (including en-passant and capturing promotions) are
    /// returned.
    pub fn legal_moves(&mut self, only_captures: bool) -> MoveList {
        let (captures, non_captures) = self.generate_pseudo_legal();
        let mut result = MoveList::new();
        self.filter_legal(&captures, &mut result);
        if !only_captures {
            self.filter_legal(&non_captures, &mut result);
        }
        result
    }

    /// Splits legal moves into non-promotions and promotions, for UIs that
    /// need to prompt for a promotion piece.
    pub fn split_legal_moves(&mut self) -> (MoveList, MoveList) {
        let all = self.legal_moves(false);
        let mut non_promotions = MoveList::new();
        let mut promotions = MoveList::new();
        for &m in all.iter() {
            if m.promotion.is_some() {
                promotions.push(m);
            } else {
                non_promotions.push(m);
            }
        }
        (non_promotions, promotions)
    }

    fn filter_legal(&mut self, candidates: &MoveList, out: &mut MoveList) {
        let mover = self.side_to_move;
        let opponent = self.opponent();
        let in_check = self.in_check;

        for &mv in candidates.iter() {
            let piece = self.piece_at(mv.from).expect("pseudo-legal move from empty square");

            if mv.is_castle(piece.kind) {
                if self.castle_path_is_safe(mv, mover) {
                    out.push(mv);
                }
                continue;
            }

            if !in_check {
                if piece.kind == PieceKind::King {
                    if !self.attack_map[opponent.index()].direct.contains(mv.to) {
                        out.push(mv);
                    }
                    continue;
                }
                let is_en_passant =
                    piece.kind == PieceKind::Pawn && Some(mv.to) == self.en_passant_target;
                if !is_en_passant && !self.attack_map[opponent.index()].pin_candidates.contains(mv.from) {
                    out.push(mv);
                    continue;
                }
            }

            if self.probe_legal(mv, mover) {
                out.push(mv);
            }
        }
    }

    /// Applies `mv`, checks whether the mover's own king is left attacked,
    /// and unmakes. Used whenever the cheap shortcuts in `filter_legal`
    /// don't apply.
    fn probe_legal(&mut self, mv: Move, mover: Color) -> bool {
        self.make(mv);
        let king_sq = self.kings[mover.index()];
        let safe = !self.square_attacked_by(king_sq, mover.opposite());
        self.unmake();
        safe
    }

    fn castle_path_is_safe(&self, mv: Move, mover: Color) -> bool {
        let opponent = mover.opposite();
        let attacked = self.attack_map[opponent.index()].direct;
        let step: i8 = if mv.to.file() > mv.from.file() { 1 } else { -1 };
        let mut sq = mv.from;
        loop {
            if attacked.contains(sq) {
                return false;
            }
            if sq == mv.to {
                break;
            }
            sq = sq.offset(0, step).expect("castle path stays on back rank");
        }
        true
    }

    /// Generates pseudo-legal moves, split into `(captures, non_captures)`.
    pub fn generate_pseudo_legal(&self) -> (MoveList, MoveList) {
        let mut captures = MoveList::new();
        let mut non_captures = MoveList::new();
        let mover = self.side_to_move;

        for from in self.piece_loc[mover.index()].iter() {
            let piece = self.piece_at(from).unwrap();
            match piece.kind {
                PieceKind::Pawn => self.generate_pawn_moves(from, mover, &mut captures, &mut non_captures),
                PieceKind::Knight => {
                    self.generate_leaper_moves(from, mover, geometry::knight_attacks(from), &mut captures, &mut non_captures)
                }
                PieceKind::King => {
                    self.generate_leaper_moves(from, mover, geometry::king_attacks(from), &mut captures, &mut non_captures);
                    self.generate_castling_moves(from, mover, &mut non_captures);
                }
                PieceKind::Bishop => {
                    self.generate_sliding_moves(from, mover, &BISHOP_DIRECTIONS, &mut captures, &mut non_captures)
                }
                PieceKind::Rook => {
                    self.generate_sliding_moves(from, mover, &ROOK_DIRECTIONS, &mut captures, &mut non_captures)
                }
                PieceKind::Queen => {
                    self.generate_sliding_moves(from, mover, &QUEEN_DIRECTIONS, &mut captures, &mut non_captures)
                }
            }
        }
        (captures, non_captures)
    }

    fn generate_leaper_moves(
        &self,
        from: Square,
        mover: Color,
        targets: Bitset,
        captures: &mut MoveList,
        non_captures: &mut MoveList,
    ) {
        for to in targets.iter() {
            match self.piece_at(to) {
                None => non_captures.push(Move::new(from, to)),
                Some(occupant) if occupant.color != mover => captures.push(Move::new(from, to)),
                Some(_) => {}
            }
        }
    }

    fn generate_sliding_moves(
        &self,
        from: Square,
        mover: Color,
        directions: &[(i8, i8)],
        captures: &mut MoveList,
        non_captures: &mut MoveList,
    ) {
        for &(dr, df) in directions {
            let mut cur = from;
            while let Some(to) = cur.offset(dr, df) {
                cur = to;
                match self.piece_at(to) {
                    None => non_captures.push(Move::new(from, to)),
                    Some(occupant) => {
                        if occupant.color != mover {
                            captures.push(Move::new(from, to));
                        }
                        break;
                    }
                }
            }
        }
    }

    fn generate_pawn_moves(
        &self,
        from: Square,
        mover: Color,
        captures: &mut MoveList,
        non_captures: &mut MoveList,
    ) {
        let forward = geometry::pawn_forward(mover);
        let promo_rank = geometry::pawn_promotion_rank(mover);

        if let Some(one) = from.offset(forward, 0) {
            if self.piece_at(one).is_none() {
                self.push_pawn_move(from, one, promo_rank, non_captures);
                if from.rank() == geometry::pawn_start_rank(mover) {
                    if let Some(two) = from.offset(forward * 2, 0) {
                        if self.piece_at(two).is_none() {
                            non_captures.push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for file_delta in [-1i8, 1] {
            let Some(to) = from.offset(forward, file_delta) else { continue };
            if let Some(occupant) = self.piece_at(to) {
                if occupant.color != mover {
                    self.push_pawn_move(from, to, promo_rank, captures);
                }
            } else if Some(to) == self.en_passant_target {
                captures.push(Move::new(from, to));
            }
        }
    }

    fn push_pawn_move(&self, from: Square, to: Square, promo_rank: u8, list: &mut MoveList) {
        if to.rank() == promo_rank {
            for &kind in &PROMOTION_KINDS {
                list.push(Move::promoting(from, to, kind));
            }
        } else {
            list.push(Move::new(from, to));
        }
    }

    /// Counts leaf nodes of the legal-move tree to `depth`, the standard
    /// move-generator correctness check.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.legal_moves(false);
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for &mv in moves.iter() {
            self.commit_move(mv);
            nodes += self.perft(depth - 1);
            self.unmake_move(true);
        }
        nodes
    }

    fn generate_castling_moves(&self, from: Square, mover: Color, non_captures: &mut MoveList) {
        for side in [CastleSide::King, CastleSide::Queen] {
            if !self.castling_rights.has(mover, side) {
                continue;
            }
            let rank = from.rank();
            let (between, king_to): (&[u8], u8) = match side {
                CastleSide::King => (&[5, 6], 6),
                CastleSide::Queen => (&[1, 2, 3], 2),
            };
            if between
                .iter()
                .all(|&file| self.piece_at(Square::new(rank, file)).is_none())
            {
                non_captures.push(Move::new(from, Square::new(rank, king_to)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_piece_cannot_move_off_the_pin_line() {
        // White king e1, white rook on e2, black rook on e8 pinning it.
        let mut pos = Position::load_fen("4r2k/8/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
        let moves = pos.legal_moves(false);
        assert!(
            !moves.iter().any(|m| m.from == Square::new(1, 4) && m.from != m.to && m.to.file() != 4),
            "pinned rook must not step off the e-file"
        );
        assert!(
            moves.iter().any(|m| m.from == Square::new(1, 4) && m.to == Square::new(2, 4)),
            "pinned rook may still move along the pin line"
        );
    }

    #[test]
    fn king_in_check_must_resolve_it() {
        let mut pos = Position::load_fen("4k3/8/8/8/8/8/8/r3K3 w - - 0 1").unwrap();
        assert!(pos.in_check);
        let moves = pos.legal_moves(false);
        for &mv in moves.iter() {
            pos.commit_move(mv);
            let king_sq = pos.kings[Color::White.index()];
            assert!(!pos.attack_map[Color::Black.index()].direct.contains(king_sq));
            pos.unmake_move(true);
        }
    }

    #[test]
    fn en_passant_capture_is_generated_and_legal() {
        let mut pos = Position::load_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        let moves = pos.legal_moves(true);
        assert!(moves
            .iter()
            .any(|m| m.from == Square::new(4, 4) && m.to == Square::new(5, 3)));
    }
}
