//! Make/commit/unmake: applying a move to the position and reversing it
//! exactly via a journal of `UndoRecord`s.

use crate::position::state::{
    GameOverCause, GameResult, Position, RepetitionAdjustment, Score, UndoRecord,
};
use crate::types::{CastleSide, Color, Move, Piece, PieceKind, Square};

/// The four squares a rook starts on, and the king squares, used to derive
/// castling-right loss mechanically rather than from a transcribed table.
fn rook_home(color: Color, side: CastleSide) -> Square {
    let rank = match color {
        Color::White => 0,
        Color::Black => 7,
    };
    let file = match side {
        CastleSide::King => 7,
        CastleSide::Queen => 0,
    };
    Square::new(rank, file)
}

impl Position {
    /// Applies `mv` and pushes an undo record. Does not flip side to move,
    /// rebuild attack maps, or evaluate terminal conditions — callers that
    /// want a fully committed move should use [`Position::commit_move`].
    pub fn make(&mut self, mv: Move) {
        let mover_color = self.side_to_move;
        let moved_piece = self.piece_at(mv.from).expect("make: no piece on from-square");

        let prev_en_passant = self.en_passant_target;
        let prev_castling = self.castling_rights;
        let prev_half_moves = self.half_moves;

        let is_en_passant = moved_piece.kind == PieceKind::Pawn
            && Some(mv.to) == self.en_passant_target
            && self.piece_at(mv.to).is_none();

        let captured = if is_en_passant {
            let captured_sq = Square::new(mv.from.rank(), mv.to.file());
            let captured_piece = self.piece_at(captured_sq).expect("en passant victim missing");
            self.clear_square(captured_sq);
            Some((captured_sq, captured_piece))
        } else {
            self.piece_at(mv.to).map(|p| (mv.to, p))
        };

        let rook_move = if mv.is_castle(moved_piece.kind) {
            let side = if mv.to.file() > mv.from.file() { CastleSide::King } else { CastleSide::Queen };
            let rook_from = rook_home(mover_color, side);
            let rook_to = Square::new(mv.from.rank(), (mv.from.file() + mv.to.file()) / 2);
            let rook = self.piece_at(rook_from).expect("castling rook missing");
            self.clear_square(rook_from);
            self.set_piece(rook_to, rook);
            Some((rook_from, rook_to))
        } else {
            None
        };

        self.clear_square(mv.from);
        let placed_kind = mv.promotion.unwrap_or(moved_piece.kind);
        self.set_piece(mv.to, Piece::new(mover_color, placed_kind));

        self.en_passant_target = if moved_piece.kind == PieceKind::Pawn
            && mv.from.rank().abs_diff(mv.to.rank()) == 2
        {
            Some(Square::new((mv.from.rank() + mv.to.rank()) / 2, mv.from.file()))
        } else {
            None
        };

        self.update_castling_rights(mv, moved_piece);

        self.half_moves = if moved_piece.kind == PieceKind::Pawn || captured.is_some() {
            0
        } else {
            self.half_moves + 1
        };

        self.undo_log.push(UndoRecord {
            mv,
            moved_piece,
            captured,
            rook_move,
            prev_en_passant,
            prev_castling,
            prev_half_moves,
            was_promotion: mv.promotion.is_some(),
            repetition_adjustment: RepetitionAdjustment::None,
        });
    }

    /// Derives castling-right loss from the move's endpoints against the
    /// four fixed rook home squares, rather than from any transcribed
    /// per-move table.
    fn update_castling_rights(&mut self, mv: Move, moved_piece: Piece) {
        if moved_piece.kind == PieceKind::King {
            self.castling_rights.clear_color(moved_piece.color);
        }
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::King, CastleSide::Queen] {
                let home = rook_home(color, side);
                if mv.from == home || mv.to == home {
                    self.castling_rights.set(color, side, false);
                }
            }
        }
    }

    /// Pops and applies the top journal entry, returning it so callers that
    /// also need to reverse a `detect_game_over` side effect (the
    /// repetition-map adjustment) can do so before it's dropped.
    pub fn unmake(&mut self) -> UndoRecord {
        let record = self.undo_log.pop().expect("unmake with empty journal");
        let mover_color = record.moved_piece.color;

        self.clear_square(record.mv.to);
        self.set_piece(record.mv.from, record.moved_piece);

        if let Some((rook_from, rook_to)) = record.rook_move {
            let rook = self.piece_at(rook_to).expect("castled rook missing on unmake");
            self.clear_square(rook_to);
            self.set_piece(rook_from, rook);
        }

        if let Some((sq, piece)) = record.captured {
            self.set_piece(sq, piece);
        }

        if record.moved_piece.kind == PieceKind::King {
            self.kings[mover_color.index()] = record.mv.from;
        }

        self.en_passant_target = record.prev_en_passant;
        self.castling_rights = record.prev_castling;
        self.half_moves = record.prev_half_moves;

        record
    }

    /// Makes `mv`, flips the side to move, and recomputes all derived
    /// state: attack maps, hash, check status, and terminal-condition
    /// detection. Returns the set of squares whose contents changed.
    pub fn commit_move(&mut self, mv: Move) -> Vec<Square> {
        let moved_piece = self.piece_at(mv.from).expect("commit_move: no piece on from-square");
        let mover = self.side_to_move;
        let was_reversible = moved_piece.kind != PieceKind::Pawn && self.piece_at(mv.to).is_none();

        self.make(mv);

        let mut changed = vec![mv.from, mv.to];
        if let Some((rook_from, rook_to)) = self.undo_log.last().unwrap().rook_move {
            changed.push(rook_from);
            changed.push(rook_to);
        }
        if let Some((sq, _)) = self.undo_log.last().unwrap().captured {
            if sq != mv.to {
                changed.push(sq);
            }
        }

        if mover == Color::Black {
            self.full_moves += 1;
        }

        self.side_to_move = self.side_to_move.opposite();
        self.zobrist = self.recompute_zobrist();
        self.rebuild_attack_maps();
        let king_sq = self.kings[self.side_to_move.index()];
        self.in_check = self.attack_map[self.opponent().index()].direct.contains(king_sq);

        let (game_over, repetition_adjustment) = self.detect_game_over(was_reversible);
        self.game_over = game_over;
        self.undo_log.last_mut().unwrap().repetition_adjustment = repetition_adjustment;

        changed
    }

    pub fn unmake_move(&mut self, committed: bool) {
        let record = self.unmake();
        if committed {
            self.side_to_move = self.side_to_move.opposite();
        }

        match record.repetition_adjustment {
            RepetitionAdjustment::None => {}
            RepetitionAdjustment::Incremented(hash) => {
                if let Some(count) = self.repetitions.get_mut(&hash) {
                    *count -= 1;
                    if *count == 0 {
                        self.repetitions.remove(&hash);
                    }
                }
            }
            RepetitionAdjustment::Cleared(previous) => {
                self.repetitions = previous;
            }
        }

        self.zobrist = self.recompute_zobrist();
        self.rebuild_attack_maps();
        let king_sq = self.kings[self.side_to_move.index()];
        self.in_check = self.attack_map[self.opponent().index()].direct.contains(king_sq);
        self.game_over = None;
    }

    /// Evaluates terminal conditions for the position just reached by
    /// `commit_move`, mutating `self.repetitions` at most once along the
    /// way. Returns both the result (if any) and exactly what changed in
    /// the repetition map, so the caller can journal it for `unmake_move`.
    fn detect_game_over(
        &mut self,
        was_reversible: bool,
    ) -> (Option<GameResult>, RepetitionAdjustment) {
        if self.legal_moves(false).is_empty() {
            let result = if self.in_check {
                let winner = self.side_to_move.opposite();
                GameResult {
                    score: if winner == Color::White { Score::WhiteWins } else { Score::BlackWins },
                    cause: GameOverCause::Checkmate,
                }
            } else {
                GameResult { score: Score::Draw, cause: GameOverCause::Stalemate }
            };
            return (Some(result), RepetitionAdjustment::None);
        }

        if self.half_moves > 99 {
            return (
                Some(GameResult { score: Score::Draw, cause: GameOverCause::FiftyMoveRule }),
                RepetitionAdjustment::None,
            );
        }

        let mut result = None;
        let adjustment = if was_reversible {
            let count = self.repetitions.entry(self.zobrist).or_insert(0);
            *count += 1;
            if *count > 2 {
                result = Some(GameResult {
                    score: Score::Draw,
                    cause: GameOverCause::ThreefoldRepetition,
                });
            }
            RepetitionAdjustment::Incremented(self.zobrist)
        } else {
            let previous = std::mem::take(&mut self.repetitions);
            RepetitionAdjustment::Cleared(previous)
        };

        if result.is_none() && self.is_insufficient_material() {
            result = Some(GameResult {
                score: Score::Draw,
                cause: GameOverCause::InsufficientMaterial,
            });
        }

        (result, adjustment)
    }
}
