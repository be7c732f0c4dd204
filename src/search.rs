//! Iterative-deepening negamax search with alpha-beta pruning, quiescence,
//! check/promotion extensions, killer-move ordering, and a transposition
//! table. Deliberately free of null-move pruning, late-move reductions,
//! futility pruning, and internal iterative deepening — none of those
//! extra heuristics are part of this search's control flow.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::book::OpeningBook;
use crate::eval::evaluate;
use crate::ordering::{order_moves, KillerMoves};
use crate::position::{GameOverCause, Position};
use crate::transposition_table::{TranspositionTable, TtEntry};
use crate::types::{Move, PieceKind};

const MATE_SCORE: i32 = 1_000_000;
const MAX_EXTENSIONS: u8 = 8;

/// Caller-supplied limits for one `search()` call. Configuration, not
/// engine state: a fresh `SearchLimits` is expected per call.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub deadline: Duration,
    pub max_depth: Option<u8>,
    pub max_nodes: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits { deadline: Duration::from_secs(3), max_depth: None, max_nodes: None }
    }
}

pub struct Search {
    tt: TranspositionTable,
    killers: KillerMoves,
    book: OpeningBook,
    nodes: u64,
    deadline_at: Instant,
    limits: SearchLimits,
    stop: bool,
}

impl Search {
    pub fn new() -> Search {
        Search {
            tt: TranspositionTable::new(),
            killers: KillerMoves::new(),
            book: OpeningBook::empty(),
            nodes: 0,
            deadline_at: Instant::now(),
            limits: SearchLimits::default(),
            stop: false,
        }
    }

    pub fn with_book(book: OpeningBook) -> Search {
        let mut s = Search::new();
        s.book = book;
        s
    }

    pub fn node_count(&self) -> u64 {
        self.nodes
    }

    /// Picks a move for `pos`'s side to move: a book move if one applies,
    /// otherwise the best move found by iterative deepening within
    /// `limits`.
    pub fn search(&mut self, pos: &mut Position, limits: SearchLimits) -> Option<Move> {
        if let Some(book_move) = self.book.probe(pos.zobrist, pos.full_moves) {
            debug!("book move {book_move} for hash {:#x}", pos.zobrist);
            return Some(book_move);
        }

        self.limits = limits;
        self.deadline_at = Instant::now() + limits.deadline;
        self.nodes = 0;
        self.stop = false;
        self.killers.clear();

        let mut best_move = None;
        let mut depth: u8 = 1;
        loop {
            if let Some(max_depth) = limits.max_depth {
                if depth > max_depth {
                    break;
                }
            }
            let (score, mv) = self.negamax(pos, depth, -MATE_SCORE * 2, MATE_SCORE * 2, best_move, 0);
            if self.stop {
                break;
            }
            if mv.is_some() {
                best_move = mv;
            }
            info!("depth {depth} score {score} nodes {} best {:?}", self.nodes, best_move);
            if Instant::now() >= self.deadline_at {
                break;
            }
            depth += 1;
        }
        best_move
    }

    fn time_up(&mut self) -> bool {
        if self.stop {
            return true;
        }
        if let Some(max_nodes) = self.limits.max_nodes {
            if self.nodes >= max_nodes {
                self.stop = true;
                return true;
            }
        }
        if Instant::now() >= self.deadline_at {
            self.stop = true;
            return true;
        }
        false
    }

    fn negamax(
        &mut self,
        pos: &mut Position,
        depth: u8,
        mut alpha: i32,
        beta: i32,
        first_move: Option<Move>,
        extensions_used: u8,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if let Some(entry) = self.tt.probe(pos.zobrist) {
            if entry.depth >= depth {
                return (entry.score, entry.best_move);
            }
        }

        if let Some(result) = pos.game_over {
            if result.cause != GameOverCause::Checkmate {
                return (0, None);
            }
        }

        if depth == 0 {
            return (self.quiescence(pos, alpha, beta), None);
        }

        let mut moves = pos.legal_moves(false);
        if moves.is_empty() {
            return if pos.in_check { (-(MATE_SCORE + depth as i32), None) } else { (0, None) };
        }

        order_moves(pos, &mut moves, &self.killers, first_move);

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for &mv in moves.iter() {
            if self.time_up() {
                break;
            }

            let about_to_promote = pos.piece_at(mv.from).map(|p| p.kind) == Some(PieceKind::Pawn)
                && (mv.to.rank() == 6 || mv.to.rank() == 1);

            pos.commit_move(mv);
            let gives_check = pos.in_check;
            let ext = if (gives_check || about_to_promote) && extensions_used < MAX_EXTENSIONS {
                1
            } else {
                0
            };
            let (child_score, _) =
                self.negamax(pos, depth - 1 + ext, -beta, -alpha, None, extensions_used + ext);
            let score = -child_score;
            pos.unmake_move(true);

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            if score > alpha {
                alpha = score;
            }
            if alpha >= beta {
                self.killers.record(mv);
                return (beta, None);
            }
        }

        self.tt.store(pos.zobrist, TtEntry { depth, score: alpha, best_move });
        (alpha, best_move)
    }

    fn quiescence(&mut self, pos: &mut Position, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        let stand_pat = evaluate(pos);
        if stand_pat >= beta {
            return beta;
        }
        if stand_pat > alpha {
            alpha = stand_pat;
        }

        let mut moves = pos.legal_moves(true);
        if moves.is_empty() {
            return alpha;
        }
        order_moves(pos, &mut moves, &self.killers, None);

        for &mv in moves.iter() {
            if self.time_up() {
                break;
            }
            pos.commit_move(mv);
            let score = -self.quiescence(pos, -beta, -alpha);
            pos.unmake_move(true);

            if score >= beta {
                return beta;
            }
            if score > alpha {
                alpha = score;
            }
        }
        alpha
    }
}

impl Default for Search {
    fn default() -> Self {
        Search::new()
    }
}

