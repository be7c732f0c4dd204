//! Attack map construction: for each color, the set of squares it attacks,
//! the enemy pieces it pins, and its pawn-attack squares.

use crate::geometry::{self, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use crate::position::state::{AttackMap, Position};
use crate::types::{Color, PieceKind, Square};

impl Position {
    /// Fresh (uncached) check of whether `sq` is attacked by `by_color`,
    /// computed directly from the live board. Used during move-legality
    /// probing, where the cached `attack_map` may be stale because it is
    /// only rebuilt on commit, not on every trial `make`.
    pub fn square_attacked_by(&self, sq: Square, by_color: Color) -> bool {
        for from in self.piece_loc[by_color.index()].iter() {
            let piece = self.piece_at(from).unwrap();
            let hits = match piece.kind {
                PieceKind::Pawn => {
                    let df = geometry::pawn_forward(by_color);
                    [-1i8, 1]
                        .into_iter()
                        .filter_map(|file_delta| from.offset(df, file_delta))
                        .any(|to| to == sq)
                }
                PieceKind::Knight => geometry::knight_attacks(from).contains(sq),
                PieceKind::King => geometry::king_attacks(from).contains(sq),
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    let directions: &[(i8, i8)] = match piece.kind {
                        PieceKind::Bishop => &BISHOP_DIRECTIONS,
                        PieceKind::Rook => &ROOK_DIRECTIONS,
                        PieceKind::Queen => &QUEEN_DIRECTIONS,
                        _ => unreachable!(),
                    };
                    directions.iter().any(|&(dr, df)| self.ray_hits(from, dr, df, sq))
                }
            };
            if hits {
                return true;
            }
        }
        false
    }

    fn ray_hits(&self, from: Square, dr: i8, df: i8, target: Square) -> bool {
        let mut cur = from;
        while let Some(next) = cur.offset(dr, df) {
            cur = next;
            if cur == target {
                return true;
            }
            if self.piece_at(cur).is_some() {
                return false;
            }
        }
        false
    }

    pub fn rebuild_attack_maps(&mut self) {
        self.attack_map[0] = self.compute_attack_map(Color::White);
        self.attack_map[1] = self.compute_attack_map(Color::Black);
    }

    fn compute_attack_map(&self, color: Color) -> AttackMap {
        let mut map = AttackMap::default();
        let enemy_king = self.kings[color.opposite().index()];

        for from in self.piece_loc[color.index()].iter() {
            let piece = self.piece_at(from).unwrap();
            match piece.kind {
                PieceKind::Pawn => {
                    let df = geometry::pawn_forward(color);
                    for file_delta in [-1i8, 1] {
                        if let Some(to) = from.offset(df, file_delta) {
                            map.direct.insert(to);
                            map.pawn_attacks.insert(to);
                        }
                    }
                }
                PieceKind::Knight => {
                    for to in geometry::knight_attacks(from).iter() {
                        map.direct.insert(to);
                    }
                }
                PieceKind::King => {
                    for to in geometry::king_attacks(from).iter() {
                        map.direct.insert(to);
                    }
                }
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                    let directions: &[(i8, i8)] = match piece.kind {
                        PieceKind::Bishop => &BISHOP_DIRECTIONS,
                        PieceKind::Rook => &ROOK_DIRECTIONS,
                        PieceKind::Queen => &QUEEN_DIRECTIONS,
                        _ => unreachable!(),
                    };
                    for &(dr, df) in directions {
                        self.walk_ray_for_attack_map(from, dr, df, color, enemy_king, &mut map);
                    }
                }
            }
        }
        map
    }

    /// Walk one ray, adding every traversed square to `direct` until a
    /// blocker is seen; after the first enemy blocker, keep walking only
    /// to detect a pin against `enemy_king` one square further along the
    /// same ray.
    fn walk_ray_for_attack_map(
        &self,
        from: Square,
        dr: i8,
        df: i8,
        color: Color,
        enemy_king: Square,
        map: &mut AttackMap,
    ) {
        let mut blocker: Option<Square> = None;
        let mut cur = from;
        loop {
            let Some(next) = cur.offset(dr, df) else { break };
            cur = next;
            match self.piece_at(cur) {
                None => {
                    if blocker.is_none() {
                        map.direct.insert(cur);
                    }
                }
                Some(occupant) => {
                    if blocker.is_none() {
                        map.direct.insert(cur);
                        if occupant.color == color {
                            break;
                        }
                        blocker = Some(cur);
                    } else {
                        if occupant.color == color {
                            break;
                        }
                        if cur == enemy_king {
                            map.pin_candidates.insert(blocker.unwrap());
                        }
                        break;
                    }
                }
            }
        }
    }
}
