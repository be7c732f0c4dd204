//! A fixed-capacity transposition table with FIFO eviction. Entries are
//! written only for fully searched nodes — never from a beta-cutoff mid
//! loop — and store the search depth together with the resulting score
//! and best move, with no bound-type distinction.

use std::collections::HashMap;
use std::collections::VecDeque;

use crate::types::Move;

const DEFAULT_CAPACITY: usize = 500_000;

#[derive(Debug, Clone, Copy)]
pub struct TtEntry {
    pub depth: u8,
    pub score: i32,
    pub best_move: Option<Move>,
}

pub struct TranspositionTable {
    capacity: usize,
    entries: HashMap<u64, TtEntry>,
    insertion_order: VecDeque<u64>,
}

impl TranspositionTable {
    pub fn new() -> TranspositionTable {
        TranspositionTable::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> TranspositionTable {
        TranspositionTable {
            capacity,
            entries: HashMap::with_capacity(capacity.min(1 << 16)),
            insertion_order: VecDeque::new(),
        }
    }

    pub fn probe(&self, key: u64) -> Option<&TtEntry> {
        self.entries.get(&key)
    }

    pub fn store(&mut self, key: u64, entry: TtEntry) {
        if !self.entries.contains_key(&key) {
            if self.insertion_order.len() >= self.capacity {
                if let Some(oldest) = self.insertion_order.pop_front() {
                    self.entries.remove(&oldest);
                }
            }
            self.insertion_order.push_back(key);
        }
        self.entries.insert(key, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.insertion_order.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new()
    }
}
