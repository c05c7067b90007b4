//! Matchmaking pool: the entrants still eligible for further games.

use rand::seq::SliceRandom;
use rand::Rng;

/// Set of entrant ids not yet excluded from matchmaking.
///
/// Backed by an unordered member vector plus a position table, giving O(1)
/// removal (swap-remove) and O(1) uniform sampling. Within one tournament a
/// removal is permanent; removing an absent id is a no-op.
#[derive(Debug, Clone)]
pub struct MatchmakingPool {
    /// Active entrant ids, unordered.
    members: Vec<usize>,
    /// `positions[id]` is the index of `id` in `members`, `None` once removed.
    positions: Vec<Option<usize>>,
}

impl MatchmakingPool {
    /// Pool containing every entrant id in `0..entrants`.
    pub fn new(entrants: usize) -> Self {
        Self {
            members: (0..entrants).collect(),
            positions: (0..entrants).map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: usize) -> bool {
        self.positions.get(id).copied().flatten().is_some()
    }

    /// Remove `id` from the pool. Does nothing if it is already gone.
    pub fn remove(&mut self, id: usize) {
        let Some(pos) = self.positions.get(id).copied().flatten() else {
            return;
        };
        self.positions[id] = None;
        self.members.swap_remove(pos);
        if let Some(&moved) = self.members.get(pos) {
            self.positions[moved] = Some(pos);
        }
    }

    /// Draw a uniformly random member, skipping `excluding` if it is still
    /// in the pool. Returns `None` when no eligible opponent remains.
    pub fn pick_opponent<R: Rng>(&self, rng: &mut R, excluding: usize) -> Option<usize> {
        match self.positions.get(excluding).copied().flatten() {
            Some(own) => {
                let eligible = self.members.len() - 1;
                if eligible == 0 {
                    return None;
                }
                // draw from the n-1 eligible slots, shifting past our own
                let index = rng.gen_range(0..eligible);
                Some(self.members[if index >= own { index + 1 } else { index }])
            }
            None => self.members.choose(rng).copied(),
        }
    }
}

#[cfg(test)]
#[path = "pool_tests.rs"]
mod pool_tests;
