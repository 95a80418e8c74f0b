//! The search step and the iterator created by
//! [`AhoCorasick::progressive_search()`].

use crate::state::OutputSet;
use crate::{AhoCorasick, DEAD_STATE_ID, ROOT_STATE_ID};

/// Holds the outputs where the search stopped as well as the index one past
/// the last matched code unit.
#[derive(Clone, Copy, Debug)]
pub struct SearchResult<'a, V> {
    outputs: &'a OutputSet<V>,
    last_index: usize,
}

impl<'a, V> SearchResult<'a, V> {
    /// The outputs co-located on the reporting state, including those that
    /// arrived through failure links. Several keywords ending at the same
    /// index surface together here.
    #[inline(always)]
    pub fn outputs(&self) -> &'a [V] {
        self.outputs.as_slice()
    }

    /// The index (exclusive) where the match ended, in code units.
    #[inline(always)]
    pub const fn last_index(&self) -> usize {
        self.last_index
    }
}

/// Iterator created by [`AhoCorasick::progressive_search()`].
///
/// Its state is exactly `(automaton, input, position, current state)`; each
/// call to `next()` runs until the next output-bearing state or the end of
/// the input.
pub struct ProgressiveSearch<'a, P, V> {
    pma: &'a AhoCorasick<V>,
    haystack: P,
    state_id: u32,
    pos: usize,
}

impl<'a, P, V> ProgressiveSearch<'a, P, V>
where
    P: AsRef<[u16]>,
{
    pub(crate) fn new(pma: &'a AhoCorasick<V>, haystack: P) -> Self {
        Self {
            pma,
            haystack,
            state_id: ROOT_STATE_ID,
            pos: 0,
        }
    }
}

impl<'a, P, V> Iterator for ProgressiveSearch<'a, P, V>
where
    P: AsRef<[u16]>,
{
    type Item = SearchResult<'a, V>;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let pma = self.pma;
        let haystack = self.haystack.as_ref();
        while self.pos < haystack.len() {
            self.state_id = pma.next_state(self.state_id, haystack, &mut self.pos);
            let outputs = &pma.state(self.state_id).outputs;
            if !outputs.is_empty() {
                return Some(SearchResult {
                    outputs,
                    last_index: self.pos,
                });
            }
        }
        None
    }
}

impl<V> AhoCorasick<V> {
    /// Consumes at least one code unit from `haystack` at `pos` and returns
    /// the state reached. Inside a fast path, returns [`DEAD_STATE_ID`] when
    /// the input runs out before the path is resolved; the dead state has no
    /// outputs, so the surrounding search terminates without a match.
    #[inline(always)]
    pub(crate) fn next_state(&self, state_id: u32, haystack: &[u16], pos: &mut usize) -> u32 {
        let state = self.state(state_id);
        let Some(fast_path) = &state.fast_path else {
            let c = haystack[*pos];
            *pos += 1;
            return self.follow_failure_transitions(state_id, c);
        };
        for (i, &expected) in fast_path.path.iter().enumerate() {
            if *pos == haystack.len() {
                return DEAD_STATE_ID;
            }
            let c = haystack[*pos];
            *pos += 1;
            if c != expected {
                // The chain state at offset i read a unit it has no edge
                // for; resume the failure walk from its pre-compression
                // failure target.
                return self.follow_failure_transitions(fast_path.transitions[i], c);
            }
        }
        fast_path.transitions[fast_path.path.len()]
    }

    #[inline(always)]
    fn follow_failure_transitions(&self, current: u32, c: u16) -> u32 {
        let mut current = current;
        loop {
            if let Some(next) = self.transition(current, c) {
                return next;
            }
            current = self.state(current).fail;
        }
    }
}
