//! Character-keyed mapping from a state to its children.

use rustc_hash::FxHashMap;

/// Sparse goto edges of a single state.
///
/// The map typically holds one or two entries; states near the root may fan
/// out much wider. `FxHashMap` keeps `get`/`put` O(1) expected for both
/// shapes.
#[derive(Default)]
pub(crate) struct SparseEdgeList {
    states: FxHashMap<u16, u32>,
}

impl SparseEdgeList {
    pub(crate) fn new() -> Self {
        Self {
            states: FxHashMap::default(),
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, c: u16) -> Option<u32> {
        self.states.get(&c).copied()
    }

    pub(crate) fn put(&mut self, c: u16, state_id: u32) {
        self.states.insert(c, state_id);
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Unordered snapshot of the outgoing code units.
    pub(crate) fn keys(&self) -> Vec<u16> {
        self.states.keys().copied().collect()
    }

    /// Unordered snapshot of the child state ids.
    pub(crate) fn values(&self) -> Vec<u32> {
        self.states.values().copied().collect()
    }

    /// Unordered snapshot of the `(code unit, child id)` pairs. Used where
    /// the state arena must be mutated while a state's edges are walked.
    pub(crate) fn entries(&self) -> Vec<(u16, u32)> {
        self.states.iter().map(|(&c, &s)| (c, s)).collect()
    }

    /// Drops all edges, releasing their storage.
    pub(crate) fn clear(&mut self) {
        self.states = FxHashMap::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get() {
        let mut edges = SparseEdgeList::new();
        assert_eq!(None, edges.get(b'a'.into()));
        edges.put(b'a'.into(), 7);
        edges.put(b'b'.into(), 8);
        assert_eq!(Some(7), edges.get(b'a'.into()));
        assert_eq!(Some(8), edges.get(b'b'.into()));
        assert_eq!(2, edges.len());
    }

    #[test]
    fn test_snapshots() {
        let mut edges = SparseEdgeList::new();
        edges.put(b'x'.into(), 1);
        edges.put(b'y'.into(), 2);
        let mut keys = edges.keys();
        keys.sort_unstable();
        assert_eq!(vec![u16::from(b'x'), u16::from(b'y')], keys);
        let mut values = edges.values();
        values.sort_unstable();
        assert_eq!(vec![1, 2], values);
        let mut entries = edges.entries();
        entries.sort_unstable();
        assert_eq!(vec![(b'x'.into(), 1), (b'y'.into(), 2)], entries);
        edges.clear();
        assert_eq!(0, edges.len());
    }
}
