//! The two `prepare()` passes: failure-link construction and path
//! compression.

use crate::state::FastPath;
use crate::{AhoCorasick, ROOT_STATE_ID};

impl<V> AhoCorasick<V>
where
    V: Clone + PartialEq,
{
    /// Breadth-first construction of the failure links of all states except
    /// the root, propagating outputs along the way. Order dependent: a
    /// state's failure link must be final before its children are processed.
    pub(crate) fn build_failure_links(&mut self) {
        let mut q = Vec::with_capacity(self.states.len());
        // The root absorbs every failure by convention, which also excludes
        // it from compression.
        self.states[ROOT_STATE_ID as usize].incoming_fail = true;
        for (_, child_id) in self.states[ROOT_STATE_ID as usize].edges.entries() {
            self.states[child_id as usize].fail = ROOT_STATE_ID;
            q.push(child_id);
        }

        let mut qi = 0;
        while qi < q.len() {
            let state_id = q[qi];
            qi += 1;
            for c in self.states[state_id as usize].keys() {
                let Some(child_id) = self.states[state_id as usize].child(c) else {
                    continue;
                };
                q.push(child_id);
                let mut fail_id = self.states[state_id as usize].fail;
                let new_fail_id = loop {
                    // The root self-loop in transition() terminates the walk.
                    if let Some(next) = self.transition(fail_id, c) {
                        break next;
                    }
                    fail_id = self.states[fail_id as usize].fail;
                };
                self.states[new_fail_id as usize].incoming_fail = true;
                self.states[child_id as usize].fail = new_fail_id;
                let propagated = self.states[new_fail_id as usize].outputs.clone();
                self.states[child_id as usize].outputs.merge(&propagated);
            }
        }
    }

    /// Depth-first walk collapsing compressible chains into fast paths.
    ///
    /// A chain of k states contributes k code units and the pre-compression
    /// failure target of each member; the terminal state is appended as the
    /// final transition. Singleton chains gain nothing and are left alone.
    /// Interior chain states stay in the arena but become unreachable.
    pub(crate) fn compress_paths(&mut self) {
        let mut stack = vec![ROOT_STATE_ID];
        while let Some(state_id) = stack.pop() {
            if self.is_compressible(state_id) {
                let mut path = vec![];
                let mut transitions = vec![];
                let mut next = state_id;
                loop {
                    let state = &self.states[next as usize];
                    transitions.push(state.fail);
                    let (c, child_id) = state.edges.entries()[0];
                    path.push(c);
                    next = child_id;
                    if !self.is_compressible(next) {
                        break;
                    }
                }
                if path.len() > 1 {
                    transitions.push(next);
                    let state = &mut self.states[state_id as usize];
                    state.fast_path = Some(FastPath { path, transitions });
                    state.edges.clear();
                }
                stack.push(next);
            } else {
                for child_id in self.states[state_id as usize].edges.values() {
                    stack.push(child_id);
                }
            }
        }
    }

    fn is_compressible(&self, state_id: u32) -> bool {
        let state = &self.states[state_id as usize];
        state_id != ROOT_STATE_ID
            && state.edges.len() == 1
            && state.outputs.is_empty()
            && !state.incoming_fail
    }
}
