//! # Ahopath: Path-Compressed Aho-Corasick
//!
//! An implementation of the [Aho-Corasick] string searching automaton over
//! UTF-16 code units, augmented with a simplified variant of the
//! path-compression optimization of Tuck et al. (2004): chains of
//! single-child, output-free states with no incoming failure links are
//! collapsed into an inline fast path with pre-resolved failure
//! destinations.
//!
//! Keywords are added one at a time, each with an associated output value.
//! Once [`prepare()`](AhoCorasick::prepare) freezes the automaton, a single
//! linear pass over an input reports every occurrence of every keyword,
//! either as a lazy stream of [`SearchResult`]s or as a post-processed list
//! of [`OutputResult`]s: sorted, optionally non-overlapping, optionally
//! restricted to token boundaries.
//!
//! [Aho-Corasick]: https://dl.acm.org/doi/10.1145/360825.360855
//!
//! # Examples
//!
//! ```
//! use ahopath::AhoCorasick;
//!
//! let mut tree = AhoCorasick::<String>::builder().build();
//! tree.add_keyword("he").unwrap();
//! tree.add_keyword("she").unwrap();
//! tree.add_keyword("his").unwrap();
//! tree.add_keyword("hers").unwrap();
//! tree.prepare().unwrap();
//!
//! let results = tree.complete_search("ushers", true, false).unwrap();
//! let spans: Vec<_> = results
//!     .iter()
//!     .map(|r| (r.output().as_str(), r.start_index(), r.end_index()))
//!     .collect();
//! assert_eq!(vec![("she", 1, 4), ("he", 2, 4), ("hers", 2, 6)], spans);
//! ```

mod builder;
mod edge_list;
pub mod errors;
mod iter;
mod postprocess;
mod prepare;
mod state;
mod tokenizer;

#[cfg(test)]
mod tests_random;

pub use builder::AhoCorasickBuilder;
pub use errors::{AhopathError, TokenizerError};
pub use iter::{ProgressiveSearch, SearchResult};
pub use postprocess::{OutputResult, OutputSizeCalculator, StringOutputSizeCalculator};
pub use tokenizer::{
    StandardTokenizer, StandardTokenizerFactory, TokenSpans, Tokenizer, TokenizerFactory,
};

use errors::Result;
use state::State;

// The root state id.
pub(crate) const ROOT_STATE_ID: u32 = 0;
// The dead state id, reported when the input runs out inside a fast path.
pub(crate) const DEAD_STATE_ID: u32 = 1;

/// Multi-pattern match automaton implemented with the Aho-Corasick algorithm
/// and compressed fast paths.
///
/// The automaton has two lifecycle phases. Until [`prepare()`](Self::prepare)
/// is called it is mutable: keywords may be [`add`](Self::add)ed and searches
/// fail with [`AhopathError::NotPrepared`]. Afterwards it is frozen: adding
/// fails with [`AhopathError::AlreadyPrepared`] and searches are read-only,
/// so a prepared automaton may be shared across threads, each carrying its
/// own search iterator.
///
/// All state cross-references (goto edges, failure links, fast-path
/// transitions) are indices into one arena owned by the automaton.
pub struct AhoCorasick<V> {
    states: Vec<State<V>>,
    prepared: bool,
    output_size_calculator: Box<dyn OutputSizeCalculator<V>>,
    tokenizer_factory: Box<dyn TokenizerFactory>,
}

impl<V: AsRef<str>> AhoCorasick<V> {
    /// Creates a builder with the default collaborators:
    /// [`StringOutputSizeCalculator`] and [`StandardTokenizerFactory`].
    ///
    /// Output types that are not strings must start from
    /// [`AhoCorasickBuilder::with_output_size_calculator`] instead.
    pub fn builder() -> AhoCorasickBuilder<V> {
        AhoCorasickBuilder::new()
    }
}

impl<V> AhoCorasick<V> {
    pub(crate) fn with_collaborators(
        output_size_calculator: Box<dyn OutputSizeCalculator<V>>,
        tokenizer_factory: Box<dyn TokenizerFactory>,
    ) -> Self {
        Self {
            states: vec![State::new(0), State::new(0)], // (root, dead)
            prepared: false,
            output_size_calculator,
            tokenizer_factory,
        }
    }

    #[inline(always)]
    pub(crate) fn state(&self, state_id: u32) -> &State<V> {
        &self.states[state_id as usize]
    }

    /// Goto with the root self-loop: when `state_id` is the root and no
    /// child exists on `c`, the root maps to itself. This totality is what
    /// terminates the failure walks.
    #[inline(always)]
    pub(crate) fn transition(&self, state_id: u32, c: u16) -> Option<u32> {
        match self.state(state_id).child(c) {
            Some(next) => Some(next),
            None if state_id == ROOT_STATE_ID => Some(ROOT_STATE_ID),
            None => None,
        }
    }
}

impl<V> AhoCorasick<V>
where
    V: Clone + PartialEq,
{
    /// Adds a new keyword with the keyword itself as the output. During
    /// search, if the keyword is matched, the keyword will be one of the
    /// elements in [`SearchResult::outputs()`].
    ///
    /// # Errors
    ///
    /// See [`add()`](Self::add).
    pub fn add_keyword(&mut self, keyword: &str) -> Result<()>
    where
        V: for<'a> From<&'a str>,
    {
        self.add(keyword, V::from(keyword))
    }

    /// Adds a new keyword with the given output. During search, if the
    /// keyword is matched, `output` will be one of the elements in
    /// [`SearchResult::outputs()`].
    ///
    /// Adding the same `(keyword, output)` pair twice is equivalent to
    /// adding it once; the same keyword may carry several distinct outputs.
    ///
    /// # Errors
    ///
    /// - [`AhopathError::AlreadyPrepared`] when [`prepare()`](Self::prepare)
    ///   has already been called.
    /// - [`AhopathError::InvalidArgument`] when `keyword` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahopath::AhoCorasick;
    ///
    /// let mut tree = AhoCorasick::<String>::builder().build();
    /// tree.add("madrid", "a city".to_string()).unwrap();
    /// assert!(tree.add("", "nothing".to_string()).is_err());
    /// ```
    pub fn add(&mut self, keyword: &str, output: V) -> Result<()> {
        if self.prepared {
            return Err(AhopathError::AlreadyPrepared);
        }
        if keyword.is_empty() {
            return Err(AhopathError::invalid_argument(
                "keyword",
                "must not be empty",
            ));
        }
        let units: Vec<u16> = keyword.encode_utf16().collect();
        let last = self.extend_all(ROOT_STATE_ID, &units)?;
        self.states[last as usize].add_output(output);
        Ok(())
    }

    /// Prepares the automaton for searching: builds the failure links,
    /// propagates outputs along them, and compresses eligible chains into
    /// fast paths. Must be called exactly once, before any searching.
    ///
    /// # Errors
    ///
    /// [`AhopathError::AlreadyPrepared`] is returned on a second call.
    pub fn prepare(&mut self) -> Result<()> {
        if self.prepared {
            return Err(AhopathError::AlreadyPrepared);
        }
        self.build_failure_links();
        self.compress_paths();
        self.prepared = true;
        Ok(())
    }

    /// Starts a new search and returns a lazy iterator of [`SearchResult`]s.
    ///
    /// Each yielded result carries every output ending at its `last_index`,
    /// including outputs that arrived through failure links; `last_index`
    /// values are strictly increasing across the stream. The iterator is
    /// purely synchronous and restartable only by constructing a fresh one.
    ///
    /// # Errors
    ///
    /// [`AhopathError::NotPrepared`] is returned when
    /// [`prepare()`](Self::prepare) has not been called yet.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahopath::AhoCorasick;
    ///
    /// let mut tree = AhoCorasick::<String>::builder().build();
    /// tree.add_keyword("x").unwrap();
    /// tree.add_keyword("xx").unwrap();
    /// tree.prepare().unwrap();
    ///
    /// let mut it = tree.progressive_search("xx").unwrap();
    ///
    /// let r = it.next().unwrap();
    /// assert_eq!((&["x".to_string()][..], 1), (r.outputs(), r.last_index()));
    ///
    /// let r = it.next().unwrap();
    /// assert_eq!(
    ///     (&["xx".to_string(), "x".to_string()][..], 2),
    ///     (r.outputs(), r.last_index()),
    /// );
    ///
    /// assert!(it.next().is_none());
    /// ```
    pub fn progressive_search(&self, input: &str) -> Result<ProgressiveSearch<'_, Vec<u16>, V>> {
        if !self.prepared {
            return Err(AhopathError::NotPrepared);
        }
        Ok(ProgressiveSearch::new(self, input.encode_utf16().collect()))
    }

    /// Performs a search over the input text and returns all the
    /// [`OutputResult`]s, ordered by start position (ascending, stable with
    /// respect to emission order).
    ///
    /// When `allow_overlapping` is false, overlapping results are reduced to
    /// the dominant ones: leftmost first, then longest. When `only_tokens`
    /// is true, results whose span does not both begin at a token start and
    /// end at a token end are dropped; token boundaries come from the
    /// configured [`TokenizerFactory`].
    ///
    /// # Errors
    ///
    /// - [`AhopathError::NotPrepared`] when [`prepare()`](Self::prepare) has
    ///   not been called.
    /// - [`AhopathError::Tokenizer`] when the tokenizer fails.
    /// - [`AhopathError::InvalidArgument`] when the output size calculator
    ///   reports a size larger than a match's end index.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahopath::AhoCorasick;
    ///
    /// let mut tree = AhoCorasick::<String>::builder().build();
    /// tree.add_keyword("hello").unwrap();
    /// tree.add_keyword("world").unwrap();
    /// tree.prepare().unwrap();
    ///
    /// let results = tree.complete_search("helloworld", false, false).unwrap();
    /// let spans: Vec<_> = results
    ///     .iter()
    ///     .map(|r| (r.output().as_str(), r.start_index(), r.end_index()))
    ///     .collect();
    /// assert_eq!(vec![("hello", 0, 5), ("world", 5, 10)], spans);
    /// ```
    pub fn complete_search(
        &self,
        input: &str,
        allow_overlapping: bool,
        only_tokens: bool,
    ) -> Result<Vec<OutputResult<V>>> {
        self.complete_search_with(input, allow_overlapping, only_tokens, None)
    }

    /// Like [`complete_search()`](Self::complete_search), but reuses a
    /// caller-supplied tokenizer instead of creating one through the
    /// factory. Useful for recycling tokenizer objects across searches.
    pub fn complete_search_with(
        &self,
        input: &str,
        allow_overlapping: bool,
        only_tokens: bool,
        tokenizer: Option<&mut dyn Tokenizer>,
    ) -> Result<Vec<OutputResult<V>>> {
        if !self.prepared {
            return Err(AhopathError::NotPrepared);
        }
        let units: Vec<u16> = input.encode_utf16().collect();
        let mut results = self.recollect_output_results(&units, only_tokens, tokenizer)?;
        // Stable on purpose: results at equal start positions keep their
        // emission order.
        results.sort_by_key(|r| r.start_index());
        if !allow_overlapping {
            postprocess::remove_overlapping(&mut results);
        }
        Ok(results)
    }

    /// Returns the number of states in the trie, including the root. The
    /// count reflects the states created during the add phase; installing
    /// fast paths does not shrink it.
    pub fn num_states(&self) -> usize {
        // The dead sentinel is not part of the trie.
        self.states.len() - 1
    }

    fn extend(&mut self, state_id: u32, c: u16) -> Result<u32> {
        if let Some(next) = self.states[state_id as usize].child(c) {
            return Ok(next);
        }
        let next_id = u32::try_from(self.states.len()).map_err(|_| {
            AhopathError::invalid_argument("num_states", "must be representable as u32")
        })?;
        let depth = self.states[state_id as usize].depth + 1;
        self.states.push(State::new(depth));
        self.states[state_id as usize].edges.put(c, next_id);
        Ok(next_id)
    }

    fn extend_all(&mut self, state_id: u32, units: &[u16]) -> Result<u32> {
        let mut state_id = state_id;
        for &c in units {
            state_id = self.extend(state_id, c)?;
        }
        Ok(state_id)
    }
}
