//! Output-result collection: lowering matches to spans, the token-boundary
//! filter, and overlap removal.

use crate::errors::Result;
use crate::iter::ProgressiveSearch;
use crate::tokenizer::{TokenSpans, Tokenizer};
use crate::{AhoCorasick, AhopathError};

/// Returns the number of input code units that a match on a given output
/// spans.
///
/// Contract: the returned size must equal `end_index - start_index` for any
/// real match carrying that output. Output values that are not derived from
/// their keyword need a caller-supplied implementation.
pub trait OutputSizeCalculator<V>: Send + Sync {
    fn size_of(&self, output: &V) -> usize;
}

/// Default calculator: the UTF-16 length of the output string.
pub struct StringOutputSizeCalculator;

impl<V: AsRef<str>> OutputSizeCalculator<V> for StringOutputSizeCalculator {
    fn size_of(&self, output: &V) -> usize {
        output.as_ref().encode_utf16().count()
    }
}

/// A match lowered to its span: the output payload plus the half-open
/// code-unit range `[start_index, end_index)` it covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputResult<V> {
    output: V,
    start_index: usize,
    end_index: usize,
}

impl<V> OutputResult<V> {
    pub(crate) fn new(output: V, start_index: usize, end_index: usize) -> Self {
        Self {
            output,
            start_index,
            end_index,
        }
    }

    /// The output associated with the match.
    pub fn output(&self) -> &V {
        &self.output
    }

    /// The index (inclusive) in the input where the located substring
    /// starts.
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// The index (exclusive) in the input where the located substring ends.
    pub const fn end_index(&self) -> usize {
        self.end_index
    }

    /// A result with span `(s1, e1)` overlaps a result with span `(s2, e2)`
    /// iff either end point of the second lies within the first:
    /// `s1 <= s2 < e1`, or `s1 < e2 <= e1`.
    pub(crate) fn is_overlapped(&self, other: &Self) -> bool {
        (self.start_index <= other.start_index && other.start_index < self.end_index)
            || (self.start_index < other.end_index && other.end_index <= self.end_index)
    }

    /// A result dominates another iff they overlap and it is leftmost, or
    /// they start together and it is longest.
    pub(crate) fn dominates(&self, other: &Self) -> bool {
        self.is_overlapped(other)
            && (self.start_index < other.start_index
                || (self.start_index == other.start_index && self.end_index > other.end_index))
    }
}

/// In-place dominance sweep over a list sorted by start index.
///
/// The cursor does not advance on a removal because the new neighbor may
/// also overlap. Since the list is sorted, `list[i].start <= list[i+1].start`
/// always holds, so one of the pair dominates whenever they overlap.
pub(crate) fn remove_overlapping<V>(results: &mut Vec<OutputResult<V>>) {
    let mut i = 0;
    while i + 1 < results.len() {
        if !results[i].is_overlapped(&results[i + 1]) {
            i += 1;
        } else if results[i].dominates(&results[i + 1]) {
            results.remove(i + 1);
        } else {
            results.remove(i);
        }
    }
}

impl<V> AhoCorasick<V>
where
    V: Clone + PartialEq,
{
    /// Lowers the raw search stream into spans, applying the token filter
    /// on the fly. The input is tokenized at most once, and only when there
    /// is at least one raw result to filter.
    pub(crate) fn recollect_output_results(
        &self,
        haystack: &[u16],
        only_tokens: bool,
        tokenizer: Option<&mut dyn Tokenizer>,
    ) -> Result<Vec<OutputResult<V>>> {
        let mut searcher = ProgressiveSearch::new(self, haystack).peekable();
        let spans = if only_tokens && searcher.peek().is_some() {
            Some(self.extract_token_spans(haystack, tokenizer)?)
        } else {
            None
        };

        let mut results = vec![];
        for search_result in searcher {
            let end_index = search_result.last_index();
            for output in search_result.outputs() {
                let size = self.output_size_calculator.size_of(output);
                let start_index = end_index.checked_sub(size).ok_or_else(|| {
                    AhopathError::invalid_argument(
                        "size_of",
                        format!("must be <= {end_index} for the match ending there"),
                    )
                })?;
                let aligned = spans
                    .as_ref()
                    .map_or(true, |s| s.is_aligned(start_index, end_index));
                if aligned {
                    results.push(OutputResult::new(output.clone(), start_index, end_index));
                }
            }
        }
        Ok(results)
    }

    fn extract_token_spans(
        &self,
        haystack: &[u16],
        tokenizer: Option<&mut dyn Tokenizer>,
    ) -> Result<TokenSpans> {
        match tokenizer {
            Some(tokenizer) => Ok(tokenizer.tokenize(haystack)?),
            None => {
                let mut tokenizer = self.tokenizer_factory.create();
                Ok(tokenizer.tokenize(haystack)?)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Without overlapping.
    #[test]
    fn test_remove_overlapping_disjoint() {
        let mut results = vec![
            OutputResult::new(0, 0, 2),
            OutputResult::new(1, 2, 4),
            OutputResult::new(2, 5, 6),
        ];
        remove_overlapping(&mut results);
        assert_eq!(3, results.len());
    }

    // With a clear overlapping.
    #[test]
    fn test_remove_overlapping_leftmost_wins() {
        let mut results = vec![
            OutputResult::new(0, 0, 2),
            OutputResult::new(1, 1, 4),
            OutputResult::new(2, 5, 6),
        ];
        remove_overlapping(&mut results);
        assert_eq!(2, results.len());
        assert_eq!(0, *results[0].output());
        assert_eq!(2, *results[1].output());
    }

    // With two overlapping, one with the same start index.
    #[test]
    fn test_remove_overlapping_longest_wins_on_ties() {
        let mut results = vec![
            OutputResult::new(0, 0, 2),
            OutputResult::new(1, 0, 4),
            OutputResult::new(2, 3, 6),
        ];
        remove_overlapping(&mut results);
        assert_eq!(1, results.len());
        assert_eq!(1, *results[0].output());
    }

    #[test]
    fn test_overlap_definition() {
        let a = OutputResult::new((), 0, 1);
        assert!(!a.is_overlapped(&OutputResult::new((), 1, 3)));
        assert!(a.is_overlapped(&OutputResult::new((), 0, 2)));
        assert!(OutputResult::new((), 1, 2).is_overlapped(&OutputResult::new((), 0, 2)));
        assert!(OutputResult::new((), 1, 7).is_overlapped(&OutputResult::new((), 2, 3)));
    }
}
