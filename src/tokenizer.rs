//! The token-boundary oracle consulted by the `only_tokens` filter.

use crate::errors::TokenizerError;

/// Token boundary offsets of an input, in code units.
///
/// Both arrays are sorted ascending, `starts[i] < ends[i]`, and tokens do
/// not overlap.
#[derive(Clone, Debug, Default)]
pub struct TokenSpans {
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl TokenSpans {
    /// Builds the span set from parallel boundary arrays.
    pub fn new(starts: Vec<usize>, ends: Vec<usize>) -> Self {
        debug_assert_eq!(starts.len(), ends.len());
        debug_assert!(starts.windows(2).all(|w| w[0] < w[1]));
        debug_assert!(ends.windows(2).all(|w| w[0] < w[1]));
        Self { starts, ends }
    }

    /// Offsets where tokens start, ascending.
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }

    /// Offsets just past where tokens end, ascending.
    pub fn ends(&self) -> &[usize] {
        &self.ends
    }

    /// True iff `start` begins some token and `end` closes some (possibly
    /// different, later) token. Because tokens do not overlap, a span that
    /// passes both lookups covers whole tokens only.
    pub(crate) fn is_aligned(&self, start: usize, end: usize) -> bool {
        self.starts.binary_search(&start).is_ok() && self.ends.binary_search(&end).is_ok()
    }
}

/// Boundary oracle: reports the token offsets of an input.
pub trait Tokenizer {
    /// Tokenizes the input and returns the boundary arrays.
    ///
    /// # Errors
    ///
    /// Implementation-defined; failures are propagated unchanged out of
    /// [`complete_search()`](crate::AhoCorasick::complete_search).
    fn tokenize(&mut self, input: &[u16]) -> Result<TokenSpans, TokenizerError>;
}

/// Creates tokenizers for searches that did not bring their own.
pub trait TokenizerFactory: Send + Sync {
    fn create(&self) -> Box<dyn Tokenizer>;
}

/// Default word tokenizer: maximal runs of alphanumeric code units.
///
/// Code units are classified through `char::from_u32`, so lone surrogates
/// never count as alphanumeric and act as boundaries.
#[derive(Clone, Copy, Default)]
pub struct StandardTokenizer;

impl Tokenizer for StandardTokenizer {
    fn tokenize(&mut self, input: &[u16]) -> Result<TokenSpans, TokenizerError> {
        let mut starts = vec![];
        let mut ends = vec![];
        let mut token_start = None;
        for (i, &c) in input.iter().enumerate() {
            let is_word = char::from_u32(u32::from(c)).map_or(false, char::is_alphanumeric);
            match (token_start, is_word) {
                (None, true) => token_start = Some(i),
                (Some(start), false) => {
                    starts.push(start);
                    ends.push(i);
                    token_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = token_start {
            starts.push(start);
            ends.push(input.len());
        }
        Ok(TokenSpans::new(starts, ends))
    }
}

/// Factory producing [`StandardTokenizer`]s.
#[derive(Clone, Copy, Default)]
pub struct StandardTokenizerFactory;

impl TokenizerFactory for StandardTokenizerFactory {
    fn create(&self) -> Box<dyn Tokenizer> {
        Box::new(StandardTokenizer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_word_offsets() {
        let spans = StandardTokenizer.tokenize(&units("El Real Madrid")).unwrap();
        assert_eq!(&[0, 3, 8], spans.starts());
        assert_eq!(&[2, 7, 14], spans.ends());
    }

    #[test]
    fn test_alignment_spans_whole_tokens() {
        let spans = StandardTokenizer.tokenize(&units("El Real Madrid")).unwrap();
        assert!(spans.is_aligned(0, 2));
        assert!(spans.is_aligned(3, 7));
        // A span across several tokens is still aligned.
        assert!(spans.is_aligned(3, 14));
        assert!(!spans.is_aligned(4, 7));
        assert!(!spans.is_aligned(3, 6));
    }

    #[test]
    fn test_leading_and_trailing_separators() {
        let spans = StandardTokenizer.tokenize(&units("  ab cd")).unwrap();
        assert_eq!(&[2, 5], spans.starts());
        assert_eq!(&[4, 7], spans.ends());
        assert!(spans.is_aligned(5, 7));
    }

    #[test]
    fn test_empty_input() {
        let spans = StandardTokenizer.tokenize(&[]).unwrap();
        assert!(spans.starts().is_empty());
        assert!(spans.ends().is_empty());
    }
}
