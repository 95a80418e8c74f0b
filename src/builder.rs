//! Configuration of an [`AhoCorasick`] automaton.

use crate::postprocess::{OutputSizeCalculator, StringOutputSizeCalculator};
use crate::tokenizer::{StandardTokenizerFactory, TokenizerFactory};
use crate::AhoCorasick;

/// Builder of an [`AhoCorasick`] automaton.
///
/// The builder fixes the two injected collaborators before any keyword is
/// added: the [`OutputSizeCalculator`] used to lower matches into spans and
/// the [`TokenizerFactory`] used by token-filtered searches.
///
/// # Examples
///
/// ```
/// use ahopath::AhoCorasick;
///
/// let mut tree = AhoCorasick::<String>::builder().build();
/// tree.add_keyword("hello").unwrap();
/// tree.prepare().unwrap();
///
/// let results = tree.complete_search("hello world", true, false).unwrap();
/// assert_eq!(1, results.len());
/// ```
pub struct AhoCorasickBuilder<V> {
    output_size_calculator: Box<dyn OutputSizeCalculator<V>>,
    tokenizer_factory: Box<dyn TokenizerFactory>,
}

impl<V: AsRef<str>> AhoCorasickBuilder<V> {
    /// Creates a builder with the default collaborators:
    /// [`StringOutputSizeCalculator`] and [`StandardTokenizerFactory`].
    pub fn new() -> Self {
        Self::with_output_size_calculator(StringOutputSizeCalculator)
    }
}

impl<V: AsRef<str>> Default for AhoCorasickBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> AhoCorasickBuilder<V> {
    /// Creates a builder around a custom size calculator. This is the entry
    /// point when the output values are not strings, since no default
    /// calculator exists for them.
    ///
    /// # Examples
    ///
    /// ```
    /// use ahopath::{AhoCorasickBuilder, OutputSizeCalculator};
    ///
    /// struct WidthOf;
    ///
    /// impl OutputSizeCalculator<u32> for WidthOf {
    ///     fn size_of(&self, output: &u32) -> usize {
    ///         *output as usize
    ///     }
    /// }
    ///
    /// let mut tree = AhoCorasickBuilder::with_output_size_calculator(WidthOf).build();
    /// tree.add("zip", 3).unwrap();
    /// tree.prepare().unwrap();
    ///
    /// let results = tree.complete_search("unzip", true, false).unwrap();
    /// assert_eq!((&3, 2, 5), (
    ///     results[0].output(),
    ///     results[0].start_index(),
    ///     results[0].end_index(),
    /// ));
    /// ```
    pub fn with_output_size_calculator(
        calculator: impl OutputSizeCalculator<V> + 'static,
    ) -> Self {
        Self {
            output_size_calculator: Box::new(calculator),
            tokenizer_factory: Box::new(StandardTokenizerFactory),
        }
    }

    /// Replaces the output size calculator.
    pub fn output_size_calculator(
        mut self,
        calculator: impl OutputSizeCalculator<V> + 'static,
    ) -> Self {
        self.output_size_calculator = Box::new(calculator);
        self
    }

    /// Replaces the tokenizer factory consulted by token-filtered searches.
    pub fn tokenizer_factory(mut self, factory: impl TokenizerFactory + 'static) -> Self {
        self.tokenizer_factory = Box::new(factory);
        self
    }

    /// Builds an empty automaton in its mutable phase.
    pub fn build(self) -> AhoCorasick<V> {
        AhoCorasick::with_collaborators(self.output_size_calculator, self.tokenizer_factory)
    }
}
