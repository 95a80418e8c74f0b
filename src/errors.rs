//! Definition of errors.

use thiserror::Error;

/// A specialized Result type for this crate.
pub type Result<T, E = AhopathError> = core::result::Result<T, E>;

/// Errors in ahopath.
#[derive(Debug, Error)]
pub enum AhopathError {
    /// A search was started before [`prepare()`](crate::AhoCorasick::prepare)
    /// was called.
    #[error("NotPreparedError: can't start search until prepare()")]
    NotPrepared,

    /// The automaton was mutated after [`prepare()`](crate::AhoCorasick::prepare)
    /// froze it, or `prepare()` was called twice.
    #[error("AlreadyPreparedError: the automaton is frozen once prepare() is called")]
    AlreadyPrepared,

    /// An argument violated its contract.
    #[error("InvalidArgumentError: {arg}: {msg}")]
    InvalidArgument {
        /// Name of the argument.
        arg: &'static str,
        /// Error message.
        msg: String,
    },

    /// The tokenizer reported a failure; propagated unchanged.
    #[error("TokenizerFailure: {0}")]
    Tokenizer(#[from] TokenizerError),
}

impl AhopathError {
    pub(crate) fn invalid_argument(arg: &'static str, msg: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            msg: msg.into(),
        }
    }
}

/// Error raised by a [`Tokenizer`](crate::Tokenizer) implementation.
#[derive(Debug, Error)]
#[error("{msg}")]
pub struct TokenizerError {
    msg: String,
}

impl TokenizerError {
    /// Creates a new error with the given message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}
