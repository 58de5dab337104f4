use crate::token::Assoc;

/// How the lexer treats characters it does not recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexMode {
    /// Unknown characters are dropped, and a malformed formula fails later
    /// during evaluation
    Tolerant,
    /// Unknown characters are reported as
    /// [`EvalError::UnexpectedCharacter`](enum.EvalError.html)
    Strict,
}

impl Default for LexMode {
    fn default() -> Self {
        Self::Tolerant
    }
}

/// Evaluation settings for a [`Calculator`](struct.Calculator.html).
///
/// The defaults are tolerant lexing and a left associative `^`, so
/// `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
///
/// # Examples
///
/// ```
/// # use formulator::{Assoc, LexMode, Options};
/// let options = Options::new().strict().right_associative_power();
/// assert_eq!(options.lexing, LexMode::Strict);
/// assert_eq!(options.power, Assoc::Right);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Treatment of unknown characters
    pub lexing: LexMode,
    /// Associativity of `^`
    pub power: Assoc,
}

impl Options {
    /// Default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Report unknown characters instead of skipping them
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.lexing = LexMode::Strict;
        self
    }

    /// Group chained exponentiations from the right
    #[must_use]
    pub fn right_associative_power(mut self) -> Self {
        self.power = Assoc::Right;
        self
    }
}
