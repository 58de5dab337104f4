use std::io;
use thiserror::Error;

/// Error type for formula evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The right operand of `/` was exactly zero
    #[error("DivisionByZero: division by zero")]
    DivisionByZero,
    /// An operator or function found too few operands, or the expression did
    /// not reduce to a single value
    #[error("StackUnderflow: malformed expression")]
    StackUnderflow,
    /// A symbol the evaluator has no rule for. The tokens produced by the
    /// lexer and parser never lead to it.
    #[error("UnknownOperator: {0}")]
    UnknownOperator(String),
    /// A character the lexer does not recognize, in strict mode only
    #[error("UnexpectedCharacter: '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character
        character: char,
        /// Byte offset of the character in the lexed text
        position: usize,
    },
}

/// Error type for formula persistence
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing storage failed
    #[error("StoreError: {0}")]
    Io(#[from] io::Error),
    /// The key can not be mapped to a storage location
    #[error("StoreError: invalid key '{0}'")]
    InvalidKey(String),
}

/// Error type for operations on a [`Session`](struct.Session.html)
#[derive(Debug, Error)]
pub enum SessionError {
    /// Evaluating the current formula failed
    #[error(transparent)]
    Eval(#[from] EvalError),
    /// Saving or restoring the formula failed
    #[error(transparent)]
    Store(#[from] StoreError),
    /// A value was assigned to a name the formula does not reference
    #[error("NameError: name '{0}' is not used in the formula")]
    UndefinedVariable(String),
}
