#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::float_cmp
)]

//! Formulator, a crate for evaluating formulas typed by a human.
//!
//! A formula is an infix arithmetic expression with named variables. The
//! easiest way to use this crate is with the [`evaluate`](fn.evaluate.html)
//! function:
//!
//! ```
//! use formulator::VariableMap;
//! assert_eq!(formulator::evaluate("3 + 5 * 2", &VariableMap::new()), Ok(13.0));
//! ```
//!
//! The second argument to `evaluate` is a [`VariableMap`](type.VariableMap.html)
//! giving values to the variables. Variables without a value are `0`:
//!
//! ```
//! use formulator::VariableMap;
//!
//! let mut variables = VariableMap::new();
//! variables.insert("a".into(), 3.5);
//! assert_eq!(formulator::evaluate("2 * a", &variables), Ok(7.0));
//! assert_eq!(formulator::evaluate("2 * b + 1", &variables), Ok(1.0));
//! ```
//!
//! # Language definition
//!
//! A formula can contain the following elements:
//!
//! - number literals: `12`, `3.5`, `4.`. A literal must start with a digit,
//!   and there is no sign or exponent part;
//! - left and right parenthesis;
//! - binary operators: `+`, `-`, `*`, `/` and `^` for exponentiation. All of
//!   them are left associative, so `2 ^ 3 ^ 2` is `64`;
//! - variables, made of ASCII letters only: `x`, `rate`, `Total`;
//! - the functions `sin`, `cos`, `tan` (in radians) and `log` (natural
//!   logarithm). A function name is only a function when directly followed
//!   by `(`, otherwise it is a variable.
//!
//! Other characters are ignored by default, see [`Options`](struct.Options.html)
//! to reject them instead. There is no unary minus, and no implicit
//! multiplication: `2x` must be written `2 * x`.
//!
//! # Technical details
//!
//! Evaluation is a straight pipeline, and every stage is exposed:
//!
//! 1. [`substitute`](fn.substitute.html) replaces the variables by the text of
//!    their values;
//! 2. [`tokenize`](fn.tokenize.html) splits the text into
//!    [`Token`](enum.Token.html)s;
//! 3. [`to_postfix`](fn.to_postfix.html) reorders them in reverse polish
//!    notation, with a Shunting-Yard algorithm;
//! 4. [`evaluate_postfix`](fn.evaluate_postfix.html) computes the result on an
//!    operand stack.
//!
//! ```
//! use formulator::{evaluate_postfix, substitute, to_postfix, tokenize};
//! use formulator::{Assoc, LexMode, VariableMap};
//!
//! let mut variables = VariableMap::new();
//! variables.insert("x".into(), 4.0);
//!
//! let text = substitute("(x + 1) * x", &variables);
//! let tokens = tokenize(&text, LexMode::Tolerant).unwrap();
//! let postfix = to_postfix(tokens, Assoc::Left);
//! assert_eq!(evaluate_postfix(&postfix), Ok(20.0));
//! ```
//!
//! Nothing is cached between calls. A [`Session`](struct.Session.html) keeps
//! the state of an interactive editor around the evaluator.

#[macro_use]
extern crate lazy_static;

mod error;
mod eval;
mod expr;
mod lexer;
mod options;
mod parser;
mod session;
mod substitute;
mod token;
mod util;

pub use error::{EvalError, SessionError, StoreError};
pub use eval::evaluate_postfix;
pub use expr::{evaluate, Calculator};
pub use lexer::{tokenize, Lexer};
pub use options::{LexMode, Options};
pub use parser::to_postfix;
pub use session::{FileStore, FormulaStore, MemoryStore, Session, SAVED_FORMULA_KEY};
pub use substitute::{missing_variables, substitute, variables, VariableMap};
pub use token::{Assoc, Function, Op, Token};
pub use util::FUNCTIONS;
