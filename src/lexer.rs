use crate::error::EvalError;
use crate::options::LexMode;
use crate::token::{Op, Token};
use crate::util::{function_prefix, FUNCTION_NAME_LEN};
use log::{debug, warn};
use std::iter::Peekable;
use std::str::CharIndices;

/// Split a substituted formula into tokens.
///
/// # Examples
///
/// ```
/// # use formulator::{tokenize, LexMode, Op, Token};
/// let tokens = tokenize("2 + 3.5", LexMode::Tolerant).unwrap();
/// assert_eq!(tokens, vec![Token::Number(2.0), Token::Op(Op::Plus), Token::Number(3.5)]);
///
/// // unknown characters are dropped, unless lexing is strict
/// assert_eq!(tokenize("2 $", LexMode::Tolerant).unwrap(), vec![Token::Number(2.0)]);
/// assert!(tokenize("2 $", LexMode::Strict).is_err());
/// ```
pub fn tokenize(text: &str, mode: LexMode) -> Result<Vec<Token>, EvalError> {
    Lexer::new(text, mode).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    text: &'a str,
    input: Peekable<CharIndices<'a>>,
    mode: LexMode,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `text`
    pub fn new(text: &'a str, mode: LexMode) -> Lexer<'a> {
        Lexer {
            text,
            input: text.char_indices().peekable(),
            mode,
        }
    }

    /// Consume the whole input, in order of appearance. Only strict lexing
    /// can fail.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, EvalError> {
        let mut output = Vec::new();
        while let Some(token) = self.next_token()? {
            output.push(token);
        }
        debug!("lexed {:?} into {:?}", self.text, output);
        Ok(output)
    }

    fn next_token(&mut self) -> Result<Option<Token>, EvalError> {
        while let Some((position, c)) = self.input.next() {
            let token = match c {
                c if c.is_whitespace() => continue,
                '(' => Token::LParen,
                ')' => Token::RParen,
                c if c.is_ascii_digit() => self.number(position)?,
                c => {
                    if let Some(op) = Op::from_char(c) {
                        Token::Op(op)
                    } else if let Some(func) = function_prefix(&self.text[position..]) {
                        // the first letter is already consumed
                        for _ in 1..FUNCTION_NAME_LEN {
                            self.input.next();
                        }
                        Token::Function(func)
                    } else {
                        self.unexpected(c, position)?;
                        continue;
                    }
                }
            };
            return Ok(Some(token));
        }
        Ok(None)
    }

    /// Read a number literal: digits, then optionally a `.` followed by more
    /// digits. The first digit is already consumed.
    fn number(&mut self, start: usize) -> Result<Token, EvalError> {
        self.digits();
        if let Some(&(_, '.')) = self.input.peek() {
            self.input.next();
            self.digits();
        }
        let end = self.input.peek().map_or(self.text.len(), |&(i, _)| i);
        let literal = &self.text[start..end];
        literal
            .parse()
            .map(Token::Number)
            .map_err(|_| EvalError::UnexpectedCharacter {
                character: literal.chars().next().unwrap_or('0'),
                position: start,
            })
    }

    fn digits(&mut self) {
        while let Some(&(_, c)) = self.input.peek() {
            if c.is_ascii_digit() {
                self.input.next();
            } else {
                break;
            }
        }
    }

    fn unexpected(&self, character: char, position: usize) -> Result<(), EvalError> {
        match self.mode {
            LexMode::Tolerant => {
                warn!("skipping unexpected character {:?} at {}", character, position);
                Ok(())
            }
            LexMode::Strict => Err(EvalError::UnexpectedCharacter {
                character,
                position,
            }),
        }
    }
}
