use crate::error::EvalError;
use crate::token::{Op, Token};
use log::trace;

/// Operand stack for postfix evaluation
struct Stack {
    values: Vec<f64>,
}

impl Stack {
    fn pop(&mut self) -> Result<f64, EvalError> {
        self.values.pop().ok_or(EvalError::StackUnderflow)
    }

    /// Pop the operands of a binary operator, as `(left, right)`
    fn pop_pair(&mut self) -> Result<(f64, f64), EvalError> {
        let right = self.pop()?;
        let left = self.pop()?;
        Ok((left, right))
    }
}

fn apply(op: Op, left: f64, right: f64) -> Result<f64, EvalError> {
    match op {
        Op::Plus => Ok(left + right),
        Op::Minus => Ok(left - right),
        Op::Mul => Ok(left * right),
        Op::Div if right == 0.0 => Err(EvalError::DivisionByZero),
        Op::Div => Ok(left / right),
        Op::Exp => Ok(libm::pow(left, right)),
    }
}

/// Evaluate a sequence of tokens in reverse polish notation.
///
/// The input must reduce to exactly one value, otherwise the evaluation fails
/// with [`EvalError::StackUnderflow`](enum.EvalError.html).
///
/// # Examples
///
/// ```
/// # use formulator::{evaluate_postfix, EvalError, Op, Token};
/// let postfix = [Token::Number(6.0), Token::Number(3.0), Token::Op(Op::Div)];
/// assert_eq!(evaluate_postfix(&postfix), Ok(2.0));
///
/// let postfix = [Token::Number(6.0), Token::Op(Op::Div)];
/// assert_eq!(evaluate_postfix(&postfix), Err(EvalError::StackUnderflow));
/// ```
pub fn evaluate_postfix(tokens: &[Token]) -> Result<f64, EvalError> {
    let mut stack = Stack {
        values: Vec::with_capacity(tokens.len()),
    };

    for token in tokens {
        let value = match *token {
            Token::Number(value) => value,
            Token::Function(func) => func.apply(stack.pop()?),
            Token::Op(op) => {
                let (left, right) = stack.pop_pair()?;
                apply(op, left, right)?
            }
            // an unmatched parenthesis flushed by the parser
            Token::LParen | Token::RParen => return Err(EvalError::StackUnderflow),
        };
        trace!("{} -> push {}", token, value);
        stack.values.push(value);
    }

    let result = stack.pop()?;
    if stack.values.is_empty() {
        Ok(result)
    } else {
        Err(EvalError::StackUnderflow)
    }
}
