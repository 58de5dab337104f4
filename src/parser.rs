use crate::token::{Assoc, Token};
use log::debug;

/// Reorder infix `tokens` into reverse polish notation, with the
/// Shunting-Yard algorithm. `power` is the associativity of `^`.
///
/// Functions wait on the operator stack like any other entry, and are only
/// emitted when a `)` or the end of the input flushes them. Parenthesis are
/// not checked: an unmatched `(` ends up in the output, and an unmatched `)`
/// empties the stack. Both make the evaluation fail.
///
/// # Examples
///
/// ```
/// # use formulator::{to_postfix, Assoc, Op, Token};
/// let infix = vec![Token::Number(1.0), Token::Op(Op::Plus), Token::Number(2.0)];
/// let postfix = to_postfix(infix, Assoc::Left);
/// assert_eq!(postfix, vec![Token::Number(1.0), Token::Number(2.0), Token::Op(Op::Plus)]);
/// ```
#[must_use]
pub fn to_postfix<I>(tokens: I, power: Assoc) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut output = Vec::new();
    let mut operators = Vec::new();

    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::Function(_) | Token::LParen => operators.push(token),
            Token::RParen => {
                while let Some(top) = operators.pop() {
                    if top == Token::LParen {
                        break;
                    }
                    output.push(top);
                }
            }
            Token::Op(o1) => {
                while let Some(&Token::Op(o2)) = operators.last() {
                    let pop_me = match o1.associativity(power) {
                        Assoc::Left => o1.precedence() <= o2.precedence(),
                        Assoc::Right => o1.precedence() < o2.precedence(),
                    };
                    if !pop_me {
                        break;
                    }
                    operators.pop();
                    output.push(Token::Op(o2));
                }
                operators.push(token);
            }
        }
    }

    while let Some(token) = operators.pop() {
        output.push(token);
    }
    debug!("postfix: {:?}", output);
    output
}
