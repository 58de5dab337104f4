use std::fmt::{self, Display, Formatter};

/// Possible tokens to find in a substituted formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// A numeric literal
    Number(f64),
    /// A binary operator
    Op(Op),
    /// One of the reserved unary functions
    Function(Function),
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "{}", value),
            Self::Op(op) => write!(fmt, "{}", op),
            Self::Function(func) => write!(fmt, "{}", func),
            Self::LParen => write!(fmt, "("),
            Self::RParen => write!(fmt, ")"),
        }
    }
}

/// Allowed binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Exp,
}

impl Op {
    /// Get the operator for a single character, if there is one
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Exp),
            _ => None,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    #[must_use]
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div => 2,
            Self::Exp => 3,
        }
    }

    /// Get the associativity of the operator. `^` follows `power`, every
    /// other operator is left associative.
    #[must_use]
    pub fn associativity(self, power: Assoc) -> Assoc {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div => Assoc::Left,
            Self::Exp => power,
        }
    }

    /// The symbol of the operator in formula text
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Exp => '^',
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.symbol())
    }
}

/// Operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    /// `a op b op c` groups as `(a op b) op c`
    Left,
    /// `a op b op c` groups as `a op (b op c)`
    Right,
}

impl Default for Assoc {
    fn default() -> Self {
        Self::Left
    }
}

/// The reserved unary functions. All of them work in radians, and `log` is
/// the natural logarithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    /// Sine
    Sin,
    /// Cosine
    Cos,
    /// Tangent
    Tan,
    /// Natural logarithm
    Log,
}

impl Function {
    /// Apply the function to `arg`
    #[must_use]
    pub fn apply(self, arg: f64) -> f64 {
        match self {
            Self::Sin => libm::sin(arg),
            Self::Cos => libm::cos(arg),
            Self::Tan => libm::tan(arg),
            Self::Log => libm::log(arg),
        }
    }

    /// The name of the function in formula text
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }
}

impl Display for Function {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        assert!(Op::Plus.precedence() == Op::Minus.precedence());
        assert!(Op::Mul.precedence() > Op::Plus.precedence());
        assert!(Op::Div.precedence() == Op::Mul.precedence());
        assert!(Op::Exp.precedence() > Op::Div.precedence());
    }

    #[test]
    fn associativity() {
        assert_eq!(Op::Exp.associativity(Assoc::Left), Assoc::Left);
        assert_eq!(Op::Exp.associativity(Assoc::Right), Assoc::Right);
        assert_eq!(Op::Minus.associativity(Assoc::Right), Assoc::Left);
    }

    #[test]
    fn functions() {
        assert_eq!(Function::Sin.apply(0.0), 0.0);
        assert_eq!(Function::Cos.apply(0.0), 1.0);
        assert_eq!(Function::Tan.apply(0.0), 0.0);
        assert_eq!(Function::Log.apply(1.0), 0.0);
        assert!(Function::Log.apply(-1.0).is_nan());
    }

    #[test]
    fn display() {
        let tokens = [
            Token::Function(Function::Log),
            Token::LParen,
            Token::Number(2.5),
            Token::Op(Op::Exp),
            Token::RParen,
        ];
        let text: String = tokens.iter().map(ToString::to_string).collect();
        assert_eq!(text, "log(2.5^)");
    }
}
