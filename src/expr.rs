use crate::error::EvalError;
use crate::eval::evaluate_postfix;
use crate::lexer::Lexer;
use crate::options::Options;
use crate::parser::to_postfix;
use crate::substitute::{substitute, VariableMap};
use log::debug;
use rayon::prelude::*;

/// Evaluate a single `formula`, with the values of its variables taken from
/// `variables`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// the formula is malformed or divides by zero. Variables missing from
/// `variables` are `0`.
///
/// # Example
///
/// ```
/// # use formulator::{evaluate, EvalError, VariableMap};
/// assert_eq!(evaluate("45 - 2^3", &VariableMap::new()), Ok(37.0));
///
/// let mut variables = VariableMap::new();
/// variables.insert("a".into(), 5.0);
/// assert_eq!(evaluate("3 * a", &variables), Ok(15.0));
/// assert_eq!(evaluate("a / b", &variables), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(formula: &str, variables: &VariableMap) -> Result<f64, EvalError> {
    Calculator::default().evaluate(formula, variables)
}

/// A formula evaluator with fixed [`Options`](struct.Options.html).
///
/// A `Calculator` holds no state besides its options: every call goes
/// through the full pipeline again, and any number of evaluations can run
/// at the same time.
///
/// # Examples
/// ```
/// # use formulator::{Calculator, Options, VariableMap};
/// let calculator = Calculator::new(Options::new().right_associative_power());
/// assert_eq!(calculator.evaluate("2 ^ 3 ^ 2", &VariableMap::new()), Ok(512.0));
///
/// let strict = Calculator::new(Options::new().strict());
/// assert!(strict.evaluate("2 # 3", &VariableMap::new()).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Calculator {
    options: Options,
}

impl Calculator {
    /// Create a calculator using `options`
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// The options of this calculator
    #[must_use]
    pub fn options(&self) -> Options {
        self.options
    }

    /// Substitute the variables in `formula`, then lex, parse and evaluate
    /// it.
    pub fn evaluate(&self, formula: &str, variables: &VariableMap) -> Result<f64, EvalError> {
        let text = substitute(formula, variables);
        let tokens = Lexer::new(&text, self.options.lexing).tokenize()?;
        let postfix = to_postfix(tokens, self.options.power);
        let result = evaluate_postfix(&postfix);
        debug!("{:?} evaluated to {:?}", formula, result);
        result
    }

    /// Evaluate the same `formula` against several sets of variables, in
    /// parallel. Results are in the same order as `contexts`.
    ///
    /// # Examples
    /// ```
    /// # use formulator::{Calculator, VariableMap};
    /// let contexts: Vec<VariableMap> = (1..=3)
    ///     .map(|i| std::iter::once(("x".to_string(), f64::from(i))).collect())
    ///     .collect();
    /// let results = Calculator::default().evaluate_batch("x * 10", &contexts);
    /// assert_eq!(results, vec![Ok(10.0), Ok(20.0), Ok(30.0)]);
    /// ```
    pub fn evaluate_batch(
        &self,
        formula: &str,
        contexts: &[VariableMap],
    ) -> Vec<Result<f64, EvalError>> {
        contexts
            .par_iter()
            .map(|variables| self.evaluate(formula, variables))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::options::LexMode;
    use crate::token::Assoc;
    use test_case::test_case;

    fn context() -> VariableMap {
        let mut variables = VariableMap::new();
        variables.insert("x".into(), 5.0);
        variables.insert("half".into(), 0.5);
        variables.insert("zero".into(), 0.0);
        variables.insert("neg".into(), -2.0);
        variables
    }

    #[test_case("2 + 3 * 4" => Ok(14.0) ; "precedence")]
    #[test_case("(2 + 3) * 4" => Ok(20.0) ; "parenthesis")]
    #[test_case("10 - 4 - 3" => Ok(3.0) ; "left to right subtraction")]
    #[test_case("12 / 3 / 2" => Ok(2.0) ; "left to right division")]
    #[test_case("1.5 * 4" => Ok(6.0) ; "decimals")]
    #[test_case("2 ^ 3 ^ 2" => Ok(64.0) ; "power is left associative")]
    #[test_case("10 / 0" => Err(EvalError::DivisionByZero) ; "division by zero")]
    #[test_case("2 * x" => Ok(10.0) ; "variable")]
    #[test_case("y + 1" => Ok(1.0) ; "unset variable is zero")]
    #[test_case("x / zero" => Err(EvalError::DivisionByZero) ; "division by zero variable")]
    #[test_case("x / y" => Err(EvalError::DivisionByZero) ; "division by unset variable")]
    #[test_case("x ^ 2 * half" => Ok(12.5) ; "power of a variable")]
    #[test_case("sin(0)" => Ok(0.0) ; "sine")]
    #[test_case("3 * cos(0)" => Ok(3.0) ; "cosine")]
    #[test_case("log(1)" => Ok(0.0) ; "natural log")]
    #[test_case("tan(zero)" => Ok(0.0) ; "function of a variable")]
    #[test_case("sin(0) + 1" => Ok(libm::sin(1.0)) ; "function applies to the rest of the formula")]
    #[test_case("(sin(0)) + 1" => Ok(1.0) ; "parenthesis close the function")]
    #[test_case("2 + " => Err(EvalError::StackUnderflow) ; "trailing operator")]
    #[test_case("-3" => Err(EvalError::StackUnderflow) ; "no unary minus")]
    #[test_case("neg + 1" => Err(EvalError::StackUnderflow) ; "negative value becomes a minus sign")]
    #[test_case("(2 + 3" => Err(EvalError::StackUnderflow) ; "unclosed parenthesis")]
    #[test_case("2 * (3 + 4" => Err(EvalError::StackUnderflow) ; "unclosed parenthesis with operands")]
    #[test_case("1 + (2 * (3 + 4)" => Err(EvalError::StackUnderflow) ; "unclosed outer parenthesis")]
    #[test_case("2 + 3) * 4" => Ok(20.0) ; "extra closing parenthesis")]
    #[test_case("2 3" => Err(EvalError::StackUnderflow) ; "missing operator")]
    #[test_case("" => Err(EvalError::StackUnderflow) ; "empty formula")]
    #[test_case("2 $ + 3" => Ok(5.0) ; "unknown characters are skipped")]
    fn eval(formula: &str) -> Result<f64, EvalError> {
        evaluate(formula, &context())
    }

    #[test]
    fn options() {
        let variables = context();

        let right = Calculator::new(Options::new().right_associative_power());
        assert_eq!(right.evaluate("2 ^ 3 ^ 2", &variables), Ok(512.0));
        assert_eq!(right.options().power, Assoc::Right);

        let strict = Calculator::new(Options::new().strict());
        assert_eq!(strict.evaluate("2 * x", &variables), Ok(10.0));
        assert_eq!(
            strict.evaluate("2 $ + 3", &variables),
            Err(EvalError::UnexpectedCharacter {
                character: '$',
                position: 2
            })
        );
    }

    #[test]
    fn idempotent() {
        let variables = context();
        let first = evaluate("x * (half + 2) ^ 2 - log(x)", &variables);
        for _ in 0..10 {
            assert_eq!(evaluate("x * (half + 2) ^ 2 - log(x)", &variables), first);
        }
    }

    #[test]
    fn pipeline() {
        let variables = context();
        let corpus = [
            "1 + 2 * 3 - 4 / 2",
            "(1 + 2) * (3 - 4) / 2",
            "x ^ 2 + 2 * x + 1",
            "cos(x) * cos(x) + 3",
            "log(x * 2) - half",
            "((x))",
            "2 ^ 3 ^ 2",
            "y * 7 + x",
        ];
        for formula in &corpus {
            let text = substitute(formula, &variables);
            let tokens = tokenize(&text, LexMode::Tolerant).unwrap();
            let postfix = to_postfix(tokens, Assoc::Left);
            assert_eq!(evaluate_postfix(&postfix), evaluate(formula, &variables));
            assert!(evaluate(formula, &variables).is_ok(), "{}", formula);
        }
    }

    #[test]
    fn batch() {
        let contexts: Vec<VariableMap> = (0..100)
            .map(|i| {
                let mut variables = VariableMap::new();
                variables.insert("x".into(), f64::from(i));
                variables
            })
            .collect();
        let results = Calculator::default().evaluate_batch("10 / x", &contexts);
        assert_eq!(results.len(), 100);
        assert_eq!(results[0], Err(EvalError::DivisionByZero));
        assert_eq!(results[4], Ok(2.5));
        assert_eq!(results[99], Ok(10.0 / 99.0));
    }
}
