use crate::util::FUNCTIONS;
use log::debug;
use std::collections::{HashMap, HashSet};

/// Values for the variables of a formula, by name
pub type VariableMap = HashMap<String, f64>;

/// Iterator over the maximal runs of ASCII letters in a text, yielding the
/// byte offset and the run itself
struct LetterRuns<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for LetterRuns<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.position..];
        let start = self.position + rest.find(|c: char| c.is_ascii_alphabetic())?;
        let len = self.text[start..]
            .find(|c: char| !c.is_ascii_alphabetic())
            .unwrap_or(self.text.len() - start);
        self.position = start + len;
        Some((start, &self.text[start..start + len]))
    }
}

fn letter_runs(text: &str) -> LetterRuns {
    LetterRuns { text, position: 0 }
}

/// A run is in function-call position when it is a reserved function name
/// directly followed by `(`
fn is_function_call(text: &str, name: &str, end: usize) -> bool {
    FUNCTIONS.contains_key(name) && text[end..].starts_with('(')
}

/// Replace every variable reference in `formula` by the decimal text of its
/// value.
///
/// Reserved function names directly followed by `(` are kept as they are.
/// Any other run of letters is looked up in `variables`, and replaced by `0`
/// when missing. A function name without an opening parenthesis right after
/// it is a plain variable reference.
///
/// # Examples
///
/// ```
/// # use formulator::{substitute, VariableMap};
/// let mut variables = VariableMap::new();
/// variables.insert("x".into(), 2.5);
/// assert_eq!(substitute("sin(x) + y", &variables), "sin(2.5) + 0");
/// assert_eq!(substitute("sin + 1", &variables), "0 + 1");
/// ```
#[must_use]
pub fn substitute(formula: &str, variables: &VariableMap) -> String {
    let mut output = String::with_capacity(formula.len());
    let mut last = 0;
    for (start, name) in letter_runs(formula) {
        let end = start + name.len();
        output.push_str(&formula[last..start]);
        if is_function_call(formula, name, end) {
            output.push_str(name);
        } else if let Some(value) = variables.get(name) {
            output.push_str(&value.to_string());
        } else {
            output.push('0');
        }
        last = end;
    }
    output.push_str(&formula[last..]);
    debug!("substituted {:?} into {:?}", formula, output);
    output
}

/// Get the names of the variables referenced by `formula`, without
/// duplicates and in order of first appearance. Reserved function names in
/// function-call position are not variables.
///
/// # Examples
///
/// ```
/// # use formulator::variables;
/// assert_eq!(variables("a * log(b + a) - log"), vec!["a", "b", "log"]);
/// ```
#[must_use]
pub fn variables(formula: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    letter_runs(formula)
        .filter(|&(start, name)| !is_function_call(formula, name, start + name.len()))
        .map(|(_, name)| name)
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Get the variables referenced by `formula` that have no value in
/// `variables`. These evaluate as `0`.
#[must_use]
pub fn missing_variables<'a>(formula: &'a str, variables: &VariableMap) -> Vec<&'a str> {
    self::variables(formula)
        .into_iter()
        .filter(|name| !variables.contains_key(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn context() -> VariableMap {
        let mut variables = VariableMap::new();
        variables.insert("x".into(), 5.0);
        variables.insert("rate".into(), 0.25);
        variables.insert("neg".into(), -3.0);
        variables.insert("sin".into(), 7.0);
        variables
    }

    #[test_case("2 * x" => "2 * 5" ; "variable is replaced")]
    #[test_case("x*rate" => "5*0.25" ; "fractional value")]
    #[test_case("y + 1" => "0 + 1" ; "unset variable is zero")]
    #[test_case("cos(x)" => "cos(5)" ; "function call is kept")]
    #[test_case("sin(x)" => "sin(5)" ; "function call wins over variable")]
    #[test_case("sin + 1" => "7 + 1" ; "function name without parenthesis is a variable")]
    #[test_case("tan (1)" => "0 (1)" ; "space breaks the call position")]
    #[test_case("foo(2)" => "0(2)" ; "unknown call is a variable")]
    #[test_case("X + x" => "0 + 5" ; "names are case sensitive")]
    #[test_case("x2x" => "525" ; "digits split letter runs")]
    #[test_case("neg" => "-3" ; "negative value keeps its sign")]
    #[test_case("" => "" ; "empty formula")]
    #[test_case("1 + 2" => "1 + 2" ; "no letters")]
    fn substitution(formula: &str) -> String {
        substitute(formula, &context())
    }

    #[test]
    fn detect() {
        assert_eq!(variables("2 * x + y * x"), vec!["x", "y"]);
        assert_eq!(variables("sin(a) + cos(b)"), vec!["a", "b"]);
        assert_eq!(variables("tan + tan(1)"), vec!["tan"]);
        assert!(variables("1 + 2").is_empty());
    }

    #[test]
    fn missing() {
        assert_eq!(missing_variables("x + y + rate + z", &context()), vec!["y", "z"]);
        assert!(missing_variables("x * log(x)", &context()).is_empty());
    }
}
