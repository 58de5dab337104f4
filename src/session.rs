use crate::error::{SessionError, StoreError};
use crate::expr::Calculator;
use crate::options::Options;
use crate::substitute::{variables, VariableMap};
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Key under which a [`Session`](struct.Session.html) saves its formula
pub const SAVED_FORMULA_KEY: &str = "savedFormula";

/// A key-value store for strings, used to keep the last formula between
/// sessions
pub trait FormulaStore {
    /// Get the value stored under `key`, if any
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// A store living in memory, lost with the process
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormulaStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// A store keeping every key in its own file, inside a directory created on
/// first save
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Create a store using `directory`
    #[must_use]
    pub fn new<P: Into<PathBuf>>(directory: P) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Keys are used as file names, so they are limited to ASCII letters,
    /// digits, `_` and `-`
    fn path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(self.directory.join(key))
        } else {
            Err(StoreError::InvalidKey(key.to_owned()))
        }
    }
}

impl FormulaStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path(key)?;
        fs::create_dir_all(&self.directory)?;
        fs::write(path, value)?;
        Ok(())
    }
}

/// The state of an interactive formula editor: the formula being edited,
/// the values given to its variables, and where to save the formula.
///
/// The variables always follow the formula. When the formula changes, new
/// variables start at `0`, known ones keep their value and unused ones are
/// forgotten.
///
/// # Examples
///
/// ```
/// # use formulator::{MemoryStore, Session};
/// let mut session = Session::with_store(MemoryStore::new());
/// session.set_formula("width * height");
/// assert_eq!(session.evaluate().unwrap(), Some(0.0));
///
/// session.set_variable("width", 3.0).unwrap();
/// session.set_variable("height", 4.0).unwrap();
/// assert_eq!(session.evaluate().unwrap(), Some(12.0));
///
/// assert!(session.set_variable("depth", 1.0).is_err());
/// ```
pub struct Session {
    formula: String,
    variables: VariableMap,
    calculator: Calculator,
    store: Box<dyn FormulaStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Session")
            .field("formula", &self.formula)
            .field("variables", &self.variables)
            .field("calculator", &self.calculator)
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new(options: Options, store: Box<dyn FormulaStore>) -> Self {
        Self {
            formula: String::new(),
            variables: VariableMap::new(),
            calculator: Calculator::new(options),
            store,
        }
    }

    /// Create an empty session with default options
    #[must_use]
    pub fn with_store<S: FormulaStore + 'static>(store: S) -> Self {
        Self::new(Options::default(), Box::new(store))
    }

    /// The current formula
    #[must_use]
    pub fn formula(&self) -> &str {
        &self.formula
    }

    /// The current variables and their values
    #[must_use]
    pub fn variables(&self) -> &VariableMap {
        &self.variables
    }

    /// Names of the variables of the current formula, in order of first
    /// appearance
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        variables(&self.formula)
    }

    /// Replace the formula, and update the variables to match it
    pub fn set_formula<S: Into<String>>(&mut self, formula: S) {
        self.formula = formula.into();
        let previous = std::mem::take(&mut self.variables);
        self.variables = variables(&self.formula)
            .into_iter()
            .map(|name| {
                let value = previous.get(name).copied().unwrap_or(0.0);
                (name.to_owned(), value)
            })
            .collect();
        debug!("formula {:?} uses {:?}", self.formula, self.variables);
    }

    /// Give a value to one of the variables of the formula
    pub fn set_variable(&mut self, name: &str, value: f64) -> Result<(), SessionError> {
        match self.variables.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SessionError::UndefinedVariable(name.to_owned())),
        }
    }

    /// Evaluate the formula with the current variables. An empty formula
    /// has no result.
    pub fn evaluate(&self) -> Result<Option<f64>, SessionError> {
        if self.formula.trim().is_empty() {
            return Ok(None);
        }
        let result = self.calculator.evaluate(&self.formula, &self.variables)?;
        Ok(Some(result))
    }

    /// Save the formula in the store
    pub fn save(&mut self) -> Result<(), SessionError> {
        self.store.save(SAVED_FORMULA_KEY, &self.formula)?;
        debug!("saved formula {:?}", self.formula);
        Ok(())
    }

    /// Reload the saved formula, if there is one. Returns whether a formula
    /// was found.
    pub fn restore(&mut self) -> Result<bool, SessionError> {
        match self.store.load(SAVED_FORMULA_KEY)? {
            Some(formula) => {
                debug!("restored formula {:?}", formula);
                self.set_formula(formula);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
