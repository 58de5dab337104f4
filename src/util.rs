use crate::token::Function;
use hashbrown::HashMap;

/// Length in bytes of every reserved function name
pub(crate) const FUNCTION_NAME_LEN: usize = 3;

lazy_static! {
    /// The reserved function names, and the function they refer to
    pub static ref FUNCTIONS: HashMap<&'static str, Function> = {
        let mut map = HashMap::<&'static str, Function>::new();
        for func in &[Function::Sin, Function::Cos, Function::Tan, Function::Log] {
            map.insert(func.name(), *func);
        }
        map.shrink_to_fit();
        map
    };
}

/// Get the function whose name starts `text`, if any
pub(crate) fn function_prefix(text: &str) -> Option<Function> {
    text.get(..FUNCTION_NAME_LEN)
        .and_then(|name| FUNCTIONS.get(name))
        .copied()
}
