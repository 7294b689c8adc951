use std::collections::HashMap;
use crate::interpreter::value::Value;

/// Flat variable store shared by every form evaluated in a session. No scopes, no shadowing.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Environment {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds `name`, replacing any earlier value.
    pub fn define(&mut self, name: String, value: Value) {
        tracing::debug!(%name, %value, "variable bound");
        self.variables.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
