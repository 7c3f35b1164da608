use std::collections::HashMap;

use super::errors::{RuntimeError, RuntimeResult};
use crate::frontend::grammar::VariableRef;

/// Maps each variable name to the value it was most recently assigned.
#[derive(Debug, Default)]
pub struct VariableTable {
    values: HashMap<String, String>,
}

impl VariableTable {
    pub fn new() -> Self {
        VariableTable {
            values: HashMap::new(),
        }
    }

    /// Binds `name` to `value`, replacing any earlier value.
    pub fn assign(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_owned(), value.to_owned());
    }

    pub fn get(&self, variable: &VariableRef) -> RuntimeResult<&str> {
        match self.values.get(&variable.name) {
            Some(value) => Ok(value),
            None => Err(RuntimeError::UndefinedVariable {
                name: variable.name.clone(),
                line: variable.line,
            }),
        }
    }

    /// Number of distinct names assigned so far.
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut table = VariableTable::new();
        let a = VariableRef::new(3, "a");

        table.assign("a", "Old Value");
        table.assign("a", "New");
        assert_eq!(table.get(&a).unwrap(), "New");
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_undefined_variable() {
        let table = VariableTable::new();

        assert_eq!(table.len(), 0);
        match table.get(&VariableRef::new(7, "missing")) {
            Err(RuntimeError::UndefinedVariable { name, line }) => {
                assert_eq!(name, "missing");
                assert_eq!(line, 7);
            }
            other => panic!("expected undefined variable, got {:?}", other),
        }
    }
}
