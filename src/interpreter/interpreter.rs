use super::environment::VariableTable;
use super::errors::RuntimeResult;
use crate::frontend::grammar::{Program, Stmt};

use std::io::Write;
use tracing::{debug, instrument};

pub struct Interpreter<S: Write> {
    variables: VariableTable,
    output: S,
}

impl<S: Write> Interpreter<S> {
    pub fn new(output: S) -> Self {
        Interpreter {
            variables: VariableTable::new(),
            output,
        }
    }

    /// Executes every statement once, in source order.
    #[instrument(level = "debug", skip_all, fields(count = program.statements.len()))]
    pub fn eval_program(&mut self, program: &Program) -> RuntimeResult<()> {
        let result = program
            .statements
            .iter()
            .try_for_each(|stmt| self.eval_statement(stmt));

        // Output written before a failing statement still reaches the sink.
        self.output.flush()?;
        debug!(variables = self.variables.len(), ok = result.is_ok(), "program finished");
        result
    }

    pub fn eval_statement(&mut self, stmt: &Stmt) -> RuntimeResult<()> {
        match stmt {
            Stmt::Assignment { line, target, value } => {
                debug!(line, name = %target.name, "assign");
                self.variables.assign(&target.name, value);
            }
            Stmt::Print { line, target } => {
                debug!(line, name = %target.name, "print");
                let value = self.variables.get(target)?;
                self.output.write_all(value.as_bytes())?;
            }
        }

        Ok(())
    }

    #[cfg(test)]
    fn variables(&self) -> &VariableTable {
        &self.variables
    }

    #[cfg(test)]
    fn into_output(self) -> S {
        self.output
    }
}
