mod environment;
mod errors;
mod interpreter;

pub use environment::VariableTable;
pub use errors::{RuntimeError, RuntimeResult};
pub use interpreter::Interpreter;
