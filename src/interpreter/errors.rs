use thiserror::Error;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("UndefinedVariableError: undefined variable `${name}` on line {line}")]
    UndefinedVariable { name: String, line: usize },

    #[error("OutputError: {0}")]
    Output(#[from] std::io::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
