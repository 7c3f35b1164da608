pub mod errors;
pub mod frontend;
pub mod interpreter;

pub use errors::{Error, Result};

use frontend::Parser;
use interpreter::Interpreter;

use std::io::Write;
use std::path::Path;
use tracing::{debug, instrument};

/// Reads a whole script into memory.
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_owned(),
        source,
    })
}

/// Parses `source` completely, then evaluates it, writing printed values to
/// `output`. Nothing is evaluated if parsing fails.
#[instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn run<W: Write>(source: &str, output: W) -> Result<()> {
    let program = Parser::new(source).parse()?;
    debug!(statements = program.statements.len(), "parsed program");

    let mut interpreter = Interpreter::new(output);
    interpreter.eval_program(&program)?;

    Ok(())
}
