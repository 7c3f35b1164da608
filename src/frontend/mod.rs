pub mod cursor;
pub mod errors;
pub mod grammar;
pub mod lexer;
pub mod parser;
pub mod token;

pub use errors::{FrontendError, FrontendResult};
pub use lexer::Lexer;
pub use parser::Parser;
