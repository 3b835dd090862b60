//! Bracketed-expression parser.
//!
//! Turns text such as `(A (B 3 5) (C 6))` into a `GameTree`. Internal nodes
//! are `(NAME child*)`, leaves are base-10 integers.

pub mod error;
pub mod sexpr;
pub mod tokenizer;

pub use error::{FormatError, ParseResult};
pub use sexpr::{parse, parse_with, ParseConfig};
pub use tokenizer::tokenize;
