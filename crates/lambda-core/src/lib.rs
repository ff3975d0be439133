//! Surface syntax for the lambda interpreter.
//!
//! This crate covers everything up to (and including) the parse tree:
//! tokenization, the surface AST with named binders, and the
//! precedence-climbing parser. Evaluation lives in `lambda-eval`.

pub mod ast;
pub mod lexer;
pub mod parser;

pub use ast::Term;
pub use lexer::{tokenize, Token};
pub use parser::{parse_item, parse_program, ParseError};
