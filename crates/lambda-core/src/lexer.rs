//! Lambda calculus lexer
//!
//! Tokenizes interpreter input using the logos crate. Newlines are
//! significant: they separate top-level items, so they are tokens
//! rather than skipped whitespace.

use logos::Logos;
use std::ops::Range;

/// Lambda calculus tokens
///
/// Variables are lowercase-led identifiers, definition names are
/// uppercase-led. The case rule is what lets the parser tell a bound
/// variable from a reference to a stored definition.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r]+")]
#[logos(skip r"#[^\n]*")]
pub enum Token<'a> {
    /// Lambda binder
    #[token("\\")]
    #[token("λ")]
    Lambda,

    /// Separates a binder's parameters from its body
    #[token(".")]
    Period,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    /// Definition operator: `NAME = expr`
    #[token("=")]
    Define,

    /// Top-level item separator
    #[token("\n")]
    Newline,

    /// Variable identifier
    #[regex(r"[a-z][a-z0-9_']*", |lex| lex.slice())]
    Var(&'a str),

    /// Definition name
    #[regex(r"[A-Z][A-Za-z0-9_]*", |lex| lex.slice())]
    Name(&'a str),
}

impl Token<'_> {
    /// Human-readable token description for error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Lambda => "'\\'".to_string(),
            Token::Period => "'.'".to_string(),
            Token::LParen => "'('".to_string(),
            Token::RParen => "')'".to_string(),
            Token::Define => "'='".to_string(),
            Token::Newline => "newline".to_string(),
            Token::Var(v) => format!("variable '{v}'"),
            Token::Name(n) => format!("name '{n}'"),
        }
    }
}

/// Tokenize an input string, keeping byte spans for error reporting.
///
/// An unrecognized character is reported with its byte offset rather
/// than silently dropped.
pub fn tokenize(input: &str) -> Result<Vec<(Token<'_>, Range<usize>)>, LexError> {
    let mut lexer = Token::lexer(input);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push((token, lexer.span())),
            Err(()) => {
                return Err(LexError {
                    position: lexer.span().start,
                    fragment: lexer.slice().to_string(),
                })
            }
        }
    }
    Ok(tokens)
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized character '{fragment}' at byte {position}")]
pub struct LexError {
    /// Byte offset in the input where the error occurred
    pub position: usize,
    /// The offending input fragment
    pub fragment: String,
}
