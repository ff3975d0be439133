//! Parser for the surface syntax
//!
//! Recursive descent with precedence climbing
//! (<https://www.engr.mun.ca/~theo/Misc/exp_parsing.htm#climbing>).
//! Application is the only operator: it is left-associative and binds
//! tighter than a lambda body, which extends as far right as possible.
//!
//! Top-level grammar:
//!
//! ```text
//! item  := NAME '=' expr | expr
//! expr  := prefix { prefix }            (left-associative application)
//! prefix := VAR | NAME | '(' expr ')' | '\' VAR+ '.' expr
//! ```

use crate::ast::Term;
use crate::lexer::{tokenize, LexError, Token};
use std::ops::Range;
use thiserror::Error;

/// Parse errors, carrying the byte offset of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error("expected {expected}, got {found} at byte {position}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        position: usize,
    },

    #[error("expected {expected}, got end of input")]
    UnexpectedEof { expected: &'static str },
}

/// Parse a single top-level item: a definition or an expression.
///
/// Returns `None` for input that is empty (or all comments/newlines).
/// Trailing tokens after the item are an error.
pub fn parse_item(input: &str) -> Result<Option<Term>, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    parser.skip_newlines();
    if parser.at_end() {
        return Ok(None);
    }
    let item = parser.parse_toplevel()?;
    parser.skip_newlines();
    parser.expect_end()?;
    Ok(Some(item))
}

/// Parse a whole source file: newline-separated top-level items.
pub fn parse_program(input: &str) -> Result<Vec<Term>, ParseError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser::new(&tokens);
    let mut items = Vec::new();
    loop {
        parser.skip_newlines();
        if parser.at_end() {
            return Ok(items);
        }
        items.push(parser.parse_toplevel()?);
        if !parser.at_end() {
            parser.expect(Token::Newline, "newline")?;
        }
    }
}

struct Parser<'t, 'a> {
    tokens: &'t [(Token<'a>, Range<usize>)],
    position: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn new(tokens: &'t [(Token<'a>, Range<usize>)]) -> Self {
        Parser {
            tokens,
            position: 0,
        }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.position).map(|(t, _)| *t)
    }

    fn advance(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.position += 1;
        }
        token
    }

    fn at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn skip_newlines(&mut self) {
        while self.peek() == Some(Token::Newline) {
            self.position += 1;
        }
    }

    fn position_of_current(&self) -> usize {
        self.tokens
            .get(self.position)
            .map(|(_, span)| span.start)
            .unwrap_or(0)
    }

    fn unexpected(&self, expected: &'static str) -> ParseError {
        match self.peek() {
            Some(token) => ParseError::UnexpectedToken {
                expected,
                found: token.describe(),
                position: self.position_of_current(),
            },
            None => ParseError::UnexpectedEof { expected },
        }
    }

    fn expect(&mut self, token: Token<'a>, expected: &'static str) -> Result<(), ParseError> {
        if self.peek() == Some(token) {
            self.position += 1;
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_end(&self) -> Result<(), ParseError> {
        if self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected("end of input"))
        }
    }

    /// item := NAME '=' expr | expr
    fn parse_toplevel(&mut self) -> Result<Term, ParseError> {
        if let (Some(Token::Name(name)), Some(Token::Define)) = (
            self.peek(),
            self.tokens.get(self.position + 1).map(|(t, _)| *t),
        ) {
            self.position += 2;
            let body = self.parse_expr()?;
            return Ok(Term::def(name, body));
        }
        self.parse_expr()
    }

    /// expr := prefix { prefix }, folding applications to the left.
    fn parse_expr(&mut self) -> Result<Term, ParseError> {
        let mut expr = self.parse_prefix()?;
        // FIRST(prefix) decides whether the next token starts an operand.
        while matches!(
            self.peek(),
            Some(Token::Var(_) | Token::Name(_) | Token::LParen | Token::Lambda)
        ) {
            let operand = self.parse_prefix()?;
            expr = Term::app(expr, operand);
        }
        Ok(expr)
    }

    fn parse_prefix(&mut self) -> Result<Term, ParseError> {
        match self.peek() {
            Some(Token::Var(name)) => {
                self.position += 1;
                Ok(Term::var(name))
            }
            Some(Token::Name(name)) => {
                self.position += 1;
                Ok(Term::name(name))
            }
            Some(Token::LParen) => {
                self.position += 1;
                let expr = self.parse_expr()?;
                self.expect(Token::RParen, "')'")?;
                Ok(expr)
            }
            Some(Token::Lambda) => self.parse_lambda(),
            _ => Err(self.unexpected("variable, name, '(' or '\\'")),
        }
    }

    /// '\' VAR+ '.' expr, desugared into nested single-parameter lambdas.
    fn parse_lambda(&mut self) -> Result<Term, ParseError> {
        self.expect(Token::Lambda, "'\\'")?;

        let mut params = Vec::new();
        while let Some(Token::Var(name)) = self.peek() {
            self.position += 1;
            params.push(name.to_string());
        }
        if params.is_empty() {
            return Err(self.unexpected("parameter variable"));
        }

        self.expect(Token::Period, "'.'")?;
        // The body swallows everything to the right.
        let body = self.parse_expr()?;

        let mut term = body;
        for param in params.into_iter().rev() {
            term = Term::lam(param, term);
        }
        Ok(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Term {
        parse_item(input).unwrap().unwrap()
    }

    #[test]
    fn test_application_left_associative() {
        assert_eq!(
            parse("a b c"),
            Term::app(Term::app(Term::var("a"), Term::var("b")), Term::var("c"))
        );
    }

    #[test]
    fn test_grouping_overrides_associativity() {
        assert_eq!(
            parse("a (b c)"),
            Term::app(Term::var("a"), Term::app(Term::var("b"), Term::var("c")))
        );
    }

    #[test]
    fn test_lambda_body_extends_right() {
        assert_eq!(
            parse(r"\x. x y"),
            Term::lam("x", Term::app(Term::var("x"), Term::var("y")))
        );
    }

    #[test]
    fn test_multi_parameter_desugaring() {
        assert_eq!(
            parse(r"\x y z. x"),
            Term::lam("x", Term::lam("y", Term::lam("z", Term::var("x"))))
        );
    }

    #[test]
    fn test_lambda_as_operand() {
        // A lambda in operand position still swallows the rest of the line.
        assert_eq!(
            parse(r"a \x. x b"),
            Term::app(
                Term::var("a"),
                Term::lam("x", Term::app(Term::var("x"), Term::var("b")))
            )
        );
    }

    #[test]
    fn test_definition() {
        assert_eq!(
            parse(r"TRUE = \x y. x"),
            Term::def("TRUE", Term::lam("x", Term::lam("y", Term::var("x"))))
        );
    }

    #[test]
    fn test_name_reference_in_expression() {
        assert_eq!(
            parse("TRUE x"),
            Term::app(Term::name("TRUE"), Term::var("x"))
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_item("").unwrap(), None);
        assert_eq!(parse_item("  # just a comment\n").unwrap(), None);
    }

    #[test]
    fn test_program_multiline() {
        let items = parse_program("TRUE = \\x y. x\n\nFALSE = \\x y. y\nTRUE\n").unwrap();
        assert_eq!(items.len(), 3);
        assert!(items[0].is_def());
        assert!(items[1].is_def());
        assert_eq!(items[2], Term::name("TRUE"));
    }

    #[test]
    fn test_error_carries_position() {
        let err = parse_item(r"\x. )").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedToken {
                expected: "variable, name, '(' or '\\'",
                found: "')'".to_string(),
                position: 4,
            }
        );
    }

    #[test]
    fn test_unclosed_group() {
        let err = parse_item("(x y").unwrap_err();
        assert_eq!(err, ParseError::UnexpectedEof { expected: "')'" });
    }

    #[test]
    fn test_missing_parameter() {
        assert!(parse_item(r"\. x").is_err());
    }

    #[test]
    fn test_stray_define() {
        assert!(parse_item("x = y").is_err());
    }
}
