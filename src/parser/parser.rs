//! Parser state and token consumption helpers.
//!
//! This module contains the main Parser struct, the one-token-lookahead
//! predicates and skip helpers, the generic delimited-list routine, and the
//! top-level parse driver. The grammar productions themselves live in
//! `expr.rs`.

use std::rc::Rc;

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, Span,
};

use super::expr::parse_expr;

/// The main parser structure that maintains parsing state.
///
/// This struct owns the token stream and tracks the current position in it.
/// All parsing functions borrow it mutably, so one Parser drives exactly one
/// parse; independent parses never share state.
pub struct Parser {
    /// The list of tokens to parse, terminated by an EOF token
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: i32,
    /// The name of the source file being parsed
    file: Rc<String>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, file: Rc<String>) -> Self {
        Parser {
            tokens,
            pos: 0,
            file,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        self.tokens.get(self.pos as usize).unwrap()
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.tokens.get(self.pos as usize).unwrap().kind
    }

    /// Advances to the next token and returns the previous token. The EOF
    /// terminator is never consumed, so the lookahead stays valid no matter
    /// how many tokens a production tries to take.
    pub fn advance(&mut self) -> &Token {
        if self.current_token_kind() == TokenKind::EOF {
            return self.current_token();
        }

        self.pos += 1;
        self.tokens.get((self.pos - 1) as usize).unwrap()
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.pos + 1 < self.tokens.len() as i32 && self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the source position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }

    /// Checks whether the lookahead is punctuation, optionally with the
    /// given character. `None` matches any punctuation token.
    pub fn at_punc(&self, ch: Option<char>) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Punctuation
            && match ch {
                Some(ch) => token.value.chars().next() == Some(ch),
                None => true,
            }
    }

    /// Checks whether the lookahead is a keyword, optionally the given one.
    pub fn at_keyword(&self, kw: Option<&str>) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Keyword
            && match kw {
                Some(kw) => token.value == kw,
                None => true,
            }
    }

    /// Checks whether the lookahead is an operator, optionally the given one.
    pub fn at_operator(&self, op: Option<&str>) -> bool {
        let token = self.current_token();
        token.kind == TokenKind::Operator
            && match op {
                Some(op) => token.value == op,
                None => true,
            }
    }

    /// Consumes the given punctuation character or fails.
    pub fn skip_punc(&mut self, ch: char) -> Result<Token, Error> {
        if self.at_punc(Some(ch)) {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::MissingPunctuation { expected: ch },
                self.get_position(),
            ))
        }
    }

    /// Consumes the given keyword or fails.
    pub fn skip_keyword(&mut self, kw: &str) -> Result<Token, Error> {
        if self.at_keyword(Some(kw)) {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::MissingKeyword {
                    expected: kw.to_string(),
                },
                self.get_position(),
            ))
        }
    }

    /// Consumes the given operator or fails.
    pub fn skip_operator(&mut self, op: &str) -> Result<Token, Error> {
        if self.at_operator(Some(op)) {
            Ok(self.advance().clone())
        } else {
            Err(Error::new(
                ErrorImpl::MissingOperator {
                    expected: op.to_string(),
                },
                self.get_position(),
            ))
        }
    }

    /// Parses a `start`/`end`-delimited, `separator`-separated sequence of
    /// items produced by `item`. Used for parameter lists, argument lists
    /// and program blocks alike.
    ///
    /// A separator directly before the closing delimiter is tolerated; the
    /// stream ending before the closing delimiter is not.
    pub fn delimited<T>(
        &mut self,
        start: char,
        end: char,
        separator: char,
        item: fn(&mut Parser) -> Result<T, Error>,
    ) -> Result<Vec<T>, Error> {
        let mut list = Vec::new();
        let mut first = true;

        self.skip_punc(start)?;
        while self.has_tokens() {
            if self.at_punc(Some(end)) {
                break;
            }
            if first {
                first = false;
            } else {
                self.skip_punc(separator)?;
            }
            // Re-check so a trailing separator falls through to the close.
            if self.at_punc(Some(end)) {
                break;
            }
            list.push(item(self)?);
        }

        if !self.at_punc(Some(end)) {
            return Err(Error::new(
                ErrorImpl::UnexpectedEndOfInput { expected: end },
                self.get_position(),
            ));
        }
        self.advance();

        Ok(list)
    }
}

/// Parses a stream of tokens into an Abstract Syntax Tree.
///
/// This is the main entry point for parsing. Top-level expressions are
/// separated by `;`; the separator after the final expression is optional.
/// The first error aborts the parse, so the caller gets either a complete
/// AST or exactly one error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> Result<Ast, Error> {
    let mut parser = Parser::new(tokens, file);

    let mut body = vec![];

    while parser.has_tokens() {
        body.push(parse_expr(&mut parser)?);
        if parser.has_tokens() {
            parser.skip_punc(';')?;
        }
    }

    Ok(Ast {
        body,
        span: Span {
            start: Position(0, Rc::clone(&parser.file)),
            end: parser.get_position(),
        },
    })
}
