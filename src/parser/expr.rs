use crate::{
    ast::{
        ast::{Block, Expr, ExprWrapper},
        expressions::{
            AssignmentExpr, BinaryExpr, BooleanExpr, CallExpr, CharacterExpr, ClosureExpr,
            FunctionExpr, IfExpr, NumberExpr, Parameter, ProgramExpr, StringExpr, SymbolExpr,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::binding_power, parser::Parser};

/// Parses one full expression: an atom combined with any following binary
/// and assignment operators, then optionally wrapped in a call.
pub fn parse_expr(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    maybe_call(parser, |parser| {
        let left = parse_atom(parser)?;
        maybe_binary(parser, left, 0)
    })
}

/// Precedence climbing. Absorbs operators that bind tighter than `min_bp`
/// onto `left` and returns `left` unchanged otherwise.
///
/// The right operand is parsed with the consumed operator's own binding
/// power as the new floor, and the node built from it re-climbs at the
/// original floor. Equal-precedence operators therefore associate left, and
/// `=` (the lowest entry in the table) ends up chaining right purely
/// through that same construction.
fn maybe_binary(parser: &mut Parser, left: ExprWrapper, min_bp: u8) -> Result<ExprWrapper, Error> {
    if parser.at_operator(None) {
        let token = parser.current_token().clone();
        let bp = binding_power(&token.value);
        if bp > min_bp {
            parser.advance();
            let atom = parse_atom(parser)?;
            let right = maybe_binary(parser, atom, bp)?;

            let span = Span {
                start: left.get_span().start.clone(),
                end: right.get_span().end.clone(),
            };
            let node = if token.value == "=" {
                ExprWrapper::new(AssignmentExpr {
                    assignee: left,
                    operator: token,
                    value: right,
                    span,
                })
            } else {
                ExprWrapper::new(BinaryExpr {
                    left,
                    operator: token,
                    right,
                    span,
                })
            };

            return maybe_binary(parser, node, min_bp);
        }
    }

    Ok(left)
}

/// Runs `parse` and, if the very next token is `(`, reinterprets the result
/// as the callee of a call expression. The wrap is applied once, not in a
/// loop; `parse_expr` applies it a second time around the whole expression,
/// which is what makes `f()()` parse while `f()()()` does not.
fn maybe_call(
    parser: &mut Parser,
    parse: impl FnOnce(&mut Parser) -> Result<ExprWrapper, Error>,
) -> Result<ExprWrapper, Error> {
    let result = parse(parser)?;

    if parser.at_punc(Some('(')) {
        parse_call(parser, result)
    } else {
        Ok(result)
    }
}

fn parse_call(parser: &mut Parser, callee: ExprWrapper) -> Result<ExprWrapper, Error> {
    let arguments = parser.delimited('(', ')', ',', parse_expr)?;

    Ok(ExprWrapper::new(CallExpr {
        span: Span {
            start: callee.get_span().start.clone(),
            end: parser.get_position(),
        },
        callee,
        arguments,
    }))
}

/// Parses one primary form. Dispatch order matters: keywords and
/// punctuation are tried first, and only then is the token consumed and
/// classified as a literal or identifier.
pub fn parse_atom(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    maybe_call(parser, |parser| {
        if parser.at_keyword(Some("ext")) {
            return parse_extern_decl(parser);
        }
        if parser.at_keyword(Some("def")) {
            return parse_function_decl(parser);
        }
        if parser.at_punc(Some('(')) {
            // Grouping has no node of its own.
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.skip_punc(')')?;
            return Ok(expr);
        }
        if parser.at_punc(Some('{')) {
            return parse_program(parser);
        }
        if parser.at_keyword(Some("if")) {
            return parse_if(parser);
        }
        if parser.at_keyword(Some("true")) || parser.at_keyword(Some("false")) {
            return parse_bool(parser);
        }
        if parser.at_keyword(Some("cls")) {
            parser.advance();
            return parse_closure(parser);
        }

        let token = parser.advance().clone();
        match token.kind {
            TokenKind::Identifier => Ok(ExprWrapper::new(SymbolExpr {
                value: token.value,
                span: token.span,
            })),
            TokenKind::Number => {
                let result = token.value.parse();

                if result.is_err() {
                    Err(Error::new(
                        ErrorImpl::InvalidNumericLiteral {
                            token: token.value.clone(),
                        },
                        token.span.start.clone(),
                    ))
                } else {
                    Ok(ExprWrapper::new(NumberExpr {
                        value: result.unwrap(),
                        span: token.span,
                    }))
                }
            }
            TokenKind::Character => Ok(ExprWrapper::new(CharacterExpr {
                value: token.value.chars().next().map_or(0, |c| c as u32),
                span: token.span,
            })),
            TokenKind::String => Ok(ExprWrapper::new(StringExpr {
                value: token.value,
                span: token.span,
            })),
            _ => Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    token: token.value.clone(),
                },
                token.span.start.clone(),
            )),
        }
    })
}

fn parse_bool(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let token = parser.advance().clone();

    Ok(ExprWrapper::new(BooleanExpr {
        value: token.value == "true",
        span: token.span,
    }))
}

fn parse_varname(parser: &mut Parser) -> Result<String, Error> {
    let token = parser.advance().clone();
    if token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::InvalidName {
                expected: String::from("Variable name"),
                token: token.value,
            },
            token.span.start,
        ));
    }

    Ok(token.value)
}

/// Parses a closure body: a bare parameter-name list followed by a program
/// block. The `cls` keyword has already been consumed by the atom dispatch.
fn parse_closure(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.get_position();
    let parameters = parser.delimited('(', ')', ',', parse_varname)?;
    let body = parse_program(parser)?;

    Ok(ExprWrapper::new(ClosureExpr {
        parameters,
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        body,
    }))
}

fn parse_if(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.skip_keyword("if")?.span.start;

    let condition = parse_expr(parser)?;
    let then_branch = parse_expr(parser)?;

    let else_branch = if parser.at_keyword(Some("else")) {
        parser.advance();
        Some(parse_expr(parser)?)
    } else {
        None
    };

    Ok(ExprWrapper::new(IfExpr {
        span: Span {
            start,
            end: else_branch
                .as_ref()
                .unwrap_or(&then_branch)
                .get_span()
                .end
                .clone(),
        },
        condition,
        then_branch,
        else_branch,
    }))
}

/// Parses one parameter: a mandatory type name optionally followed by a
/// variable name.
fn parse_param(parser: &mut Parser) -> Result<Parameter, Error> {
    let type_token = parser.advance().clone();
    if type_token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::InvalidName {
                expected: String::from("Type name"),
                token: type_token.value,
            },
            type_token.span.start,
        ));
    }

    let name = if parser.current_token_kind() == TokenKind::Identifier {
        Some(parser.advance().value.clone())
    } else {
        None
    };

    Ok(Parameter {
        type_name: type_token.value,
        name,
    })
}

/// Parses an extern declaration: a function signature with no body.
fn parse_extern_decl(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.skip_keyword("ext")?.span.start;

    let name_token = parser.advance().clone();
    if name_token.kind != TokenKind::Identifier {
        return Err(Error::new(
            ErrorImpl::InvalidName {
                expected: String::from("Function name"),
                token: name_token.value,
            },
            name_token.span.start,
        ));
    }

    let parameters = parser.delimited('(', ')', ',', parse_param)?;

    Ok(ExprWrapper::new(FunctionExpr {
        name: name_token.value,
        parameters,
        body: None,
        span: Span {
            start,
            end: parser.get_position(),
        },
    }))
}

/// Parses a function definition. The parameter list is optional; absent
/// parens mean zero parameters. The name token is taken as-is here, while
/// extern declarations validate that theirs is an identifier.
fn parse_function_decl(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.advance().span.start.clone();

    let name = parser.advance().value.clone();

    let parameters = if parser.at_punc(Some('(')) {
        parser.delimited('(', ')', ',', parse_param)?
    } else {
        vec![]
    };

    let body = parse_expr(parser)?;

    Ok(ExprWrapper::new(FunctionExpr {
        name,
        parameters,
        span: Span {
            start,
            end: body.get_span().end.clone(),
        },
        body: Some(body),
    }))
}

/// Parses a `{`/`}`-delimited, `;`-separated program block. Empty braces
/// produce a program with an absent body rather than an empty block.
pub fn parse_program(parser: &mut Parser) -> Result<ExprWrapper, Error> {
    let start = parser.get_position();
    let body = parser.delimited('{', '}', ';', parse_expr)?;
    let end = parser.get_position();

    let block = if body.is_empty() {
        None
    } else {
        Some(Block {
            body,
            span: Span {
                start: start.clone(),
                end: end.clone(),
            },
        })
    };

    Ok(ExprWrapper::new(ProgramExpr {
        body: block,
        span: Span { start, end },
    }))
}
