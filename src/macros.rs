//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for tokens whose
//!   text is a fixed literal (operators and punctuation)

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a lexer handler for fixed-literal patterns.
///
/// Generates a handler that pushes a token with the given kind and value
/// and advances the lexer position by the literal's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("\\+").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Operator, "+"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut Lexer, _regex: Regex| {
            lexer.push(MK_TOKEN!(
                $kind,
                String::from($value),
                Span {
                    start: Position(lexer.pos as u32, Rc::clone(&lexer.file)),
                    end: Position(
                        (lexer.pos + $value.len() as i32) as u32,
                        Rc::clone(&lexer.file)
                    )
                }
            ));
            lexer.advance_n($value.len().try_into().unwrap());
        }
    };
}
