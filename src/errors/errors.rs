use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MissingPunctuation { .. } => "MissingPunctuation",
            ErrorImpl::MissingKeyword { .. } => "MissingKeyword",
            ErrorImpl::MissingOperator { .. } => "MissingOperator",
            ErrorImpl::InvalidName { .. } => "InvalidName",
            ErrorImpl::InvalidNumericLiteral { .. } => "InvalidNumericLiteral",
            ErrorImpl::UnexpectedEndOfInput { .. } => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token \"{}\"", token))
            }
            ErrorImpl::MissingPunctuation { expected } => {
                ErrorTip::Suggestion(format!("Token '{}' expected", expected))
            }
            ErrorImpl::MissingKeyword { expected } => {
                ErrorTip::Suggestion(format!("Keyword \"{}\" expected", expected))
            }
            ErrorImpl::MissingOperator { expected } => {
                ErrorTip::Suggestion(format!("Operator '{}' expected", expected))
            }
            ErrorImpl::InvalidName { expected, token } => {
                ErrorTip::Suggestion(format!("{} expected, found \"{}\"", expected, token))
            }
            ErrorImpl::InvalidNumericLiteral { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedEndOfInput { expected } => ErrorTip::Suggestion(format!(
                "Unexpected end of input, token '{}' expected",
                expected
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("token {expected:?} expected")]
    MissingPunctuation { expected: char },
    #[error("keyword {expected:?} expected")]
    MissingKeyword { expected: String },
    #[error("operator {expected:?} expected")]
    MissingOperator { expected: String },
    #[error("{expected} expected, found {token:?}")]
    InvalidName { expected: String, token: String },
    #[error("error parsing number: {token:?}")]
    InvalidNumericLiteral { token: String },
    #[error("unexpected end of input, token {expected:?} expected")]
    UnexpectedEndOfInput { expected: char },
}
