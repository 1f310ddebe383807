use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashSet<&'static str> = {
        let mut set = HashSet::new();
        set.insert("ext");
        set.insert("def");
        set.insert("cls");
        set.insert("if");
        set.insert("else");
        set.insert("true");
        set.insert("false");
        set
    };
}

/// The token kinds the parser dispatches on. The literal text of the token
/// is carried separately in `Token::value`, so one kind covers all
/// operators, one all punctuation and one all keywords.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    String,
    Character,
    Identifier,
    Keyword,
    Operator,
    Punctuation,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![TokenKind::EOF]) {
            println!("{} ()", self.kind);
        } else {
            println!("{} ({})", self.kind, self.value);
        }
    }
}
