use std::{
    any::Any,
    fmt::Debug,
    ops::Deref,
    slice::{Iter, IterMut},
};

use crate::Span;

/// Expression Types
///
/// Defines the various kinds of expressions in the AST. Tern is
/// expression-oriented, so this closed set covers the whole language.
#[derive(PartialEq, Clone, Debug)]
pub enum ExprType {
    Number,
    Boolean,
    Character,
    String,
    Symbol,
    Assignment,
    Binary,
    If,
    Closure,
    Function,
    Call,
    Program,
}

pub trait Expr: Debug {
    /// Returns the expression type of the expression.
    fn get_expr_type(&self) -> ExprType;
    /// Type conversion purposes - used with `.downcast_ref::<T>()`
    fn as_any(&self) -> &dyn Any;
    /// Clones the expression into an ExprWrapper.
    /// Clone cannot be derived for certain trait objects, so this method is necessary.
    fn clone_wrapper(&self) -> ExprWrapper;
    /// Returns the span of the expression.
    fn get_span(&self) -> &Span;
}

/// Expression Wrapper
///
/// A wrapper that allows for any expression kind to be stored with helper methods
#[derive(Debug)]
pub struct ExprWrapper(Box<dyn Expr>);

impl ExprWrapper {
    pub fn new<T: Expr + 'static>(expression: T) -> Self {
        ExprWrapper(Box::new(expression))
    }
}

impl Deref for ExprWrapper {
    type Target = Box<dyn Expr>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Expr for ExprWrapper {
    fn get_expr_type(&self) -> ExprType {
        self.0.get_expr_type()
    }
    fn as_any(&self) -> &dyn Any {
        self.0.as_any()
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        self.0.clone_wrapper()
    }
    fn get_span(&self) -> &Span {
        self.0.get_span()
    }
}

impl Clone for ExprWrapper {
    fn clone(&self) -> Self {
        self.clone_wrapper()
    }
}

/// A `;`-separated sequence of expressions inside `{`/`}` delimiters.
///
/// A Block is only ever constructed with at least one expression; an empty
/// `{}` is represented as an absent body on the enclosing node instead.
#[derive(Debug, Clone)]
pub struct Block {
    pub body: Vec<ExprWrapper>,
    pub span: Span,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, ExprWrapper> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, ExprWrapper> {
        self.body.iter_mut()
    }
}

/// The top-level parse artifact: the ordered sequence of expressions found
/// at file scope. Owned by the caller of `parser::parser::parse`.
#[derive(Debug, Clone)]
pub struct Ast {
    pub body: Vec<ExprWrapper>,
    pub span: Span,
}

impl Ast {
    pub fn iter(&self) -> Iter<'_, ExprWrapper> {
        self.body.iter()
    }
    pub fn iter_mut(&mut self) -> IterMut<'_, ExprWrapper> {
        self.body.iter_mut()
    }
}
