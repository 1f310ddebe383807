use std::any::Any;

use crate::{lexer::tokens::Token, Span};

use super::ast::{Block, Expr, ExprType, ExprWrapper};

// LITERALS

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

impl Expr for NumberExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Number
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Boolean Expression
/// Represents a `true`/`false` literal in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub value: bool,
    pub span: Span,
}

impl Expr for BooleanExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Boolean
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Character Expression
/// Represents a character literal in the AST, stored as its code point.
#[derive(Debug, Clone)]
pub struct CharacterExpr {
    pub value: u32,
    pub span: Span,
}

impl Expr for CharacterExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Character
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// String Expression
/// Represents a string literal in the AST.
#[derive(Debug, Clone)]
pub struct StringExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for StringExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::String
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

impl Expr for SymbolExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Symbol
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(self.clone())
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

// COMPLEX

/// Binary Expression
/// Represents a binary operation between two expressions in the AST.
#[derive(Debug)]
pub struct BinaryExpr {
    pub left: ExprWrapper,
    pub operator: Token,
    pub right: ExprWrapper,
    pub span: Span,
}

impl Expr for BinaryExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Binary
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(BinaryExpr {
            left: self.left.clone_wrapper(),
            operator: self.operator.clone(),
            right: self.right.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Assignment Expression
/// Represents an assignment operation in the AST. Assignment is just the
/// lowest-precedence operator, so chains like `a = b = 1` nest to the right.
#[derive(Debug)]
pub struct AssignmentExpr {
    pub assignee: ExprWrapper,
    pub operator: Token,
    pub value: ExprWrapper,
    pub span: Span,
}

impl Expr for AssignmentExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Assignment
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(AssignmentExpr {
            assignee: self.assignee.clone_wrapper(),
            operator: self.operator.clone(),
            value: self.value.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// If Expression
/// Represents a conditional in the AST. The else branch is absent when no
/// `else` keyword followed the then branch.
#[derive(Debug)]
pub struct IfExpr {
    pub condition: ExprWrapper,
    pub then_branch: ExprWrapper,
    pub else_branch: Option<ExprWrapper>,
    pub span: Span,
}

impl Expr for IfExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::If
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(IfExpr {
            condition: self.condition.clone_wrapper(),
            then_branch: self.then_branch.clone_wrapper(),
            else_branch: self.else_branch.as_ref().map(|x| x.clone_wrapper()),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Closure Expression
/// Represents an anonymous function value with a bare parameter-name list
/// and a program body.
#[derive(Debug)]
pub struct ClosureExpr {
    pub parameters: Vec<String>,
    pub body: ExprWrapper,
    pub span: Span,
}

impl Expr for ClosureExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Closure
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(ClosureExpr {
            parameters: self.parameters.clone(),
            body: self.body.clone_wrapper(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// A function parameter: a type name with an optional variable name.
/// The name may be absent in extern declarations, where only the type is
/// required.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub type_name: String,
    pub name: Option<String>,
}

/// Function Expression
/// Represents a named function in the AST. An absent body denotes an extern
/// declaration: a signature for a foreign, externally-implemented function.
#[derive(Debug)]
pub struct FunctionExpr {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Option<ExprWrapper>,
    pub span: Span,
}

impl Expr for FunctionExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Function
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(FunctionExpr {
            name: self.name.clone(),
            parameters: self.parameters.clone(),
            body: self.body.as_ref().map(|x| x.clone_wrapper()),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Call Expression
/// Represents a function call in the AST.
#[derive(Debug)]
pub struct CallExpr {
    pub callee: ExprWrapper,
    pub arguments: Vec<ExprWrapper>,
    pub span: Span,
}

impl Expr for CallExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Call
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        let cloned_args = self
            .arguments
            .iter()
            .map(|x| x.clone_wrapper())
            .collect::<Vec<ExprWrapper>>();

        ExprWrapper::new(CallExpr {
            callee: self.callee.clone_wrapper(),
            arguments: cloned_args,
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

/// Program Expression
/// Represents a `{...}` block used as an expression value. The body is
/// absent when the braces contained no expressions at all.
#[derive(Debug)]
pub struct ProgramExpr {
    pub body: Option<Block>,
    pub span: Span,
}

impl Expr for ProgramExpr {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn get_expr_type(&self) -> ExprType {
        ExprType::Program
    }
    fn clone_wrapper(&self) -> ExprWrapper {
        ExprWrapper::new(ProgramExpr {
            body: self.body.clone(),
            span: self.span.clone(),
        })
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}
