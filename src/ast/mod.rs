/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: Core AST definitions and traits
/// - expressions: Definitions for the expression node kinds
pub mod ast;
pub mod expressions;
