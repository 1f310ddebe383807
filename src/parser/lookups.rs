use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
    /// Binding power for every operator the lexer can produce; a higher
    /// value binds tighter. Assignment sits alone at the bottom so that
    /// everything to its right is absorbed before the assignment is built.
    pub static ref OP_PRECEDENCE: HashMap<&'static str, u8> = {
        let mut map = HashMap::new();
        map.insert("=", 1);
        map.insert("||", 2);
        map.insert("&&", 3);
        map.insert("<", 7);
        map.insert(">", 7);
        map.insert("<=", 7);
        map.insert(">=", 7);
        map.insert("==", 7);
        map.insert("!=", 7);
        map.insert("+", 10);
        map.insert("-", 10);
        map.insert("*", 20);
        map.insert("/", 20);
        map.insert("%", 20);
        map
    };
}

/// Returns the binding power of an operator, or 0 for anything unknown so
/// that it never out-binds a real operator.
pub fn binding_power(op: &str) -> u8 {
    OP_PRECEDENCE.get(op).copied().unwrap_or(0)
}
