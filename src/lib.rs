//! Binary expression trees for parenthesized infix arithmetic.
//!
//! An infix string is rewritten in postfix form (shunting-yard), then folded
//! into a tree where every leaf is an operand and every interior node is one
//! of `+`, `-`, `*` or `/`. The finished tree is read-only and can be walked
//! in preorder, inorder or postorder, or compared structurally with another
//! tree. Nothing is ever evaluated; nodes keep the literal token text.

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;

mod build;
mod node;
mod parse;
mod traverse;
mod tree;

pub use node::TreeNode;
pub use parse::{precedence, to_postfix, BinaryOperation, ParseError};
pub use traverse::{serialize, Inorder, Postorder, Preorder};
pub use tree::ExpressionTree;
