use crate::{
    node::TreeNode,
    parse::{ParseError, PostfixToken, TokenKind},
};
use log::{debug, trace};
use smol_str::SmolStr;

/// Assemble a tree from postfix tokens.
///
/// Operands are pushed as leaves. Each operator pops its right operand, then
/// its left operand, and pushes the combined subtree. Exactly one subtree
/// must be left once every token is consumed.
pub(crate) fn build_tree(
    postfix: &[PostfixToken],
) -> Result<TreeNode<SmolStr>, ParseError> {
    let mut pending: Vec<TreeNode<SmolStr>> = Vec::new();

    for PostfixToken { text: token, index } in postfix {
        let index = *index;

        match TokenKind::classify(token) {
            TokenKind::Operand => {
                trace!("Pushing operand \"{}\"", token);
                pending.push(TreeNode::leaf(token.clone()));
            },
            TokenKind::Operator(operator) => {
                let missing = ParseError::MissingOperand { operator, index };
                let right = pending.pop().ok_or_else(|| missing.clone())?;
                let left = pending.pop().ok_or(missing)?;

                trace!("Joining two subtrees with \"{}\"", operator);
                pending.push(TreeNode::branch(token.clone(), left, right));
            },
            TokenKind::Unknown => {
                return Err(ParseError::UnknownToken {
                    token: token.clone(),
                    index,
                });
            },
        }
    }

    let root = pending.pop().ok_or(ParseError::EmptyExpression)?;

    if !pending.is_empty() {
        return Err(ParseError::DanglingOperands {
            count: pending.len() + 1,
        });
    }

    debug!("Built a tree with {} nodes", root.preorder().count());

    Ok(root)
}
