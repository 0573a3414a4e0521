use crate::traverse::{Inorder, Postorder, Preorder};

/// A node in a binary tree, exclusively owning its children.
///
/// Nodes built by [`crate::ExpressionTree`] are always either leaves (an
/// operand, no children) or branches (an operator with both children).
///
/// Traversal, equality and dropping all use an explicit stack, so they work
/// on trees of any height. The derived `Clone` and `Debug` impls recurse
/// once per level and can exhaust the call stack on very deep trees.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    token: T,
    left: Option<Box<TreeNode<T>>>,
    right: Option<Box<TreeNode<T>>>,
}

impl<T> TreeNode<T> {
    /// Create a node with no children.
    pub fn leaf(token: T) -> Self {
        TreeNode {
            token,
            left: None,
            right: None,
        }
    }

    /// Create a node which takes ownership of both of its children.
    ///
    /// Only the tree builder gets to attach children, so a node can never
    /// end up shared between two trees.
    pub(crate) fn branch(
        token: T,
        left: TreeNode<T>,
        right: TreeNode<T>,
    ) -> Self {
        TreeNode {
            token,
            left: Some(Box::new(left)),
            right: Some(Box::new(right)),
        }
    }

    pub fn token(&self) -> &T { &self.token }

    pub fn left(&self) -> Option<&TreeNode<T>> { self.left.as_deref() }

    pub fn right(&self) -> Option<&TreeNode<T>> { self.right.as_deref() }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Visit this node, then its left subtree, then its right subtree.
    pub fn preorder(&self) -> Preorder<'_, T> { Preorder::new(self) }

    /// Visit the left subtree, then this node, then the right subtree.
    pub fn inorder(&self) -> Inorder<'_, T> { Inorder::new(self) }

    /// Visit the left subtree, then the right subtree, then this node.
    pub fn postorder(&self) -> Postorder<'_, T> { Postorder::new(self) }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &TreeNode<T>) -> bool {
        deep_eq(Some(self), Some(other))
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        // detach children before they're dropped so freeing a long chain
        // doesn't recurse
        let mut pending: Vec<Box<TreeNode<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Compare two (possibly absent) subtrees by shape and token, stopping at the
/// first mismatch. Left subtrees are checked before right ones.
fn deep_eq<T: PartialEq>(
    left: Option<&TreeNode<T>>,
    right: Option<&TreeNode<T>>,
) -> bool {
    let mut pending = vec![(left, right)];

    while let Some(pair) = pending.pop() {
        match pair {
            (Some(l), Some(r)) if std::ptr::eq(l, r) => continue,
            (Some(l), Some(r)) => {
                if l.token != r.token {
                    return false;
                }
                pending.push((l.right(), r.right()));
                pending.push((l.left(), r.left()));
            },
            (None, None) => continue,
            _ => return false,
        }
    }

    true
}
