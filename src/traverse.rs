//! Depth-first walks over a [`TreeNode`].
//!
//! Each walk keeps an explicit stack instead of recursing, so arbitrarily
//! deep trees can be traversed without exhausting the call stack. See
//! [`TreeNode`] for which other operations are safe on deep trees.

use crate::node::TreeNode;
use std::borrow::Borrow;

/// Iterator over a tree in preorder (node, left, right).
#[derive(Debug, Clone)]
pub struct Preorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>) -> Self {
        Preorder { stack: vec![root] }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // right goes on first so the left subtree is popped before it
        self.stack.extend(node.right());
        self.stack.extend(node.left());

        Some(node)
    }
}

/// Iterator over a tree in inorder (left, node, right).
#[derive(Debug, Clone)]
pub struct Inorder<'a, T> {
    stack: Vec<&'a TreeNode<T>>,
    cursor: Option<&'a TreeNode<T>>,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>) -> Self {
        Inorder {
            stack: Vec::new(),
            cursor: Some(root),
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.cursor {
            self.stack.push(node);
            self.cursor = node.left();
        }

        let node = self.stack.pop()?;
        self.cursor = node.right();

        Some(node)
    }
}

/// Iterator over a tree in postorder (left, right, node).
#[derive(Debug, Clone)]
pub struct Postorder<'a, T> {
    /// Pending nodes, flagged with whether their children were already
    /// scheduled.
    stack: Vec<(&'a TreeNode<T>, bool)>,
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: &'a TreeNode<T>) -> Self {
        Postorder {
            stack: vec![(root, false)],
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;

            if expanded {
                return Some(node);
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }
}

/// Join the tokens of some nodes, writing a space before every token.
///
/// ```rust
/// # use exptree::ExpressionTree;
/// let tree = ExpressionTree::new("1 + 2").unwrap();
///
/// let got = exptree::serialize(tree.root().postorder());
///
/// assert_eq!(got, " 1 2 +");
/// ```
pub fn serialize<'a, T, I>(nodes: I) -> String
where
    T: Borrow<str> + 'a,
    I: IntoIterator<Item = &'a TreeNode<T>>,
{
    let mut buffer = String::new();

    for node in nodes {
        buffer.push(' ');
        buffer.push_str(Borrow::<str>::borrow(node.token()));
    }

    buffer
}
