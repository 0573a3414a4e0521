use crate::{
    build::build_tree,
    node::TreeNode,
    parse::{self, ParseError},
    traverse,
};
use smol_str::SmolStr;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A binary expression tree built from parenthesized infix text.
///
/// Leaves hold operands and interior nodes hold one of `+`, `-`, `*` or `/`.
/// Parentheses only steer how the tree is built and never appear in it.
///
/// Serializing, comparing and dropping work on trees of any height. `Clone`
/// and `Debug` recurse once per level of the tree.
///
/// ```rust
/// use exptree::ExpressionTree;
///
/// let tree = ExpressionTree::new("(1 + 2) * 3").unwrap();
///
/// assert_eq!(tree.prefix_string(), " * + 1 2 3");
/// assert_eq!(tree.postfix_string(), " 1 2 + 3 *");
/// assert_eq!(tree, ExpressionTree::new("((1 + 2)) * (3)").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ExpressionTree {
    infix: String,
    root: TreeNode<SmolStr>,
}

impl ExpressionTree {
    /// Convert `infix` to postfix and build a tree from it.
    ///
    /// Malformed input is rejected outright; a partially built tree is never
    /// returned.
    pub fn new<S: Into<String>>(infix: S) -> Result<Self, ParseError> {
        let infix = infix.into();
        let postfix = parse::postfix_tokens(&infix)?;
        let root = build_tree(&postfix)?;

        Ok(ExpressionTree { infix, root })
    }

    /// The text this tree was built from, exactly as it was given.
    pub fn infix(&self) -> &str { &self.infix }

    pub fn root(&self) -> &TreeNode<SmolStr> { &self.root }

    pub fn prefix_string(&self) -> String {
        traverse::serialize(self.root.preorder())
    }

    pub fn inorder_string(&self) -> String {
        traverse::serialize(self.root.inorder())
    }

    pub fn postfix_string(&self) -> String {
        traverse::serialize(self.root.postorder())
    }

    pub fn preorder_nodes(&self) -> Vec<&TreeNode<SmolStr>> {
        self.root.preorder().collect()
    }

    pub fn inorder_nodes(&self) -> Vec<&TreeNode<SmolStr>> {
        self.root.inorder().collect()
    }

    pub fn postorder_nodes(&self) -> Vec<&TreeNode<SmolStr>> {
        self.root.postorder().collect()
    }
}

impl FromStr for ExpressionTree {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { ExpressionTree::new(s) }
}

/// Trees are equal when they have the same shape and tokens. The original
/// infix text is ignored.
impl PartialEq for ExpressionTree {
    fn eq(&self, other: &ExpressionTree) -> bool { self.root == other.root }
}

impl Eq for ExpressionTree {}

impl Display for ExpressionTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Expression Tree")?;
        writeln!(f, "Infix: {}", self.infix)?;
        writeln!(f, "Prefix:{}", self.prefix_string())?;
        write!(f, "Postfix:{}", self.postfix_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! serialization_test {
        (
            $name:ident,
            $src:expr,
            $prefix:expr,
            $inorder:expr,
            $postfix:expr
        ) => {
            #[test]
            fn $name() {
                let tree = ExpressionTree::new($src).unwrap();

                assert_eq!(tree.prefix_string(), $prefix);
                assert_eq!(tree.inorder_string(), $inorder);
                assert_eq!(tree.postfix_string(), $postfix);
            }
        };
    }

    serialization_test!(single_operand, "5", " 5", " 5", " 5");
    serialization_test!(
        precedence,
        "1 + 2 * 3",
        " + 1 * 2 3",
        " 1 + 2 * 3",
        " 1 2 3 * +"
    );
    serialization_test!(
        left_associative,
        "1 + 2 - 3",
        " - + 1 2 3",
        " 1 + 2 - 3",
        " 1 2 + 3 -"
    );
    serialization_test!(
        parens_are_dropped,
        "((1 + 2) * (3 * (44 + 55)))",
        " * + 1 2 * 3 + 44 55",
        " 1 + 2 * 3 * 44 + 55",
        " 1 2 + 3 44 55 + * *"
    );

    #[test]
    fn infix_is_kept_verbatim() {
        let src = "  (1)  +  2 ";

        let tree = ExpressionTree::new(src).unwrap();

        assert_eq!(tree.infix(), src);
    }

    #[test]
    fn display_block() {
        let tree = ExpressionTree::new("1 + 2 * 3").unwrap();

        let got = tree.to_string();

        assert_eq!(
            got,
            concat!(
                "Expression Tree\n",
                "Infix: 1 + 2 * 3\n",
                "Prefix: + 1 * 2 3\n",
                "Postfix: 1 2 3 * +",
            )
        );
    }

    #[test]
    fn node_lists_follow_each_traversal() {
        let tree = ExpressionTree::new("8 / 4").unwrap();
        let tokens = |nodes: Vec<&TreeNode<SmolStr>>| -> Vec<String> {
            nodes.iter().map(|n| n.token().to_string()).collect()
        };

        assert_eq!(tokens(tree.preorder_nodes()), vec!["/", "8", "4"]);
        assert_eq!(tokens(tree.inorder_nodes()), vec!["8", "/", "4"]);
        assert_eq!(tokens(tree.postorder_nodes()), vec!["8", "4", "/"]);
    }

    #[test]
    fn root_is_the_last_operator_applied() {
        let tree = ExpressionTree::new("1 * 2 - 3 / 4").unwrap();
        let root = tree.root();

        assert_eq!(root.token().as_str(), "-");
        assert_eq!(root.left().unwrap().token().as_str(), "*");
        assert_eq!(root.right().unwrap().token().as_str(), "/");
    }

    #[test]
    fn parse_via_from_str() {
        let tree: ExpressionTree = "1 + 2".parse().unwrap();

        assert_eq!(tree, ExpressionTree::new("(1 + 2)").unwrap());
    }

    #[test]
    fn infix_text_is_ignored_when_comparing() {
        let a = ExpressionTree::new("1 + 2").unwrap();
        let b = ExpressionTree::new("(1) + (2)").unwrap();

        assert_ne!(a.infix(), b.infix());
        assert_eq!(a, b);
    }

    #[test]
    fn very_long_chains_survive_being_dropped() {
        let src = vec!["1"; 200_000].join(" - ");

        let a = ExpressionTree::new(src.as_str()).unwrap();
        let b = ExpressionTree::new(src.as_str()).unwrap();

        assert_eq!(a.postfix_string().len(), 799_998);
        assert!(a == b);
        drop(a);
        drop(b);
    }

    #[test]
    fn errors_from_each_stage_are_surfaced() {
        assert_eq!(
            ExpressionTree::new("(1 + 2").unwrap_err(),
            ParseError::UnclosedParen { index: 0 }
        );
        assert_eq!(
            ExpressionTree::new("1 + 2 x").unwrap_err(),
            ParseError::UnknownToken {
                token: SmolStr::new("x"),
                index: 6,
            }
        );
        assert_eq!(
            ExpressionTree::new("").unwrap_err(),
            ParseError::EmptyExpression
        );
    }
}
