use crate::token::Token;
use std::fmt::{self, Display, Formatter};

/// A syntax tree node.
///
/// Values are leaves, unary operators only have a `left` child and binary
/// operators have both. Each node owns its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Node {
    token: Token,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    /// Assemble a node without checking the children against the token
    /// arity. The evaluator reports inconsistent nodes.
    pub fn new(token: Token, left: Option<Node>, right: Option<Node>) -> Self {
        Self {
            token,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// A node without children
    #[must_use]
    pub fn leaf(token: Token) -> Self {
        Self::new(token, None, None)
    }

    /// A node with only a left child
    #[must_use]
    pub fn unary(token: Token, operand: Node) -> Self {
        Self::new(token, Some(operand), None)
    }

    /// A node with both children
    #[must_use]
    pub fn binary(token: Token, left: Node, right: Node) -> Self {
        Self::new(token, Some(left), Some(right))
    }

    /// The token this node stands for
    #[must_use]
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Left child, the only one of unary operators
    #[must_use]
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// Right child, present for binary operators only
    #[must_use]
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// Number of levels in this subtree
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            for child in node.left().into_iter().chain(node.right()) {
                pending.push((child, level + 1));
            }
        }
        deepest
    }
}

/// Children are released from an explicit stack, so dropping a deep tree
/// does not recurse.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

enum Piece<'a> {
    Node(&'a Node),
    Text(&'static str),
}

/// Prefix form: `symbol(left, right)`, or just the symbol for leaves.
/// Written from an explicit stack, without recursion.
impl Display for Node {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Text(text) => fmt.write_str(text)?,
                Piece::Node(node) => {
                    write!(fmt, "{}", node.token)?;
                    if let Some(left) = node.left() {
                        fmt.write_str("(")?;
                        pending.push(Piece::Text(")"));
                        if let Some(right) = node.right() {
                            pending.push(Piece::Node(right));
                            pending.push(Piece::Text(","));
                        }
                        pending.push(Piece::Node(left));
                    }
                }
            }
        }
        Ok(())
    }
}
