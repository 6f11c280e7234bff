use crate::error::{Error, Result};
use crate::expr::Expr;
use crate::lexer::tokenize;
use crate::node::Node;
use crate::options::Options;
use crate::token::{Token, TokenKind};
use log::{debug, trace};
use std::fmt::{self, Display, Formatter};

/// Tokens in postfix (reverse polish) order.
///
/// The `Display` form puts a single space after every token:
///
/// ```
/// # use parameval::to_postfix;
/// let postfix = to_postfix("a*b+c").unwrap();
/// assert_eq!(postfix.to_string(), "a b * c + ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// The tokens, in postfix order
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Take the tokens out
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Display for Postfix {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for token in &self.tokens {
            write!(fmt, "{} ", token)?;
        }
        Ok(())
    }
}

/// Reorder the expression in `text` to postfix order
pub fn to_postfix(text: &str) -> Result<Postfix> {
    TreeBuilder::default().postfix_from_str(text)
}

/// Build the syntax tree of the expression in `text`
///
/// # Examples
/// ```
/// # use parameval::to_tree;
/// let expr = to_tree("a*b+c").unwrap();
/// assert_eq!(expr.as_string(), "+(*(a,b),c)");
/// ```
pub fn to_tree(text: &str) -> Result<Expr> {
    TreeBuilder::default().tree_from_str(text)
}

/// Operator-precedence construction of postfix sequences and syntax trees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeBuilder {
    options: Options,
}

impl TreeBuilder {
    /// Create a builder enforcing `options`
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Settings enforced by this builder
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Tokenize `text` and reorder it to postfix order
    pub fn postfix_from_str(&self, text: &str) -> Result<Postfix> {
        self.postfix(tokenize(text)?)
    }

    /// Tokenize `text` and bind it into a syntax tree
    pub fn tree_from_str(&self, text: &str) -> Result<Expr> {
        self.tree(tokenize(text)?)
    }

    /// Reorder an already tokenized expression to postfix order
    pub fn postfix(&self, tokens: Vec<Token>) -> Result<Postfix> {
        let mut output = PostfixOutput::default();
        shunting_yard(tokens, &mut output)?;
        Ok(Postfix {
            tokens: output.tokens,
        })
    }

    /// Bind an already tokenized expression into a syntax tree.
    ///
    /// ```
    /// # use parameval::{Token, TreeBuilder};
    /// // a binary operator without operands
    /// let tokens = vec![Token::operator("+", 1, 2)];
    /// assert!(TreeBuilder::default().tree(tokens).is_err());
    /// ```
    pub fn tree(&self, tokens: Vec<Token>) -> Result<Expr> {
        let mut output = TreeOutput::new(self.options.max_depth());
        shunting_yard(tokens, &mut output)?;
        let root = output.finish()?;
        debug!("built syntax tree of depth {}", output.depth);
        Ok(Expr::new(root))
    }
}

/// Where the shunting-yard pass sends operands and operators
trait Output {
    fn emit(&mut self, token: Token) -> Result<()>;
}

#[derive(Default)]
struct PostfixOutput {
    tokens: Vec<Token>,
}

impl Output for PostfixOutput {
    fn emit(&mut self, token: Token) -> Result<()> {
        self.tokens.push(token);
        Ok(())
    }
}

/// Binds operators to their operands as soon as they are emitted
struct TreeOutput {
    /// Pending subtrees, with their depth
    nodes: Vec<(Node, usize)>,
    max_depth: usize,
    depth: usize,
}

impl TreeOutput {
    fn new(max_depth: usize) -> Self {
        Self {
            nodes: Vec::new(),
            max_depth,
            depth: 0,
        }
    }

    fn add_node(&mut self, token: Token) -> Result<()> {
        let arity = token.arity();
        let (node, depth) = match arity {
            0 => (Node::leaf(token), 1),
            1 => {
                let (operand, depth) = self.pop_operand(&token, 0)?;
                (Node::unary(token, operand), depth + 1)
            }
            2 => {
                let (right, right_depth) = self.pop_operand(&token, 0)?;
                let (left, left_depth) = self.pop_operand(&token, 1)?;
                (
                    Node::binary(token, left, right),
                    left_depth.max(right_depth) + 1,
                )
            }
            _ => {
                return Err(Error::Structure(format!(
                    "operator '{}' has unsupported arity {}",
                    token, arity
                )))
            }
        };
        if depth > self.max_depth {
            return Err(Error::DepthLimit(self.max_depth));
        }
        trace!("bound node {} at depth {}", node, depth);
        self.depth = self.depth.max(depth);
        self.nodes.push((node, depth));
        Ok(())
    }

    /// Pop one operand for `token`, `found` operands having already been
    /// popped for it
    fn pop_operand(&mut self, token: &Token, found: usize) -> Result<(Node, usize)> {
        self.nodes.pop().ok_or_else(|| Error::Arity {
            symbol: token.symbol().to_owned(),
            expected: token.arity(),
            found,
        })
    }

    fn finish(&mut self) -> Result<Node> {
        match self.nodes.len() {
            1 => Ok(self.nodes.pop().map(|(node, _)| node).unwrap_or_default()),
            0 => Err(Error::Structure("empty expression".into())),
            n => Err(Error::Structure(format!(
                "expected a single expression, found {} operands without operator",
                n
            ))),
        }
    }
}

impl Output for TreeOutput {
    fn emit(&mut self, token: Token) -> Result<()> {
        self.add_node(token)
    }
}

/// Single pass of the shunting-yard algorithm over `tokens`
fn shunting_yard<O: Output>(tokens: Vec<Token>, output: &mut O) -> Result<()> {
    let mut operators: Vec<Token> = Vec::new();

    'tokens: for token in tokens {
        match token.kind() {
            TokenKind::Value => output.emit(token)?,
            TokenKind::Operator => {
                // A prefix operator has no left operand: every operator
                // still on the stack is waiting for its right operand.
                if token.arity() > 1 {
                    'operators: while let Some(top) = operators.last() {
                        let pop_me =
                            top.is_operator() && top.precedence() >= token.precedence();
                        if !pop_me {
                            break 'operators;
                        }
                        if let Some(top) = operators.pop() {
                            output.emit(top)?;
                        }
                    }
                }
                operators.push(token);
            }
            TokenKind::LeftBracket => operators.push(token),
            TokenKind::RightBracket => {
                while let Some(top) = operators.pop() {
                    if top.kind() == TokenKind::LeftBracket {
                        continue 'tokens;
                    }
                    output.emit(top)?;
                }
                return Err(Error::UnmatchedBracket(')'));
            }
            TokenKind::Undefined => {
                return Err(Error::Structure(format!(
                    "undefined token '{}' in expression",
                    token
                )));
            }
        }
    }

    while let Some(top) = operators.pop() {
        if top.kind() == TokenKind::LeftBracket {
            return Err(Error::UnmatchedBracket('('));
        }
        output.emit(top)?;
    }
    Ok(())
}
