use crate::builder::TreeBuilder;
use crate::error::{Error, Result};
use crate::lexer::is_variable;
use crate::node::Node;
use crate::options::Options;
use crate::symbols::SymbolTable;
use crate::token::{Token, TokenKind};
use crate::util::{BINARY_OPERATORS, UNARY_OPERATORS};
use hashbrown::HashSet;
use std::fmt::{self, Display, Formatter};

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use parameval::{eval, SymbolTable};
///
/// assert_eq!(eval("45 - 2*3", &SymbolTable::new()), Ok(39.0));
///
/// let mut symbols = SymbolTable::new();
/// symbols.insert("a", -5.0).unwrap();
/// assert_eq!(eval("3 * a", &symbols), Ok(-15.0));
/// ```
pub fn eval<'a, C>(input: &str, symbols: C) -> Result<f64>
where
    C: Into<&'a SymbolTable>,
{
    Expr::parse(input).and_then(|expr| expr.eval(symbols))
}

/// A parsed mathematical expression, owning the root of its syntax tree.
///
/// The default expression has an undefined root and stands for "no
/// expression".
///
/// # Examples
/// ```
/// # use parameval::{Expr, SymbolTable};
/// let expr = Expr::parse("3 + 5 * 2").unwrap();
/// assert_eq!(expr.eval(&SymbolTable::new()), Ok(13.0));
///
/// let mut symbols = SymbolTable::new();
/// symbols.insert("a", 42.0).unwrap();
/// let expr = Expr::parse("-2 * a").unwrap();
/// assert_eq!(expr.eval(&symbols), Ok(-84.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Expr {
    root: Node,
}

impl Expr {
    /// Wrap an already built tree
    #[must_use]
    pub fn new(root: Node) -> Self {
        Self { root }
    }

    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use parameval::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 + 5 ^ 2").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self> {
        TreeBuilder::default().tree_from_str(expression)
    }

    /// Root node of the tree
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Replace the whole tree
    pub fn set_root(&mut self, root: Node) {
        self.root = root;
    }

    /// Check if this is the empty expression
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.token().kind() == TokenKind::Undefined
    }

    /// Evaluate the expression with the given `symbols`.
    ///
    /// A value is looked up in `symbols` first, and parsed as a number
    /// otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// # use parameval::{Expr, SymbolTable};
    /// let expr = Expr::parse("3 + a").unwrap();
    ///
    /// let mut symbols = SymbolTable::new();
    /// symbols.insert("a", -5.0).unwrap();
    /// assert_eq!(expr.eval(&symbols), Ok(-2.0));
    /// symbols.insert("a", 2.0).unwrap();
    /// assert_eq!(expr.eval(&symbols), Ok(5.0));
    /// ```
    pub fn eval<'a, C>(&self, symbols: C) -> Result<f64>
    where
        C: Into<&'a SymbolTable>,
    {
        self.eval_with(symbols, &Options::default())
    }

    /// Evaluate the expression, refusing trees deeper than
    /// `options.max_depth()`
    pub fn eval_with<'a, C>(&self, symbols: C, options: &Options) -> Result<f64>
    where
        C: Into<&'a SymbolTable>,
    {
        let evaluator = Evaluator {
            symbols: symbols.into(),
            max_depth: options.max_depth(),
        };
        evaluator.eval(&self.root, 1)
    }

    /// Normal prefix form of the expression, `+(*(a,b),c)` for `a*b+c`
    #[must_use]
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Get the set of variable names used in this expression.
    ///
    /// # Examples
    /// ```
    /// # use parameval::Expr;
    /// let expr = Expr::parse("3 + 5 * 2").unwrap();
    /// assert!(expr.variables().is_empty());
    ///
    /// let expr = Expr::parse("3 + a * 1e3").unwrap();
    /// assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec!["a"]);
    /// ```
    #[must_use]
    pub fn variables(&self) -> HashSet<&str> {
        let mut variables = HashSet::new();
        Self::inner_variables(&self.root, &mut variables);
        variables
    }

    fn inner_variables<'a>(node: &'a Node, variables: &mut HashSet<&'a str>) {
        let token = node.token();
        if token.kind() == TokenKind::Value && is_variable(token.symbol()) {
            variables.insert(token.symbol());
        }
        if let Some(left) = node.left() {
            Self::inner_variables(left, variables);
        }
        if let Some(right) = node.right() {
            Self::inner_variables(right, variables);
        }
    }
}

impl Display for Expr {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.root, fmt)
    }
}

/// Recursive evaluation of a tree against one symbol table
struct Evaluator<'a> {
    symbols: &'a SymbolTable,
    max_depth: usize,
}

impl<'a> Evaluator<'a> {
    fn eval(&self, node: &Node, depth: usize) -> Result<f64> {
        if depth > self.max_depth {
            return Err(Error::DepthLimit(self.max_depth));
        }
        let token = node.token();
        match token.kind() {
            TokenKind::Value => self.value(token),
            TokenKind::Operator => {
                let left = node.left().ok_or_else(|| {
                    Error::MalformedTree(format!("operator '{}' missing left operand", token))
                })?;
                if let Some(operator) = UNARY_OPERATORS.get(token.symbol()) {
                    return Ok(operator(self.eval(left, depth + 1)?));
                }
                let right = node.right().ok_or_else(|| {
                    Error::MalformedTree(format!("operator '{}' missing right operand", token))
                })?;
                let operator = BINARY_OPERATORS.get(token.symbol()).ok_or_else(|| {
                    Error::MalformedTree(format!("unknown operator '{}'", token))
                })?;
                let left = self.eval(left, depth + 1)?;
                let right = self.eval(right, depth + 1)?;
                Ok(operator(left, right))
            }
            TokenKind::Undefined | TokenKind::LeftBracket | TokenKind::RightBracket => Err(
                Error::MalformedTree(format!("invalid tree element '{}'", token)),
            ),
        }
    }

    fn value(&self, token: &Token) -> Result<f64> {
        let text = token.symbol();
        // if the symbol table has a value for the name, use it
        if let Some(value) = self.symbols.get(text) {
            return Ok(value);
        }
        // unbound names are errors, even those f64 parsing knows (`inf`, `nan`)
        if is_variable(text) {
            return Err(Error::InvalidLiteral(text.to_owned()));
        }
        // Otherwise, it must be a number
        text.parse()
            .map_err(|_| Error::InvalidLiteral(text.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn symbols() -> SymbolTable {
        vec![("a", 2.0), ("b", 3.0)].into_iter().collect()
    }

    #[test]
    fn parse() {
        let valid_expressions = [
            "3 + +5e67",
            "(3 + -5)*45",
            "(3. + 5.0)*\t\n45",
            "-(-(a))",
            "r.load_1 / x",
        ];
        for expr in &valid_expressions {
            assert!(Expr::parse(expr).is_ok());
        }

        let invalid_expressions = ["3 ^ 2", "sin(2)", "a = 2", "(3", "3)", "a b", ""];
        for expr in &invalid_expressions {
            assert!(Expr::parse(expr).is_err());
        }
    }

    #[test]
    fn eval() {
        let symbols = symbols();
        let empty = &SymbolTable::new();

        let eval_pairs = [
            ("3 + 5", empty, 8.0),
            ("2 - 5", empty, -3.0),
            ("2 * 5", empty, 10.0),
            ("10 / 5", empty, 2.0),
            ("-3", empty, -3.0),
            ("25 + -3", empty, 22.0),
            ("25 - -3", empty, 28.0),
            ("3 + 5 * 2", empty, 13.0),
            ("1.5e2", empty, 150.0),
            ("2.0 + 3.0", &symbols, 5.0),
            ("a + b", &symbols, 5.0),
            ("-a", &symbols, -2.0),
            ("+a", &symbols, 2.0),
            ("--a", &symbols, 2.0),
            ("-(a+b)", &symbols, -5.0),
            ("a - b - 1", &symbols, -2.0),
            ("12 / a / b", &symbols, 2.0),
            ("2 * a", &symbols, 4.0),
        ];
        for eval_pair in &eval_pairs {
            assert_eq!(
                super::eval(eval_pair.0, eval_pair.1),
                Ok(eval_pair.2),
                "{}",
                eval_pair.0
            );
        }
    }

    #[test]
    fn precedence() {
        let mut symbols = symbols();
        symbols.insert("c", 4.0).unwrap();
        let result = super::eval("a+(b*c)/(b+c)*1.0e3", &symbols).unwrap();
        assert!((result - (2.0 + 12.0 / 7.0 * 1000.0)).abs() < 1e-9);
    }

    #[test]
    fn float_semantics() {
        let symbols = symbols();
        assert_eq!(super::eval("a/0.0", &symbols), Ok(f64::INFINITY));
        assert_eq!(super::eval("-a/0.0", &symbols), Ok(f64::NEG_INFINITY));
        assert!(super::eval("0/0", &symbols).unwrap().is_nan());
    }

    #[test]
    fn symbols_shadow_literals() {
        let mut symbols = SymbolTable::new();
        symbols.insert("2", 10.0).unwrap();
        assert_eq!(super::eval("2 * 2", &symbols), Ok(100.0));
    }

    #[test]
    fn invalid_literals() {
        let result = super::eval("2 * z", &symbols());
        assert_eq!(
            result.err().unwrap().to_string(),
            "NameError: 'z' is not a known symbol nor a numeric literal"
        );
        assert_eq!(
            super::eval("x", &SymbolTable::new()),
            Err(Error::InvalidLiteral("x".into()))
        );
        assert_eq!(
            super::eval("1.2.3", &SymbolTable::new()),
            Err(Error::InvalidLiteral("1.2.3".into()))
        );
        assert_eq!(
            super::eval("1.2e-3", &SymbolTable::new()),
            Err(Error::InvalidLiteral("1.2e".into()))
        );
    }

    #[test_case("inf" ; "inf")]
    #[test_case("nan" ; "nan")]
    #[test_case("Infinity" ; "infinity")]
    #[test_case("NaN" ; "nan uppercase")]
    fn unbound_float_keywords(name: &str) {
        let empty = SymbolTable::new();
        assert_eq!(
            crate::expr::eval(name, &empty),
            Err(Error::InvalidLiteral(name.into()))
        );

        let mut symbols = SymbolTable::new();
        symbols.insert(name, 1.5).unwrap();
        assert_eq!(crate::expr::eval(name, &symbols), Ok(1.5));
    }

    #[test]
    fn malformed_trees() {
        let empty = SymbolTable::new();
        let error = Expr::default().eval(&empty).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MalformedTree);
        assert_eq!(error.to_string(), "TreeError: invalid tree element ''");

        let lonely = Expr::new(Node::leaf(Token::operator("-", 1, 2)));
        assert_eq!(
            lonely.eval(&empty),
            Err(Error::MalformedTree(
                "operator '-' missing left operand".into()
            ))
        );

        let half = Expr::new(Node::unary(
            Token::operator("*", 2, 2),
            Node::leaf(Token::value("1")),
        ));
        assert_eq!(
            half.eval(&empty),
            Err(Error::MalformedTree(
                "operator '*' missing right operand".into()
            ))
        );

        let unknown = Expr::new(Node::binary(
            Token::operator("^", 4, 2),
            Node::leaf(Token::value("1")),
            Node::leaf(Token::value("2")),
        ));
        assert_eq!(unknown.eval(&empty).unwrap_err().kind(), ErrorKind::MalformedTree);

        let bracket = Expr::new(Node::leaf(Token::left_bracket()));
        assert_eq!(
            bracket.eval(&empty),
            Err(Error::MalformedTree("invalid tree element '('".into()))
        );
    }

    #[test]
    fn eval_depth_limit() {
        let mut node = Node::leaf(Token::value("1"));
        for _ in 0..10 {
            node = Node::unary(Token::operator("u-", 3, 1), node);
        }
        let expr = Expr::new(node);
        let empty = SymbolTable::new();
        assert_eq!(expr.eval(&empty), Ok(1.0));
        let options = Options::default().with_max_depth(10);
        assert_eq!(expr.eval_with(&empty, &options), Err(Error::DepthLimit(10)));
    }

    #[test]
    fn idempotent() {
        let expr = Expr::parse("a * (b - 1) / 3").unwrap();
        let symbols = symbols();
        let first = expr.eval(&symbols);
        for _ in 0..10 {
            assert_eq!(expr.eval(&symbols), first);
        }
    }

    #[test]
    fn root_replacement() {
        let mut expr = Expr::default();
        assert!(expr.is_empty());
        assert_eq!(expr.as_string(), "");

        expr.set_root(Node::leaf(Token::value("a")));
        assert!(!expr.is_empty());
        assert_eq!(expr.eval(&symbols()), Ok(2.0));
    }

    #[test]
    fn variables() {
        let expr = Expr::parse("(a + b) * 2").unwrap();
        let expected: HashSet<&str> = ["a", "b"].iter().copied().collect();
        assert_eq!(expr.variables(), expected);

        let expr = Expr::parse("x1 * -x1 + 1.5e3").unwrap();
        let expected: HashSet<&str> = ["x1"].iter().copied().collect();
        assert_eq!(expr.variables(), expected);
    }

    #[test]
    fn as_string() {
        assert_eq!(Expr::parse("a*b+c").unwrap().as_string(), "+(*(a,b),c)");
        assert_eq!(Expr::parse("-(a+b)").unwrap().to_string(), "u-(+(a,b))");
    }
}
