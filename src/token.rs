use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

/// Precedence of binary `+` and `-`
pub const ADDITIVE_PRECEDENCE: u8 = 1;
/// Precedence of `*` and `/`
pub const MULTIPLICATIVE_PRECEDENCE: u8 = 2;
/// Precedence of unary `u+` and `u-`
pub const UNARY_PRECEDENCE: u8 = 3;

/// Symbol of the unary plus operator
pub const UNARY_PLUS: &str = "u+";
/// Symbol of the unary minus operator
pub const UNARY_MINUS: &str = "u-";

/// The lexical category of a [`Token`](struct.Token.html)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Not a token yet, used by empty expressions
    Undefined,
    /// Any literal: number or variable
    Value,
    /// Unary or binary operator
    Operator,
    /// Left parenthesis
    LeftBracket,
    /// Right parenthesis
    RightBracket,
}

impl Default for TokenKind {
    fn default() -> Self {
        Self::Undefined
    }
}

/// One lexical unit of an expression.
///
/// `precedence` and `arity` only mean something for operators, and are
/// ignored by comparisons for every other kind.
///
/// ```
/// # use parameval::{Token, TokenKind};
/// let minus = Token::operator("u-", 3, 1);
/// assert_eq!(minus.kind(), TokenKind::Operator);
/// assert_eq!(minus.arity(), 1);
///
/// let mut value = Token::value("a");
/// value.set_precedence(7);
/// assert_eq!(value, Token::value("a"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Token {
    kind: TokenKind,
    symbol: String,
    precedence: u8,
    arity: u8,
}

impl Token {
    /// Create a token from all its parts
    pub fn new<S: Into<String>>(kind: TokenKind, symbol: S, precedence: u8, arity: u8) -> Self {
        Self {
            kind,
            symbol: symbol.into(),
            precedence,
            arity,
        }
    }

    /// A value token, holding a literal or a variable name
    pub fn value<S: Into<String>>(symbol: S) -> Self {
        Self::new(TokenKind::Value, symbol, 0, 0)
    }

    /// An operator token
    pub fn operator<S: Into<String>>(symbol: S, precedence: u8, arity: u8) -> Self {
        Self::new(TokenKind::Operator, symbol, precedence, arity)
    }

    /// A binary operator with the precedence of its glyph
    pub(crate) fn binary(glyph: char) -> Self {
        let precedence = match glyph {
            '*' | '/' => MULTIPLICATIVE_PRECEDENCE,
            _ => ADDITIVE_PRECEDENCE,
        };
        Self::operator(glyph.to_string(), precedence, 2)
    }

    /// The unary `u+` or `u-` operator for `glyph`
    pub(crate) fn unary(glyph: char) -> Self {
        let symbol = if glyph == '-' { UNARY_MINUS } else { UNARY_PLUS };
        Self::operator(symbol, UNARY_PRECEDENCE, 1)
    }

    /// A `(` token
    #[must_use]
    pub fn left_bracket() -> Self {
        Self::new(TokenKind::LeftBracket, "(", 0, 0)
    }

    /// A `)` token
    #[must_use]
    pub fn right_bracket() -> Self {
        Self::new(TokenKind::RightBracket, ")", 0, 0)
    }

    /// The lexical category
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Literal text of the token, `u-` and `u+` for unary operators
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Binding strength, higher binds tighter
    #[must_use]
    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    /// Number of operands consumed: 0 for values and brackets
    #[must_use]
    pub fn arity(&self) -> u8 {
        self.arity
    }

    /// Change the lexical category
    pub fn set_kind(&mut self, kind: TokenKind) {
        self.kind = kind;
    }

    /// Change the literal text
    pub fn set_symbol<S: Into<String>>(&mut self, symbol: S) {
        self.symbol = symbol.into();
    }

    /// Change the precedence, only relevant for operators
    pub fn set_precedence(&mut self, precedence: u8) {
        self.precedence = precedence;
    }

    /// Change the arity, only relevant for operators
    pub fn set_arity(&mut self, arity: u8) {
        self.arity = arity;
    }

    /// Check if this is an operator token
    #[must_use]
    pub fn is_operator(&self) -> bool {
        self.kind == TokenKind::Operator
    }

    /// Check if a value or a closing bracket ends here, i.e. if a following
    /// `+` or `-` has a left operand
    pub(crate) fn closes_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Value | TokenKind::RightBracket)
    }
}

impl PartialEq<Self> for Token {
    fn eq(&self, other: &Self) -> bool {
        if self.kind != other.kind || self.symbol != other.symbol {
            return false;
        }
        if self.is_operator() {
            return self.precedence == other.precedence && self.arity == other.arity;
        }
        return true;
    }
}
impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.symbol.hash(state);
        if self.is_operator() {
            state.write_u8(self.precedence);
            state.write_u8(self.arity);
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(&self.symbol)
    }
}
