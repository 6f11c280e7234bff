use crate::error::{Error, Result};
use crate::token::Token;
use log::{debug, trace};
use std::iter::{Enumerate, Peekable};
use std::str::Chars;

#[must_use]
/// Check if `ident` is a valid variable name
///
/// # Examples
///
/// ```
/// # use parameval::is_variable;
///
/// assert_eq!(is_variable("__abc3"), true);
/// assert_eq!(is_variable("r.load"), true);
/// assert_eq!(is_variable("34zb"), false);
/// ```
pub fn is_variable(ident: &str) -> bool {
    let mut chars = ident.chars();
    // Check first char
    if !chars.next().map_or(false, is_variable_start) {
        return false;
    }
    // Check all others
    for c in chars {
        if !is_value_part(c) {
            return false;
        }
    }
    return true;
}

/// Split `text` into tokens.
///
/// # Examples
///
/// ```
/// # use parameval::{tokenize, Token};
/// let tokens = tokenize("-a").unwrap();
/// assert_eq!(tokens, vec![Token::operator("u-", 3, 1), Token::value("a")]);
///
/// assert!(tokenize("a#b").is_err());
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    Lexer::new(text).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    input: Peekable<Enumerate<Chars<'a>>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer reading `string`
    pub fn new(string: &str) -> Lexer<'_> {
        Lexer {
            input: string.chars().enumerate().peekable(),
        }
    }

    /// Consume the input and produce the whole token sequence
    pub fn tokenize(&mut self) -> Result<Vec<Token>> {
        let mut tokens: Vec<Token> = Vec::new();
        while let Some(token) = self.next_token(tokens.last())? {
            trace!("token {:?} '{}'", token.kind(), token);
            tokens.push(token);
        }
        debug!("tokenized input into {} tokens", tokens.len());
        Ok(tokens)
    }

    /// Read the next token. `previous` is the last token produced, used to
    /// tell unary from binary `+` and `-`.
    fn next_token(&mut self, previous: Option<&Token>) -> Result<Option<Token>> {
        while let Some(&(_, c)) = self.input.peek() {
            if is_whitespace(c) {
                self.input.next();
            } else {
                break;
            }
        }

        let (position, c) = match self.input.next() {
            Some(next) => next,
            None => return Ok(None),
        };
        let token = match c {
            '*' | '/' => Token::binary(c),
            '+' | '-' => {
                if previous.map_or(false, Token::closes_operand) {
                    Token::binary(c)
                } else {
                    Token::unary(c)
                }
            }
            '(' => Token::left_bracket(),
            ')' => Token::right_bracket(),
            c if is_value_part(c) => {
                let mut value = String::new();
                value.push(c);
                'value: while let Some(&(_, c)) = self.input.peek() {
                    if is_value_part(c) {
                        self.input.next();
                        value.push(c);
                    } else {
                        break 'value;
                    }
                }
                Token::value(value)
            }
            other => {
                return Err(Error::Lexical {
                    position,
                    character: other,
                });
            }
        };
        Ok(Some(token))
    }
}

/// Characters skipped between tokens
fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t' || c == '\n' || c == '\r'
}

/// Check if `c` can appear inside a value. Numbers and identifiers share
/// the same set, so `1.2e3` and `x_1` are both read in one go.
fn is_value_part(c: char) -> bool {
    c == '.' || c == '_' || c.is_ascii_alphanumeric()
}

/// Check if `c` can appear at the first character of a variable
fn is_variable_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}
