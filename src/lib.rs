#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]

//! Parameval, a crate to parse and evaluate parameterised arithmetic
//! expressions.
//!
//! Configuration files and netlist generators often carry numeric
//! parameters written as small formulas (`r_load * 2 + 1.5e3`). This crate
//! turns such strings into syntax trees, and evaluates them against a
//! [`SymbolTable`](struct.SymbolTable.html) binding names to values. The
//! easiest way to use this crate is with the [`eval`](fn.eval.html)
//! function:
//!
//! ```
//! use parameval::SymbolTable;
//! assert_eq!(parameval::eval("3 + 5 * 2", &SymbolTable::new()), Ok(13.0));
//! ```
//!
//! The second argument to `eval` defines variables:
//!
//! ```
//! use parameval::SymbolTable;
//!
//! let mut symbols = SymbolTable::new();
//! symbols.insert("a", 3.5).unwrap();
//! assert_eq!(parameval::eval("2 * a", &symbols), Ok(7.0));
//! ```
//!
//! It is also possible to separate the parsing from the evaluation of an
//! expression with the [`Expr`](struct.Expr.html) type. This allow to reuse
//! the same tree with different values for variables.
//!
//! ```
//! use parameval::{Expr, SymbolTable};
//!
//! let expr = Expr::parse("3 / c + b").unwrap();
//! assert_eq!(expr.as_string(), "+(/(3,c),b)");
//!
//! let mut symbols = SymbolTable::new();
//! symbols.insert("c", 1.0).unwrap();
//! symbols.insert("b", 5.0).unwrap();
//! assert_eq!(expr.eval(&symbols), Ok(8.0));
//!
//! symbols.insert("b", 10.0).unwrap();
//! assert_eq!(expr.eval(&symbols), Ok(13.0));
//! ```
//!
//! # Language definition
//!
//! An expression can contain the following elements:
//!
//! - values: a run of ASCII letters, digits, `_` and `.`. This covers both
//!   number literals (`12`, `0.5`, `1.2e3`) and variable names (`a`,
//!   `r_load`, `x1`). The exponent sign is not part of a value, `1e-3`
//!   reads as `1e - 3`;
//! - left and right parenthesis;
//! - binary operators `+`, `-`, `*` and `/`;
//! - unary `+` and `-`, wherever no left operand precedes them.
//!
//! Any other character is forbidden in the input.
//!
//! Unary operators bind tighter than `*` and `/`, which bind tighter than
//! `+` and `-`. Binary operators of the same precedence are left
//! associative. Arithmetic follows IEEE-754: `1/0` is infinite, `0/0` is
//! `NaN`.
//!
//! When evaluating, a value is first looked up in the symbol table, and
//! parsed as a number if it is not bound there. A name which is neither
//! bound nor a number is an error.
//!
//! # Technical details
//!
//! The tokens are bound into a tree by a single shunting-yard pass, which
//! can also produce the postfix form of the expression (see
//! [`to_postfix`](fn.to_postfix.html)). Tree construction and evaluation
//! refuse expressions nested deeper than
//! [`Options::max_depth`](struct.Options.html#method.max_depth) instead of
//! overflowing the stack. Trees built by hand are not bounded by
//! `max_depth`: their serialization, `Node::depth` and drop do not recurse,
//! but cloning and comparing them does. An `Expr` is never mutated by
//! evaluation, so the same tree can be evaluated from several threads at
//! once.

#[macro_use]
extern crate lazy_static;

mod builder;
mod error;
mod expr;
mod lexer;
mod node;
mod options;
mod symbols;
mod token;
mod util;

pub use builder::{to_postfix, to_tree, Postfix, TreeBuilder};
pub use error::{Error, ErrorKind, Result};
pub use expr::{eval, Expr};
pub use lexer::{is_variable, tokenize, Lexer};
pub use node::Node;
pub use options::{Options, DEFAULT_MAX_DEPTH};
pub use symbols::SymbolTable;
pub use token::{Token, TokenKind};
