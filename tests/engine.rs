use parameval::{
    eval, to_postfix, to_tree, tokenize, Error, ErrorKind, Expr, SymbolTable, Token, TokenKind,
    TreeBuilder,
};
use pretty_assertions::assert_eq;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn symbols() -> SymbolTable {
    let mut symbols = SymbolTable::new();
    symbols.insert("a", 2.0).unwrap();
    symbols.insert("b", 3.0).unwrap();
    symbols
}

#[test]
fn unary_and_binary_minus() {
    init();
    let tokens = tokenize("-a").unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), TokenKind::Operator);
    assert_eq!(tokens[0].symbol(), "u-");
    assert_eq!(tokens[0].arity(), 1);
    assert_eq!(tokens[1], Token::value("a"));

    let tokens = tokenize("a-b").unwrap();
    let symbols: Vec<&str> = tokens.iter().map(Token::symbol).collect();
    assert_eq!(symbols, vec!["a", "-", "b"]);
    assert_eq!(tokens[1].arity(), 2);
}

#[test]
fn evaluation() {
    init();
    let mut symbols = symbols();
    assert_eq!(eval("2.0 + 3.0", &symbols), Ok(5.0));
    assert_eq!(eval("a + b", &symbols), Ok(5.0));
    assert_eq!(eval("-a", &symbols), Ok(-2.0));
    assert_eq!(eval("-(a+b)", &symbols), Ok(-5.0));
    assert_eq!(eval("a/0.0", &symbols), Ok(f64::INFINITY));

    symbols.insert("c", 4.0).unwrap();
    let result = eval("a+(b*c)/(b+c)*1.0e3", &symbols).unwrap();
    assert!((result - (2.0 + 12.0 / 7.0 * 1000.0)).abs() < 1e-9);
    assert!((result - 1716.285_714_285_714_2).abs() < 1e-9);
}

#[test]
fn serialization() {
    init();
    assert_eq!(to_tree("a*b+c").unwrap().as_string(), "+(*(a,b),c)");
    assert_eq!(to_postfix("a*b+c").unwrap().to_string(), "a b * c + ");
}

#[test]
fn failures() {
    init();
    assert_eq!(tokenize("a#b").unwrap_err().kind(), ErrorKind::Lexical);
    assert_eq!(to_tree("a#b").unwrap_err().kind(), ErrorKind::Lexical);

    assert_eq!(
        eval("x", &SymbolTable::new()),
        Err(Error::InvalidLiteral("x".into()))
    );
    assert_eq!(
        eval("2 * inf", &SymbolTable::new()),
        Err(Error::InvalidLiteral("inf".into()))
    );

    let error = TreeBuilder::default()
        .tree(vec![Token::operator("+", 1, 2)])
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Structural);

    assert_eq!(to_tree("(a+b))").unwrap_err(), Error::UnmatchedBracket(')'));
}

#[test]
fn reevaluation_is_stable() {
    init();
    let expr = Expr::parse("a * (b - 1) / -3").unwrap();
    let symbols = symbols();
    let first = expr.eval(&symbols).unwrap();
    for _ in 0..100 {
        assert_eq!(expr.eval(&symbols), Ok(first));
    }

    let mut other = SymbolTable::new();
    other.insert("a", 3.0).unwrap();
    other.insert("b", 4.0).unwrap();
    assert_eq!(expr.eval(&other), Ok(-3.0));
    assert_eq!(expr.eval(&symbols), Ok(first));
}
