use crate::token::{UNARY_MINUS, UNARY_PLUS};
use hashbrown::HashMap;
use std::ops::{Add, Div, Mul, Neg, Sub};

fn identity(value: f64) -> f64 {
    value
}

lazy_static! {
    /// Unary operators, by symbol
    pub static ref UNARY_OPERATORS: HashMap<&'static str, fn(f64) -> f64> = {
        let mut map = HashMap::<&'static str, fn(f64) -> f64>::new();
        map.insert(UNARY_PLUS, identity);
        map.insert(UNARY_MINUS, f64::neg);
        map.shrink_to_fit();
        map
    };

    /// Binary operators, by symbol. Plain IEEE-754 arithmetic, division by
    /// zero gives an infinity or `NaN`.
    pub static ref BINARY_OPERATORS: HashMap<&'static str, fn(f64, f64) -> f64> = {
        let mut map = HashMap::<&'static str, fn(f64, f64) -> f64>::new();
        map.insert("+", f64::add);
        map.insert("-", f64::sub);
        map.insert("*", f64::mul);
        map.insert("/", f64::div);
        map.shrink_to_fit();
        map
    };
}
