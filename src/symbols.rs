use crate::error::{Error, Result};
use hashbrown::HashMap;
use log::debug;
use std::iter::FromIterator;

/// Values bound to variable names, consulted during evaluation.
///
/// ```
/// # use parameval::SymbolTable;
/// let mut symbols = SymbolTable::new();
/// assert_eq!(symbols.insert("r1", 1e3), Ok(None));
/// assert_eq!(symbols.insert("r1", 2e3), Ok(Some(1e3)));
/// assert_eq!(symbols.get("r1"), Some(2e3));
/// assert!(symbols.insert("", 0.0).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    values: HashMap<String, f64>,
}

impl SymbolTable {
    /// An empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the value it replaces if any.
    /// Empty names are rejected.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: f64) -> Result<Option<f64>> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::EmptySymbolName);
        }
        Ok(self.values.insert(name, value))
    }

    /// Value bound to `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Check if `name` is bound
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Unbind `name`, returning its value
    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.values.remove(name)
    }

    /// Number of bindings
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing is bound
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the bindings, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(name, &value)| (name.as_str(), value))
    }
}

/// Entries with an empty name are skipped
impl<K: Into<String>> FromIterator<(K, f64)> for SymbolTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut symbols = Self::new();
        for (name, value) in iter {
            if let Err(error) = symbols.insert(name, value) {
                debug!("skipping symbol with value {}: {}", value, error);
            }
        }
        symbols
    }
}

impl From<std::collections::HashMap<String, f64>> for SymbolTable {
    fn from(map: std::collections::HashMap<String, f64>) -> Self {
        map.into_iter().collect()
    }
}

impl From<HashMap<String, f64>> for SymbolTable {
    fn from(map: HashMap<String, f64>) -> Self {
        map.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolTable;
    use crate::Error;

    #[test]
    fn insert() {
        let mut symbols = SymbolTable::new();
        assert!(symbols.is_empty());
        assert_eq!(symbols.insert("a", 1.0), Ok(None));
        assert_eq!(symbols.insert(String::from("a"), 2.0), Ok(Some(1.0)));
        assert_eq!(symbols.insert("", 2.0), Err(Error::EmptySymbolName));
        assert_eq!(symbols.len(), 1);
        assert_eq!(symbols.get("a"), Some(2.0));
        assert!(symbols.contains("a"));
        assert_eq!(symbols.remove("a"), Some(2.0));
        assert_eq!(symbols.get("a"), None);
    }

    #[test]
    fn collect() {
        let symbols: SymbolTable = vec![("a", 1.0), ("", 5.0), ("b", 2.0)]
            .into_iter()
            .collect();
        assert_eq!(symbols.len(), 2);
        let mut names: Vec<&str> = symbols.iter().map(|(name, _)| name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);

        let mut map = std::collections::HashMap::new();
        map.insert("x".to_string(), 4.0);
        let symbols = SymbolTable::from(map);
        assert_eq!(symbols.get("x"), Some(4.0));
    }
}
