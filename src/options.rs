/// Default cap on the syntax tree depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Engine settings shared by the tree builder and the evaluator.
///
/// ```
/// # use parameval::{Options, TreeBuilder};
/// let options = Options::default().with_max_depth(2);
/// let builder = TreeBuilder::new(options);
/// assert!(builder.tree_from_str("-a").is_ok());
/// assert!(builder.tree_from_str("--a").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Options {
    /// Maximum depth of a syntax tree, a lone value having depth 1
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Set the maximum tree depth. Deeper expressions are rejected instead
    /// of recursing without bound.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
