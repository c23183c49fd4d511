//! Construction-time settings for term stores.

/// Settings applied when a [`TermStore`](crate::TermStore) is created.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct StoreConfig {
    /// Symbol used for the variable when rendering.
    pub variable: char,
}

impl StoreConfig {
    /// The variable symbol used when none is given.
    pub const DEFAULT_VARIABLE: char = 'x';

    /// Creates the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            variable: Self::DEFAULT_VARIABLE,
        }
    }

    /// Replaces the variable symbol.
    #[must_use]
    pub const fn with_variable(self, variable: char) -> Self {
        Self { variable, ..self }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new()
    }
}
