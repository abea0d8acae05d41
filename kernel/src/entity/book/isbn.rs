use std::fmt::{Display, Formatter};

use vodca::{AsRefln, Fromln};

/// Edition identifier used to match ordered books against the catalog.
/// Unique among unsold rows, not across the whole table.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Fromln, AsRefln)]
pub struct Isbn(String);

impl Isbn {
    pub fn new(isbn: impl Into<String>) -> Self {
        Self(isbn.into())
    }
}

impl Display for Isbn {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
