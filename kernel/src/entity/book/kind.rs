use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;

use crate::KernelError;

const NEW_RELEASE: &str = "NEW_RELEASE";
const REGULAR: &str = "REGULAR";
const OLD_EDITIONS: &str = "OLD_EDITIONS";

/// Pricing category of a book.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum BookType {
    NewRelease,
    Regular,
    OldEditions,
}

impl BookType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookType::NewRelease => NEW_RELEASE,
            BookType::Regular => REGULAR,
            BookType::OldEditions => OLD_EDITIONS,
        }
    }
}

impl Display for BookType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookType {
    type Err = Report<KernelError>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            NEW_RELEASE => Ok(BookType::NewRelease),
            REGULAR => Ok(BookType::Regular),
            OLD_EDITIONS => Ok(BookType::OldEditions),
            other => Err(Report::new(KernelError::UnknownBookType)
                .attach_printable(format!("Unknown book type: {other}"))),
        }
    }
}
