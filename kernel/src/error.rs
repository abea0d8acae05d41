use std::fmt::Display;

use error_stack::Context;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KernelError {
    ClientNotFound,
    UnknownBookType,
    IncorrectOrder,
    NotEnoughLoyaltyPoints,
    BookNotFound,
    NotEnoughBooks,
    Validation,
    Concurrency,
    Timeout,
    Internal,
}

impl KernelError {
    /// Stable business code reported to clients. Infrastructure failures have none.
    pub fn code(&self) -> Option<i32> {
        match self {
            KernelError::ClientNotFound => Some(100),
            KernelError::UnknownBookType => Some(101),
            KernelError::IncorrectOrder => Some(102),
            KernelError::NotEnoughLoyaltyPoints => Some(103),
            KernelError::BookNotFound => Some(104),
            KernelError::Validation => Some(105),
            KernelError::NotEnoughBooks => Some(106),
            KernelError::Concurrency | KernelError::Timeout | KernelError::Internal => None,
        }
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::ClientNotFound => write!(f, "Client not found"),
            KernelError::UnknownBookType => write!(f, "Unknown book type"),
            KernelError::IncorrectOrder => write!(f, "Incorrect order"),
            KernelError::NotEnoughLoyaltyPoints => write!(f, "Not enough loyalty points"),
            KernelError::BookNotFound => write!(f, "Book not found"),
            KernelError::NotEnoughBooks => write!(f, "Not enough books"),
            KernelError::Validation => write!(f, "Validation error"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
