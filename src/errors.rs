//! Errors that may be encountered when reading or solving a ticket
#[cfg(doc)]
use crate::Ticket;

/// Error for [`Ticket::from_str`](std::str::FromStr::from_str)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum TicketParseError {
    /// Ticket does not consist of exactly 6 characters. Contains the number of characters found.
    #[error("ticket should contain exactly 6 digits, found {0} characters")]
    WrongLength(usize),
    /// Ticket contains something other than an ASCII digit
    #[error("character {position} of the ticket is not a digit: '{ch}'")]
    InvalidCharacter {
        /// Index of the offending character, counting from 0
        position: usize,
        /// The offending character
        ch: char,
    },
}

/// Error for [`Ticket::from_digits`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("digit {position} of the ticket is {value}, expected 0..=9")]
pub struct FromDigitsError {
    /// Index of the offending digit
    pub position: usize,
    /// The offending value
    pub value: u8,
}

/// An internal inconsistency detected while evaluating a candidate expression.
///
/// These are never expected to occur. They signal a logic error in the solver
/// and are kept apart from "no solution".
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum SolveError {
    /// No remaining operator carries the priority label due next
    #[error("no operator holds priority label {label}")]
    MissingPriority {
        /// The label that was searched for
        label: u8,
    },
    /// Operands, operators and priority labels don't line up
    #[error("{operands} operands can't be combined by {operators} operators in an order of {order} labels")]
    LengthMismatch {
        /// Number of operands
        operands: usize,
        /// Number of operators
        operators: usize,
        /// Number of priority labels
        order: usize,
    },
}
