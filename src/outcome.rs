use crate::errors::{SolveError, TicketParseError};
use crate::solution::Solution;
use crate::ticket::Ticket;

/// Everything that can come of checking a ticket, for display to a user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The ticket is lucky
    Found(Solution),
    /// The ticket is valid but can't be calculated to 100
    NotFound,
    /// The input is not a 6-digit ticket
    InvalidInput(TicketParseError),
    /// The solver ran into an internal inconsistency
    Fault(SolveError),
}

impl Outcome {
    /// Returns the solution, if one was found.
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            Outcome::Found(solution) => Some(solution),
            _ => None,
        }
    }
}

/// Parse and solve a ticket, keeping bad input, unlucky tickets and solver faults apart.
pub fn check(ticket: &str) -> Outcome {
    let ticket = match ticket.parse::<Ticket>() {
        Ok(ticket) => ticket,
        Err(e) => return Outcome::InvalidInput(e),
    };
    match ticket.solution() {
        Ok(Some(solution)) => Outcome::Found(solution),
        Ok(None) => Outcome::NotFound,
        Err(e) => Outcome::Fault(e),
    }
}
