#![warn(missing_docs)]
//! The Lucky Ticket library
//!
//! ## Overview
//!
//! A ticket number of six digits is lucky, if its digits can be calculated to 100.
//! The digits are split into contiguous groups, the groups are joined by operators
//! (`+`, `-`, `*`, `/` and the sign flipped `* -` and `/ -`) and the operators are evaluated
//! in any order, independent of their position. The first group may also be negated.
//!
//! The solver searches all of these combinations in a fixed order and reports the first hit.
//! Every operator in a solution is annotated with its rank in the order of evaluation.
//!
//! ## Example
//!
//! ```
//! use lucky_ticket::{find_solution, Ticket};
//!
//! let solution = find_solution("123456").unwrap().unwrap();
//! assert_eq!(solution.to_string(), "-1 (3) + 23 (1) - 4 (2) * 5 (4) + 6 = 100");
//!
//! // invalid tickets have no solution
//! assert!(find_solution("12345").unwrap().is_none());
//!
//! // Tickets can be parsed and solved directly for more control
//! let ticket: Ticket = "999999".parse().unwrap();
//! for solution in ticket.solutions_at_most(3).unwrap() {
//!     println!("{}", solution);
//! }
//! ```
mod consts;
pub mod errors;
mod helper;
mod operator;
mod outcome;
mod solution;
mod solver;
pub mod tables;
mod ticket;

pub use crate::consts::{MAX_OPERATORS, N_DIGITS, TARGET, TOLERANCE};
pub use crate::errors::{FromDigitsError, SolveError, TicketParseError};
pub use crate::operator::{Operator, Sign};
pub use crate::outcome::{check, Outcome};
pub use crate::solution::{Solution, Step};
pub use crate::solver::{SearchReport, SearchStats};
pub use crate::ticket::Ticket;

/// Find the first solution for a ticket given as a string.
///
/// Anything but exactly six ASCII digits has no solution. An `Err` is only returned
/// for internal faults of the solver. Use [`check`] to find out why there is no solution.
pub fn find_solution(ticket: &str) -> Result<Option<Solution>, SolveError> {
    match ticket.parse::<Ticket>() {
        Ok(ticket) => ticket.solution(),
        Err(_) => Ok(None),
    }
}
