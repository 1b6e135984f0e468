use crate::consts::N_DIGITS;
use crate::errors::{FromDigitsError, SolveError, TicketParseError};
use crate::helper::SmallList;
use crate::solution::Solution;
use crate::solver::{SearchReport, TicketSolver};
use crate::tables::Partition;

use crunchy::unroll;
use rand::Rng;
use std::{fmt, str};

/// A ticket number of exactly six decimal digits.
///
/// Leading zeros are significant: `"000100"` and `"100000"` are different tickets.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Ticket([u8; N_DIGITS]);

impl Ticket {
    /// Creates a ticket from its digits. Every digit must be in `0..=9`.
    pub fn from_digits(digits: [u8; N_DIGITS]) -> Result<Ticket, FromDigitsError> {
        unroll! {
            for position in 0..6 {
                if digits[position] > 9 {
                    return Err(FromDigitsError { position, value: digits[position] });
                }
            }
        }
        Ok(Ticket(digits))
    }

    /// Draws a uniformly distributed random ticket.
    pub fn generate() -> Ticket {
        let mut rng = rand::thread_rng();
        let mut digits = [0; N_DIGITS];
        for digit in digits.iter_mut() {
            *digit = rng.gen_range(0..10);
        }
        Ticket(digits)
    }

    /// Returns the digits from left to right.
    pub fn digits(self) -> [u8; N_DIGITS] {
        self.0
    }

    /// Reads the digit groups of `partition` as decimal numbers, from left to right.
    pub fn groups(self, partition: Partition) -> Vec<u32> {
        self.split(partition).to_vec()
    }

    pub(crate) fn split(self, partition: Partition) -> SmallList<u32> {
        let mut groups = SmallList::new();
        let mut digits = self.0.iter();
        for &len in partition.group_lengths() {
            let group = digits
                .by_ref()
                .take(len as usize)
                .fold(0, |acc, &digit| acc * 10 + digit as u32);
            groups.push(group);
        }
        groups
    }

    /// Find the first solution in search order. Returns `Ok(None)` if the ticket isn't lucky.
    ///
    /// An `Err` signals an internal fault of the solver, not a property of the ticket.
    pub fn solution(self) -> Result<Option<Solution>, SolveError> {
        let report = self.search(1)?;
        Ok(report.solutions.into_iter().next())
    }

    /// Find up to `limit` solutions, in search order.
    /// The first one is always the one [`Ticket::solution`] returns.
    pub fn solutions_at_most(self, limit: usize) -> Result<Vec<Solution>, SolveError> {
        Ok(self.search(limit)?.solutions)
    }

    /// Search for up to `limit` solutions and report the work the search took.
    pub fn search(self, limit: usize) -> Result<SearchReport, SolveError> {
        TicketSolver::new(self, limit).search()
    }

    /// Check whether the digits can be calculated to 100.
    pub fn is_lucky(self) -> Result<bool, SolveError> {
        Ok(self.solution()?.is_some())
    }
}

impl str::FromStr for Ticket {
    type Err = TicketParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n_chars = s.chars().count();
        if n_chars != N_DIGITS {
            return Err(TicketParseError::WrongLength(n_chars));
        }
        if let Some((position, ch)) = s.chars().enumerate().find(|(_, ch)| !ch.is_ascii_digit()) {
            return Err(TicketParseError::InvalidCharacter { position, ch });
        }

        // six ascii digits, so also six bytes
        let bytes = s.as_bytes();
        let mut digits = [0; N_DIGITS];
        unroll! {
            for i in 0..6 {
                digits[i] = bytes[i] - b'0';
            }
        }
        Ok(Ticket(digits))
    }
}

impl std::convert::TryFrom<String> for Ticket {
    type Error = TicketParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Ticket> for String {
    fn from(ticket: Ticket) -> String {
        ticket.to_string()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for digit in self.0.iter() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}
