use crate::consts::TARGET;
use crate::errors::SolveError;
use crate::helper::SmallList;
use crate::operator::{Operator, Sign};
use crate::solution::Solution;
use crate::tables::{partitions, permutations};
use crate::ticket::Ticket;

// Solving is exhaustive search in a fixed order:
//
// for every partition of the ticket into digit groups
//   for both signs of the first group
//     for every assignment of operators to the gaps between groups
//       for every order of evaluating those operators
//         evaluate and compare against the target
//
// The order is part of the contract: the first solution found is the one reported.
// Operator assignments are enumerated as a base 6 counter with the leftmost
// operator as its least significant digit.
//
// Worst case, a ticket without solution, is about 2.3 million trials,
// dominated by the 2 * 6^5 * 5! trials of the partition into six single digits.

/// Counters describing the work done by a search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// Partitions of the ticket that were looked at
    pub partitions: usize,
    /// Candidate expressions that were evaluated
    pub trials: u64,
    /// Candidate expressions that were discarded because they divided by zero
    pub division_guards: u64,
}

/// The solutions found by a search together with the work it took.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Solutions in the order they were found
    pub solutions: Vec<Solution>,
    #[allow(missing_docs)]
    pub stats: SearchStats,
}

/// Outcome of evaluating a single candidate expression.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Reduction {
    Value(f64),
    DivisionByZero,
}

#[inline]
pub(crate) fn hits_target(value: f64) -> bool {
    (value - TARGET as f64).abs() < crate::consts::TOLERANCE
}

/// Collapses `operands` by applying `operators` in the order of their priority labels.
///
/// Each step combines the operand at the position of the operator with the one right of it,
/// stores the result in the left slot and removes the right operand, the operator and its label.
pub(crate) fn reduce(
    mut operands: SmallList<f64>,
    mut operators: SmallList<Operator>,
    mut order: SmallList<u8>,
) -> Result<Reduction, SolveError> {
    let n_operators = operators.len();
    if operands.len() != n_operators + 1 || order.len() != n_operators {
        return Err(SolveError::LengthMismatch {
            operands: operands.len(),
            operators: n_operators,
            order: order.len(),
        });
    }

    for label in 1..=n_operators as u8 {
        let pos = order
            .iter()
            .position(|&l| l == label)
            .ok_or(SolveError::MissingPriority { label })?;

        let result = match operators[pos].apply(operands[pos], operands[pos + 1]) {
            Some(result) => result,
            None => return Ok(Reduction::DivisionByZero),
        };

        operands[pos] = result;
        operands.remove(pos + 1);
        operators.remove(pos);
        order.remove(pos);
    }

    match *operands {
        [value] => Ok(Reduction::Value(value)),
        _ => Err(SolveError::LengthMismatch {
            operands: operands.len(),
            operators: operators.len(),
            order: order.len(),
        }),
    }
}

// Decodes the `combination`th assignment of operators to `n_operators` gaps
fn operator_combination(mut combination: usize, n_operators: usize) -> SmallList<Operator> {
    let n_codes = Operator::ALL.len();
    let mut operators = SmallList::new();
    for _ in 0..n_operators {
        operators.push(Operator::ALL[combination % n_codes]);
        combination /= n_codes;
    }
    operators
}

pub(crate) struct TicketSolver {
    ticket: Ticket,
    limit: usize,
    solutions: Vec<Solution>,
    stats: SearchStats,
}

impl TicketSolver {
    pub fn new(ticket: Ticket, limit: usize) -> Self {
        TicketSolver {
            ticket,
            limit,
            solutions: vec![],
            stats: SearchStats::default(),
        }
    }

    pub fn search(mut self) -> Result<SearchReport, SolveError> {
        self._search()?;
        Ok(SearchReport {
            solutions: self.solutions,
            stats: self.stats,
        })
    }

    fn is_done(&self) -> bool {
        self.solutions.len() >= self.limit
    }

    // returns early once `limit` solutions are found
    fn _search(&mut self) -> Result<(), SolveError> {
        if self.is_done() {
            return Ok(());
        }

        for &partition in partitions() {
            self.stats.partitions += 1;
            let groups = self.ticket.split(partition);

            match groups.len() {
                0 => continue,
                1 => {
                    if groups[0] == TARGET {
                        self.solutions.push(Solution::single(groups[0]));
                        if self.is_done() {
                            return Ok(());
                        }
                    }
                    continue;
                }
                _ => {}
            }

            let n_operators = groups.len() - 1;
            let n_combinations = Operator::ALL.len().pow(n_operators as u32);

            for &sign in &Sign::ALL {
                let operands: SmallList<f64> = groups
                    .iter()
                    .enumerate()
                    .map(|(i, &group)| match i {
                        0 => sign.apply(group as f64),
                        _ => group as f64,
                    })
                    .collect();

                for combination in 0..n_combinations {
                    let operators = operator_combination(combination, n_operators);

                    for order in permutations(n_operators) {
                        self.stats.trials += 1;
                        match reduce(operands, operators, order.labels())? {
                            Reduction::DivisionByZero => self.stats.division_guards += 1,
                            Reduction::Value(value) if hits_target(value) => {
                                self.solutions
                                    .push(Solution::new(sign, &groups, &operators, order));
                                if self.is_done() {
                                    return Ok(());
                                }
                            }
                            Reduction::Value(_) => {}
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
