use crate::consts::TARGET;
use crate::errors::SolveError;
use crate::helper::SmallList;
use crate::operator::{Operator, Sign};
use crate::solver::{reduce, Reduction};
use crate::tables::Order;
use std::fmt;

/// One operator of a solution together with the operand to its right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Step {
    /// When this operator is evaluated, starting from 1
    pub priority: u8,
    #[allow(missing_docs)]
    pub operator: Operator,
    /// The digit group to the right of the operator
    pub operand: u32,
}

/// An expression over the digit groups of a ticket that evaluates to 100.
///
/// Formats as the first operand followed by each operator, annotated with its
/// priority label, and its right operand:
///
/// ```text
/// -1 (3) + 23 (1) - 4 (2) * 5 (4) + 6 = 100
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Solution {
    sign: Sign,
    first: u32,
    steps: SmallList<Step>,
}

impl Solution {
    // a ticket whose digits read 100 on their own
    pub(crate) fn single(value: u32) -> Solution {
        Solution {
            sign: Sign::Positive,
            first: value,
            steps: SmallList::new(),
        }
    }

    pub(crate) fn new(sign: Sign, groups: &[u32], operators: &[Operator], order: &Order) -> Solution {
        debug_assert_eq!(groups.len(), operators.len() + 1);
        debug_assert_eq!(operators.len(), order.len());
        let steps = operators
            .iter()
            .zip(order.iter())
            .zip(&groups[1..])
            .map(|((&operator, &priority), &operand)| Step {
                priority,
                operator,
                operand,
            })
            .collect();
        Solution {
            sign,
            first: groups[0],
            steps,
        }
    }

    /// Returns the sign that was applied to the first digit group.
    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Returns the first operand with its sign applied.
    pub fn first_operand(&self) -> i64 {
        match self.sign {
            Sign::Positive => self.first as i64,
            Sign::Negative => -(self.first as i64),
        }
    }

    /// Returns the operators in left to right order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Replays the expression in the order given by the priority labels and returns its value.
    /// Returns `Ok(None)`, if the replay divides by zero, which a solution found by the solver never does.
    pub fn evaluate(&self) -> Result<Option<f64>, SolveError> {
        let operands = std::iter::once(self.sign.apply(self.first as f64))
            .chain(self.steps.iter().map(|step| step.operand as f64))
            .collect();
        let operators = self.steps.iter().map(|step| step.operator).collect();
        let order = self.steps.iter().map(|step| step.priority).collect();

        match reduce(operands, operators, order)? {
            Reduction::Value(value) => Ok(Some(value)),
            Reduction::DivisionByZero => Ok(None),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.first_operand())?;
        for step in self.steps.iter() {
            write!(f, " ({}) {} {}", step.priority, step.operator, step.operand)?;
        }
        write!(f, " = {}", TARGET)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Solution {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
