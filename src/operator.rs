use std::fmt;

/// The arithmetic operators that can be placed between two groups of digits.
///
/// Each operator has a numeric code in `1..=6`. The search enumerates operator
/// combinations as counters over these codes, so the order of [`Operator::ALL`] matters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a * -b`
    MulNeg,
    /// `a / -b`
    DivNeg,
}

impl Default for Operator {
    fn default() -> Self {
        Operator::Add
    }
}

impl Operator {
    /// All operators, ordered by code
    pub const ALL: [Operator; 6] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::MulNeg,
        Operator::DivNeg,
    ];

    /// Constructs an operator from its code. Returns `None`, if the code is not in the range of `1..=6`.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1..=6 => Some(Self::ALL[code as usize - 1]),
            _ => None,
        }
    }

    /// Returns the code of this operator in `1..=6`.
    pub fn code(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the symbol as it appears in a formatted solution.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::MulNeg => "* -",
            Operator::DivNeg => "/ -",
        }
    }

    /// Returns whether the operator divides by its right operand.
    pub fn is_division(self) -> bool {
        matches!(self, Operator::Div | Operator::DivNeg)
    }

    /// Applies the operator. Returns `None` for a division by zero.
    #[inline]
    pub fn apply(self, left: f64, right: f64) -> Option<f64> {
        if right == 0.0 && self.is_division() {
            return None;
        }
        let result = match self {
            Operator::Add => left + right,
            Operator::Sub => left - right,
            Operator::Mul => left * right,
            Operator::Div => left / right,
            Operator::MulNeg => left * -right,
            Operator::DivNeg => left / -right,
        };
        Some(result)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Sign of the first operand of an expression.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    #[allow(missing_docs)]
    Positive,
    #[allow(missing_docs)]
    Negative,
}

impl Sign {
    /// Both signs in search order
    pub const ALL: [Sign; 2] = [Sign::Positive, Sign::Negative];

    /// Applies the sign to `value`.
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Sign::Positive => value,
            Sign::Negative => -value,
        }
    }
}
