/// Number of digits on a ticket
pub const N_DIGITS: usize = 6;

/// Most groups a ticket can be split into, one per digit
pub const MAX_GROUPS: usize = N_DIGITS;

/// Most operators joining the groups of a single partition
pub const MAX_OPERATORS: usize = MAX_GROUPS - 1;

/// The value a lucky ticket has to be calculated to
pub const TARGET: u32 = 100;

/// Maximum distance of a calculated value from [`TARGET`] that still counts as a hit.
/// Divisions produce inexact intermediate values.
pub const TOLERANCE: f64 = 1e-9;
