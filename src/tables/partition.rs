use crate::consts::{MAX_GROUPS, N_DIGITS};
use once_cell::sync::Lazy;

/// A way of splitting the six digits of a ticket into contiguous groups.
///
/// Holds the length of each group from left to right. Unused slots at the end are `0`.
/// The lengths always add up to 6 and no group follows an unused slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Partition([u8; MAX_GROUPS]);

impl Partition {
    /// Constructs a new `Partition`.
    ///
    /// # Panic
    /// Panics, if the lengths don't form a valid partition.
    pub fn new(lengths: [u8; MAX_GROUPS]) -> Self {
        Self::new_checked(lengths).unwrap()
    }

    /// Constructs a new `Partition`. Returns `None`, if the first group is empty,
    /// the lengths don't sum up to 6 or a group follows an empty slot.
    pub fn new_checked(lengths: [u8; MAX_GROUPS]) -> Option<Self> {
        let sum: usize = lengths.iter().map(|&len| len as usize).sum();
        let has_gap = lengths.windows(2).any(|pair| pair[0] == 0 && pair[1] != 0);
        if lengths[0] == 0 || sum != N_DIGITS || has_gap {
            return None;
        }
        Some(Partition(lengths))
    }

    /// Returns the length of every slot, including the unused ones.
    pub fn lengths(self) -> [u8; MAX_GROUPS] {
        self.0
    }

    /// Returns the lengths of the groups, without the unused slots.
    pub fn group_lengths(&self) -> &[u8] {
        &self.0[..self.n_groups()]
    }

    /// Returns the number of groups.
    pub fn n_groups(&self) -> usize {
        self.0.iter().take_while(|&&len| len != 0).count()
    }
}

static PARTITIONS: Lazy<Vec<Partition>> = Lazy::new(generate_partitions);

/// Returns all 32 partitions of a ticket in search order.
pub fn partitions() -> &'static [Partition] {
    &PARTITIONS
}

// The search order is that of six nested counters, the last slot outermost and
// the first slot innermost, filtered for a total of 6 and for gaps.
// The first slot is implied by the others, so filling the slots from last to second
// with ascending values and taking the remainder for the first slot visits them in the
// same order.
fn generate_partitions() -> Vec<Partition> {
    let mut partitions = Vec::with_capacity(32);
    let mut lengths = [0; MAX_GROUPS];
    fill_slot(MAX_GROUPS - 1, 0, &mut lengths, &mut partitions);
    partitions
}

fn fill_slot(slot: usize, used: usize, lengths: &mut [u8; MAX_GROUPS], partitions: &mut Vec<Partition>) {
    if slot == 0 {
        // the first group takes whatever is left, at least 1 digit
        lengths[0] = (N_DIGITS - used) as u8;
        partitions.push(Partition(*lengths));
        return;
    }

    // slot `n` (0-based) may hold a group of up to `6 - n` digits
    let max_len = N_DIGITS - slot;
    let next_len = lengths.get(slot + 1).cloned().unwrap_or(0);
    for len in 0..=max_len {
        // leave at least one digit for the first group
        if used + len >= N_DIGITS {
            break;
        }
        // a group may not follow an empty slot
        if len == 0 && next_len != 0 {
            continue;
        }
        lengths[slot] = len as u8;
        fill_slot(slot - 1, used + len, lengths, partitions);
    }
    lengths[slot] = 0;
}
