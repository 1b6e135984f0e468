use crate::consts::MAX_OPERATORS;
use crate::helper::SmallList;
use once_cell::sync::Lazy;
use std::ops::Deref;

/// An order of evaluation for the operators of an expression.
///
/// Entry `i` is the priority label of the `i`th operator from the left. The operator
/// labelled `1` is evaluated first, then the one labelled `2` and so on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Order(pub(crate) SmallList<u8>);

impl Order {
    pub(crate) fn labels(&self) -> SmallList<u8> {
        self.0
    }
}

impl Deref for Order {
    type Target = [u8];
    fn deref(&self) -> &[u8] {
        &self.0
    }
}

static PERMUTATIONS: Lazy<[Vec<Order>; MAX_OPERATORS + 1]> = Lazy::new(|| {
    std::array::from_fn(|n_operators| {
        let labels: Vec<u8> = (1..=n_operators as u8).collect();
        insertion_permutations(&labels)
    })
});

/// Returns every order of evaluation for `n_operators` operators in search order.
///
/// For 0 operators this is the single empty order. Returns an empty slice for more
/// operators than a ticket can have.
pub fn permutations(n_operators: usize) -> &'static [Order] {
    PERMUTATIONS
        .get(n_operators)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// Permutations of the tail, with the head inserted at every position of each.
// The order of the output is the order of the search, which is not lexicographic.
fn insertion_permutations(elements: &[u8]) -> Vec<Order> {
    let (&head, tail) = match elements.split_first() {
        Some(split) => split,
        None => return vec![Order::default()],
    };

    let mut permutations = vec![];
    for perm in insertion_permutations(tail) {
        for pos in 0..=perm.len() {
            let mut labels = perm.labels();
            labels.insert(pos, head);
            permutations.push(Order(labels));
        }
    }
    permutations
}
