//! Proof verification for untrusted input.
//!
//! Both entry points are total: a proof of the wrong shape yields `false`,
//! never an error or a panic.

use log::debug;

use super::hash::{HashMethod, Node};
use super::proof::{encoding::MAX_PACKED_DEPTH, Position};

/// Fold `(position, sibling)` steps over `leaf_hash`, leaf level first.
pub(crate) fn fold_root<'a, Method: HashMethod>(
    leaf_hash: Node,
    steps: impl IntoIterator<Item = (Position, &'a Node)>,
) -> Node {
    steps
        .into_iter()
        .fold(leaf_hash, |current, (position, sibling)| match position {
            Position::Left => Method::hash_nodes(sibling, &current),
            Position::Right => Method::hash_nodes(&current, sibling),
        })
}

/// Verify `leaf` against `root` with one boolean per step (`true` = sibling on the left).
pub fn verify_array<Method: HashMethod>(
    leaf: &[u8],
    root: &Node,
    positions: &[bool],
    siblings: &[Node],
) -> bool {
    if positions.len() != siblings.len() {
        debug!(
            "Rejecting proof with {} positions and {} siblings",
            positions.len(),
            siblings.len()
        );
        return false;
    }

    let steps = positions
        .iter()
        .map(|&is_left| Position::from_is_left(is_left))
        .zip(siblings);
    fold_root::<Method>(Method::hash_leaf(leaf), steps) == *root
}

/// Verify `leaf` against `root` with positions packed into an integer.
///
/// The step count is `siblings.len()`; bit `i` of `packed` is the position of
/// step `i`. Bits above the step count are never read.
pub fn verify_packed<Method: HashMethod>(
    leaf: &[u8],
    root: &Node,
    packed: u128,
    siblings: &[Node],
) -> bool {
    if siblings.len() > MAX_PACKED_DEPTH {
        debug!("Rejecting packed proof of depth {}", siblings.len());
        return false;
    }
    let mut bits = packed;
    let steps = siblings.iter().map(|sibling| {
        let position = Position::from_is_left(bits & 1 == 1);
        bits >>= 1;
        (position, sibling)
    });
    fold_root::<Method>(Method::hash_leaf(leaf), steps) == *root
}
