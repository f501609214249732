//! Wire formats for [`MerkleProof`].
//!
//! Both formats carry the sibling hashes unchanged, leaf level first. They
//! differ only in how the positions travel:
//!
//! * [`ArrayProof`] keeps one boolean per step (`true` = sibling on the left).
//! * [`PackedProof`] folds the same booleans into one `u128`, with the step
//!   nearest the leaf in bit 0, so a verifier reads them with a right-shift
//!   loop and takes the step count from the sibling list.

use super::{MerkleProof, Position, ProofStep};
use crate::domain::error::MerkleError;
use crate::domain::hash::{HashMethod, Node};
use crate::domain::verify::{verify_array, verify_packed};

/// Deepest proof whose positions fit in a packed integer.
pub const MAX_PACKED_DEPTH: usize = u128::BITS as usize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayProof {
    pub positions: Vec<bool>,
    pub siblings: Vec<Node>,
}

impl ArrayProof {
    pub fn verify<Method: HashMethod>(&self, leaf: &[u8], root: &Node) -> bool {
        verify_array::<Method>(leaf, root, &self.positions, &self.siblings)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackedProof {
    pub positions: u128,
    pub siblings: Vec<Node>,
}

impl PackedProof {
    pub fn verify<Method: HashMethod>(&self, leaf: &[u8], root: &Node) -> bool {
        verify_packed::<Method>(leaf, root, self.positions, &self.siblings)
    }
}

/// Pack `positions` (leaf level first) into an integer with the first step in bit 0.
pub fn pack_positions(positions: &[bool]) -> Result<u128, MerkleError> {
    if positions.len() > MAX_PACKED_DEPTH {
        return Err(MerkleError::DepthExceeded {
            depth: positions.len(),
            max: MAX_PACKED_DEPTH,
        });
    }

    // First step ends up in the most significant occupied bit
    let mut buffer = positions
        .iter()
        .fold(0u128, |acc, &is_left| (acc << 1) | u128::from(is_left));

    // Reverse the occupied bits so the first step lands in bit 0
    let mut packed = 0u128;
    for _ in 0..positions.len() {
        packed = (packed << 1) | (buffer & 1);
        buffer >>= 1;
    }
    Ok(packed)
}

/// Read `len` positions back out of a packed integer, first step from bit 0.
pub fn unpack_positions(mut packed: u128, len: usize) -> Vec<bool> {
    (0..len)
        .map(|_| {
            let is_left = packed & 1 == 1;
            packed >>= 1;
            is_left
        })
        .collect()
}

impl<Method: HashMethod> MerkleProof<Method> {
    pub fn to_array(&self) -> ArrayProof {
        ArrayProof {
            positions: self.steps.iter().map(|s| s.position.is_left()).collect(),
            siblings: self.proof_hashes(),
        }
    }

    pub fn to_packed(&self) -> Result<PackedProof, MerkleError> {
        let positions: Vec<bool> = self.steps.iter().map(|s| s.position.is_left()).collect();
        Ok(PackedProof {
            positions: pack_positions(&positions)?,
            siblings: self.proof_hashes(),
        })
    }

    pub fn from_array(array: &ArrayProof) -> Result<Self, MerkleError> {
        if array.positions.len() != array.siblings.len() {
            return Err(MerkleError::LengthMismatch {
                positions: array.positions.len(),
                siblings: array.siblings.len(),
            });
        }

        let steps = array
            .positions
            .iter()
            .zip(&array.siblings)
            .map(|(&is_left, sibling)| ProofStep::new(*sibling, Position::from_is_left(is_left)))
            .collect();
        Ok(Self::new(steps))
    }

    pub fn from_packed(packed: &PackedProof) -> Result<Self, MerkleError> {
        let depth = packed.siblings.len();
        if depth > MAX_PACKED_DEPTH {
            return Err(MerkleError::DepthExceeded {
                depth,
                max: MAX_PACKED_DEPTH,
            });
        }

        let steps = unpack_positions(packed.positions, depth)
            .into_iter()
            .zip(&packed.siblings)
            .map(|(is_left, sibling)| ProofStep::new(*sibling, Position::from_is_left(is_left)))
            .collect();
        Ok(Self::new(steps))
    }
}
