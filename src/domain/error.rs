use thiserror::Error;

/// Errors raised while building trees or generating and encoding proofs.
///
/// Verification never produces one of these: a malformed proof is simply
/// reported as `false`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MerkleError {
    #[error("Leaves cannot be empty")]
    EmptyLeaves,

    #[error("Leaf index {index} out of range for a tree of {leaf_count} leaves")]
    IndexOutOfRange { index: usize, leaf_count: usize },

    #[error("Leaf not found in the Merkle tree")]
    LeafNotFound,

    #[error("Proof has {positions} positions but {siblings} siblings")]
    LengthMismatch { positions: usize, siblings: usize },

    #[error("Proof depth {depth} exceeds the packed maximum of {max}")]
    DepthExceeded { depth: usize, max: usize },

    #[error("Proof does not match the Merkle root")]
    ProofRootMismatch,

    #[error("Hash must be {expected} bytes long, got {got}")]
    InvalidHashLength { expected: usize, got: usize },
}
