use super::error::MerkleError;

pub mod keccak256;
pub mod sha256;

/// Size in bytes of every node in the tree.
pub const NODE_SIZE: usize = 32;

/// A hashed leaf or internal node.
pub type Node = [u8; NODE_SIZE];

pub trait HashMethod {
    /// Hash a leaf's raw data, once.
    fn hash_leaf(data: &[u8]) -> Node;

    /// Hash `left || right`, in exactly that order.
    fn hash_nodes(left: &Node, right: &Node) -> Node;
}

/// Convert an untrusted byte slice into a node.
pub fn node_from_slice(bytes: &[u8]) -> Result<Node, MerkleError> {
    bytes.try_into().map_err(|_| MerkleError::InvalidHashLength {
        expected: NODE_SIZE,
        got: bytes.len(),
    })
}
