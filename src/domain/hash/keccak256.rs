use super::{HashMethod, Node};
use sha3::{digest::FixedOutput, Digest};

/// Keccak-256 as used by the EVM (not the NIST SHA3-256 padding).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256;
impl HashMethod for Keccak256 {
    fn hash_leaf(data: &[u8]) -> Node {
        let mut hasher = sha3::Keccak256::new();
        hasher.update(data);
        hasher.finalize_fixed().into()
    }

    fn hash_nodes(left: &Node, right: &Node) -> Node {
        let mut hasher = sha3::Keccak256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize_fixed().into()
    }
}

#[cfg(test)]
mod tests {
    use super::Keccak256;
    use crate::domain::hash::HashMethod;

    #[test]
    fn test_empty_leaf_vector() {
        assert_eq!(
            hex::encode(Keccak256::hash_leaf(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_hash_nodes_is_ordered() {
        let a = Keccak256::hash_leaf(&[0x12, 0x34]);
        let b = Keccak256::hash_leaf(&[0x56, 0x78]);

        let mut joined = a.to_vec();
        joined.extend_from_slice(&b);
        assert_eq!(
            Keccak256::hash_nodes(&a, &b),
            Keccak256::hash_leaf(&joined),
            "Pair hash must be the hash of left || right"
        );
        assert_ne!(
            Keccak256::hash_nodes(&a, &b),
            Keccak256::hash_nodes(&b, &a),
            "Operand order must matter"
        );
    }
}
