use super::{HashMethod, Node};
use sha2::{digest::FixedOutput, Digest};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;
impl HashMethod for Sha256 {
    fn hash_leaf(data: &[u8]) -> Node {
        let mut hasher = sha2::Sha256::new();
        hasher.update(data);
        hasher.finalize_fixed().into()
    }

    fn hash_nodes(left: &Node, right: &Node) -> Node {
        let mut hasher = sha2::Sha256::new();
        hasher.update(left);
        hasher.update(right);
        hasher.finalize_fixed().into()
    }
}
