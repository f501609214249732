/// Build-time options for a [`super::MerkleTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerkleTreeOptions {
    /// Hash each supplied leaf before placing it in level 0. When false the
    /// leaves must already be 32-byte nodes.
    pub hash_leaves: bool,
}

impl Default for MerkleTreeOptions {
    fn default() -> Self {
        Self { hash_leaves: true }
    }
}
