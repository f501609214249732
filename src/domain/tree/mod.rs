use log::{debug, info};
use rayon::prelude::*;
use std::marker::PhantomData;
use std::time::Instant;

use super::error::MerkleError;
use super::hash::{keccak256::Keccak256, node_from_slice, HashMethod, Node};
use super::proof::{MerkleProof, Position, ProofStep};

mod options;

pub use options::MerkleTreeOptions;

/// A static binary Merkle tree stored level by level.
///
/// Level 0 holds the hashed leaves, the last level holds the root. When a
/// level has an odd number of nodes the last node is paired with itself, so
/// every level above the leaves has `ceil(len / 2)` nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree<Method: HashMethod> {
    levels: Vec<Vec<Node>>,
    root: Node, // cached root
    method: PhantomData<Method>,
}

pub type MerkleTreeKeccak256 = MerkleTree<Keccak256>;

impl<Method: HashMethod> MerkleTree<Method> {
    /// Build a tree from raw leaves data (each leaf is hashed once).
    pub fn from_leaves_data<L>(leaves: &[L]) -> Result<Self, MerkleError>
    where
        L: AsRef<[u8]> + Sync,
    {
        let hashed_leaves: Vec<Node> = leaves
            .par_iter()
            .map(|leaf| Method::hash_leaf(leaf.as_ref()))
            .collect();
        Self::from_leaves_hashes(hashed_leaves)
    }

    /// Build a tree from leaves according to `options`.
    pub fn from_leaves_with_options<L>(
        leaves: &[L],
        options: &MerkleTreeOptions,
    ) -> Result<Self, MerkleError>
    where
        L: AsRef<[u8]> + Sync,
    {
        if options.hash_leaves {
            return Self::from_leaves_data(leaves);
        }

        let nodes = leaves
            .iter()
            .map(|leaf| node_from_slice(leaf.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_leaves_hashes(nodes)
    }

    /// Build a tree from already-hashed leaves.
    pub fn from_leaves_hashes(leaves: Vec<Node>) -> Result<Self, MerkleError> {
        let total_start = Instant::now();
        if leaves.is_empty() {
            return Err(MerkleError::EmptyLeaves);
        }

        let leaf_count = leaves.len();
        let mut levels = vec![leaves];
        while let Some(level) = levels.last().filter(|level| level.len() > 1) {
            let next = Self::build_level(level);
            levels.push(next);
        }

        let root = levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .ok_or(MerkleError::EmptyLeaves)?;

        debug!(
            "Built {} levels over {} leaves in {:?}",
            levels.len(),
            leaf_count,
            total_start.elapsed()
        );
        info!("Merkle root 0x{}", hex::encode(root));

        Ok(Self {
            levels,
            root,
            method: PhantomData,
        })
    }

    /// Pair adjacent nodes left to right. A lone trailing node is hashed with itself.
    fn build_level(level: &[Node]) -> Vec<Node> {
        level
            .par_chunks(2)
            .map(|pair| {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                Method::hash_nodes(left, right)
            })
            .collect()
    }

    pub fn get_root(&self) -> Node {
        self.root
    }

    /// The hashed leaves, in insertion order.
    pub fn get_hashes(&self) -> &[Node] {
        &self.levels[0]
    }

    pub fn levels(&self) -> &[Vec<Node>] {
        &self.levels
    }

    pub fn leaf_count(&self) -> usize {
        self.levels[0].len()
    }

    /// Number of proof steps for any leaf of this tree.
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    /// Return the index of data (after hashing) among the leaves.
    pub fn get_index_by_data(&self, data: &[u8]) -> Result<usize, MerkleError> {
        let hashed = Method::hash_leaf(data);
        self.get_index_by_hash(&hashed)
    }

    /// Return the index of the first leaf equal to `hash`.
    pub fn get_index_by_hash(&self, hash: &Node) -> Result<usize, MerkleError> {
        self.get_hashes()
            .iter()
            .position(|h| h == hash)
            .ok_or(MerkleError::LeafNotFound)
    }

    /// Generate the inclusion proof for the leaf at `index`, leaf level first.
    pub fn get_proof(&self, index: usize) -> Result<MerkleProof<Method>, MerkleError> {
        let leaf_count = self.leaf_count();
        if index >= leaf_count {
            return Err(MerkleError::IndexOutOfRange { index, leaf_count });
        }

        let mut steps = Vec::with_capacity(self.depth());
        let mut node = index;

        // Every level except the root's contributes one sibling
        for level in &self.levels[..self.depth()] {
            let step = if node % 2 == 0 {
                let sibling = level.get(node + 1).unwrap_or(&level[node]);
                ProofStep::new(*sibling, Position::Right)
            } else {
                ProofStep::new(level[node - 1], Position::Left)
            };
            steps.push(step);
            node /= 2;
        }

        // Check that the proof is correct
        let leaf_hash = self.levels[0][index];
        let proof = MerkleProof::new(steps);
        if proof.verify(&self.root, &leaf_hash) {
            debug!("Generated {}-step proof for leaf {}", proof.len(), index);
            Ok(proof)
        } else {
            Err(MerkleError::ProofRootMismatch)
        }
    }

    /// Generate the proof for the first leaf whose data is `data`.
    pub fn get_proof_by_data(&self, data: &[u8]) -> Result<MerkleProof<Method>, MerkleError> {
        self.get_proof(self.get_index_by_data(data)?)
    }
}
