use itertools::Itertools;
use std::fmt;
use std::marker::PhantomData;

use super::hash::{keccak256::Keccak256, HashMethod, Node};
use super::verify::fold_root;

pub mod encoding;

/// Where a sibling sits relative to the running hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// Sibling is hashed first: `hash(sibling || current)`.
    Left,
    /// Sibling is hashed second: `hash(current || sibling)`.
    Right,
}

impl Position {
    pub fn from_is_left(is_left: bool) -> Self {
        if is_left {
            Position::Left
        } else {
            Position::Right
        }
    }

    pub fn is_left(self) -> bool {
        self == Position::Left
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProofStep {
    pub sibling: Node,
    pub position: Position,
}

impl ProofStep {
    pub fn new(sibling: Node, position: Position) -> Self {
        Self { sibling, position }
    }
}

/// An inclusion proof: the sibling of every level from the leaf up to the
/// level just below the root, together with its position.
///
/// This is the single in-memory form; the array and packed wire formats in
/// [`encoding`] are both derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleProof<Method>
where
    Method: HashMethod,
{
    pub steps: Vec<ProofStep>,
    method: PhantomData<Method>,
}

pub type MerkleProofKeccak256 = MerkleProof<Keccak256>;

impl<Method: HashMethod> MerkleProof<Method> {
    pub fn new(steps: Vec<ProofStep>) -> Self {
        Self {
            steps,
            method: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Return the sibling hashes only.
    pub fn proof_hashes(&self) -> Vec<Node> {
        self.steps.iter().map(|step| step.sibling).collect()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.steps.iter().map(|step| step.position).collect()
    }

    /// Compute the Merkle root by folding the steps over `leaf_hash`.
    pub fn root(&self, leaf_hash: &Node) -> Node {
        fold_root::<Method>(
            *leaf_hash,
            self.steps.iter().map(|step| (step.position, &step.sibling)),
        )
    }

    /// Verify a proof by comparing the recomputed root with `root`.
    pub fn verify(&self, root: &Node, leaf_hash: &Node) -> bool {
        self.root(leaf_hash) == *root
    }

    /// Like `verify`, but hashes the raw leaf `data` first.
    pub fn verify_data(&self, root: &Node, data: &[u8]) -> bool {
        self.verify(root, &Method::hash_leaf(data))
    }
}

impl<Method: HashMethod> fmt::Display for MerkleProof<Method> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self
            .steps
            .iter()
            .map(|step| {
                let side = if step.position.is_left() { 'L' } else { 'R' };
                format!("{}:0x{}", side, hex::encode(step.sibling))
            })
            .join(", ");
        write!(f, "[{steps}]")
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::hash::{keccak256::Keccak256, HashMethod};
    use crate::domain::proof::{MerkleProof, MerkleProofKeccak256, Position, ProofStep};

    #[test]
    fn test_empty_proof_root_is_leaf_hash() {
        let proof = MerkleProofKeccak256::new(vec![]);
        let leaf_hash = Keccak256::hash_leaf(&[0x12, 0x34]);

        assert_eq!(proof.root(&leaf_hash), leaf_hash);
        assert!(proof.verify_data(&leaf_hash, &[0x12, 0x34]));
        assert!(!proof.verify_data(&leaf_hash, &[0x12, 0x35]));
    }

    #[test]
    fn test_position_selects_operand_order() {
        let current = Keccak256::hash_leaf(b"current");
        let sibling = Keccak256::hash_leaf(b"sibling");
        let sibling_first = Keccak256::hash_nodes(&sibling, &current);
        let current_first = Keccak256::hash_nodes(&current, &sibling);

        let cases = [
            (Position::Left, sibling_first, current_first),
            (Position::Right, current_first, sibling_first),
        ];
        for (position, expected, swapped) in cases {
            let proof = MerkleProofKeccak256::new(vec![ProofStep::new(sibling, position)]);
            assert_eq!(proof.root(&current), expected, "{position:?} sibling");
            assert!(proof.verify(&expected, &current));
            assert!(!proof.verify(&swapped, &current), "{position:?} must not commute");
        }
    }

    #[test]
    fn test_multi_step_proof() {
        //         R
        //       /   \
        //     N1     N2
        //    /  \   /  \
        //   A    B C    D
        let a = Keccak256::hash_leaf(b"A");
        let b = Keccak256::hash_leaf(b"B");
        let c = Keccak256::hash_leaf(b"C");
        let d = Keccak256::hash_leaf(b"D");

        let n1 = Keccak256::hash_nodes(&a, &b);
        let n2 = Keccak256::hash_nodes(&c, &d);
        let r = Keccak256::hash_nodes(&n1, &n2);

        // Proof for B: A on the left, then N2 on the right
        let proof = MerkleProof::<Keccak256>::new(vec![
            ProofStep::new(a, Position::Left),
            ProofStep::new(n2, Position::Right),
        ]);

        assert!(proof.verify(&r, &b), "Manually built multi-step proof must match the final root");
        assert!(proof.verify_data(&r, b"B"));

        let fake_root = Keccak256::hash_leaf(b"fake_root");
        assert!(!proof.verify(&fake_root, &b), "Wrong root must fail");
    }

    #[test]
    fn test_proof_hashes_and_positions() {
        let sibling_hash = Keccak256::hash_leaf(b"sibling_data");
        let proof = MerkleProofKeccak256::new(vec![ProofStep::new(sibling_hash, Position::Left)]);

        assert_eq!(proof.len(), 1, "One-step proof must have exactly 1 sibling");
        assert_eq!(proof.proof_hashes(), vec![sibling_hash]);
        assert_eq!(proof.positions(), vec![Position::Left]);
    }

    #[test]
    fn test_display() {
        let proof = MerkleProofKeccak256::new(vec![
            ProofStep::new([0x11; 32], Position::Left),
            ProofStep::new([0x22; 32], Position::Right),
        ]);
        assert_eq!(
            proof.to_string(),
            format!("[L:0x{}, R:0x{}]", "11".repeat(32), "22".repeat(32))
        );
        assert_eq!(MerkleProofKeccak256::new(vec![]).to_string(), "[]");
    }

    #[test]
    fn test_malicious_proof_fails() {
        // If we flip the direction or the sibling data, verification must fail
        let leaf_hash = Keccak256::hash_leaf(b"victim_leaf");
        let sibling_hash = Keccak256::hash_leaf(b"sibling_data");

        // Real direction is Right => (leaf, sibling)
        let correct_root = Keccak256::hash_nodes(&leaf_hash, &sibling_hash);

        let flipped = MerkleProofKeccak256::new(vec![ProofStep::new(sibling_hash, Position::Left)]);
        assert!(
            !flipped.verify(&correct_root, &leaf_hash),
            "Malicious proof flipping direction must fail"
        );

        let mut tampered = sibling_hash;
        tampered[31] ^= 1;
        let swapped = MerkleProofKeccak256::new(vec![ProofStep::new(tampered, Position::Right)]);
        assert!(!swapped.verify(&correct_root, &leaf_hash));
    }
}
