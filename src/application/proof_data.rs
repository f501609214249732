//! Builds the arguments a verifier contract is called with, from hex leaves.

use anyhow::{Context, Result};
use log::debug;

use super::{decode_hex, decode_node, encode_hex};
use crate::domain::{
    hash::{HashMethod, Node},
    proof::MerkleProof,
    tree::MerkleTree,
    verify::{verify_array, verify_packed},
};

/// Array-encoded proof: `proof_left[i]` is true when `proof_data[i]` is the left operand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProofData {
    pub proof_left: Vec<bool>,
    pub proof_data: Vec<String>,
    pub root: String,
}

/// Packed proof: bit `i` of `positions` is the position of `proof_data[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedProofData {
    pub positions: u128,
    pub proof_data: Vec<String>,
    pub root: String,
}

fn build_proof<Method, S>(leaves: &[S], target: usize) -> Result<(MerkleProof<Method>, Node)>
where
    Method: HashMethod,
    S: AsRef<str>,
{
    let decoded = leaves
        .iter()
        .enumerate()
        .map(|(index, leaf)| {
            decode_hex(leaf.as_ref()).with_context(|| format!("Leaf {index} is not valid hex"))
        })
        .collect::<Result<Vec<_>>>()?;

    let tree = MerkleTree::<Method>::from_leaves_data(&decoded)?;
    let proof = tree
        .get_proof(target)
        .with_context(|| format!("Cannot prove leaf {target}"))?;
    debug!("Proof for leaf {target}: {proof}");
    Ok((proof, tree.get_root()))
}

pub fn get_proof_data<Method, S>(leaves: &[S], target: usize) -> Result<ProofData>
where
    Method: HashMethod,
    S: AsRef<str>,
{
    let (proof, root) = build_proof::<Method, S>(leaves, target)?;
    let array = proof.to_array();
    Ok(ProofData {
        proof_left: array.positions,
        proof_data: array.siblings.iter().map(|sibling| encode_hex(sibling)).collect(),
        root: encode_hex(root),
    })
}

pub fn get_packed_proof_data<Method, S>(leaves: &[S], target: usize) -> Result<PackedProofData>
where
    Method: HashMethod,
    S: AsRef<str>,
{
    let (proof, root) = build_proof::<Method, S>(leaves, target)?;
    let packed = proof.to_packed()?;
    Ok(PackedProofData {
        positions: packed.positions,
        proof_data: packed.siblings.iter().map(|sibling| encode_hex(sibling)).collect(),
        root: encode_hex(root),
    })
}

fn decode_call(leaf: &str, root: &str, proof_data: &[String]) -> Result<(Vec<u8>, Node, Vec<Node>)> {
    let leaf = decode_hex(leaf).context("Leaf is not valid hex")?;
    let root = decode_node(root).context("Root is not a valid node")?;
    let siblings = proof_data
        .iter()
        .map(|sibling| decode_node(sibling))
        .collect::<Result<Vec<_>>>()
        .context("Proof contains an invalid node")?;
    Ok((leaf, root, siblings))
}

/// Verify an array-encoded proof. Anything malformed verifies as `false`.
pub fn verify_proof_data<Method: HashMethod>(leaf: &str, data: &ProofData) -> bool {
    match decode_call(leaf, &data.root, &data.proof_data) {
        Ok((leaf, root, siblings)) => {
            verify_array::<Method>(&leaf, &root, &data.proof_left, &siblings)
        }
        Err(err) => {
            debug!("Rejecting proof data: {err:#}");
            false
        }
    }
}

/// Verify a packed proof. Anything malformed verifies as `false`.
pub fn verify_packed_proof_data<Method: HashMethod>(leaf: &str, data: &PackedProofData) -> bool {
    match decode_call(leaf, &data.root, &data.proof_data) {
        Ok((leaf, root, siblings)) => verify_packed::<Method>(&leaf, &root, data.positions, &siblings),
        Err(err) => {
            debug!("Rejecting packed proof data: {err:#}");
            false
        }
    }
}
