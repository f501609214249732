#![deny(clippy::all)]

#[cfg(feature = "napi")]
#[macro_use]
extern crate napi_derive;

pub mod application;
pub mod domain;
#[cfg(feature = "napi")]
mod interfaces;

pub use domain::{
    error::MerkleError,
    hash::{keccak256::Keccak256, sha256::Sha256, HashMethod, Node},
    proof::{
        encoding::{pack_positions, unpack_positions, ArrayProof, PackedProof, MAX_PACKED_DEPTH},
        MerkleProof, MerkleProofKeccak256, Position, ProofStep,
    },
    tree::{MerkleTree, MerkleTreeKeccak256, MerkleTreeOptions},
    verify::{verify_array, verify_packed},
};
