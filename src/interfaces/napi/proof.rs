use crate::domain::{
  hash::node_from_slice,
  proof::{encoding::ArrayProof, MerkleProofKeccak256},
};
use napi::bindgen_prelude::{BigInt, Uint8Array};

#[napi(js_name = "MerkleProof")]
pub struct MerkleProofJs {
  inner: MerkleProofKeccak256,
}

impl MerkleProofJs {
  pub fn new(inner: MerkleProofKeccak256) -> Self {
    MerkleProofJs { inner }
  }
}

#[napi]
impl MerkleProofJs {
  /// Rebuild a proof from its array encoding (`true` = sibling on the left).
  #[napi(factory)]
  pub fn from_array(positions: Vec<bool>, siblings: Vec<Uint8Array>) -> napi::Result<Self> {
    let siblings = siblings
      .iter()
      .map(|s| node_from_slice(s))
      .collect::<Result<Vec<_>, _>>()?;
    let array = ArrayProof {
      positions,
      siblings,
    };
    Ok(Self::new(MerkleProofKeccak256::from_array(&array)?))
  }

  #[napi]
  pub fn positions(&self) -> Vec<bool> {
    self.inner.to_array().positions
  }

  #[napi]
  pub fn siblings(&self) -> Vec<Uint8Array> {
    self
      .inner
      .proof_hashes()
      .iter()
      .map(|h| h.to_vec().into())
      .collect()
  }

  /// Positions packed with the leaf-level step in bit 0.
  #[napi]
  pub fn packed_positions(&self) -> napi::Result<BigInt> {
    Ok(BigInt::from(self.inner.to_packed()?.positions))
  }

  /// Verify raw leaf data against `root`. A root of the wrong size fails.
  #[napi]
  pub fn verify(&self, leaf: Uint8Array, root: Uint8Array) -> bool {
    match node_from_slice(&root) {
      Ok(root) => self.inner.verify_data(&root, &leaf),
      Err(_) => false,
    }
  }

  #[napi]
  pub fn proof_hashes_hex(&self) -> Vec<String> {
    self
      .inner
      .proof_hashes()
      .iter()
      .map(|h| format!("0x{}", hex::encode(h)))
      .collect()
  }

  #[napi(js_name = "toString")]
  pub fn to_display_string(&self) -> String {
    self.inner.to_string()
  }
}
