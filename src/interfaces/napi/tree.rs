use super::{js_index, options::MerkleTreeOptionsJs, proof::MerkleProofJs};
use crate::domain::{
  hash::{keccak256::Keccak256, HashMethod},
  tree::{MerkleTreeKeccak256, MerkleTreeOptions},
};
use napi::bindgen_prelude::Uint8Array;

#[napi(js_name = "MerkleTree")]
pub struct MerkleTreeJs {
  inner: MerkleTreeKeccak256,
}

#[napi]
impl MerkleTreeJs {
  /// Keccak-256 of a leaf, as placed in level 0.
  #[napi]
  pub fn hash(data: Uint8Array) -> Uint8Array {
    Keccak256::hash_leaf(&data).to_vec().into()
  }

  #[napi(factory)]
  pub fn from_leaves(
    leaves: Vec<Uint8Array>,
    options: Option<MerkleTreeOptionsJs>,
  ) -> napi::Result<Self> {
    let leaves: Vec<Vec<u8>> = leaves.iter().map(|l| l.to_vec()).collect();
    let options: MerkleTreeOptions = options.map(Into::into).unwrap_or_default();
    Ok(Self {
      inner: MerkleTreeKeccak256::from_leaves_with_options(&leaves, &options)?,
    })
  }

  #[napi]
  pub fn root(&self) -> Uint8Array {
    self.inner.get_root().to_vec().into()
  }

  #[napi]
  pub fn root_hex(&self) -> String {
    format!("0x{}", hex::encode(self.inner.get_root()))
  }

  #[napi]
  pub fn leaf_count(&self) -> napi::Result<u32> {
    js_index(self.inner.leaf_count())
      .ok_or_else(|| napi::Error::from_reason("Leaf count does not fit in a u32"))
  }

  #[napi]
  pub fn hashes(&self) -> Vec<Uint8Array> {
    self
      .inner
      .get_hashes()
      .iter()
      .map(|h| h.to_vec().into())
      .collect()
  }

  #[napi]
  pub fn get_proof(&self, index: u32) -> napi::Result<MerkleProofJs> {
    Ok(MerkleProofJs::new(self.inner.get_proof(index as usize)?))
  }

  /**
   * Index of the first leaf whose raw data is `data`
   */
  #[napi]
  pub fn get_leaf_index(&self, data: Uint8Array) -> Option<u32> {
    self
      .inner
      .get_index_by_data(&data)
      .ok()
      .and_then(js_index)
  }
}
