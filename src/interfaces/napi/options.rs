use crate::domain::tree::MerkleTreeOptions;

#[napi(object, js_name = "MerkleTreeOptions")]
#[derive(Clone)]
pub struct MerkleTreeOptionsJs {
  pub hash_leaves: Option<bool>,
}

impl From<MerkleTreeOptionsJs> for MerkleTreeOptions {
  fn from(options: MerkleTreeOptionsJs) -> Self {
    let defaults = MerkleTreeOptions::default();
    Self {
      hash_leaves: options.hash_leaves.unwrap_or(defaults.hash_leaves),
    }
  }
}
