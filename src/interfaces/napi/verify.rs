use log::debug;
use napi::bindgen_prelude::{BigInt, Uint8Array};

use crate::domain::{
  hash::{keccak256::Keccak256, node_from_slice, Node},
  verify::{verify_array, verify_packed},
};

fn decode_nodes(root: &[u8], siblings: &[Uint8Array]) -> Option<(Node, Vec<Node>)> {
  let root = node_from_slice(root).ok()?;
  let siblings = siblings
    .iter()
    .map(|s| node_from_slice(s))
    .collect::<Result<Vec<_>, _>>()
    .ok()?;
  Some((root, siblings))
}

/// Verify an array-encoded proof. Malformed input returns false.
#[napi]
pub fn verify(
  leaf: Uint8Array,
  root: Uint8Array,
  positions: Vec<bool>,
  siblings: Vec<Uint8Array>,
) -> bool {
  match decode_nodes(&root, &siblings) {
    Some((root, siblings)) => verify_array::<Keccak256>(&leaf, &root, &positions, &siblings),
    None => false,
  }
}

/// Verify a packed proof. Negative or wider than 128-bit positions return false.
#[napi(js_name = "verifyPacked")]
pub fn verify_packed_positions(
  leaf: Uint8Array,
  root: Uint8Array,
  packed_positions: BigInt,
  siblings: Vec<Uint8Array>,
) -> bool {
  let (signed, packed, lossless) = packed_positions.get_u128();
  if signed || !lossless {
    debug!("Rejecting packed positions outside the u128 range");
    return false;
  }

  match decode_nodes(&root, &siblings) {
    Some((root, siblings)) => verify_packed::<Keccak256>(&leaf, &root, packed, &siblings),
    None => false,
  }
}
