use crate::domain::error::MerkleError;

pub mod options;
pub mod proof;
pub mod tree;
pub mod verify;

impl From<MerkleError> for napi::Error {
  fn from(err: MerkleError) -> Self {
    napi::Error::from_reason(err.to_string())
  }
}

/// Counts and indices cross into JS as `u32`; anything wider is refused.
pub(crate) fn js_index(value: usize) -> Option<u32> {
  u32::try_from(value).ok()
}

#[napi]
pub fn init() {
  let _ = env_logger::try_init();
}

#[cfg(test)]
mod tests {
  use super::js_index;

  #[test]
  fn test_js_index_refuses_wide_values() {
    assert_eq!(js_index(0), Some(0));
    assert_eq!(js_index(u32::MAX as usize), Some(u32::MAX));
    #[cfg(target_pointer_width = "64")]
    assert_eq!(js_index(u32::MAX as usize + 1), None, "Must not truncate");
  }
}
