use anyhow::{Context, Result};

use crate::domain::hash::{node_from_slice, Node};

pub mod proof_data;

pub use proof_data::{
    get_packed_proof_data, get_proof_data, verify_packed_proof_data, verify_proof_data,
    PackedProofData, ProofData,
};

/// Decode a hex string, with or without the `0x` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(digits).with_context(|| format!("Invalid hex string {value:?}"))
}

pub fn decode_node(value: &str) -> Result<Node> {
    let bytes = decode_hex(value)?;
    Ok(node_from_slice(&bytes)?)
}

pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
    format!("0x{}", hex::encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::{decode_hex, decode_node, encode_hex};

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("0x1234").unwrap(), vec![0x12, 0x34]);
        assert_eq!(decode_hex("abcd").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
        assert!(decode_hex("0x123").is_err(), "Odd length must fail");
        assert!(decode_hex("0xzz").is_err());
    }

    #[test]
    fn test_decode_node() {
        let node = [0xab; 32];
        assert_eq!(decode_node(&encode_hex(node)).unwrap(), node);
        let err = decode_node("0x1234").unwrap_err();
        assert!(err.to_string().contains("32 bytes"), "Unexpected error: {err}");
    }
}
