//! Hashing helpers shared by the transfer log and proof receipts.
//!
//! All fingerprints in the bridge are keccak256 over the canonical binary
//! encoding produced by [`crate::codec::Encoder`].

use tiny_keccak::{Hasher, Keccak};

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Fold a new entry digest into a running log root.
///
/// `root' = keccak256(root || digest)`. The genesis root is all zeros.
pub fn chain_log_root(prev_root: &[u8; 32], digest: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 64];
    data[..32].copy_from_slice(prev_root);
    data[32..].copy_from_slice(digest);
    keccak256(&data)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    let mut hex = String::with_capacity(66);
    hex.push_str("0x");
    for byte in bytes {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Interpret a byte slice as a 32-byte digest.
pub fn to_bytes32(bytes: &[u8]) -> Option<[u8; 32]> {
    bytes.try_into().ok()
}
