//! Keccak-256 hashing
//!
//! Checksums are the first four bytes of a Keccak-256 digest (the original
//! Keccak padding used by Ethereum, not NIST SHA3-256).

use tiny_keccak::{Hasher, Keccak};

/// Length of the checksum prefix taken from the digest
pub const CHECKSUM_LEN: usize = 4;

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// First [`CHECKSUM_LEN`] bytes of the keccak256 digest
pub fn keccak256_prefix(data: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = keccak256(data);
    let mut prefix = [0u8; CHECKSUM_LEN];
    prefix.copy_from_slice(&digest[..CHECKSUM_LEN]);
    prefix
}
