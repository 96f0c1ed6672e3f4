//! Checksums and human-readable Interoperable Names
//!
//! A name renders as `<address>@<chain>#<CHECKSUM>`. The address and chain
//! parts are opaque caller-supplied labels; the checksum is the first four
//! bytes of keccak256 over the binary encoding minus its version prefix.

use std::fmt;
use std::str::FromStr;

use crate::bytes::bytes_to_hex;
use crate::codec::checksum_preimage;
use crate::error::{InteropError, NameError, Result};
use crate::hash::{keccak256_prefix, CHECKSUM_LEN};
use crate::types::{Address, Name};

/// Number of hex characters in a rendered checksum
pub const CHECKSUM_HEX_LEN: usize = CHECKSUM_LEN * 2;

/// Compute the 8-character uppercase hex checksum of an address.
pub fn calculate_checksum(address: &Address) -> String {
    bytes_to_hex(&keccak256_prefix(&checksum_preimage(address)), false)
}

/// Package an address checksum with caller-supplied display strings.
pub fn to_name(address: &Address, chain: &str, address_display: &str) -> Name {
    Name {
        address: address_display.to_string(),
        chain: chain.to_string(),
        checksum: calculate_checksum(address),
    }
}

/// Render `address@chain#checksum`.
///
/// An empty address yields a leading `@`, which names the chain alone.
pub fn format_name(name: &Name) -> String {
    format!("{}@{}#{}", name.address, name.chain, name.checksum)
}

/// Parse `address@chain#checksum`.
///
/// The checksum is taken after the last `#` and the chain after the first
/// `@`. The checksum must be 8 hex digits and is normalized to uppercase.
pub fn parse_name(input: &str) -> Result<Name> {
    let (rest, checksum) = input.rsplit_once('#').ok_or(NameError::MissingChecksum)?;
    let (address, chain) = rest.split_once('@').ok_or(NameError::MissingChain)?;

    if chain.is_empty() {
        return Err(NameError::EmptyChain.into());
    }
    if checksum.len() != CHECKSUM_HEX_LEN || !checksum.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(NameError::InvalidChecksum(checksum.to_string()).into());
    }

    Ok(Name {
        address: address.to_string(),
        chain: chain.to_string(),
        checksum: checksum.to_ascii_uppercase(),
    })
}

/// Check that a name's checksum matches the given address.
pub fn verify_name(name: &Name, address: &Address) -> Result<()> {
    let expected = calculate_checksum(address);
    if !name.checksum.eq_ignore_ascii_case(&expected) {
        tracing::debug!(
            expected = %expected,
            actual = %name.checksum,
            "Interoperable name checksum mismatch"
        );
        return Err(NameError::ChecksumMismatch {
            expected,
            actual: name.checksum.clone(),
        }
        .into());
    }
    Ok(())
}

impl Address {
    /// 8-character uppercase hex checksum
    pub fn checksum(&self) -> String {
        calculate_checksum(self)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_name(self))
    }
}

impl FromStr for Name {
    type Err = InteropError;

    fn from_str(s: &str) -> Result<Self> {
        parse_name(s)
    }
}
