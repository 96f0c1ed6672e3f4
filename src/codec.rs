//! Binary Interoperable Address encoding/decoding
//!
//! ## Wire Format
//!
//! All integers are big-endian:
//! ```text
//! | Version (2) | Chain Type (2) | RefLen (1) | Chain Reference (RefLen) |
//! | AddrLen (1) | Address (AddrLen) |
//! ```
//!
//! Total length is `6 + RefLen + AddrLen`. The checksum covers the same
//! bytes minus the version prefix, see [`checksum_preimage`].

use tracing::{debug, trace};

use crate::builder::{self, CURRENT_VERSION};
use crate::bytes::{concat_bytes, hex_to_bytes, number_to_bytes};
use crate::error::{BinaryError, Result};
use crate::types::Address;

/// Size of the fixed fields: version, chain type and both length bytes
pub const MIN_ENCODED_LEN: usize = 6;

/// Serialize an address into the binary wire format.
pub fn encode_address(address: &Address) -> Vec<u8> {
    let version = number_to_bytes(u128::from(address.version()), 2);
    concat_bytes(&[&version, &checksum_preimage(address)])
}

/// Encoding without the 2-byte version prefix.
///
/// Keeping the version out of the checksum input lets the checksum stay
/// stable across version bumps that do not change address semantics.
pub fn checksum_preimage(address: &Address) -> Vec<u8> {
    let chain_type = address.chain_type().to_be_bytes();
    let reference = address.chain_reference();
    let account = address.address();
    let reference_len = number_to_bytes(reference.len() as u128, 1);
    let account_len = number_to_bytes(account.len() as u128, 1);

    concat_bytes(&[&chain_type, &reference_len, reference, &account_len, account])
}

/// Parse an address from the binary wire format.
///
/// The input must contain exactly one address: trailing bytes are
/// rejected, as is any version other than 1.
pub fn decode_address(bytes: &[u8]) -> Result<Address> {
    let mut reader = Reader::new(bytes);

    let version = u16::from_be_bytes(reader.take_array()?);
    if version != CURRENT_VERSION {
        debug!(version, "Rejected binary address with unsupported version");
        return Err(BinaryError::UnsupportedVersion(version).into());
    }
    let chain_type = u16::from_be_bytes(reader.take_array()?);

    let [reference_len] = reader.take_array()?;
    let chain_reference = reader.take(usize::from(reference_len))?.to_vec();

    let [address_len] = reader.take_array()?;
    let address = reader.take(usize::from(address_len))?.to_vec();

    let trailing = reader.remaining();
    if trailing > 0 {
        debug!(trailing, "Rejected binary address with trailing bytes");
        return Err(BinaryError::TrailingBytes(trailing).into());
    }

    let chain_type = builder::validate(i64::from(chain_type), &chain_reference, &address)?;
    trace!(
        chain_type = %chain_type,
        chain_reference_len = chain_reference.len(),
        address_len = address.len(),
        "Decoded interoperable address"
    );
    Ok(Address::from_validated_parts(
        chain_type,
        chain_reference,
        address,
    ))
}

/// Parse an address from a hex-encoded binary encoding (`0x` optional)
pub fn decode_hex_address(hex: &str) -> Result<Address> {
    decode_address(&hex_to_bytes(hex)?)
}

impl Address {
    /// Binary wire encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        encode_address(self)
    }

    /// Parse from the binary wire encoding
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        decode_address(bytes)
    }
}

/// Cursor over the input with bounds-checked reads
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, n: usize) -> std::result::Result<&'a [u8], BinaryError> {
        let end = self.pos + n;
        if end > self.bytes.len() {
            return Err(BinaryError::Truncated {
                needed: end,
                available: self.bytes.len(),
            });
        }
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> std::result::Result<[u8; N], BinaryError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N)?);
        Ok(out)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }
}
