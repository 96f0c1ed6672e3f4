//! Domain types: the canonical binary address, builder inputs and names

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::builder::{self, CURRENT_VERSION};
use crate::bytes::{bytes_to_hex, hex_to_bytes};
use crate::chain_type::ChainType;
use crate::error::{BinaryError, InteropError};

// ============================================================================
// Address
// ============================================================================

/// Canonical Interoperable Address.
///
/// Only the builder and the binary decoder construct this type, so every
/// value satisfies: both byte fields are at most 255 bytes and at least one
/// of them is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressRepr", into = "AddressRepr")]
pub struct Address {
    version: u16,
    chain_type: ChainType,
    chain_reference: Vec<u8>,
    address: Vec<u8>,
}

impl Address {
    pub(crate) fn from_validated_parts(
        chain_type: ChainType,
        chain_reference: Vec<u8>,
        address: Vec<u8>,
    ) -> Self {
        Self {
            version: CURRENT_VERSION,
            chain_type,
            chain_reference,
            address,
        }
    }

    pub fn version(&self) -> u16 {
        self.version
    }

    pub fn chain_type(&self) -> ChainType {
        self.chain_type
    }

    /// Big-endian chain reference; empty when omitted
    pub fn chain_reference(&self) -> &[u8] {
        &self.chain_reference
    }

    /// Raw address bytes; empty for chain-only addresses
    pub fn address(&self) -> &[u8] {
        &self.address
    }

    /// True when no specific account is named
    pub fn is_chain_only(&self) -> bool {
        self.address.is_empty()
    }

    /// Copy of this address with a different account
    pub fn with_address(&self, address: impl Into<AddressInput>) -> Result<Self, InteropError> {
        builder::create_interoperable_address(CreateParams {
            chain_type: i64::from(self.chain_type.0),
            chain_reference: Some(ChainReferenceInput::Bytes(self.chain_reference.clone())),
            address: Some(address.into()),
        })
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.chain_type,
            bytes_to_hex(&self.chain_reference, true),
            bytes_to_hex(&self.address, true)
        )
    }
}

/// Serialized form of [`Address`]: byte fields as `0x` hex strings
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddressRepr {
    version: u16,
    chain_type: ChainType,
    chain_reference: String,
    address: String,
}

impl From<Address> for AddressRepr {
    fn from(value: Address) -> Self {
        Self {
            version: value.version,
            chain_type: value.chain_type,
            chain_reference: bytes_to_hex(&value.chain_reference, true),
            address: bytes_to_hex(&value.address, true),
        }
    }
}

impl TryFrom<AddressRepr> for Address {
    type Error = InteropError;

    fn try_from(value: AddressRepr) -> Result<Self, Self::Error> {
        if value.version != CURRENT_VERSION {
            return Err(BinaryError::UnsupportedVersion(value.version).into());
        }
        builder::create_interoperable_address(CreateParams {
            chain_type: i64::from(value.chain_type.0),
            chain_reference: Some(ChainReferenceInput::Bytes(hex_to_bytes(
                &value.chain_reference,
            )?)),
            address: Some(AddressInput::Hex(value.address)),
        })
    }
}

// ============================================================================
// Builder Inputs
// ============================================================================

/// Chain reference as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainReferenceInput {
    /// Non-negative integer, encoded in minimal big-endian form
    Number(u128),
    /// Raw bytes, used as-is
    Bytes(Vec<u8>),
}

impl From<u128> for ChainReferenceInput {
    fn from(value: u128) -> Self {
        ChainReferenceInput::Number(value)
    }
}

impl From<u64> for ChainReferenceInput {
    fn from(value: u64) -> Self {
        ChainReferenceInput::Number(u128::from(value))
    }
}

impl From<u32> for ChainReferenceInput {
    fn from(value: u32) -> Self {
        ChainReferenceInput::Number(u128::from(value))
    }
}

impl From<Vec<u8>> for ChainReferenceInput {
    fn from(value: Vec<u8>) -> Self {
        ChainReferenceInput::Bytes(value)
    }
}

impl From<&[u8]> for ChainReferenceInput {
    fn from(value: &[u8]) -> Self {
        ChainReferenceInput::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for ChainReferenceInput {
    fn from(value: [u8; N]) -> Self {
        ChainReferenceInput::Bytes(value.to_vec())
    }
}

/// Account address as supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddressInput {
    /// Hex string, `0x`/`0X` prefix optional
    Hex(String),
    /// Raw bytes, used as-is
    Bytes(Vec<u8>),
}

impl From<&str> for AddressInput {
    fn from(value: &str) -> Self {
        AddressInput::Hex(value.to_string())
    }
}

impl From<String> for AddressInput {
    fn from(value: String) -> Self {
        AddressInput::Hex(value)
    }
}

impl From<Vec<u8>> for AddressInput {
    fn from(value: Vec<u8>) -> Self {
        AddressInput::Bytes(value)
    }
}

impl From<&[u8]> for AddressInput {
    fn from(value: &[u8]) -> Self {
        AddressInput::Bytes(value.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for AddressInput {
    fn from(value: [u8; N]) -> Self {
        AddressInput::Bytes(value.to_vec())
    }
}

/// Input to [`create_interoperable_address`](crate::create_interoperable_address).
///
/// `chain_type` is signed so that out-of-range values, negative ones
/// included, reach validation instead of being unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateParams {
    pub chain_type: i64,
    pub chain_reference: Option<ChainReferenceInput>,
    pub address: Option<AddressInput>,
}

impl CreateParams {
    pub fn new(chain_type: impl Into<i64>) -> Self {
        Self {
            chain_type: chain_type.into(),
            ..Self::default()
        }
    }

    pub fn for_chain_type(chain_type: ChainType) -> Self {
        Self::new(chain_type.0)
    }

    pub fn chain_reference(mut self, reference: impl Into<ChainReferenceInput>) -> Self {
        self.chain_reference = Some(reference.into());
        self
    }

    pub fn address(mut self, address: impl Into<AddressInput>) -> Self {
        self.address = Some(address.into());
        self
    }
}

// ============================================================================
// Name
// ============================================================================

/// Human-readable `address@chain#checksum` form.
///
/// `address` and `chain` are opaque display labels; only `checksum` is
/// derived from the binary address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Name {
    pub address: String,
    pub chain: String,
    pub checksum: String,
}
