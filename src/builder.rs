//! Address builder
//!
//! Normalizes loosely-typed [`CreateParams`] into a canonical [`Address`].
//! Each optional field is normalized independently, then validation runs
//! in a fixed order where the first failing check wins:
//!
//! 1. chain reference and address both empty
//! 2. chain reference longer than 255 bytes
//! 3. address longer than 255 bytes
//! 4. chain type outside `0..=65535`

use tracing::{debug, trace};

use crate::bytes::{hex_to_bytes, number_to_min_bytes};
use crate::chain_type::ChainType;
use crate::codec::encode_address;
use crate::error::{Result, ValidationError};
use crate::types::{Address, AddressInput, ChainReferenceInput, CreateParams};

/// Only supported format version
pub const CURRENT_VERSION: u16 = 1;

/// Upper bound for both variable-length fields (1-byte length prefix)
pub const MAX_FIELD_LEN: usize = u8::MAX as usize;

/// Build a validated [`Address`] from caller-supplied parameters.
pub fn create_interoperable_address(params: CreateParams) -> Result<Address> {
    let chain_reference = normalize_chain_reference(params.chain_reference);
    let address = normalize_address(params.address)?;

    match validate(params.chain_type, &chain_reference, &address) {
        Ok(chain_type) => {
            trace!(
                chain_type = %chain_type,
                chain_reference_len = chain_reference.len(),
                address_len = address.len(),
                "Built interoperable address"
            );
            Ok(Address::from_validated_parts(
                chain_type,
                chain_reference,
                address,
            ))
        }
        Err(e) => {
            debug!(
                chain_type = params.chain_type,
                chain_reference_len = chain_reference.len(),
                address_len = address.len(),
                error = %e,
                "Rejected interoperable address"
            );
            Err(e.into())
        }
    }
}

/// Build an address and serialize it in one step.
pub fn create_and_encode(params: CreateParams) -> Result<Vec<u8>> {
    let address = create_interoperable_address(params)?;
    Ok(encode_address(&address))
}

fn normalize_chain_reference(input: Option<ChainReferenceInput>) -> Vec<u8> {
    match input {
        None => Vec::new(),
        Some(ChainReferenceInput::Number(n)) => number_to_min_bytes(n),
        Some(ChainReferenceInput::Bytes(b)) => b,
    }
}

fn normalize_address(input: Option<AddressInput>) -> Result<Vec<u8>> {
    match input {
        None => Ok(Vec::new()),
        Some(AddressInput::Hex(s)) => hex_to_bytes(&s),
        Some(AddressInput::Bytes(b)) => Ok(b),
    }
}

/// Structural checks shared by the builder and the binary decoder
pub(crate) fn validate(
    chain_type: i64,
    chain_reference: &[u8],
    address: &[u8],
) -> std::result::Result<ChainType, ValidationError> {
    if chain_reference.is_empty() && address.is_empty() {
        return Err(ValidationError::MissingReferenceAndAddress);
    }
    if chain_reference.len() > MAX_FIELD_LEN {
        return Err(ValidationError::ChainReferenceTooLong);
    }
    if address.len() > MAX_FIELD_LEN {
        return Err(ValidationError::AddressTooLong);
    }
    u16::try_from(chain_type)
        .map(ChainType)
        .map_err(|_| ValidationError::ChainTypeOutOfRange)
}
