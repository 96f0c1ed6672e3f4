//! CAIP-2 chain strings for registered chain types
//!
//! Derives the `chain` label of a name from the address itself:
//! - EIP-155: `eip155:<decimal chain id>`
//! - Solana: `solana:<base58 genesis hash>`
//!
//! Without a chain reference the bare namespace is returned. Rendering a
//! reference needs the namespace's feature (`eip155`, `solana`).

#[cfg(any(feature = "eip155", feature = "solana"))]
use crate::chain_type::ChainType;
use crate::error::{NameError, Result};
use crate::name::to_name;
use crate::types::{Address, Name};

/// Render the CAIP-2 chain string for an address.
pub fn chain_string(address: &Address) -> Result<String> {
    let chain_type = address.chain_type();
    let namespace = chain_type
        .namespace()
        .ok_or(NameError::UnknownNamespace(chain_type))?;

    let reference = address.chain_reference();
    if reference.is_empty() {
        return Ok(namespace.to_string());
    }

    match chain_type {
        #[cfg(feature = "eip155")]
        ChainType::EIP155 => Ok(format!("{}:{}", namespace, eip155_reference(reference)?)),
        #[cfg(feature = "solana")]
        ChainType::SOLANA => Ok(format!("{}:{}", namespace, bs58::encode(reference).into_string())),
        _ => Err(NameError::RenderingDisabled(namespace).into()),
    }
}

/// Name an address using its derived CAIP-2 chain string.
pub fn to_caip_name(address: &Address, address_display: &str) -> Result<Name> {
    let chain = chain_string(address)?;
    Ok(to_name(address, &chain, address_display))
}

#[cfg(feature = "eip155")]
fn eip155_reference(reference: &[u8]) -> Result<String> {
    crate::bytes::bytes_to_number(reference)
        .map(|id| id.to_string())
        .ok_or_else(|| NameError::UnrepresentableReference(reference.len()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain_type::ChainType;
    use crate::create_interoperable_address;
    use crate::error::InteropError;
    use crate::types::CreateParams;

    #[cfg(any(feature = "eip155", feature = "solana"))]
    use crate::name::format_name;

    #[cfg(feature = "eip155")]
    const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";
    #[cfg(feature = "solana")]
    const SOLANA_MAINNET_GENESIS: &str = "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d";

    #[cfg(feature = "eip155")]
    #[test]
    fn test_eip155_chain_string() {
        let mainnet = create_interoperable_address(
            CreateParams::new(0).chain_reference(1u64).address(VITALIK),
        )
        .unwrap();
        assert_eq!(chain_string(&mainnet).unwrap(), "eip155:1");

        let arbitrum =
            create_interoperable_address(CreateParams::new(0).chain_reference(42161u64)).unwrap();
        assert_eq!(chain_string(&arbitrum).unwrap(), "eip155:42161");

        let bare = create_interoperable_address(CreateParams::new(0).address(VITALIK)).unwrap();
        assert_eq!(chain_string(&bare).unwrap(), "eip155");
    }

    #[cfg(feature = "eip155")]
    #[test]
    fn test_eip155_oversized_reference() {
        let addr =
            create_interoperable_address(CreateParams::new(0).chain_reference(vec![0x01u8; 17]))
                .unwrap();
        assert_eq!(
            chain_string(&addr).unwrap_err(),
            InteropError::Name(NameError::UnrepresentableReference(17))
        );
    }

    #[cfg(feature = "eip155")]
    #[test]
    fn test_to_caip_name() {
        let addr = create_interoperable_address(
            CreateParams::new(0).chain_reference(1u64).address(VITALIK),
        )
        .unwrap();
        let name = to_caip_name(&addr, VITALIK).unwrap();
        assert_eq!(
            format_name(&name),
            "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045@eip155:1#4CA88C9C"
        );
    }

    #[cfg(feature = "solana")]
    #[test]
    fn test_solana_chain_string() {
        let genesis = bs58::decode(SOLANA_MAINNET_GENESIS).into_vec().unwrap();
        let addr = create_interoperable_address(
            CreateParams::for_chain_type(ChainType::SOLANA).chain_reference(genesis),
        )
        .unwrap();
        assert_eq!(
            chain_string(&addr).unwrap(),
            format!("solana:{}", SOLANA_MAINNET_GENESIS)
        );
        assert_eq!(
            format_name(&to_caip_name(&addr, "").unwrap()),
            format!("@solana:{}#2EB18670", SOLANA_MAINNET_GENESIS)
        );
    }

    #[cfg(not(feature = "solana"))]
    #[test]
    fn test_solana_reference_without_feature() {
        let addr = create_interoperable_address(
            CreateParams::for_chain_type(ChainType::SOLANA).chain_reference([0x45u8; 32]),
        )
        .unwrap();
        assert_eq!(
            chain_string(&addr).unwrap_err(),
            InteropError::Name(NameError::RenderingDisabled("solana"))
        );
    }

    #[cfg(not(feature = "eip155"))]
    #[test]
    fn test_eip155_reference_without_feature() {
        let addr =
            create_interoperable_address(CreateParams::new(0).chain_reference(1u64)).unwrap();
        assert_eq!(
            chain_string(&addr).unwrap_err(),
            InteropError::Name(NameError::RenderingDisabled("eip155"))
        );
    }

    #[test]
    fn test_bare_namespace_needs_no_feature() {
        let addr = create_interoperable_address(
            CreateParams::for_chain_type(ChainType::SOLANA).address([0x01u8; 32]),
        )
        .unwrap();
        assert_eq!(chain_string(&addr).unwrap(), "solana");
    }

    #[test]
    fn test_unregistered_chain_type() {
        let addr =
            create_interoperable_address(CreateParams::new(0x0001).chain_reference(1u64)).unwrap();
        assert_eq!(
            chain_string(&addr).unwrap_err(),
            InteropError::Name(NameError::UnknownNamespace(ChainType(0x0001)))
        );
    }
}
