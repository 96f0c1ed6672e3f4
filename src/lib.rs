//! Interop-Address: Interoperable Address Codec
//!
//! Chain-agnostic addresses that tag raw account bytes with a CAIP-350 chain
//! type and a chain reference:
//!
//! - **Builder** - Normalizes numbers, hex strings and raw bytes into a validated [`Address`]
//! - **Codec** - Fixed-layout binary encoding and the matching strict decoder
//! - **Names** - Keccak-256 checksums and the `address@chain#checksum` form
//! - **CAIP** - CAIP-2 chain strings for the registered chain types
//!
//! ## Usage
//!
//! ```
//! use interop_address::{
//!     create_interoperable_address, encode_address, format_name, to_name, CreateParams,
//! };
//!
//! let addr = create_interoperable_address(
//!     CreateParams::new(0)
//!         .chain_reference(1u64)
//!         .address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"),
//! )?;
//! assert_eq!(encode_address(&addr).len(), 6 + 1 + 20);
//!
//! let name = to_name(&addr, "eip155:1", "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
//! assert_eq!(
//!     format_name(&name),
//!     "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045@eip155:1#4CA88C9C"
//! );
//! # Ok::<(), interop_address::InteropError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `eip155` - EIP-155 CAIP-2 chain strings (default)
//! - `solana` - Solana CAIP-2 chain strings, pulls in `bs58` (default)
//! - `full` - Enable all features
//!
//! Without a namespace's feature, [`chain_string`] still renders the bare
//! namespace and returns [`NameError::RenderingDisabled`] for a chain
//! reference. Check the minimal build with `cargo test --no-default-features`.

pub mod builder;
pub mod bytes;
pub mod caip;
pub mod chain_type;
pub mod codec;
pub mod error;
pub mod hash;
pub mod name;
pub mod types;

// Re-export commonly used items at the crate root
pub use builder::{create_and_encode, create_interoperable_address, CURRENT_VERSION, MAX_FIELD_LEN};
pub use bytes::{bytes_to_hex, concat_bytes, hex_to_bytes, number_to_bytes, number_to_min_bytes};
pub use caip::{chain_string, to_caip_name};
pub use chain_type::ChainType;
pub use codec::{decode_address, decode_hex_address, encode_address};
pub use error::{BinaryError, InteropError, NameError, Result, ValidationError};
pub use hash::keccak256;
pub use name::{calculate_checksum, format_name, parse_name, to_name, verify_name};
pub use types::{Address, AddressInput, ChainReferenceInput, CreateParams, Name};
