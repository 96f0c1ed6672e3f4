//! CAIP-350 chain type codes
//!
//! Chain types are an open 2-byte namespace. Only a few are registered here;
//! any other `u16` is still a valid, unregistered chain type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 2-byte chain type identifier
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ChainType(pub u16);

impl ChainType {
    /// EVM chains identified by an EIP-155 chain id
    pub const EIP155: ChainType = ChainType(0x0000);

    /// Solana clusters identified by their genesis hash
    pub const SOLANA: ChainType = ChainType(0x0002);

    /// Registered (namespace, chain type) pairs
    pub const REGISTRY: &'static [(&'static str, ChainType)] =
        &[("eip155", ChainType::EIP155), ("solana", ChainType::SOLANA)];

    /// Convert to u16
    pub fn to_u16(self) -> u16 {
        self.0
    }

    /// Get the big-endian wire bytes
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// CAIP-2 namespace, if this chain type is registered
    pub fn namespace(self) -> Option<&'static str> {
        Self::REGISTRY
            .iter()
            .find(|(_, ct)| *ct == self)
            .map(|(ns, _)| *ns)
    }

    /// Look up a chain type by CAIP-2 namespace
    pub fn from_namespace(namespace: &str) -> Option<Self> {
        Self::REGISTRY
            .iter()
            .find(|(ns, _)| *ns == namespace)
            .map(|(_, ct)| *ct)
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.namespace() {
            Some(ns) => write!(f, "{}(0x{:04X})", ns, self.0),
            None => write!(f, "UNKNOWN(0x{:04X})", self.0),
        }
    }
}

impl From<u16> for ChainType {
    fn from(value: u16) -> Self {
        ChainType(value)
    }
}

impl From<ChainType> for u16 {
    fn from(value: ChainType) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_codes() {
        assert_eq!(ChainType::EIP155.to_u16(), 0x0000);
        assert_eq!(ChainType::SOLANA.to_u16(), 0x0002);
        assert_eq!(ChainType::SOLANA.to_be_bytes(), [0x00, 0x02]);
    }

    #[test]
    fn test_namespace_lookup() {
        assert_eq!(ChainType::EIP155.namespace(), Some("eip155"));
        assert_eq!(ChainType::from_namespace("solana"), Some(ChainType::SOLANA));
        assert_eq!(ChainType::from_namespace("cosmos"), None);
        assert_eq!(ChainType(0x0001).namespace(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(ChainType::EIP155.to_string(), "eip155(0x0000)");
        assert_eq!(ChainType(0xBEEF).to_string(), "UNKNOWN(0xBEEF)");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&ChainType::SOLANA).unwrap();
        assert_eq!(json, "2");
        let parsed: ChainType = serde_json::from_str("65535").unwrap();
        assert_eq!(parsed, ChainType(u16::MAX));
    }
}
